//! Id-keyed ordered arena for tombstoned records.
//!
//! # Invariants
//! - A new record always gets `max(existing ids) + 1`, starting at 1.
//! - Since ids only grow, ascending id order equals insertion order.

use crate::model::Tombstoned;
use std::collections::BTreeMap;

/// Ordered table of records keyed by their id.
#[derive(Debug, Clone)]
pub struct RecordTable<T: Tombstoned> {
    rows: BTreeMap<u64, T>,
}

impl<T: Tombstoned> Default for RecordTable<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Tombstoned> RecordTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next inserted record will receive.
    pub fn next_id(&self) -> u64 {
        self.rows.keys().next_back().map_or(1, |max| max + 1)
    }

    /// Builds a record for the next free id and stores it.
    ///
    /// Returns the assigned id. The builder must stamp the id it is given onto
    /// the record; the table keys the row by that id either way.
    pub fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> u64 {
        let id = self.next_id();
        self.rows.insert(id, build(id));
        id
    }

    /// Gets one record by id, tombstoned or not.
    pub fn get(&self, id: u64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Gets one record by id when it also satisfies `predicate`.
    pub fn find(&self, id: u64, predicate: impl FnOnce(&T) -> bool) -> Option<&T> {
        self.rows.get(&id).filter(|row| predicate(*row))
    }

    pub fn find_mut(&mut self, id: u64, predicate: impl FnOnce(&T) -> bool) -> Option<&mut T> {
        self.rows.get_mut(&id).filter(|row| predicate(&**row))
    }

    /// Returns whether a live record with this id exists.
    pub fn contains_active(&self, id: u64) -> bool {
        self.find(id, |row| row.is_active()).is_some()
    }

    /// Iterates all records, tombstones included, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.values_mut()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RecordTable;
    use crate::model::note::Note;
    use crate::model::Tombstoned;

    fn note(id: u64) -> Note {
        Note::new(id, 1, format!("title {id}"), "body", 0)
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut table: RecordTable<Note> = RecordTable::new();
        assert!(table.is_empty());
        assert_eq!(table.next_id(), 1);

        assert_eq!(table.insert_with(note), 1);
        assert_eq!(table.insert_with(note), 2);
        assert_eq!(table.next_id(), 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn tombstoned_ids_are_not_reused() {
        let mut table: RecordTable<Note> = RecordTable::new();
        table.insert_with(note);
        let second = table.insert_with(note);
        table.get_mut(second).unwrap().soft_delete();

        assert_eq!(table.insert_with(note), 3);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut table: RecordTable<Note> = RecordTable::new();
        for _ in 0..5 {
            table.insert_with(note);
        }

        let ids: Vec<_> = table.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn find_applies_predicate() {
        let mut table: RecordTable<Note> = RecordTable::new();
        let id = table.insert_with(note);

        assert!(table.find(id, |row| row.is_active()).is_some());
        assert!(table.contains_active(id));

        table.get_mut(id).unwrap().soft_delete();
        assert!(table.find(id, |row| row.is_active()).is_none());
        assert!(!table.contains_active(id));
        assert!(table.get(id).is_some());
        assert!(table.find(99, |_| true).is_none());
    }
}
