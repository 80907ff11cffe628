use notekeep_core::{FixedClock, NoteService, DEFAULT_USER_ID};

#[test]
fn add_and_get_by_id_roundtrip() {
    let mut service = NoteService::new();

    let note_id = service.add("Test title", "Test text");
    assert!(note_id > 0);

    let note = service.get_by_id(note_id).unwrap();
    assert_eq!(note.id, note_id);
    assert_eq!(note.title, "Test title");
    assert_eq!(note.text, "Test text");
    assert_eq!(note.owner_id, DEFAULT_USER_ID);
    assert!(!note.is_deleted);
}

#[test]
fn ids_increase_from_one_in_insertion_order() {
    let mut service = NoteService::new();

    assert_eq!(service.add("A", "a"), 1);
    assert_eq!(service.add("B", "b"), 2);

    let notes = service.get();
    assert_eq!(notes.len(), 2);
    let summary: Vec<_> = notes
        .iter()
        .map(|note| (note.id, note.title.as_str(), note.text.as_str()))
        .collect();
    assert_eq!(summary, vec![(1, "A", "a"), (2, "B", "b")]);
}

#[test]
fn deleted_note_ids_are_not_reused() {
    let mut service = NoteService::new();
    let first = service.add("A", "a");
    let second = service.add("B", "b");
    assert!(service.delete(second));

    let third = service.add("C", "c");
    assert!(third > second);
    assert!(third > first);
}

#[test]
fn edit_replaces_title_and_text_only() {
    let clock = FixedClock::new(1_000);
    let mut service = NoteService::with_clock(DEFAULT_USER_ID, &clock);
    let note_id = service.add("Test title", "Test text");
    clock.advance(60_000);

    assert!(service.edit(note_id, "New title", "New text"));

    let note = service.get_by_id(note_id).unwrap();
    assert_eq!(note.id, note_id);
    assert_eq!(note.title, "New title");
    assert_eq!(note.text, "New text");
    assert_eq!(note.date, 1_000);
}

#[test]
fn edit_missing_or_deleted_note_returns_false_and_changes_nothing() {
    let mut service = NoteService::new();
    let kept = service.add("kept", "body");
    let deleted = service.add("gone", "body");
    assert!(service.delete(deleted));
    let before = service.get();

    assert!(!service.edit(999, "x", "y"));
    assert!(!service.edit(deleted, "x", "y"));

    assert_eq!(service.get(), before);
    assert_eq!(service.get_by_id(kept).unwrap().title, "kept");
    assert!(service.get_by_id(deleted).is_none());
}

#[test]
fn delete_hides_note_from_reads() {
    let mut service = NoteService::new();
    let note_id = service.add("Test title", "Test text");

    assert!(service.delete(note_id));
    assert!(service.get_by_id(note_id).is_none());
    assert!(service.get().is_empty());
}

#[test]
fn delete_twice_returns_false_and_keeps_first_effect() {
    let mut service = NoteService::new();
    let note_id = service.add("Test title", "Test text");
    let comment_id = service.create_comment(note_id, "hi").unwrap();

    assert!(service.delete(note_id));
    assert!(!service.delete(note_id));

    assert!(service.get_by_id(note_id).is_none());
    assert!(service.create_comment(note_id, "again").is_err());
    // Cascaded tombstone survives: restore still needs a live parent.
    assert!(service.restore_comment(comment_id).is_err());
}

#[test]
fn get_by_id_on_unknown_id_is_none() {
    let service = NoteService::new();
    assert!(service.get_by_id(1).is_none());
}

#[test]
fn returned_notes_are_copies() {
    let mut service = NoteService::new();
    let note_id = service.add("original", "body");

    let mut copy = service.get_by_id(note_id).unwrap();
    copy.title = "tampered".to_string();
    copy.is_deleted = true;

    let stored = service.get_by_id(note_id).unwrap();
    assert_eq!(stored.title, "original");
    assert!(!stored.is_deleted);
}
