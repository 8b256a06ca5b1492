//! Integration tests for the chord sheet core
//!
//! Drives a session from lyrics entry through placement, transposition,
//! export and persistence.

use chordsheet::tonal::{Note, ScaleType};
use chordsheet::{
    chord_sheet, flatten, EditorMode, FileStore, Key, MemoryStore, PlacementEngine, SaveStatus,
    Session, SessionStore, SESSION_KEY,
};

fn engine() -> PlacementEngine {
    PlacementEngine::new(10.0)
}

#[test]
fn test_full_editing_flow() {
    let mut session = Session::with_engine(engine());
    session.set_lyrics("Hello world\nGoodbye moon").unwrap();
    session.lock();

    // 1 = C, 5 = G in C major
    session.handle_key(Key::Digit(5), false);
    session.stamp(0, 0.0).unwrap();
    session.handle_key(Key::Digit(1), false);
    session.stamp(0, 60.0).unwrap();
    session.stamp(1, 81.0).unwrap();
    session.handle_key(Key::Escape, false);
    assert_eq!(session.armed(), None);

    assert_eq!(
        session.export(),
        "G     C\nHello world\n        C\nGoodbye moon\n"
    );

    session.transpose_all(2);
    assert_eq!(session.root().name(), "D");
    assert_eq!(
        session.export(),
        "A     D\nHello world\n        D\nGoodbye moon\n"
    );
}

#[test]
fn test_edit_lyrics_between_locks() {
    let mut session = Session::with_engine(engine());
    session.set_lyrics("one\ntwo\nthree").unwrap();
    session.lock();
    session.add_placement(0, "Em", 0.0).unwrap();
    session.add_placement(2, "B7", 20.0).unwrap();

    session.unlock();
    assert_eq!(session.document().lyrics(), "one\ntwo\nthree");
    session.set_lyrics("ONE\ntwo").unwrap();
    session.lock();

    assert_eq!(session.export(), "Em\nONE\n\ntwo\n");
}

#[test]
fn test_minor_key_palette() {
    let mut session = Session::new();
    session.set_scale("E".parse::<Note>().unwrap(), ScaleType::Minor);
    let names: Vec<String> = session.diatonic_chords().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Em", "F#dim", "G", "Am", "Bm", "C", "D"]);

    session.handle_key(Key::Digit(3), false);
    assert_eq!(session.armed().unwrap().name(), "G");
}

#[test]
fn test_restore_continues_where_it_left_off() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    let mut session = Session::with_engine(engine());
    session.set_lyrics("verse").unwrap();
    session.lock();
    session.add_placement(0, "F#m", 30.0).unwrap();
    session.save(&mut store).unwrap();
    assert_eq!(session.save_status(), &SaveStatus::Saved);

    let restored = Session::restore(&store, engine());
    assert_eq!(restored.mode(), EditorMode::Placement);
    assert_eq!(restored.export(), "   F#m\nverse\n");
}

#[test]
fn test_corrupt_store_starts_fresh() {
    let mut store = MemoryStore::new();
    store.set(SESSION_KEY, "{\"lines\": [{\"id\": \"x\"}]}").unwrap();
    let session = Session::restore(&store, engine());
    assert_eq!(session.mode(), EditorMode::Lyrics);
    assert!(session.document().lines().is_empty());
}

#[test]
fn test_char_width_changes_columns_only() {
    let mut session = Session::with_engine(engine());
    session.set_lyrics("abcdef").unwrap();
    session.lock();
    session.add_placement(0, "D", 40.0).unwrap();
    assert_eq!(session.export(), "    D\nabcdef\n");

    session.set_char_width(20.0);
    assert_eq!(session.export(), "  D\nabcdef\n");

    session.set_char_width(0.0);
    let fallback = PlacementEngine::new(0.0);
    assert_eq!(session.export(), flatten(session.document(), &fallback));
}

#[test]
fn test_chord_sheet_entry_point() {
    let text = chord_sheet("Hello world", &[(0, "C", 60.0), (0, "G", 0.0)], 10.0).unwrap();
    assert_eq!(text, "G     C\nHello world\n");
    assert!(chord_sheet("x", &[(3, "C", 0.0)], 10.0).is_err());
}
