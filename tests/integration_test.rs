use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::time::Duration;

use rsvp_reader::config::{Config, TimingConfig};
use rsvp_reader::input::{load_path, LoadError};
use rsvp_reader::notes::NotesStore;
use rsvp_reader::reading::{ManualClock, Phase, Scheduler};
use tempfile::tempdir;

#[test]
fn end_to_end_reading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("e2e.txt");
    fs::write(&path, "Hello world! This is, truly, fine.").unwrap();

    let doc = load_path(path.to_str().unwrap()).expect("Should load file successfully");
    assert_eq!(doc.word_count(), 6);
    assert_eq!(doc.tokens[1].text(), "world!");

    let clock = ManualClock::new();
    let mut scheduler = Scheduler::with_config(doc.tokens, &TimingConfig::default(), clock.clone());

    let shown = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&shown);
    scheduler.on_display(move |token, index, total| {
        sink.borrow_mut().push((token.text().to_string(), index, total));
    });

    scheduler.play();
    assert_eq!(scheduler.time_until_next(), Some(Duration::from_millis(200)));

    clock.advance_ms(199);
    assert!(!scheduler.tick());
    clock.advance_ms(1);
    assert!(scheduler.tick());

    // "world!" ends a sentence: 200 ms × 2.0
    assert_eq!(scheduler.time_until_next(), Some(Duration::from_millis(400)));

    for delay in [400, 200, 300, 300] {
        clock.advance_ms(delay);
        assert!(scheduler.tick());
    }
    assert_eq!(scheduler.phase(), Phase::Finished);
    assert_eq!(scheduler.time_until_next(), None);

    let words: Vec<String> = shown.borrow().iter().map(|(w, _, _)| w.clone()).collect();
    assert_eq!(words, ["Hello", "world!", "This", "is,", "truly,", "fine."]);
    assert!(shown.borrow().iter().all(|&(_, _, total)| total == 6));

    // Play after the end replays from the start
    scheduler.play();
    assert_eq!(scheduler.displayed_index(), Some(0));
    assert_eq!(shown.borrow().len(), 7);
}

#[test]
fn rate_change_takes_effect_immediately() {
    let clock = ManualClock::new();
    let tokens = rsvp_reader::reading::tokenize_text("one two three four");
    let mut scheduler = Scheduler::with_config(tokens, &TimingConfig::default(), clock.clone());

    scheduler.play();
    clock.advance_ms(50);
    scheduler.set_rate(600);

    assert_eq!(scheduler.displayed_index(), Some(1));
    assert_eq!(scheduler.time_until_next(), Some(Duration::from_millis(100)));
}

#[test]
fn unsupported_and_missing_files() {
    assert!(matches!(
        load_path("book.pdf"),
        Err(LoadError::UnsupportedFormat(ext)) if ext == "pdf"
    ));
    assert!(matches!(
        load_path("/definitely/missing.txt"),
        Err(LoadError::FileNotFound(_))
    ));
}

#[test]
fn settings_and_notes_survive_restart() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    let notes_file = dir.path().join("notes.json");

    let mut config = Config::default();
    config.timing.wpm = 425;
    config.save_to(&settings).unwrap();

    let id = {
        let mut notes = NotesStore::load_from(notes_file.clone());
        let id = notes.save_note("Essay", "A short essay.").unwrap().id.clone();
        notes.record_position(&id, 2).unwrap();
        id
    };

    assert_eq!(Config::load_from(&settings).unwrap().timing.wpm, 425);
    let notes = NotesStore::load_from(notes_file);
    assert_eq!(notes.get(&id).map(|n| n.last_position), Some(2));
}
