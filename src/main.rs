use log::{info, warn};

use rsvp_reader::app::{App, AppEvent};
use rsvp_reader::config::{AppPaths, Config};
use rsvp_reader::notes::NotesStore;
use rsvp_reader::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let paths = AppPaths::new();
    rsvp_reader::logging::init(&paths.log_file);

    let config = Config::load_from(&paths.settings_file).unwrap_or_else(|e| {
        warn!("using default settings: {e}");
        Config::default()
    });

    let mut notes = NotesStore::load_from(paths.notes_file.clone());
    if let Err(e) = notes.seed_welcome_note() {
        warn!("could not create welcome note: {e}");
    }

    let mut app = App::new(config, notes).persist_settings_to(paths.settings_file.clone());

    // Optional file argument opens straight into the reader
    if let Some(path) = std::env::args().nth(1) {
        app.handle_event(AppEvent::LoadFile(path));
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;
    drop(tui);

    info!("bye");
    Ok(())
}
