//! Platform paths using the `dirs` crate.
//!
//! Config dir (settings + notes):
//!   Linux:   ~/.config/rsvp-reader/
//!   macOS:   ~/Library/Application Support/rsvp-reader/
//!   Windows: %APPDATA%\rsvp-reader\
//!
//! The log file lives in the local data dir.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub settings_file: PathBuf,
    pub notes_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "rsvp-reader";

    /// Falls back to the current directory when the platform has no
    /// standard location.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        Self {
            settings_file: config_dir.join("settings.toml"),
            notes_file: config_dir.join("notes.json"),
            log_file: data_dir.join("rsvp-reader.log"),
            config_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
