// Logging setup. The TUI owns stdout/stderr while it runs, so records go
// to a file unless the file cannot be opened.

use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Installs `env_logger` filtered by `RUST_LOG` (default `info`), appending
/// to `path`. Safe to call more than once; later calls are ignored.
pub fn init(path: &Path) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(path));

    match file {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("could not open log file {}: {e}", path.display());
        }
    }

    if builder.try_init().is_ok() {
        log::info!("logging to {}", path.display());
    }
}
