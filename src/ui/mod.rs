pub mod command;
pub mod help;
pub mod keys;
pub mod notes;
pub mod reader;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{command_to_app_event, parse_command, Command};
pub use reader::view::{render_progress_bar, render_word_line};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
