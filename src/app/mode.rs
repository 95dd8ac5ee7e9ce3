/// Top-level screens. `Reading` and `Paused` both show the reader view and
/// follow the scheduler's running flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Command,
    Reading,
    Paused,
    Notes,
    Quit,
}

impl AppMode {
    pub fn in_reader(self) -> bool {
        matches!(self, AppMode::Reading | AppMode::Paused)
    }

    pub fn label(self) -> &'static str {
        match self {
            AppMode::Command => " COMMAND ",
            AppMode::Reading => " READING ",
            AppMode::Paused => " PAUSED ",
            AppMode::Notes => " NOTES ",
            AppMode::Quit => " QUIT ",
        }
    }
}
