use crate::reading::{OrpAlignment, PunctuationClass};

/// Application events produced by the command deck.
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    Quit,
    Help,
    ShowNotes,
    /// Save the loaded text as a note; `None` derives the title
    SaveNote(Option<String>),
    /// Re-enter the reader on the loaded text
    Read,
    SetWpm(u32),
    SetAlignment(OrpAlignment),
    SetMultiplier(PunctuationClass, f64),
    Warning(String),
    InvalidCommand(String),
    None,
}

/// Key presses after translation from terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlay,
    StepBack,
    StepForward,
    Faster,
    Slower,
    MuchFaster,
    MuchSlower,
    /// Seek to n × 10 %
    SeekTenth(u8),
    Restart,
    CycleAlignment,
    Up,
    Down,
    Select,
    Delete,
    Back,
    Quit,
}
