use log::warn;
use serde::{Deserialize, Serialize};

/// Pause classes keyed off a word's trailing punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationClass {
    /// `.` `!` `?`
    SentenceEnd,
    /// `:` `;` and trailing dashes or ellipses
    ClauseBreak,
    /// `,`
    MinorBreak,
}

impl PunctuationClass {
    pub const ALL: [PunctuationClass; 3] = [
        PunctuationClass::SentenceEnd,
        PunctuationClass::ClauseBreak,
        PunctuationClass::MinorBreak,
    ];

    /// Parses the short names used by the command deck (`sentence`, `clause`, `minor`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sentence" | "sentence-end" | "period" => Some(PunctuationClass::SentenceEnd),
            "clause" | "clause-break" | "colon" => Some(PunctuationClass::ClauseBreak),
            "minor" | "minor-break" | "comma" => Some(PunctuationClass::MinorBreak),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PunctuationClass::SentenceEnd => "sentence",
            PunctuationClass::ClauseBreak => "clause",
            PunctuationClass::MinorBreak => "minor",
        }
    }
}

/// Multipliers applied to the base per-word interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunctuationMultipliers {
    pub sentence_end: f64,
    pub clause_break: f64,
    pub minor_break: f64,
}

impl Default for PunctuationMultipliers {
    fn default() -> Self {
        Self {
            sentence_end: 2.0,
            clause_break: 1.5,
            minor_break: 1.25,
        }
    }
}

impl PunctuationMultipliers {
    pub fn get(&self, class: PunctuationClass) -> f64 {
        match class {
            PunctuationClass::SentenceEnd => self.sentence_end,
            PunctuationClass::ClauseBreak => self.clause_break,
            PunctuationClass::MinorBreak => self.minor_break,
        }
    }

    /// Stores `value` for `class`. Returns false and leaves the table
    /// untouched when the value is not a positive finite number.
    pub fn set(&mut self, class: PunctuationClass, value: f64) -> bool {
        if !value.is_finite() || value <= 0.0 {
            return false;
        }
        match class {
            PunctuationClass::SentenceEnd => self.sentence_end = value,
            PunctuationClass::ClauseBreak => self.clause_break = value,
            PunctuationClass::MinorBreak => self.minor_break = value,
        }
        true
    }

    /// Replaces values that are not positive finite numbers with the
    /// defaults, e.g. after reading a hand-edited settings file.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut table = self;
        for class in PunctuationClass::ALL {
            let value = self.get(class);
            if !table.set(class, value) {
                warn!(
                    "invalid {} multiplier {value}, using {}",
                    class.name(),
                    defaults.get(class)
                );
                table.set(class, defaults.get(class));
            }
        }
        table
    }

    /// Multiplier for a whole word; 1.0 when it has no pause punctuation.
    pub fn for_word(&self, word: &str) -> f64 {
        classify_punctuation(word).map_or(1.0, |class| self.get(class))
    }
}

/// Classifies a word by its final character(s). First match wins:
/// sentence end, then clause break, then minor break, then dash/ellipsis.
pub fn classify_punctuation(word: &str) -> Option<PunctuationClass> {
    let last = word.chars().next_back()?;

    match last {
        '.' | '!' | '?' => Some(PunctuationClass::SentenceEnd),
        ':' | ';' => Some(PunctuationClass::ClauseBreak),
        ',' => Some(PunctuationClass::MinorBreak),
        _ if word.ends_with('—')
            || word.ends_with('–')
            || word.ends_with('…')
            || word.ends_with("...") =>
        {
            Some(PunctuationClass::ClauseBreak)
        }
        _ => None,
    }
}
