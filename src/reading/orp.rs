//! ORP (Optimal Recognition Point) selection
//!
//! Words are shifted horizontally so the highlighted letter stays on a fixed
//! focus column. The highlighted position depends only on word length:
//! - 0-1 graphemes → position 0
//! - 2-5 graphemes → position 1
//! - 6+ graphemes → floor(len × 0.35)
//!
//! Length is counted in extended grapheme clusters.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const ORP_RATIO: f64 = 0.35;

/// Returns the 0-based grapheme index of the character to highlight.
pub fn calculate_orp_index(word: &str) -> usize {
    orp_index_for_len(word.graphemes(true).count())
}

pub fn orp_index_for_len(len: usize) -> usize {
    match len {
        0..=1 => 0,
        2..=5 => 1,
        _ => (len as f64 * ORP_RATIO).floor() as usize,
    }
}

/// Which edge of the highlighted character sits on the focus column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrpAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl OrpAlignment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" | "l" => Some(OrpAlignment::Left),
            "center" | "centre" | "c" => Some(OrpAlignment::Center),
            "right" | "r" => Some(OrpAlignment::Right),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OrpAlignment::Left => "left",
            OrpAlignment::Center => "center",
            OrpAlignment::Right => "right",
        }
    }

    pub fn next(self) -> Self {
        match self {
            OrpAlignment::Left => OrpAlignment::Center,
            OrpAlignment::Center => OrpAlignment::Right,
            OrpAlignment::Right => OrpAlignment::Left,
        }
    }
}

/// Horizontal distance from the word's left edge to the focus point, in
/// the same unit as the widths (terminal cells for the TUI).
pub fn focus_offset(before_width: f64, orp_width: f64, alignment: OrpAlignment) -> f64 {
    match alignment {
        OrpAlignment::Left => before_width,
        OrpAlignment::Center => before_width + orp_width / 2.0,
        OrpAlignment::Right => before_width + orp_width,
    }
}
