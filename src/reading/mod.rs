pub mod clock;
pub mod orp;
pub mod punctuation;
pub mod scheduler;
pub mod timing;
pub mod token;

pub use clock::{Clock, ManualClock, SystemClock};
pub use orp::{calculate_orp_index, focus_offset, OrpAlignment};
pub use punctuation::{classify_punctuation, PunctuationClass, PunctuationMultipliers};
pub use scheduler::{Direction, Phase, Scheduler};
pub use timing::{calculate_word_delay, tokenize_text};
pub use token::Token;
