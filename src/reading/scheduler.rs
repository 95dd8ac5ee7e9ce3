//! Playback scheduler: one cursor over a token sequence, advanced on a
//! deadline whose length depends on the rate and the displayed word's
//! punctuation.
//!
//! The scheduler never sleeps or spawns. It owns at most one pending
//! deadline; the host loop calls [`Scheduler::tick`] and uses
//! [`Scheduler::time_until_next`] as its poll timeout. `pause`, `set_rate`
//! and `restart` replace or drop that deadline, so a second advance can
//! never be in flight.
//!
//! `cursor` is the index of the next token the timer will display. Natural
//! advance displays `tokens[cursor]` and then increments it, so after the
//! last token the cursor equals the length and the session is finished.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::TimingConfig;
use crate::reading::clock::{Clock, SystemClock};
use crate::reading::punctuation::{PunctuationClass, PunctuationMultipliers};
use crate::reading::timing::calculate_word_delay;
use crate::reading::Token;

/// Invoked with `(token, index, total)` every time a token is shown.
pub type DisplayListener = Box<dyn FnMut(&Token, usize, usize)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not running; cursor anywhere in `[0, len]`.
    Idle,
    /// Cursor advances each time the deadline passes.
    Running,
    /// Natural advance ran past the last token.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

pub struct Scheduler<C: Clock = SystemClock> {
    tokens: Arc<[Token]>,
    cursor: usize,
    rate: u32,
    phase: Phase,
    multipliers: PunctuationMultipliers,
    timing: TimingConfig,
    deadline: Option<Instant>,
    displayed: Option<usize>,
    clock: C,
    listener: Option<DisplayListener>,
}

impl Scheduler<SystemClock> {
    /// Scheduler on the system clock with the default rate bounds.
    pub fn new(
        tokens: impl Into<Arc<[Token]>>,
        initial_rate: u32,
        multipliers: PunctuationMultipliers,
    ) -> Self {
        let timing = TimingConfig {
            wpm: initial_rate,
            multipliers,
            ..TimingConfig::default()
        };
        Self::with_config(tokens, &timing, SystemClock)
    }
}

impl<C: Clock> Scheduler<C> {
    /// Takes the initial rate, bounds and multipliers from `timing`.
    pub fn with_config(tokens: impl Into<Arc<[Token]>>, timing: &TimingConfig, clock: C) -> Self {
        Self {
            tokens: tokens.into(),
            cursor: 0,
            rate: timing.clamp_wpm(timing.wpm),
            phase: Phase::Idle,
            multipliers: timing.multipliers.sanitized(),
            timing: timing.clone(),
            deadline: None,
            displayed: None,
            clock,
            listener: None,
        }
    }

    pub fn on_display(&mut self, listener: impl FnMut(&Token, usize, usize) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Starts playback and shows the token at the cursor right away.
    ///
    /// Starting from the finished position replays from the first token.
    /// Does nothing on an empty sequence or while already running.
    pub fn play(&mut self) {
        if self.tokens.is_empty() || self.phase == Phase::Running {
            return;
        }
        if self.cursor >= self.tokens.len() {
            self.cursor = 0;
        }
        debug!("play from {} at {} wpm", self.cursor, self.rate);
        self.phase = Phase::Running;
        self.advance();
    }

    pub fn pause(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        debug!("pause at {}", self.cursor);
        self.deadline = None;
        self.phase = Phase::Idle;
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Moves the cursor one token while paused and shows that token.
    ///
    /// The cursor stays inside `[0, len - 1]`; a step past either end is
    /// ignored. Returns whether the cursor moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.is_running() || self.tokens.is_empty() {
            return false;
        }
        let target = match direction {
            Direction::Forward if self.cursor + 1 < self.tokens.len() => self.cursor + 1,
            Direction::Backward if self.cursor > 0 => self.cursor - 1,
            _ => return false,
        };
        self.cursor = target;
        self.phase = Phase::Idle;
        self.display(target);
        true
    }

    /// Jumps to `floor(fraction × len)`, clamped to the last token.
    ///
    /// While running the pending deadline shows the new position; otherwise
    /// it is shown at once. The running state does not change.
    pub fn seek(&mut self, fraction: f64) {
        if self.tokens.is_empty() {
            return;
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let len = self.tokens.len();
        let target = ((fraction * len as f64).floor() as usize).min(len - 1);
        debug!("seek {fraction:.3} -> {target}");
        self.cursor = target;

        if self.phase == Phase::Running {
            return;
        }
        self.phase = Phase::Idle;
        self.display(target);
    }

    /// Clamps `rate` to the configured bounds. A running session restarts
    /// its timer: the pending deadline is dropped and the next token is
    /// shown immediately at the new rate.
    pub fn set_rate(&mut self, rate: u32) {
        let rate = self.timing.clamp_wpm(rate);
        if rate == self.rate {
            return;
        }
        debug!("rate {} -> {}", self.rate, rate);
        self.rate = rate;

        if self.phase == Phase::Running {
            self.deadline = None;
            self.advance();
        }
    }

    pub fn adjust_rate(&mut self, delta: i32) {
        let target = (self.rate as i64 + delta as i64).clamp(0, u32::MAX as i64) as u32;
        self.set_rate(target);
    }

    /// Replaces one multiplier; applies from the next scheduled delay.
    /// Non-positive or non-finite values are ignored.
    pub fn set_multiplier(&mut self, class: PunctuationClass, value: f64) -> bool {
        let accepted = self.multipliers.set(class, value);
        if !accepted {
            warn!("ignoring {} multiplier {value}", class.name());
        }
        accepted
    }

    /// Back to the first token, not running.
    pub fn restart(&mut self) {
        self.deadline = None;
        self.cursor = 0;
        self.displayed = None;
        self.phase = Phase::Idle;
    }

    /// Fires the pending advance if its deadline has passed. Returns true
    /// when a token was shown.
    pub fn tick(&mut self) -> bool {
        match self.deadline {
            Some(due) if self.phase == Phase::Running && self.clock.now() >= due => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending advance, `None` when nothing is pending.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.deadline
            .map(|due| due.saturating_duration_since(self.clock.now()))
    }

    fn advance(&mut self) {
        let index = self.cursor;
        let Some(token) = self.tokens.get(index) else {
            self.deadline = None;
            self.phase = Phase::Finished;
            return;
        };
        let delay = calculate_word_delay(token.text(), self.rate, &self.multipliers);

        self.display(index);
        self.cursor += 1;

        if self.cursor == self.tokens.len() {
            info!("finished {} words", self.tokens.len());
            self.deadline = None;
            self.phase = Phase::Finished;
        } else {
            self.deadline = Some(self.clock.now() + Duration::from_millis(delay));
        }
    }

    fn display(&mut self, index: usize) {
        self.displayed = Some(index);
        let total = self.tokens.len();
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.tokens[index], index, total);
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn tokens(&self) -> &Arc<[Token]> {
        &self.tokens
    }

    pub fn multipliers(&self) -> &PunctuationMultipliers {
        &self.multipliers
    }

    /// Index of the token most recently shown.
    pub fn displayed_index(&self) -> Option<usize> {
        self.displayed
    }

    pub fn displayed_token(&self) -> Option<&Token> {
        self.displayed.and_then(|i| self.tokens.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::clock::ManualClock;
    use crate::reading::tokenize_text;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scheduler(text: &str) -> (Scheduler<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let timing = TimingConfig::default();
        let s = Scheduler::with_config(tokenize_text(text), &timing, clock.clone());
        (s, clock)
    }

    fn ten_words() -> &'static str {
        "one two three four five six seven eight nine ten"
    }

    fn record(s: &mut Scheduler<ManualClock>) -> Rc<RefCell<Vec<(String, usize, usize)>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        s.on_display(move |token, index, total| {
            sink.borrow_mut().push((token.text().to_string(), index, total));
        });
        seen
    }

    #[test]
    fn test_new_starts_idle_at_zero() {
        let s = Scheduler::new(tokenize_text("a b"), 300, PunctuationMultipliers::default());
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.rate(), 300);
        assert!(s.time_until_next().is_none());
    }

    #[test]
    fn test_new_clamps_initial_rate() {
        let s = Scheduler::new(tokenize_text("a"), 5000, PunctuationMultipliers::default());
        assert_eq!(s.rate(), 1000);
    }

    #[test]
    fn test_play_shows_first_token_immediately() {
        let (mut s, _clock) = scheduler("hello world");
        let seen = record(&mut s);

        s.play();

        assert!(s.is_running());
        assert_eq!(s.cursor(), 1);
        assert_eq!(seen.borrow().as_slice(), &[("hello".to_string(), 0, 2)]);
        assert_eq!(s.time_until_next(), Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_play_on_empty_is_noop() {
        let (mut s, _clock) = scheduler("   ");
        s.play();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_tick_waits_for_deadline() {
        let (mut s, clock) = scheduler("hello world again");
        s.play();

        clock.advance_ms(199);
        assert!(!s.tick());
        assert_eq!(s.cursor(), 1);

        clock.advance_ms(1);
        assert!(s.tick());
        assert_eq!(s.cursor(), 2);
        assert_eq!(s.displayed_token().map(Token::text), Some("world"));
    }

    #[test]
    fn test_delay_uses_just_displayed_token() {
        let (mut s, clock) = scheduler("end. next");
        s.play();
        // 200ms × 2.0 for "end."
        assert_eq!(s.time_until_next(), Some(Duration::from_millis(400)));
        clock.advance_ms(399);
        assert!(!s.tick());
        clock.advance_ms(1);
        assert!(s.tick());
    }

    #[test]
    fn test_natural_advance_finishes() {
        let (mut s, clock) = scheduler("a b c");
        let seen = record(&mut s);
        s.play();
        for _ in 0..2 {
            clock.advance_ms(200);
            assert!(s.tick());
        }

        assert_eq!(s.phase(), Phase::Finished);
        assert!(!s.is_running());
        assert_eq!(s.cursor(), 3);
        assert!(s.time_until_next().is_none());
        let indexes: Vec<usize> = seen.borrow().iter().map(|e| e.1).collect();
        assert_eq!(indexes, vec![0, 1, 2]);

        clock.advance_ms(10_000);
        assert!(!s.tick());
    }

    #[test]
    fn test_play_after_finish_replays_from_start() {
        let (mut s, clock) = scheduler("a b");
        s.play();
        clock.advance_ms(200);
        s.tick();
        assert!(s.is_finished());

        let seen = record(&mut s);
        s.play();
        assert!(s.is_running());
        assert_eq!(seen.borrow()[0].1, 0);
        assert_eq!(s.cursor(), 1);
    }

    #[test]
    fn test_single_token_finishes_on_play() {
        let (mut s, _clock) = scheduler("solo");
        s.play();
        assert!(s.is_finished());
        assert_eq!(s.cursor(), 1);
        assert_eq!(s.displayed_index(), Some(0));
    }

    #[test]
    fn test_pause_cancels_deadline_and_keeps_cursor() {
        let (mut s, clock) = scheduler(ten_words());
        s.play();
        s.pause();

        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.cursor(), 1);
        assert!(s.time_until_next().is_none());
        clock.advance_ms(5_000);
        assert!(!s.tick());
        assert_eq!(s.cursor(), 1);
    }

    #[test]
    fn test_toggle_switches_between_running_and_idle() {
        let (mut s, _clock) = scheduler(ten_words());
        s.toggle();
        assert!(s.is_running());
        s.toggle();
        assert!(!s.is_running());
    }

    #[test]
    fn test_step_backward_at_zero_stays() {
        let (mut s, _clock) = scheduler(ten_words());
        assert!(!s.step(Direction::Backward));
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_step_forward_stops_at_last_token() {
        let (mut s, _clock) = scheduler("a b c");
        assert!(s.step(Direction::Forward));
        assert!(s.step(Direction::Forward));
        assert!(!s.step(Direction::Forward));
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn test_step_shows_token() {
        let (mut s, _clock) = scheduler("a b c");
        let seen = record(&mut s);
        s.step(Direction::Forward);
        assert_eq!(seen.borrow().as_slice(), &[("b".to_string(), 1, 3)]);
    }

    #[test]
    fn test_step_ignored_while_running() {
        let (mut s, _clock) = scheduler(ten_words());
        s.play();
        assert!(!s.step(Direction::Forward));
        assert_eq!(s.cursor(), 1);
    }

    #[test]
    fn test_step_back_from_finished() {
        let (mut s, _clock) = scheduler("only");
        s.play();
        assert!(s.is_finished());
        assert!(!s.step(Direction::Forward));
        assert!(s.step(Direction::Backward));
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_seek_half_of_ten() {
        let (mut s, _clock) = scheduler(ten_words());
        s.seek(0.5);
        assert_eq!(s.cursor(), 5);
        assert_eq!(s.displayed_token().map(Token::text), Some("six"));
    }

    #[test]
    fn test_seek_clamps_fraction() {
        let (mut s, _clock) = scheduler(ten_words());
        s.seek(1.0);
        assert_eq!(s.cursor(), 9);
        s.seek(7.5);
        assert_eq!(s.cursor(), 9);
        s.seek(-0.3);
        assert_eq!(s.cursor(), 0);
        s.seek(f64::NAN);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_seek_keeps_running_state() {
        let (mut s, clock) = scheduler(ten_words());
        s.play();
        s.seek(0.8);
        assert!(s.is_running());
        assert_eq!(s.cursor(), 8);

        clock.advance_ms(200);
        s.tick();
        assert_eq!(s.displayed_token().map(Token::text), Some("nine"));
    }

    #[test]
    fn test_seek_from_finished_returns_to_idle() {
        let (mut s, _clock) = scheduler("solo");
        s.play();
        s.seek(0.0);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_seek_on_empty_is_noop() {
        let (mut s, _clock) = scheduler("");
        s.seek(0.5);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_set_rate_clamps() {
        let (mut s, _clock) = scheduler(ten_words());
        s.set_rate(20);
        assert_eq!(s.rate(), 100);
        s.set_rate(20_000);
        assert_eq!(s.rate(), 1000);
    }

    #[test]
    fn test_set_rate_while_running_restarts_timer() {
        let (mut s, clock) = scheduler(ten_words());
        s.play();
        clock.advance_ms(50);

        s.set_rate(600);

        assert!(s.is_running());
        assert_eq!(s.cursor(), 2);
        assert_eq!(s.time_until_next(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_set_rate_while_paused_only_changes_rate() {
        let (mut s, _clock) = scheduler(ten_words());
        s.set_rate(450);
        assert_eq!(s.rate(), 450);
        assert_eq!(s.cursor(), 0);
        assert!(s.time_until_next().is_none());
    }

    #[test]
    fn test_adjust_rate() {
        let (mut s, _clock) = scheduler(ten_words());
        s.adjust_rate(50);
        assert_eq!(s.rate(), 350);
        s.adjust_rate(-1000);
        assert_eq!(s.rate(), 100);
    }

    #[test]
    fn test_set_multiplier_applies_to_next_delay() {
        let (mut s, clock) = scheduler("one, two, three");
        s.play();
        assert_eq!(s.time_until_next(), Some(Duration::from_millis(250)));

        assert!(s.set_multiplier(PunctuationClass::MinorBreak, 3.0));
        clock.advance_ms(250);
        s.tick();
        assert_eq!(s.time_until_next(), Some(Duration::from_millis(600)));
    }

    #[test]
    fn test_set_multiplier_rejects_invalid() {
        let (mut s, _clock) = scheduler("a");
        assert!(!s.set_multiplier(PunctuationClass::SentenceEnd, 0.0));
        assert_eq!(s.multipliers().sentence_end, 2.0);
    }

    #[test]
    fn test_config_with_negative_multiplier_keeps_sentence_pause() {
        let clock = ManualClock::new();
        let mut timing = TimingConfig::default();
        timing.multipliers.sentence_end = -5.0;
        let mut s = Scheduler::with_config(tokenize_text("end. next"), &timing, clock.clone());

        s.play();
        assert_eq!(s.multipliers().sentence_end, 2.0);
        assert_eq!(s.time_until_next(), Some(Duration::from_millis(400)));
    }

    #[test]
    fn test_restart_resets_cursor() {
        let (mut s, _clock) = scheduler(ten_words());
        s.play();
        s.restart();
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.time_until_next().is_none());
        assert!(s.displayed_token().is_none());
    }

    #[test]
    fn test_cursor_stays_in_bounds_under_mixed_operations() {
        let (mut s, clock) = scheduler(ten_words());
        let len = s.len();
        // Small LCG so the sequence is fixed but varied.
        let mut seed: u64 = 0x2545_f491;
        for _ in 0..2_000 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            match (seed >> 33) % 7 {
                0 => s.play(),
                1 => s.pause(),
                2 => {
                    s.step(Direction::Forward);
                }
                3 => {
                    s.step(Direction::Backward);
                }
                4 => s.seek(((seed >> 12) % 1_000) as f64 / 999.0),
                5 => {
                    clock.advance_ms(1_000);
                    s.tick();
                }
                _ => s.adjust_rate(((seed >> 20) % 200) as i32 - 100),
            }
            assert!(s.cursor() <= len);
            if s.cursor() == len {
                assert!(!s.is_running());
            }
        }
    }
}
