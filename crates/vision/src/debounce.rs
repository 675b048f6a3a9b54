//! Gesture-hold debounce.
//!
//! A raw classification flickers frame to frame; an answer only counts once
//! the same symbol has been held continuously. This is a presentation-layer
//! filter, kept out of the session engine so the engine stays pure.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use quiz_core::model::AnswerSymbol;

/// Default time a gesture must be held before it registers as an answer.
/// Distinct from the per-question timeout.
pub const DEFAULT_HOLD_MS: i64 = 500;

/// Tracks the last seen symbol and when it last changed.
#[derive(Debug, Clone)]
pub struct GestureHold {
    hold: Duration,
    state: Option<(AnswerSymbol, DateTime<Utc>)>,
}

impl Default for GestureHold {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureHold {
    #[must_use]
    pub fn new() -> Self {
        Self::with_hold(Duration::milliseconds(DEFAULT_HOLD_MS))
    }

    #[must_use]
    pub fn with_hold(hold: Duration) -> Self {
        Self { hold, state: None }
    }

    /// Feed one frame's classification.
    ///
    /// Returns the symbol once it has been held for the hold duration, then
    /// clears so a single hold submits exactly once. A `None` frame (no
    /// hand, ambiguous pose) neither resets nor advances the hold, so a
    /// briefly dropped detection does not restart the timer.
    pub fn observe(
        &mut self,
        gesture: Option<AnswerSymbol>,
        now: DateTime<Utc>,
    ) -> Option<AnswerSymbol> {
        let gesture = gesture?;

        match self.state {
            Some((held, since)) if held == gesture => {
                if now - since >= self.hold {
                    debug!(symbol = %gesture, "gesture hold fired");
                    self.state = None;
                    Some(gesture)
                } else {
                    None
                }
            }
            _ => {
                self.state = Some((gesture, now));
                None
            }
        }
    }

    /// The symbol currently being held, for on-screen feedback.
    #[must_use]
    pub fn current(&self) -> Option<AnswerSymbol> {
        self.state.map(|(symbol, _)| symbol)
    }

    /// Abandon any in-flight hold (result screen shown, session reset).
    pub fn clear(&mut self) {
        self.state = None;
    }
}
