//! Transient busy feedback for the insight trigger button.
//!
//! Pressing the button swaps its label for a busy message, disables it,
//! and schedules a restoration a fixed delay later. Only the most recently
//! issued [`RestoreToken`] is honored, so rapid repeated presses extend
//! the busy window instead of restoring early.

/// Label shown while the feedback cycle is active.
pub const BUSY_LABEL: &str = "Analyzing Psychee...";

/// How long the busy label stays up, in milliseconds.
pub const RESTORE_DELAY_MS: i32 = 2000;

/// Identifies one scheduled restoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestoreToken(u64);

/// State machine behind the busy feedback cycle.
#[derive(Debug, Default)]
pub struct InsightFeedback {
    original_label: Option<String>,
    generation: u64,
}

impl InsightFeedback {
    pub fn is_busy(&self) -> bool {
        self.original_label.is_some()
    }

    /// Records a press. The displayed label is captured on the first press
    /// of a cycle; later presses keep the captured label and invalidate any
    /// earlier pending restoration.
    pub fn press(&mut self, displayed: impl Into<String>) -> RestoreToken {
        if self.original_label.is_none() {
            self.original_label = Some(displayed.into());
        }
        self.generation += 1;
        RestoreToken(self.generation)
    }

    /// Timer expiry. Yields the label to restore when `token` is still
    /// current; stale tokens are ignored.
    pub fn expire(&mut self, token: RestoreToken) -> Option<String> {
        if token.0 != self.generation {
            return None;
        }
        self.original_label.take()
    }
}
