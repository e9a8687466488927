//! Preview refresh scheduling.
//!
//! Rapid setting changes collapse into one regeneration: every change resets
//! a [`Debouncer`], and only the last one fires. While a preview is being
//! regenerated a loading indicator stays visible for at least the
//! [`LoadingHold`] minimum, even when generation finishes sooner.
//!
//! Both types are plain state machines. The caller passes the current
//! [`Instant`] in, so they work with any event loop (or none) and are
//! deterministic under test.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Quiet period after the last change before a preview refresh fires.
pub const PREVIEW_DEBOUNCE: Duration = Duration::from_millis(250);

/// Minimum time the loading indicator stays visible.
pub const MIN_LOADING_VISIBLE: Duration = Duration::from_millis(300);

/// Cancellable, resettable single-shot timer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Starts the timer, discarding any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending deadline, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns true exactly once when the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(PREVIEW_DEBOUNCE)
    }
}

/// Keeps a loading indicator up for a minimum duration.
#[derive(Debug, Clone)]
pub struct LoadingHold {
    minimum: Duration,
    started: Option<Instant>,
}

impl LoadingHold {
    pub fn new(minimum: Duration) -> Self {
        Self {
            minimum,
            started: None,
        }
    }

    pub fn begin(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn is_visible(&self) -> bool {
        self.started.is_some()
    }

    /// How much longer the indicator must stay up.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.started {
            Some(started) => self
                .minimum
                .saturating_sub(now.saturating_duration_since(started)),
            None => Duration::ZERO,
        }
    }

    /// Hides the indicator, returning the delay the caller should still wait
    /// before rendering.
    pub fn finish(&mut self, now: Instant) -> Duration {
        let remaining = self.remaining(now);
        self.started = None;
        remaining
    }
}

impl Default for LoadingHold {
    fn default() -> Self {
        Self::new(MIN_LOADING_VISIBLE)
    }
}

/// Form fields that can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingField {
    Min,
    Max,
    Operation,
    Carry,
    Borrow,
    ProblemCount,
    WorksheetCount,
    Title,
}

impl SettingField {
    /// Title and worksheet count only affect the exported document, so
    /// changing them does not refresh the preview.
    pub fn affects_preview(&self) -> bool {
        !matches!(self, SettingField::Title | SettingField::WorksheetCount)
    }
}
