//! Navigation that waits for an exit animation before it takes effect.

use std::time::Duration;

/// The state machine operation a pending transition will apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Start,
    Next,
    Previous,
    Restart,
}

impl TransitionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TransitionKind::Start => "start",
            TransitionKind::Next => "next",
            TransitionKind::Previous => "previous",
            TransitionKind::Restart => "restart",
        }
    }
}

/// A scheduled operation and the time left before it runs.
///
/// At most one exists at a time; the engine refuses to schedule another while
/// one is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    kind: TransitionKind,
    remaining: Duration,
}

impl PendingTransition {
    #[must_use]
    pub fn new(kind: TransitionKind, delay: Duration) -> Self {
        Self {
            kind,
            remaining: delay,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Count down by `delta`. Returns `true` once the delay has elapsed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(delta);
        self.remaining.is_zero()
    }
}
