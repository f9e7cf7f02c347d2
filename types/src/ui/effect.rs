//! Screen transition effects.
//!
//! Effects are cosmetic: they only describe how far along an animation is.
//! The engine decides when a state change happens.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffectKind {
    /// The outgoing screen dims while a transition is pending.
    FadeOut,
    /// The incoming screen rises into place.
    SlideIn,
    /// Horizontal wobble on a refused action.
    Shake,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenEffect {
    kind: ScreenEffectKind,
    timer: EffectTimer,
}

impl ScreenEffect {
    #[must_use]
    pub fn fade_out(duration: Duration) -> Self {
        Self {
            kind: ScreenEffectKind::FadeOut,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn slide_in(duration: Duration) -> Self {
        Self {
            kind: ScreenEffectKind::SlideIn,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn shake(duration: Duration) -> Self {
        Self {
            kind: ScreenEffectKind::Shake,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> ScreenEffectKind {
        self.kind
    }
}
