//! Quiz operation errors.
//!
//! Every variant is local and recoverable. The interaction layer disables the
//! controls that would trigger them, so seeing one means a caller skipped a
//! guard; the quiz state is left untouched in every case.

use thiserror::Error;

use restreveal_types::{CategoryId, InvalidRating};

use crate::quiz::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error(transparent)]
    InvalidRating(#[from] InvalidRating),

    #[error("{category} still has unanswered statements")]
    NotReady { category: CategoryId },

    #[error("cannot {operation} during {phase}")]
    InvalidPhaseTransition {
        operation: &'static str,
        phase: Phase,
    },

    #[error("answers for {got} are not accepted while {expected} is active")]
    InactiveCategory {
        expected: CategoryId,
        got: CategoryId,
    },

    #[error("{category} has no statement #{index} (bank holds {len})")]
    QuestionOutOfRange {
        category: CategoryId,
        index: usize,
        len: usize,
    },
}

impl QuizError {
    /// Gating errors are the expected result of a disabled control being
    /// pressed; everything else indicates a caller bug.
    #[must_use]
    pub fn is_gating(&self) -> bool {
        matches!(self, QuizError::NotReady { .. })
    }
}
