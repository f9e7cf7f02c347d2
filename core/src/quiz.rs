//! The quiz state machine.
//!
//! ```text
//! Intro --start--> InProgress(0) --advance--> ... InProgress(last) --advance--> Results
//!                       ^   |                                                      |
//!                       +---+ retreat                       restart (from anywhere) |
//! Intro <---------------------------------------------------------------------------+
//! ```
//!
//! Every transition is synchronous. A rejected operation returns a
//! [`QuizError`] and leaves the state exactly as it was.

use std::fmt;

use restreveal_types::{Catalog, Category, CategoryId, Rating};
use tracing::debug;

use crate::answers::AnswerSet;
use crate::errors::QuizError;
use crate::scoring::{ScoreResult, compute_results};

/// Which screen the quiz is on. The category index only exists while a
/// questionnaire is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Intro,
    InProgress {
        index: usize,
    },
    Results,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Intro => f.write_str("intro"),
            Phase::InProgress { index } => write!(f, "step {}", index + 1),
            Phase::Results => f.write_str("results"),
        }
    }
}

/// Outcome of a successful [`Quiz::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved { index: usize },
    Finished,
}

/// Position indicator for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based step number.
    pub step: usize,
    pub total: usize,
    /// `step / total` as a rounded percentage.
    pub percent: u16,
}

impl Progress {
    fn new(index: usize, total: usize) -> Self {
        let step = index + 1;
        let percent = if total == 0 {
            100
        } else {
            ((step * 100 + total / 2) / total) as u16
        };
        Self {
            step,
            total,
            percent,
        }
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    catalog: Catalog,
    phase: Phase,
    answers: AnswerSet,
}

impl Quiz {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            phase: Phase::Intro,
            answers: AnswerSet::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Index of the active category; 0 outside a questionnaire.
    #[must_use]
    pub fn current_category_index(&self) -> usize {
        match self.phase {
            Phase::InProgress { index } => index,
            Phase::Intro | Phase::Results => 0,
        }
    }

    #[must_use]
    pub fn current_category(&self) -> Option<&Category> {
        match self.phase {
            Phase::InProgress { index } => self.catalog.get(index),
            Phase::Intro | Phase::Results => None,
        }
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        matches!(self.phase, Phase::InProgress { index } if index == self.catalog.last_index())
    }

    #[must_use]
    pub fn rating(&self, category: CategoryId, question: usize) -> Option<Rating> {
        self.answers.get(category, question)
    }

    #[must_use]
    pub fn answered_count(&self, category: CategoryId) -> usize {
        self.answers.answered_count(category)
    }

    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        match self.phase {
            Phase::InProgress { index } => Some(Progress::new(index, self.catalog.len())),
            Phase::Intro | Phase::Results => None,
        }
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.phase != Phase::Intro {
            return Err(self.wrong_phase("start"));
        }
        self.transition(Phase::InProgress { index: 0 });
        Ok(())
    }

    /// Store `rating` for one statement of the active category.
    ///
    /// Checks run in order phase, category, question, rating; the first
    /// failure is returned and nothing is written.
    pub fn record_answer(
        &mut self,
        category: CategoryId,
        question: usize,
        rating: u8,
    ) -> Result<Rating, QuizError> {
        let active = *self
            .current_category()
            .ok_or_else(|| self.wrong_phase("record an answer"))?;
        if active.id() != category {
            return Err(QuizError::InactiveCategory {
                expected: active.id(),
                got: category,
            });
        }
        let len = active.question_count();
        if question >= len {
            return Err(QuizError::QuestionOutOfRange {
                category,
                index: question,
                len,
            });
        }
        let rating = Rating::new(rating)?;

        self.answers.upsert(category, question, len, rating);
        Ok(rating)
    }

    /// Whether the active category is fully answered.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_category()
            .is_some_and(|category| self.answers.is_complete(category))
    }

    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let Phase::InProgress { index } = self.phase else {
            return Err(self.wrong_phase("advance"));
        };
        if !self.can_advance() {
            return Err(QuizError::NotReady {
                category: self.catalog.categories()[index].id(),
            });
        }

        if index >= self.catalog.last_index() {
            self.transition(Phase::Results);
            Ok(Advance::Finished)
        } else {
            let index = index + 1;
            self.transition(Phase::InProgress { index });
            Ok(Advance::Moved { index })
        }
    }

    /// Step back one category. Returns `false` (and changes nothing) on the
    /// first category.
    pub fn retreat(&mut self) -> Result<bool, QuizError> {
        let Phase::InProgress { index } = self.phase else {
            return Err(self.wrong_phase("go back"));
        };
        if index == 0 {
            return Ok(false);
        }
        self.transition(Phase::InProgress { index: index - 1 });
        Ok(true)
    }

    /// Clear every answer and return to the intro. Valid from any phase.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.transition(Phase::Intro);
    }

    /// Swap the catalog edition. Only allowed before the quiz starts, since
    /// answers are sized to the bank.
    pub fn set_catalog(&mut self, catalog: Catalog) -> Result<(), QuizError> {
        if self.phase != Phase::Intro {
            return Err(self.wrong_phase("change edition"));
        }
        self.catalog = catalog;
        Ok(())
    }

    /// The top-two ranking, available once the quiz is finished.
    #[must_use]
    pub fn results(&self) -> Option<ScoreResult> {
        (self.phase == Phase::Results)
            .then(|| compute_results(&self.answers, self.catalog.categories()))
    }

    fn transition(&mut self, to: Phase) {
        debug!(from = %self.phase, to = %to, "quiz transition");
        self.phase = to;
    }

    fn wrong_phase(&self, operation: &'static str) -> QuizError {
        QuizError::InvalidPhaseTransition {
            operation,
            phase: self.phase,
        }
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use restreveal_types::{Catalog, CategoryId, Edition};

    use super::{Advance, Phase, Progress, Quiz};
    use crate::errors::QuizError;

    fn quick_quiz() -> Quiz {
        Quiz::new(Catalog::new(Edition::Quick))
    }

    fn answer_current(quiz: &mut Quiz, value: u8) {
        let category = *quiz.current_category().expect("in progress");
        for question in 0..category.question_count() {
            quiz.record_answer(category.id(), question, value)
                .expect("valid answer");
        }
    }

    #[test]
    fn starts_in_intro() {
        let quiz = quick_quiz();
        assert_eq!(quiz.phase(), Phase::Intro);
        assert_eq!(quiz.current_category_index(), 0);
        assert!(quiz.answers().is_empty());
        assert!(!quiz.can_advance());
        assert!(quiz.results().is_none());
    }

    #[test]
    fn start_only_from_intro() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        assert_eq!(quiz.phase(), Phase::InProgress { index: 0 });
        assert!(matches!(
            quiz.start(),
            Err(QuizError::InvalidPhaseTransition {
                operation: "start",
                ..
            })
        ));
    }

    #[test]
    fn record_answer_requires_progress() {
        let mut quiz = quick_quiz();
        let err = quiz.record_answer(CategoryId::Mental, 0, 3).unwrap_err();
        assert!(matches!(err, QuizError::InvalidPhaseTransition { .. }));
        assert!(quiz.answers().is_empty());
    }

    #[test]
    fn record_answer_rejected_after_results() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        for _ in 0..CategoryId::ALL.len() {
            answer_current(&mut quiz, 4);
            quiz.advance().unwrap();
        }
        assert_eq!(quiz.phase(), Phase::Results);
        let before = quiz.answers().clone();

        let last = CategoryId::ALL[CategoryId::ALL.len() - 1];
        for category in [CategoryId::Mental, last] {
            let err = quiz.record_answer(category, 0, 1).unwrap_err();
            assert_eq!(
                err,
                QuizError::InvalidPhaseTransition {
                    operation: "record an answer",
                    phase: Phase::Results,
                }
            );
        }
        assert_eq!(quiz.answers(), &before);
        assert_eq!(quiz.rating(CategoryId::Mental, 0).map(|r| r.get()), Some(4));
    }

    #[test]
    fn record_answer_rejects_other_categories() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        let err = quiz.record_answer(CategoryId::Physical, 0, 3).unwrap_err();
        assert_eq!(
            err,
            QuizError::InactiveCategory {
                expected: CategoryId::Mental,
                got: CategoryId::Physical,
            }
        );
    }

    #[test]
    fn record_answer_rejects_out_of_bank_questions() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        let err = quiz.record_answer(CategoryId::Mental, 3, 3).unwrap_err();
        assert_eq!(
            err,
            QuizError::QuestionOutOfRange {
                category: CategoryId::Mental,
                index: 3,
                len: 3,
            }
        );
    }

    #[test]
    fn out_of_range_ratings_do_not_touch_answers() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        quiz.record_answer(CategoryId::Mental, 1, 4).unwrap();
        let before = quiz.answers().clone();

        for bad in [0, 6] {
            let err = quiz.record_answer(CategoryId::Mental, 1, bad).unwrap_err();
            assert!(matches!(err, QuizError::InvalidRating(_)));
            let err = quiz.record_answer(CategoryId::Mental, 0, bad).unwrap_err();
            assert!(matches!(err, QuizError::InvalidRating(_)));
        }
        assert_eq!(quiz.answers(), &before);
    }

    #[test]
    fn overwriting_a_slot_keeps_the_rest() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        answer_current(&mut quiz, 2);
        quiz.record_answer(CategoryId::Mental, 1, 5).unwrap();
        let ratings: Vec<_> = (0..3)
            .map(|q| quiz.rating(CategoryId::Mental, q).map(|r| r.get()))
            .collect();
        assert_eq!(ratings, [Some(2), Some(5), Some(2)]);
        assert!(quiz.can_advance());
    }

    #[test]
    fn can_advance_needs_every_statement() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        quiz.record_answer(CategoryId::Mental, 0, 1).unwrap();
        quiz.record_answer(CategoryId::Mental, 2, 1).unwrap();
        assert!(!quiz.can_advance());
        assert_eq!(
            quiz.advance(),
            Err(QuizError::NotReady {
                category: CategoryId::Mental
            })
        );
        assert_eq!(quiz.phase(), Phase::InProgress { index: 0 });

        quiz.record_answer(CategoryId::Mental, 1, 1).unwrap();
        assert!(quiz.can_advance());
        assert_eq!(quiz.advance(), Ok(Advance::Moved { index: 1 }));
    }

    #[test]
    fn advance_from_last_step_finishes() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        for step in 0..quiz.catalog().len() {
            assert_eq!(quiz.current_category_index(), step);
            answer_current(&mut quiz, 3);
            let outcome = quiz.advance().unwrap();
            if step == quiz.catalog().last_index() {
                assert_eq!(outcome, Advance::Finished);
            }
        }
        assert_eq!(quiz.phase(), Phase::Results);
        assert_eq!(quiz.current_category_index(), 0);
        assert!(quiz.current_category().is_none());
        assert!(matches!(
            quiz.advance(),
            Err(QuizError::InvalidPhaseTransition { .. })
        ));
    }

    #[test]
    fn retreat_at_first_step_is_a_no_op() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        quiz.record_answer(CategoryId::Mental, 0, 2).unwrap();
        let before = quiz.clone();
        assert_eq!(quiz.retreat(), Ok(false));
        assert_eq!(quiz, before);
    }

    #[test]
    fn retreat_keeps_answers() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        answer_current(&mut quiz, 4);
        quiz.advance().unwrap();
        assert_eq!(quiz.retreat(), Ok(true));
        assert_eq!(quiz.phase(), Phase::InProgress { index: 0 });
        assert!(quiz.can_advance());
        assert_eq!(quiz.answers().total(CategoryId::Mental), 12);
    }

    #[test]
    fn retreat_outside_progress_is_rejected() {
        let mut quiz = quick_quiz();
        assert!(matches!(
            quiz.retreat(),
            Err(QuizError::InvalidPhaseTransition { .. })
        ));
    }

    #[test]
    fn restart_from_every_phase_matches_a_fresh_quiz() {
        let fresh = quick_quiz();

        let mut quiz = quick_quiz();
        quiz.restart();
        assert_eq!(quiz, fresh);

        quiz.start().unwrap();
        quiz.record_answer(CategoryId::Mental, 0, 5).unwrap();
        quiz.restart();
        assert_eq!(quiz, fresh);

        quiz.start().unwrap();
        while quiz.phase() != Phase::Results {
            answer_current(&mut quiz, 5);
            quiz.advance().unwrap();
        }
        quiz.restart();
        assert_eq!(quiz, fresh);
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        let mut quiz = Quiz::default();
        assert_eq!(quiz.progress(), None);
        quiz.start().unwrap();
        assert_eq!(
            quiz.progress(),
            Some(Progress {
                step: 1,
                total: 7,
                percent: 14
            })
        );
        answer_current(&mut quiz, 1);
        quiz.advance().unwrap();
        answer_current(&mut quiz, 1);
        quiz.advance().unwrap();
        assert_eq!(quiz.progress().map(|p| p.percent), Some(43));
    }

    #[test]
    fn edition_only_changes_before_start() {
        let mut quiz = Quiz::default();
        quiz.set_catalog(Catalog::new(Edition::Quick)).unwrap();
        assert_eq!(quiz.catalog().edition(), Edition::Quick);
        quiz.start().unwrap();
        assert!(
            quiz.set_catalog(Catalog::new(Edition::Standard))
                .is_err()
        );
    }

    #[test]
    fn results_only_when_finished() {
        let mut quiz = quick_quiz();
        quiz.start().unwrap();
        assert!(quiz.results().is_none());
        while quiz.phase() != Phase::Results {
            answer_current(&mut quiz, 2);
            quiz.advance().unwrap();
        }
        let results = quiz.results().expect("finished");
        assert_eq!(results.len(), 2);
    }
}
