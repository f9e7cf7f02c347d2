//! Application state for RestReveal.
//!
//! Wraps the quiz state machine with everything a terminal front end needs
//! that the machine itself does not own: keyboard focus, the one pending
//! cosmetic transition, the active screen effect, and results scrolling.
//! No terminal dependencies live here.

mod cursor;
mod transition;

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

pub use cursor::Cursor;
pub use restreveal_config::{ConfigError, RestRevealConfig, Settings};
pub use restreveal_core::{
    Advance, AnswerSet, CategoryScore, NeedRank, Phase, Progress, Quiz, QuizError, ScoreResult,
};
pub use restreveal_types::ui::{AnimPhase, ScreenEffect, ScreenEffectKind, UiOptions};
pub use restreveal_types::{
    Catalog, Category, CategoryId, Edition, REFLECTION_PROMPT, Rating,
};
pub use transition::{PendingTransition, TransitionKind};

const SHAKE_DURATION: Duration = Duration::from_millis(360);

pub struct App {
    quiz: Quiz,
    cursor: Cursor,
    pending: Option<PendingTransition>,
    screen_effect: Option<ScreenEffect>,
    ui_options: UiOptions,
    transition_delay: Duration,
    results_scroll: u16,
    tick: usize,
    last_frame: Instant,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl App {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        info!(
            edition = settings.edition.as_str(),
            transition_ms = settings.transition.as_millis() as u64,
            reduced_motion = settings.ui.reduced_motion,
            "app initialized"
        );
        Self {
            quiz: Quiz::new(Catalog::new(settings.edition)),
            cursor: Cursor::default(),
            pending: None,
            screen_effect: None,
            ui_options: settings.ui,
            transition_delay: settings.transition,
            results_scroll: 0,
            tick: 0,
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> Phase {
        self.quiz.phase()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    /// True while a navigation is waiting on its exit animation. Input that
    /// would change quiz state is dropped until it lands.
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn screen_effect(&self) -> Option<&ScreenEffect> {
        self.screen_effect.as_ref()
    }

    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    pub fn results_scroll(&self) -> u16 {
        self.results_scroll
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        info!(phase = %self.quiz.phase(), "quit requested");
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Intro
    // ------------------------------------------------------------------

    pub fn start(&mut self) {
        if self.is_transitioning() {
            return;
        }
        if self.quiz.phase() != Phase::Intro {
            debug!(phase = %self.quiz.phase(), "start ignored outside intro");
            return;
        }
        self.schedule(TransitionKind::Start);
    }

    /// Switch between the standard and quick question banks.
    pub fn toggle_edition(&mut self) {
        if self.is_transitioning() {
            return;
        }
        let edition = self.quiz.catalog().edition().toggle();
        match self.quiz.set_catalog(Catalog::new(edition)) {
            Ok(()) => info!(edition = edition.as_str(), "edition changed"),
            Err(err) => log_rejection(&err),
        }
    }

    // ------------------------------------------------------------------
    // Questionnaire
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        let Some(category) = self.quiz.current_category() else {
            return;
        };
        let last = category.question_count().saturating_sub(1);
        let question = (self.cursor.question() + 1).min(last);
        self.focus_question(question);
    }

    pub fn focus_previous(&mut self) {
        if self.quiz.current_category().is_none() {
            return;
        }
        let question = self.cursor.question().saturating_sub(1);
        self.focus_question(question);
    }

    pub fn highlight_higher(&mut self) {
        self.cursor.raise();
    }

    pub fn highlight_lower(&mut self) {
        self.cursor.lower();
    }

    /// Rate the focused statement and move focus to the next one.
    ///
    /// `value` is raw key input; anything off the scale is logged and
    /// dropped without touching the answers.
    pub fn rate_focused(&mut self, value: u8) {
        if self.is_transitioning() {
            return;
        }
        let Some(category) = self.quiz.current_category().copied() else {
            return;
        };
        let question = self.cursor.question();
        match self.quiz.record_answer(category.id(), question, value) {
            Ok(rating) => {
                debug!(
                    category = category.id().as_str(),
                    question,
                    rating = rating.get(),
                    "answer recorded"
                );
                self.cursor.set_highlight(rating);
                if question + 1 < category.question_count() {
                    self.focus_question(question + 1);
                }
            }
            Err(err) => log_rejection(&err),
        }
    }

    pub fn rate_highlighted(&mut self) {
        self.rate_focused(self.cursor.highlight().get());
    }

    /// Move to the next category, or to the results from the last one.
    ///
    /// If the category is not fully answered nothing moves; the screen
    /// shakes and focus jumps to the first unanswered statement.
    pub fn request_next(&mut self) {
        if self.is_transitioning() {
            return;
        }
        let Some(category) = self.quiz.current_category().copied() else {
            debug!(phase = %self.quiz.phase(), "next ignored outside questionnaire");
            return;
        };
        if !self.quiz.can_advance() {
            log_rejection(&QuizError::NotReady {
                category: category.id(),
            });
            if let Some(question) = self.first_unanswered(&category) {
                self.focus_question(question);
            }
            self.play(ScreenEffect::shake(SHAKE_DURATION));
            return;
        }
        self.schedule(TransitionKind::Next);
    }

    /// Step back one category. Does nothing on the first.
    pub fn request_previous(&mut self) {
        if self.is_transitioning() {
            return;
        }
        match self.quiz.phase() {
            Phase::InProgress { index: 0 } => {}
            Phase::InProgress { .. } => self.schedule(TransitionKind::Previous),
            phase => debug!(%phase, "previous ignored outside questionnaire"),
        }
    }

    // ------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------

    /// Clear every answer and go back to the intro.
    pub fn restart(&mut self) {
        if self.is_transitioning() {
            return;
        }
        self.schedule(TransitionKind::Restart);
    }

    pub fn results(&self) -> Option<ScoreResult> {
        self.quiz.results()
    }

    pub fn scroll_results_down(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_add(lines);
    }

    pub fn scroll_results_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }

    /// Keep the offset within the rendered content; called by the renderer
    /// once it knows how tall the content is.
    pub fn clamp_results_scroll(&mut self, max: u16) {
        self.results_scroll = self.results_scroll.min(max);
    }

    // ------------------------------------------------------------------
    // Frame timing
    // ------------------------------------------------------------------

    /// Increment the animation tick and run timers for the time since the
    /// previous frame.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let elapsed = self.frame_elapsed();
        self.advance(elapsed);
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Run effect and transition timers forward by `delta`. A transition
    /// whose delay is spent is applied before this returns.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(effect) = self.screen_effect.as_mut() {
            effect.advance(delta);
            if effect.is_finished() {
                self.screen_effect = None;
            }
        }

        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if pending.advance(delta) {
            let kind = pending.kind();
            self.pending = None;
            self.apply(kind);
        }
    }

    fn schedule(&mut self, kind: TransitionKind) {
        if self.ui_options.reduced_motion || self.transition_delay.is_zero() {
            self.apply(kind);
            return;
        }
        debug!(
            kind = kind.as_str(),
            delay_ms = self.transition_delay.as_millis() as u64,
            "transition scheduled"
        );
        self.pending = Some(PendingTransition::new(kind, self.transition_delay));
        self.screen_effect = Some(ScreenEffect::fade_out(self.transition_delay));
    }

    fn apply(&mut self, kind: TransitionKind) {
        let outcome = match kind {
            TransitionKind::Start => self.quiz.start(),
            TransitionKind::Next => self.quiz.advance().map(|advance| {
                if advance == Advance::Finished {
                    info!("questionnaire finished");
                }
            }),
            TransitionKind::Previous => self.quiz.retreat().map(|_| ()),
            TransitionKind::Restart => {
                self.quiz.restart();
                Ok(())
            }
        };
        match outcome {
            Ok(()) => self.enter_screen(),
            Err(err) => log_rejection(&err),
        }
    }

    fn enter_screen(&mut self) {
        self.results_scroll = 0;
        let question = self
            .quiz
            .current_category()
            .copied()
            .and_then(|category| self.first_unanswered(&category))
            .unwrap_or(0);
        self.focus_question(question);
        if !self.transition_delay.is_zero() {
            self.play(ScreenEffect::slide_in(self.transition_delay));
        }
    }

    fn focus_question(&mut self, question: usize) {
        let stored = self
            .quiz
            .current_category()
            .and_then(|category| self.quiz.rating(category.id(), question));
        self.cursor.focus(question, stored);
        if self.quiz.current_category().is_none() {
            self.cursor.reset();
        }
    }

    fn first_unanswered(&self, category: &Category) -> Option<usize> {
        (0..category.question_count())
            .find(|&question| self.quiz.rating(category.id(), question).is_none())
    }

    fn play(&mut self, effect: ScreenEffect) {
        if self.ui_options.reduced_motion {
            return;
        }
        self.screen_effect = Some(effect);
        self.last_frame = Instant::now();
    }
}

fn log_rejection(err: &QuizError) {
    if err.is_gating() {
        debug!(%err, "quiz input refused");
    } else {
        warn!(%err, "quiz input rejected");
    }
}

#[cfg(test)]
mod tests;
