//! Unit tests for the engine crate.

use std::time::Duration;

use super::*;

const DELAY: Duration = Duration::from_millis(300);

fn settings(edition: Edition, transition: Duration, reduced_motion: bool) -> Settings {
    Settings {
        edition,
        ui: UiOptions {
            reduced_motion,
            ..UiOptions::default()
        },
        transition,
    }
}

/// Quick edition, transitions applied on the spot.
fn test_app() -> App {
    App::new(settings(Edition::Quick, Duration::ZERO, false))
}

fn animated_app() -> App {
    App::new(settings(Edition::Quick, DELAY, false))
}

fn answer_all(app: &mut App, value: u8) {
    let count = app
        .quiz()
        .current_category()
        .map_or(0, Category::question_count);
    for _ in 0..count {
        app.rate_focused(value);
    }
}

#[test]
fn starts_on_intro_with_neutral_cursor() {
    let app = test_app();
    assert_eq!(app.phase(), Phase::Intro);
    assert_eq!(app.cursor(), Cursor::default());
    assert!(!app.is_transitioning());
    assert!(app.screen_effect().is_none());
    assert!(!app.should_quit());
}

#[test]
fn toggle_edition_only_on_intro() {
    let mut app = test_app();
    app.toggle_edition();
    assert_eq!(app.quiz().catalog().edition(), Edition::Standard);
    app.toggle_edition();
    assert_eq!(app.quiz().catalog().edition(), Edition::Quick);

    app.start();
    app.toggle_edition();
    assert_eq!(app.quiz().catalog().edition(), Edition::Quick);
}

#[test]
fn rating_moves_focus_down_and_stops_at_last() {
    let mut app = test_app();
    app.start();
    app.rate_focused(4);
    assert_eq!(app.cursor().question(), 1);
    app.rate_focused(2);
    app.rate_focused(5);
    assert_eq!(app.cursor().question(), 2);
    assert_eq!(app.cursor().highlight().get(), 5);
    assert_eq!(app.quiz().answers().total(CategoryId::Mental), 11);
}

#[test]
fn off_scale_key_input_changes_nothing() {
    let mut app = test_app();
    app.start();
    app.rate_focused(0);
    app.rate_focused(9);
    assert!(app.quiz().answers().is_empty());
    assert_eq!(app.cursor().question(), 0);
}

#[test]
fn highlighted_rating_is_recorded() {
    let mut app = test_app();
    app.start();
    app.highlight_higher();
    app.highlight_higher();
    app.rate_highlighted();
    assert_eq!(
        app.quiz().rating(CategoryId::Mental, 0).map(Rating::get),
        Some(5)
    );
}

#[test]
fn focus_follows_stored_ratings() {
    let mut app = test_app();
    app.start();
    app.rate_focused(1);
    app.focus_previous();
    assert_eq!(app.cursor().question(), 0);
    assert_eq!(app.cursor().highlight().get(), 1);

    app.focus_next();
    app.focus_next();
    app.focus_next();
    assert_eq!(app.cursor().question(), 2);
}

#[test]
fn incomplete_next_shakes_and_jumps_to_gap() {
    let mut app = animated_app();
    app.start();
    app.advance(DELAY);
    app.advance(DELAY);

    app.rate_focused(3);
    app.focus_next();
    app.rate_focused(3);
    app.focus_question(0);

    app.request_next();
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
    assert!(!app.is_transitioning());
    assert_eq!(
        app.screen_effect().map(ScreenEffect::kind),
        Some(ScreenEffectKind::Shake)
    );
    assert_eq!(app.cursor().question(), 1);
}

#[test]
fn next_waits_for_the_transition_delay() {
    let mut app = animated_app();
    app.start();
    assert_eq!(app.phase(), Phase::Intro);
    assert_eq!(app.pending().map(PendingTransition::kind), Some(TransitionKind::Start));
    assert_eq!(
        app.screen_effect().map(ScreenEffect::kind),
        Some(ScreenEffectKind::FadeOut)
    );

    app.advance(Duration::from_millis(100));
    assert_eq!(app.phase(), Phase::Intro);
    app.advance(Duration::from_millis(200));
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
    assert!(!app.is_transitioning());
    assert_eq!(
        app.screen_effect().map(ScreenEffect::kind),
        Some(ScreenEffectKind::SlideIn)
    );
}

#[test]
fn input_during_a_transition_is_dropped() {
    let mut app = animated_app();
    app.start();
    app.advance(DELAY);
    answer_all(&mut app, 2);

    app.request_next();
    assert!(app.is_transitioning());
    let before = app.quiz().clone();
    app.request_next();
    app.request_previous();
    app.restart();
    app.rate_focused(5);
    assert_eq!(app.quiz(), &before);
    assert_eq!(app.pending().map(PendingTransition::kind), Some(TransitionKind::Next));

    app.advance(DELAY);
    assert_eq!(app.phase(), Phase::InProgress { index: 1 });
}

#[test]
fn reduced_motion_applies_immediately_without_effects() {
    let mut app = App::new(settings(Edition::Quick, DELAY, true));
    app.start();
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
    app.request_next();
    assert!(app.screen_effect().is_none());
    answer_all(&mut app, 1);
    app.request_next();
    assert_eq!(app.phase(), Phase::InProgress { index: 1 });
    assert!(app.screen_effect().is_none());
}

#[test]
fn previous_is_a_no_op_on_first_step() {
    let mut app = test_app();
    app.start();
    app.rate_focused(4);
    let before = app.quiz().clone();
    app.request_previous();
    assert_eq!(app.quiz(), &before);
    assert!(!app.is_transitioning());
}

#[test]
fn previous_returns_to_a_completed_category() {
    let mut app = test_app();
    app.start();
    answer_all(&mut app, 4);
    app.request_next();
    app.request_previous();
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
    assert!(app.quiz().can_advance());
    assert_eq!(app.cursor().question(), 0);
    assert_eq!(app.cursor().highlight().get(), 4);
}

#[test]
fn full_run_reaches_results_and_restarts() {
    let mut app = test_app();
    app.start();
    while app.phase() != Phase::Results {
        let value = if app.quiz().current_category_index() == 3 { 5 } else { 2 };
        answer_all(&mut app, value);
        app.request_next();
    }

    let results = app.results().expect("results");
    assert_eq!(results.primary().map(CategoryScore::id), Some(CategoryId::Social));
    assert_eq!(results.secondary().map(CategoryScore::id), Some(CategoryId::Mental));

    app.scroll_results_down(7);
    app.clamp_results_scroll(4);
    assert_eq!(app.results_scroll(), 4);
    app.scroll_results_up(10);
    assert_eq!(app.results_scroll(), 0);

    app.restart();
    assert_eq!(app.quiz(), &Quiz::new(Catalog::new(Edition::Quick)));
    assert_eq!(app.cursor(), Cursor::default());
}

#[test]
fn next_outside_questionnaire_is_ignored() {
    let mut app = test_app();
    app.request_next();
    app.request_previous();
    assert_eq!(app.phase(), Phase::Intro);
    assert!(app.screen_effect().is_none());
}

#[test]
fn finished_effects_are_cleared() {
    let mut app = animated_app();
    app.start();
    app.advance(DELAY);
    app.request_next();
    assert!(app.screen_effect().is_some());
    app.advance(Duration::from_secs(1));
    assert!(app.screen_effect().is_none());
}

#[test]
fn quit_sets_flag() {
    let mut app = test_app();
    app.request_quit();
    assert!(app.should_quit());
}
