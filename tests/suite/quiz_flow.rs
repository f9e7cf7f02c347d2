//! End-to-end navigation through the public engine API.

use std::time::Duration;

use restreveal_engine::{
    Catalog, CategoryId, CategoryScore, Edition, Phase, Quiz, ScreenEffectKind, TransitionKind,
};

use crate::common::{animated_app, answer_category, instant_app, run_to_results};

#[test]
fn standard_run_ranks_the_two_most_depleted_categories() {
    let mut app = instant_app(Edition::Standard);
    run_to_results(&mut app, [2, 3, 5, 1, 2, 4, 4]);

    let results = app.results().expect("finished");
    let ranked: Vec<_> = results.entries().iter().map(|s| (s.id(), s.total, s.max())).collect();
    assert_eq!(
        ranked,
        [(CategoryId::Emotional, 25, 25), (CategoryId::Sensory, 20, 25)]
    );
}

#[test]
fn quick_run_scores_out_of_fifteen() {
    let mut app = instant_app(Edition::Quick);
    run_to_results(&mut app, [5, 1, 1, 1, 1, 1, 1]);

    let results = app.results().expect("finished");
    let ranked: Vec<_> = results.entries().iter().map(|s| (s.id(), s.total)).collect();
    assert_eq!(ranked, [(CategoryId::Mental, 15), (CategoryId::Physical, 3)]);
    assert_eq!(results.primary().map(CategoryScore::max), Some(15));
}

#[test]
fn next_is_gated_until_every_statement_is_rated() {
    let mut app = instant_app(Edition::Standard);
    app.start();
    for _ in 0..4 {
        app.rate_focused(3);
    }
    app.request_next();
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
    assert!(!app.quiz().can_advance());

    app.rate_focused(3);
    assert!(app.quiz().can_advance());
    app.request_next();
    assert_eq!(app.phase(), Phase::InProgress { index: 1 });
}

#[test]
fn previous_keeps_answers_and_progress_tracks_steps() {
    let mut app = instant_app(Edition::Quick);
    app.start();
    answer_category(&mut app, 4);
    app.request_next();
    answer_category(&mut app, 2);
    app.request_next();
    assert_eq!(app.quiz().progress().map(|p| p.percent), Some(43));

    app.request_previous();
    app.request_previous();
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
    assert_eq!(app.quiz().answers().total(CategoryId::Mental), 12);
    assert_eq!(app.quiz().answers().total(CategoryId::Physical), 6);

    // Already on the first step.
    app.request_previous();
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
}

#[test]
fn restart_from_results_matches_a_fresh_quiz() {
    let mut app = instant_app(Edition::Quick);
    run_to_results(&mut app, [3; 7]);
    app.restart();
    assert_eq!(app.quiz(), &Quiz::new(Catalog::new(Edition::Quick)));
    assert!(app.results().is_none());
}

#[test]
fn deferred_navigation_applies_after_the_delay() {
    let mut app = animated_app(Edition::Quick);
    app.start();
    assert_eq!(app.phase(), Phase::Intro);
    assert_eq!(app.pending().map(|p| p.kind()), Some(TransitionKind::Start));

    app.advance(Duration::from_millis(299));
    assert_eq!(app.phase(), Phase::Intro);
    app.advance(Duration::from_millis(1));
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
    assert_eq!(
        app.screen_effect().map(|e| e.kind()),
        Some(ScreenEffectKind::SlideIn)
    );

    // A refused Next shakes instead of scheduling anything.
    app.request_next();
    assert!(!app.is_transitioning());
    assert_eq!(
        app.screen_effect().map(|e| e.kind()),
        Some(ScreenEffectKind::Shake)
    );
}

#[test]
fn only_one_transition_is_ever_pending() {
    let mut app = animated_app(Edition::Quick);
    app.start();
    app.advance(Duration::from_millis(300));
    answer_category(&mut app, 5);

    app.request_next();
    app.request_next();
    app.restart();
    assert_eq!(app.pending().map(|p| p.kind()), Some(TransitionKind::Next));

    app.advance(Duration::from_millis(300));
    assert_eq!(app.phase(), Phase::InProgress { index: 1 });
    assert!(!app.is_transitioning());
}
