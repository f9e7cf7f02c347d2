//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use restreveal_engine::{App, Category, Edition, Phase, Settings, UiOptions};

/// App whose navigation lands on the same call.
pub fn instant_app(edition: Edition) -> App {
    App::new(Settings {
        edition,
        ui: UiOptions::default(),
        transition: Duration::ZERO,
    })
}

/// App with the default cosmetic delay.
pub fn animated_app(edition: Edition) -> App {
    App::new(Settings {
        edition,
        ..Settings::default()
    })
}

/// Rate every statement of the active category with `value`.
pub fn answer_category(app: &mut App, value: u8) {
    let count = app
        .quiz()
        .current_category()
        .map_or(0, Category::question_count);
    for question in 0..count {
        while app.cursor().question() < question {
            app.focus_next();
        }
        app.rate_focused(value);
    }
}

/// Start, answer every category with the per-category value, and land on
/// the results screen.
pub fn run_to_results(app: &mut App, values: [u8; 7]) {
    app.start();
    for value in values {
        answer_category(app, value);
        app.request_next();
    }
    assert_eq!(app.phase(), Phase::Results);
}
