//! TUI rendering for RestReveal using ratatui.

mod effects;
mod input;
mod intro;
mod questionnaire;
mod results;
mod shared;
mod theme;

pub use effects::{apply_screen_effect, effect_style};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use restreveal_engine::{App, Edition, Phase};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Screen
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());
    let viewport = chunks[0];

    let phase = app.phase();
    let base = match phase {
        Phase::Intro => intro::card_rect(viewport),
        Phase::InProgress { .. } => questionnaire::card_rect(viewport),
        Phase::Results => results::card_rect(viewport),
    };
    let effect = app.screen_effect().cloned();
    let card = effect
        .as_ref()
        .map_or(base, |effect| apply_screen_effect(effect, base, viewport));
    let overlay = effect_style(effect.as_ref());

    match phase {
        Phase::Intro => intro::draw(frame, app, card, &palette, &glyphs, overlay),
        Phase::InProgress { .. } => {
            questionnaire::draw(frame, app, card, &palette, &glyphs, overlay);
        }
        Phase::Results => results::draw(frame, app, card, &palette, &glyphs, overlay),
    }

    draw_key_hints(frame, app, chunks[1], &palette, &glyphs);
}

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let ascii = !glyphs.emoji;
    let hints: &[(&str, &str)] = match app.phase() {
        Phase::Intro => &[("Enter", "begin"), ("e", "switch edition"), ("q", "quit")],
        Phase::InProgress { .. } if ascii => &[
            ("j/k", "statement"),
            ("h/l", "level"),
            ("1-5", "rate"),
            ("Tab", "next"),
            ("S-Tab", "back"),
            ("q", "quit"),
        ],
        Phase::InProgress { .. } => &[
            ("↑↓", "statement"),
            ("←→", "level"),
            ("1-5", "rate"),
            ("Tab", "next"),
            ("S-Tab", "back"),
            ("q", "quit"),
        ],
        Phase::Results if ascii => &[("j/k", "scroll"), ("r", "take quiz again"), ("q", "quit")],
        Phase::Results => &[("↑↓", "scroll"), ("r", "take quiz again"), ("q", "quit")],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3 + 2);
    if app.is_transitioning() {
        spans.push(Span::styled(
            spinner_frame(app.tick_count(), app.ui_options()),
            styles::key_highlight(palette),
        ));
        spans.push(Span::raw(" "));
    }
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", styles::key_hint(palette)));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}

pub(crate) fn edition_label(edition: Edition) -> &'static str {
    match edition {
        Edition::Standard => "Standard",
        Edition::Quick => "Quick",
    }
}
