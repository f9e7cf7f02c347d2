//! Landing screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use restreveal_engine::App;

use crate::edition_label;
use crate::shared::centered_rect;
use crate::theme::{Glyphs, Palette, styles};

const HEADLINE: &str = "What Kind of Rest Do You Need Most?";
const TAGLINE: &str =
    "Take this 3-minute quiz to discover where your energy is leaking—and how to restore balance.";
const BEGIN: &str = "Begin Your Journey";

const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 17;

pub(crate) fn card_rect(viewport: Rect) -> Rect {
    centered_rect(viewport, CARD_WIDTH, CARD_HEIGHT)
}

pub(crate) fn draw(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    overlay: Style,
) {
    let edition = app.quiz().catalog().edition();
    let tagline = if glyphs.emoji {
        TAGLINE.to_string()
    } else {
        TAGLINE.replace('—', "--")
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{}RestReveal", glyphs.decorate("🌸")),
            styles::title(palette),
        )),
        Line::from(Span::styled(glyphs.rule.repeat(8), styles::muted(palette))),
        Line::from(""),
        Line::from(Span::styled(
            HEADLINE,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(tagline, styles::body(palette))),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {BEGIN}  "),
            styles::button(palette, palette.primary),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Edition: ", styles::muted(palette)),
            Span::styled(edition_label(edition), styles::key_highlight(palette)),
            Span::styled(
                format!(" - {} statements per category", edition.questions_per_category()),
                styles::muted(palette),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette))
        .style(Style::default().bg(palette.bg_card))
        .padding(Padding::new(2, 2, 1, 1));

    let intro = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(overlay);

    frame.render_widget(intro, area);
}
