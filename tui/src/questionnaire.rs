//! One category's statements with their rating radios.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use restreveal_engine::{App, Category, Rating};

use crate::shared::{gauge_line, spread_line, truncate_to_width, wrapped_line_count_exact};
use crate::theme::{Glyphs, Palette, styles};

const INSTRUCTION: &str = "Rate how true each statement feels for you right now.";
const CARD_WIDTH: u16 = 76;

pub(crate) fn card_rect(viewport: Rect) -> Rect {
    let width = CARD_WIDTH.min(viewport.width);
    Rect {
        x: viewport.x + (viewport.width - width) / 2,
        width,
        ..viewport
    }
}

pub(crate) fn draw(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    overlay: Style,
) {
    let quiz = app.quiz();
    let (Some(category), Some(progress)) = (quiz.current_category(), quiz.progress()) else {
        return;
    };
    let accent = palette.category(category.id());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step / percent
            Constraint::Length(1), // Gauge
            Constraint::Length(1),
            Constraint::Min(3), // Card
        ])
        .split(area);

    let header = spread_line(
        vec![Span::styled(
            format!("Step {} of {}", progress.step, progress.total),
            styles::muted(palette),
        )],
        vec![Span::styled(
            format!("{}% Complete", progress.percent),
            styles::muted(palette),
        )],
        chunks[0].width,
    );
    frame.render_widget(Paragraph::new(header).style(overlay), chunks[0]);

    let gauge = gauge_line(
        progress.ratio(),
        chunks[1].width,
        glyphs.gauge_fill,
        glyphs.gauge_empty,
        Style::default().fg(accent),
        Style::default().fg(palette.track),
    );
    frame.render_widget(Paragraph::new(gauge), chunks[1]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(palette.bg_card))
        .padding(Padding::horizontal(2));
    let inner = block.inner(chunks[3]);
    frame.render_widget(block, chunks[3]);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let (lines, focus_end) = statement_lines(app, category, palette, glyphs, body[0].width);
    let visible = usize::from(body[0].height);
    let scroll = focus_end.saturating_sub(visible);
    let statements = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .style(overlay);
    frame.render_widget(statements, body[0]);

    let buttons = button_row(app, palette, glyphs, accent, body[1].width);
    frame.render_widget(Paragraph::new(buttons).style(overlay), body[1]);
}

/// Lines for the card body, and the wrapped row just past the focused
/// statement's radios so the caller can keep it on screen.
fn statement_lines(
    app: &App,
    category: &Category,
    palette: &Palette,
    glyphs: &Glyphs,
    width: u16,
) -> (Vec<Line<'static>>, usize) {
    let accent = palette.category(category.id());
    let cursor = app.cursor();
    let quiz = app.quiz();

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(glyphs.decorate(category.emoji())),
            Span::styled(
                category.label(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(INSTRUCTION, styles::muted(palette))),
        Line::from(""),
    ];
    let mut focus_lines = 0;

    for (question, statement) in category.questions().iter().enumerate() {
        let focused = question == cursor.question();
        let stored = quiz.rating(category.id(), question);

        let marker = if focused { glyphs.focus } else { " " };
        let text_style = if focused {
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::body(palette)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(accent)),
            Span::styled(format!("{}. {statement}", question + 1), text_style),
        ]));

        let mut radios = vec![Span::raw("   ")];
        for rating in Rating::ALL {
            let color = palette.rating(rating);
            let selected = stored == Some(rating);
            let mut radio_style = Style::default().fg(color);
            let mut label_style = if selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                styles::muted(palette)
            };
            if focused && cursor.highlight() == rating {
                radio_style = radio_style.bg(palette.bg_highlight);
                label_style = label_style.bg(palette.bg_highlight);
            }
            let radio = if selected {
                glyphs.radio_on
            } else {
                glyphs.radio_off
            };
            radios.push(Span::styled(radio, radio_style));
            radios.push(Span::styled(format!(" {}", rating.label()), label_style));
            radios.push(Span::raw("  "));
        }
        lines.push(Line::from(radios));
        lines.push(Line::from(""));

        if focused {
            focus_lines = lines.len();
        }
    }

    let focus_end = wrapped_line_count_exact(&lines[..focus_lines], width);
    (lines, focus_end)
}

fn button_row(
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
    accent: Color,
    width: u16,
) -> Line<'static> {
    let quiz = app.quiz();

    let previous_style = if quiz.current_category_index() == 0 {
        styles::button_disabled(palette)
    } else {
        styles::button_outline(palette)
    };
    let previous = format!("{} Previous", glyphs.prev);

    let next_label = if quiz.is_last_step() {
        format!("{}View Results {}", glyphs.decorate("✨"), glyphs.next)
    } else {
        format!("Next Step {}", glyphs.next)
    };
    let next_style = if quiz.can_advance() {
        styles::button(palette, accent)
    } else {
        styles::button_disabled(palette)
    };

    let half = usize::from(width / 2).saturating_sub(1);
    spread_line(
        vec![Span::styled(truncate_to_width(&previous, half), previous_style)],
        vec![Span::styled(
            format!(" {} ", truncate_to_width(&next_label, half.saturating_sub(2))),
            next_style,
        )],
        width,
    )
}
