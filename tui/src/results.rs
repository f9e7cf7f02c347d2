//! Rest profile: the top two categories and what to do about them.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
};

use restreveal_engine::{App, REFLECTION_PROMPT, ScoreResult};

use crate::shared::{spread_line, wrapped_line_count_exact};
use crate::theme::{Glyphs, Palette, styles};

const CARD_WIDTH: u16 = 84;

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
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    overlay: Style,
) {
    let Some(result) = app.results() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette))
        .style(Style::default().bg(palette.bg_card))
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);

    let lines = profile_lines(&result, palette, glyphs, inner.width);

    let total = wrapped_line_count_exact(&lines, inner.width);
    let max_scroll = total.saturating_sub(usize::from(inner.height)) as u16;
    app.clamp_results_scroll(max_scroll);
    let scroll_offset = app.results_scroll();

    let profile = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset, 0))
        .style(overlay);
    frame.render_widget(profile, area);

    // Only render scrollbar when content exceeds viewport
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));

        let mut scrollbar_state =
            ScrollbarState::new(max_scroll as usize).position(scroll_offset as usize);

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn profile_lines(
    result: &ScoreResult,
    palette: &Palette,
    glyphs: &Glyphs,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}Your Rest Profile", glyphs.decorate("🎉")),
            styles::title(palette),
        ))
        .centered(),
        Line::from(Span::styled(glyphs.rule.repeat(8), styles::muted(palette))).centered(),
        Line::from(""),
    ];

    for (rank, score) in result.ranked() {
        let category = score.category;
        let accent = palette.category(category.id());
        let heading = format!(
            "{}{}{}: {}",
            glyphs.decorate(category.emoji()),
            glyphs.decorate(rank.medal()),
            rank.label(),
            category.label()
        );
        lines.push(spread_line(
            vec![Span::styled(
                heading,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )],
            vec![Span::styled(
                format!("{}{}/{}", glyphs.decorate("📊"), score.total, score.max()),
                styles::key_highlight(palette),
            )],
            width,
        ));
        lines.push(Line::from(Span::styled(
            glyphs.rule.repeat(usize::from(width)),
            Style::default().fg(accent),
        )));
        lines.push(Line::from(Span::styled(
            format!("{}Recommended Activities:", glyphs.decorate("💡")),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )));
        for recommendation in category.recommendations() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", glyphs.bullet), Style::default().fg(accent)),
                Span::styled(glyphs.strip_icon(*recommendation), styles::body(palette)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let prompt = if glyphs.emoji {
        REFLECTION_PROMPT
    } else {
        REFLECTION_PROMPT.trim_end_matches(" 🌱")
    };
    lines.push(Line::from(Span::styled(
        format!("{}Reflection Prompt", glyphs.decorate("📝")),
        Style::default()
            .fg(palette.reflection)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(prompt, styles::body(palette))));
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "  Take Quiz Again  ",
            styles::button_outline(palette).add_modifier(Modifier::REVERSED),
        ))
        .centered(),
    );
    lines.push(Line::from(""));

    lines
}
