//! Rendering helpers shared by the three screens.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub(crate) fn wrapped_line_count_exact(lines: &[Line], width: u16) -> usize {
    if lines.is_empty() {
        return 0;
    }

    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width.max(1))
}

/// Cut `raw` to at most `max` display columns, ending in `...` when cut.
/// Never splits a grapheme cluster.
pub(crate) fn truncate_to_width(raw: &str, max: usize) -> String {
    if raw.width() <= max {
        return raw.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for grapheme in raw.graphemes(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(grapheme);
    }
    out.push_str(&".".repeat(max.min(3)));
    out
}

/// One row with `left` flush left and `right` flush right.
pub(crate) fn spread_line<'a>(
    left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: u16,
) -> Line<'a> {
    let used: usize = left.iter().chain(&right).map(Span::width).sum();
    let gap = usize::from(width).saturating_sub(used).max(1);
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

/// Text progress bar: `ratio` of `width` cells filled.
pub(crate) fn gauge_line(
    ratio: f64,
    width: u16,
    fill: &'static str,
    empty: &'static str,
    fill_style: Style,
    empty_style: Style,
) -> Line<'static> {
    let width = usize::from(width);
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    Line::from(vec![
        Span::styled(fill.repeat(filled), fill_style),
        Span::styled(empty.repeat(width - filled), empty_style),
    ])
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
