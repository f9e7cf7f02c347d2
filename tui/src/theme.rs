//! Color theme and glyphs for the RestReveal TUI.
//!
//! A soft slate-and-stone palette by default with an optional high-contrast
//! override. Each rest category carries its own accent.

use ratatui::style::{Color, Modifier, Style};

use restreveal_engine::{CategoryId, Rating, UiOptions};

/// Slate/stone palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(24, 26, 31);
    pub const BG_CARD: Color = Color::Rgb(33, 36, 43);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(48, 52, 62);
    pub const BG_BORDER: Color = Color::Rgb(84, 90, 104);
    pub const TRACK: Color = Color::Rgb(62, 66, 78); // slate-200 analogue

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240); // slate-200
    pub const TEXT_SECONDARY: Color = Color::Rgb(176, 186, 201); // slate-400
    pub const TEXT_MUTED: Color = Color::Rgb(120, 130, 146); // slate-500
    pub const TEXT_DISABLED: Color = Color::Rgb(82, 88, 100);

    pub const PRIMARY: Color = Color::Rgb(196, 181, 253); // violet-300
    pub const REFLECTION: Color = Color::Rgb(165, 180, 252); // indigo-300

    // === Rating scale ===
    pub const LOW: Color = Color::Rgb(22, 163, 74); // green-600
    pub const MID: Color = Color::Rgb(202, 138, 4); // yellow-600
    pub const HIGH: Color = Color::Rgb(220, 38, 38); // red-600

    // === Category accents ===
    pub const BLUE: Color = Color::Rgb(59, 130, 246); // #3b82f6
    pub const GREEN: Color = Color::Rgb(16, 185, 129); // #10b981
    pub const PINK: Color = Color::Rgb(236, 72, 153); // #ec4899
    pub const PURPLE: Color = Color::Rgb(139, 92, 246); // #8b5cf6
    pub const AMBER: Color = Color::Rgb(245, 158, 11); // #f59e0b
    pub const EMERALD: Color = Color::Rgb(5, 150, 105); // #059669
    pub const ORANGE: Color = Color::Rgb(249, 115, 22); // #f97316
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_card: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub track: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub reflection: Color,
    pub low: Color,
    pub mid: Color,
    pub high: Color,
    categories: [Color; 7],
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_card: colors::BG_CARD,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            track: colors::TRACK,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            reflection: colors::REFLECTION,
            low: colors::LOW,
            mid: colors::MID,
            high: colors::HIGH,
            categories: [
                colors::BLUE,
                colors::GREEN,
                colors::PINK,
                colors::PURPLE,
                colors::AMBER,
                colors::EMERALD,
                colors::ORANGE,
            ],
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_card: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            track: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            reflection: Color::Cyan,
            low: Color::Green,
            mid: Color::Yellow,
            high: Color::Red,
            categories: [
                Color::Blue,
                Color::Green,
                Color::Magenta,
                Color::LightMagenta,
                Color::Yellow,
                Color::LightGreen,
                Color::LightRed,
            ],
        }
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Color {
        self.categories[id.index()]
    }

    /// Radio color for a level: 1-2 calm, 3 caution, 4-5 depleted.
    #[must_use]
    pub fn rating(&self, rating: Rating) -> Color {
        match rating.get() {
            1 | 2 => self.low,
            3 => self.mid,
            _ => self.high,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for radios, buttons and decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub radio_on: &'static str,
    pub radio_off: &'static str,
    pub focus: &'static str,
    pub bullet: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub gauge_fill: &'static str,
    pub gauge_empty: &'static str,
    pub rule: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
    pub spinner_frames: &'static [&'static str],
    /// Emoji decorations are dropped entirely in ASCII mode.
    pub emoji: bool,
}

const SPINNER_FRAMES: &[&str] = &["◜", "◝", "◞", "◟"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            radio_on: "(*)",
            radio_off: "( )",
            focus: ">",
            bullet: "-",
            prev: "<",
            next: ">",
            gauge_fill: "#",
            gauge_empty: ".",
            rule: "-",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
            spinner_frames: SPINNER_FRAMES_ASCII,
            emoji: false,
        }
    } else {
        Glyphs {
            radio_on: "◉",
            radio_off: "○",
            focus: "▸",
            bullet: "•",
            prev: "‹",
            next: "›",
            gauge_fill: "█",
            gauge_empty: "░",
            rule: "─",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
            spinner_frames: SPINNER_FRAMES,
            emoji: true,
        }
    }
}

impl Glyphs {
    /// `emoji` followed by a space, or nothing in ASCII mode.
    #[must_use]
    pub fn decorate(&self, emoji: &'static str) -> String {
        if self.emoji {
            format!("{emoji} ")
        } else {
            String::new()
        }
    }

    /// `text` as shown, minus a leading emoji token when emoji are off.
    pub fn strip_icon<'a>(&self, text: &'a str) -> &'a str {
        if self.emoji {
            return text;
        }
        match text.split_once(' ') {
            Some((icon, rest)) if !icon.is_ascii() => rest,
            _ => text,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[(tick / 6) % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    /// Filled pill button in `accent`.
    #[must_use]
    pub fn button(palette: &Palette, accent: Color) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_outline(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_disabled(palette: &Palette) -> Style {
        Style::default().fg(palette.text_disabled)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }
}
