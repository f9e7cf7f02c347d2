//! Screen transition effects.

use std::f32::consts::TAU;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use restreveal_engine::{ScreenEffect, ScreenEffectKind};

/// Apply a screen effect to transform the card rectangle.
#[must_use]
pub fn apply_screen_effect(effect: &ScreenEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        ScreenEffectKind::FadeOut => base,
        ScreenEffectKind::SlideIn => {
            let t = ease_out_cubic(effect.progress());
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let max_offset = viewport_bottom.saturating_sub(base_bottom);
            let offset = max_offset.max(2).min(base.height.saturating_div(3)).min(4);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            let height = base
                .height
                .min(viewport_bottom.saturating_sub(base.y.saturating_add(y_offset)));
            Rect {
                y: base.y.saturating_add(y_offset),
                height,
                ..base
            }
        }
        ScreenEffectKind::Shake => {
            let t = effect.progress().clamp(0.0, 1.0);
            let decay = 1.0 - t;
            let oscillations = 4.0;
            let amplitude = 3.0;
            let offset = (f32::sin(t * TAU * oscillations) * amplitude * decay).round() as i32;
            let viewport_left = i32::from(viewport.x);
            let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
            let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
            let x = (i32::from(base.x) + offset).clamp(viewport_left, max_x) as u16;
            Rect { x, ..base }
        }
    }
}

/// Extra styling for content while an effect runs: the outgoing screen dims
/// during the second half of a fade.
#[must_use]
pub fn effect_style(effect: Option<&ScreenEffect>) -> Style {
    match effect {
        Some(effect) if effect.kind() == ScreenEffectKind::FadeOut && effect.progress() >= 0.5 => {
            Style::default().add_modifier(Modifier::DIM)
        }
        _ => Style::default(),
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
