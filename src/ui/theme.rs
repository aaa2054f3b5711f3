//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::color::Rgb;

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── swipe row ──────────────────────────────────────────────
    /// Behind the action strip, visible while the strip fades in (slate-900).
    pub const CONTAINER_BG: Rgb = Rgb::new(15, 23, 42);
    /// Foreground layer fill (slate-100).
    pub const FOREGROUND_BG: Rgb = Rgb::new(241, 245, 249);
    /// Foreground text (slate-800).
    pub const FOREGROUND_FG: Rgb = Rgb::new(30, 41, 59);

    pub fn rgb(c: Rgb) -> Color {
        Color::Rgb(c.r, c.g, c.b)
    }

    pub fn foreground_style(bg: Rgb, fg: Rgb) -> Style {
        Style::default().bg(Self::rgb(bg)).fg(Self::rgb(fg))
    }

    pub fn button_style(bg: Rgb, fg: Rgb) -> Style {
        Style::default()
            .bg(Self::rgb(bg))
            .fg(Self::rgb(fg))
            .add_modifier(Modifier::BOLD)
    }

    /// Extra emphasis on the keyboard-focused button.
    pub fn focus_modifier() -> Modifier {
        Modifier::UNDERLINED | Modifier::REVERSED
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
