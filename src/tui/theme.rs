// Theme system for the TUI
//
// Provides customizable color themes that can be switched at runtime
// (Ctrl+T) or selected via config/env. Each theme defines colors for all
// UI elements.

use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
    Solarized,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Solarized,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Solarized => "Solarized",
        }
    }

    /// Look up a theme by its config-file name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Solarized => Theme::solarized(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    /// Secondary text: placeholders, sublines, key hints
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    // Header
    pub brand: Color,
    pub input_text: Color,

    // Status panel variants
    pub status_ok: Color,
    pub status_warn: Color,

    // Bottom bar
    pub status_bar: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(18, 18, 24),
            fg: Color::Rgb(220, 220, 220),
            muted: Color::DarkGray,
            border: Color::Rgb(80, 80, 100),
            border_focused: Color::Rgb(130, 110, 255),
            brand: Color::Rgb(130, 110, 255),
            input_text: Color::Rgb(240, 240, 200),
            status_ok: Color::Rgb(120, 220, 140),
            status_warn: Color::Rgb(240, 200, 90),
            status_bar: Color::Rgb(140, 140, 160),
            log_error: Color::Rgb(240, 100, 100),
            log_warn: Color::Rgb(240, 200, 90),
            log_info: Color::Rgb(140, 200, 240),
            log_debug: Color::DarkGray,
            log_trace: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 248, 245),
            fg: Color::Rgb(40, 40, 40),
            muted: Color::Rgb(130, 130, 130),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(80, 60, 200),
            brand: Color::Rgb(80, 60, 200),
            input_text: Color::Rgb(20, 20, 80),
            status_ok: Color::Rgb(30, 140, 60),
            status_warn: Color::Rgb(180, 120, 0),
            status_bar: Color::Rgb(110, 110, 110),
            log_error: Color::Rgb(190, 30, 30),
            log_warn: Color::Rgb(180, 120, 0),
            log_info: Color::Rgb(30, 90, 170),
            log_debug: Color::Rgb(130, 130, 130),
            log_trace: Color::Rgb(160, 160, 160),
        }
    }

    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(106, 118, 137),
            border: Color::Rgb(67, 76, 94),
            border_focused: Color::Rgb(136, 192, 208),
            brand: Color::Rgb(136, 192, 208),
            input_text: Color::Rgb(235, 203, 139),
            status_ok: Color::Rgb(163, 190, 140),
            status_warn: Color::Rgb(235, 203, 139),
            status_bar: Color::Rgb(129, 161, 193),
            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(136, 192, 208),
            log_debug: Color::Rgb(106, 118, 137),
            log_trace: Color::Rgb(76, 86, 106),
        }
    }

    pub fn solarized() -> Self {
        Self {
            bg: Color::Rgb(0, 43, 54),
            fg: Color::Rgb(131, 148, 150),
            muted: Color::Rgb(88, 110, 117),
            border: Color::Rgb(7, 54, 66),
            border_focused: Color::Rgb(38, 139, 210),
            brand: Color::Rgb(38, 139, 210),
            input_text: Color::Rgb(181, 137, 0),
            status_ok: Color::Rgb(133, 153, 0),
            status_warn: Color::Rgb(203, 75, 22),
            status_bar: Color::Rgb(88, 110, 117),
            log_error: Color::Rgb(220, 50, 47),
            log_warn: Color::Rgb(203, 75, 22),
            log_info: Color::Rgb(38, 139, 210),
            log_debug: Color::Rgb(88, 110, 117),
            log_trace: Color::Rgb(7, 54, 66),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_roundtrips_all_themes() {
        for kind in ThemeKind::all() {
            assert_eq!(ThemeKind::from_name(kind.name()), Some(*kind));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ThemeKind::from_name("dark"), Some(ThemeKind::Dark));
        assert_eq!(ThemeKind::from_name("SOLARIZED"), Some(ThemeKind::Solarized));
        assert_eq!(ThemeKind::from_name("no-such-theme"), None);
    }

    #[test]
    fn next_cycles_through_every_theme() {
        let mut kind = ThemeKind::default();
        let mut seen = Vec::new();
        for _ in 0..ThemeKind::all().len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default()); // full cycle
        assert_eq!(seen.len(), ThemeKind::all().len());
    }
}
