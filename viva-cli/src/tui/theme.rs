//! Viva Theme System
//!
//! A centralized theme providing the Teal/Coral wellness palette on a dark
//! slate background.

use ratatui::style::{Color, Modifier, Style};
use viva_core::TipIcon;

/// The main theme struct containing all colors and pre-computed styles.
#[derive(Debug, Clone)]
pub struct Theme {
    // Primary brand colors
    /// Fresh teal - primary accent color
    pub teal: Color,
    /// Soft coral - secondary accent
    pub coral: Color,
    /// Dark slate - main background
    pub slate: Color,
    /// Light slate - panel/card backgrounds
    pub slate_light: Color,

    // Semantic colors
    /// Primary text color (near-white)
    pub text_primary: Color,
    /// Muted/secondary text color
    pub text_muted: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            teal: Color::Rgb(20, 184, 166),
            coral: Color::Rgb(251, 113, 133),
            slate: Color::Rgb(15, 23, 42),
            slate_light: Color::Rgb(30, 41, 59),
            text_primary: Color::Rgb(248, 250, 252),
            text_muted: Color::Rgb(148, 163, 184),
            error: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(250, 204, 21),
            success: Color::Rgb(34, 197, 94),
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    // ─────────────────────────────────────────────────────────────
    // Pre-computed Styles
    // ─────────────────────────────────────────────────────────────

    /// Title style - bold teal text
    pub fn title(&self) -> Style {
        Style::default().fg(self.teal).add_modifier(Modifier::BOLD)
    }

    /// Subtitle/label style - muted text
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Highlighted/selected item style
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.slate)
            .bg(self.teal)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active(&self) -> Style {
        Style::default().fg(self.teal)
    }

    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.slate_light)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Background style for main area
    pub fn bg(&self) -> Style {
        Style::default().bg(self.slate)
    }

    /// Background style for panels/cards
    pub fn bg_panel(&self) -> Style {
        Style::default().bg(self.slate_light)
    }

    /// Value display style - bold primary text
    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Faded text shown while a tip is swapping out.
    pub fn fading(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM | Modifier::ITALIC)
    }

    // ─────────────────────────────────────────────────────────────
    // Tip Icon Colors
    // ─────────────────────────────────────────────────────────────

    pub fn icon_color(&self, icon: TipIcon) -> Color {
        match icon {
            TipIcon::Droplet => Color::Rgb(56, 189, 248),
            TipIcon::Activity => self.success,
            TipIcon::Coffee => Color::Rgb(217, 119, 6),
            TipIcon::Heart => self.coral,
            TipIcon::Sun => self.warning,
        }
    }
}

/// Global theme instance for convenience.
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Convenience function to get the default theme.
pub fn theme() -> &'static Theme {
    &THEME
}

// ─────────────────────────────────────────────────────────────────────
// Unicode Icons
// ─────────────────────────────────────────────────────────────────────

/// Icons used throughout the TUI
pub mod icons {
    pub const LEAF: &str = "🌿";
    pub const HOME: &str = "⌂";
    pub const BOOK: &str = "📚";
    pub const HELP: &str = "❓";
    pub const CLOSE: &str = "✕";
    pub const REFRESH: &str = "↻";
    pub const CHECK: &str = "✓";
    pub const CROSS: &str = "✗";
    pub const ARROW_RIGHT: &str = "➜";
    pub const SEPARATOR: &str = "│";
    pub const SEARCH: &str = "🔍";

    // Spinner frames for loading animation
    pub const SPINNER: &[&str] = &["◐", "◓", "◑", "◒"];
}
