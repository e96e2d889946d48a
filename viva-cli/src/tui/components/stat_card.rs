//! Stat Card Widget
//!
//! A reusable card component for displaying statistics with title/value pairs.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::super::theme::theme;

/// A stat card displaying a title and value with optional styling.
pub struct StatCard<'a> {
    /// Card title/label
    title: &'a str,
    /// Card value to display
    value: &'a str,
    /// Color for the value text
    value_color: Color,
    /// Optional subtitle or additional info
    subtitle: Option<&'a str>,
}

impl<'a> StatCard<'a> {
    /// Create a new stat card with title and value.
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            value_color: theme().text_primary,
            subtitle: None,
        }
    }

    /// Set the value color.
    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    /// Set an optional subtitle.
    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Render the stat card to the frame.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_inactive())
            .style(t.bg());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Value
                Constraint::Length(1), // Subtitle
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.title)
                .style(t.subtitle())
                .alignment(Alignment::Left),
            content[0],
        );

        frame.render_widget(
            Paragraph::new(self.value)
                .style(Style::default().fg(self.value_color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Left),
            content[1],
        );

        if let Some(subtitle) = self.subtitle {
            frame.render_widget(
                Paragraph::new(subtitle)
                    .style(Style::default().fg(t.text_muted))
                    .alignment(Alignment::Left),
                content[2],
            );
        }
    }
}
