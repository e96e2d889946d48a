//! Loading Spinner Widget
//!
//! Animated spinner for loading states.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use super::super::theme::{icons, theme};

/// Spinner glyph for an animation frame.
pub fn spinner_glyph(frame: usize) -> &'static str {
    icons::SPINNER[frame % icons::SPINNER.len()]
}

/// A centered loading spinner with a message.
pub struct LoadingSpinner<'a> {
    /// Message to display below spinner
    message: &'a str,
    /// Frame index for animation
    frame: usize,
}

impl<'a> LoadingSpinner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message, frame: 0 }
    }

    /// Set the animation frame.
    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    /// Render the loading spinner.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let v_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1), // Spinner
                Constraint::Length(1), // Space
                Constraint::Length(1), // Message
                Constraint::Percentage(40),
            ])
            .split(area);

        let spinner = Paragraph::new(spinner_glyph(self.frame))
            .style(Style::default().fg(t.teal).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(spinner, v_layout[1]);

        let message = Paragraph::new(self.message)
            .style(t.subtitle())
            .alignment(Alignment::Center);
        frame.render_widget(message, v_layout[3]);
    }
}
