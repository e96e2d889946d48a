//! Tip Card Widget
//!
//! Renders a [`TipView`] snapshot inside the sidebar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use viva_core::TipView;

use super::super::theme::{icons, theme};
use super::spinner::spinner_glyph;

/// The tip-of-the-day card.
///
/// The card only reads the view. Closing the sidebar it lives in is the
/// parent layout's business.
pub struct TipCard<'a> {
    view: &'a TipView,
    frame: usize,
}

impl<'a> TipCard<'a> {
    pub fn new(view: &'a TipView) -> Self {
        Self { view, frame: 0 }
    }

    /// Set the spinner animation frame.
    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    fn category_label(&self) -> String {
        self.view
            .tip
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("general")
            .to_uppercase()
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let view = self.view;

        let block = Block::default()
            .title(format!(" {} Tip of the Day ", icons::LEAF))
            .title_style(t.title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_active())
            .style(t.bg_panel());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let error_height = u16::from(view.error.is_some());
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),            // Icon + category
                Constraint::Min(1),               // Content
                Constraint::Length(error_height), // Inline error
                Constraint::Length(1),            // Refresh hint
            ])
            .split(inner);

        let mut heading = vec![
            Span::styled(
                format!(" {} ", view.icon.glyph()),
                Style::default().fg(t.icon_color(view.icon)),
            ),
            Span::styled(
                self.category_label(),
                Style::default()
                    .fg(t.icon_color(view.icon))
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if view.loading {
            heading.push(Span::raw("  "));
            heading.push(Span::styled(
                spinner_glyph(self.frame),
                Style::default().fg(t.teal),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(heading)), rows[0]);

        let content_style = if view.transitioning {
            t.fading()
        } else {
            t.text()
        };
        frame.render_widget(
            Paragraph::new(format!(" {}", view.tip.content))
                .style(content_style)
                .wrap(Wrap { trim: false }),
            rows[1],
        );

        if let Some(error) = &view.error {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(format!(" {} ", icons::CROSS), t.error_style()),
                    Span::styled(error.as_str(), Style::default().fg(t.error)),
                ]))
                .wrap(Wrap { trim: true }),
                rows[2],
            );
        }

        let mut hint = vec![Span::styled(
            format!(" [r] {} refresh", icons::REFRESH),
            Style::default().fg(t.text_muted),
        )];
        if let Some(index) = view.index {
            hint.push(Span::styled(
                format!("  {}/{}", index + 1, view.total),
                t.accent_style(),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(hint)), rows[3]);
    }
}
