//! UI rendering for the TUI.
//!
//! Header, sidebar with the tip card, the active page and a status bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, List, ListItem, Padding, Paragraph, Row, Table, Wrap},
};
use viva_core::TipIcon;

use crate::tui::app::{App, MENU, MessageType, Screen};
use crate::tui::components::{LoadingSpinner, StatCard, TipCard};
use crate::tui::components::spinner::spinner_glyph;
use crate::tui::theme::{icons, theme};

// ═══════════════════════════════════════════════════════════════════════════
// MAIN UI ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════

/// Main UI rendering function - entry point for all screen rendering.
pub fn ui(frame: &mut Frame, app: &App) {
    let t = theme();

    // Clear the entire frame first to prevent visual artifacts from popups
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    // Root Layout: Header | Main Content | Status Bar
    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main Content
            Constraint::Length(1), // Status Bar
        ])
        .split(frame.area());

    render_header(frame, root_layout[0], app);
    render_content(frame, root_layout[1], app);
    render_status_bar(frame, root_layout[2], app);

    // Overlays last so they appear on top
    if app.screen == Screen::Help {
        render_help(frame, frame.area());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER
// ═══════════════════════════════════════════════════════════════════════════

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(t.slate_light))
        .style(t.bg());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    // Left: Brand
    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(icons::LEAF, Style::default().fg(t.teal)),
        Span::raw(" "),
        Span::styled("VIVA", t.title()),
        Span::styled(" HEALTH", Style::default().fg(t.coral).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), layout[0]);

    // Right: tip source status
    let status = if app.tips.loading {
        Line::from(vec![
            Span::styled(spinner_glyph(app.tick), Style::default().fg(t.teal)),
            Span::styled(
                format!(" Fetching tips from {}...", app.source_label),
                Style::default().fg(t.text_muted).add_modifier(Modifier::ITALIC),
            ),
        ])
    } else if app.tips.error.is_some() {
        Line::from(vec![
            Span::styled(icons::CROSS, Style::default().fg(t.error)),
            Span::styled(format!(" {} unreachable", app.source_label), Style::default().fg(t.error)),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("{} tips", app.tips.total), Style::default().fg(t.text_primary)),
            Span::raw("  "),
            Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
            Span::raw("  "),
            Span::styled(icons::CHECK, Style::default().fg(t.success)),
            Span::styled(format!(" {}", app.source_label), Style::default().fg(t.success)),
        ])
    };

    frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), layout[1]);
}

// ═══════════════════════════════════════════════════════════════════════════
// MAIN CONTENT
// ═══════════════════════════════════════════════════════════════════════════

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let main = if app.sidebar_open {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(34), // Sidebar width
                Constraint::Min(0),     // Main content
            ])
            .split(area);
        render_sidebar(frame, chunks[0], app);
        chunks[1]
    } else {
        area
    };

    match app.screen {
        Screen::Library => render_library(frame, main, app),
        Screen::Dashboard | Screen::Help => render_dashboard(frame, main, app),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SIDEBAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(t.slate_light))
        .style(t.bg())
        .padding(Padding::new(0, 1, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MENU.len() as u16 + 1), // Menu
            Constraint::Min(8),                        // Tip card
        ])
        .split(inner);

    let menu_items: Vec<ListItem> = MENU
        .iter()
        .enumerate()
        .map(|(i, (icon, text))| {
            let is_active = match app.screen {
                Screen::Dashboard => i == app.menu_index,
                Screen::Library => i == 1,
                Screen::Help => i == 2,
            };

            let style = if is_active {
                t.highlight()
            } else {
                Style::default().fg(t.text_muted)
            };

            let indicator = if is_active { icons::ARROW_RIGHT } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", indicator), style),
                Span::styled(format!("{} ", icon), style),
                Span::styled(*text, style),
            ]))
            .style(style)
        })
        .collect();

    frame.render_widget(List::new(menu_items), layout[0]);

    TipCard::new(&app.tips).frame(app.tick).render(frame, layout[1]);
}

// ═══════════════════════════════════════════════════════════════════════════
// DASHBOARD
// ═══════════════════════════════════════════════════════════════════════════

fn render_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(t.bg()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stats row
            Constraint::Min(0),    // Category breakdown
        ])
        .split(area);

    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(1)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout[0]);

    let total = app.tips.total.to_string();
    StatCard::new("Tips Loaded", &total)
        .value_color(t.text_primary)
        .subtitle(&app.source_label)
        .render(frame, stats_layout[0]);

    let every = format!("every {}s", app.rotation_interval.as_secs());
    StatCard::new("Rotation", &every)
        .value_color(t.teal)
        .subtitle(if app.tips.total > 1 { "active" } else { "paused" })
        .render(frame, stats_layout[1]);

    let (status, color) = if app.tips.loading {
        ("Loading...", t.text_muted)
    } else if app.tips.error.is_some() {
        ("Offline", t.error)
    } else if app.tips.is_fallback() {
        ("Default tip", t.warning)
    } else {
        ("Live", t.success)
    };
    let updated = app.tips.updated_at.format("updated %H:%M:%S").to_string();
    StatCard::new("Status", status)
        .value_color(color)
        .subtitle(&updated)
        .render(frame, stats_layout[2]);

    render_category_breakdown(frame, layout[1], app);
}

fn render_category_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    if app.tips.total == 0 {
        if app.tips.loading {
            LoadingSpinner::new("Fetching tips...").frame(app.tick).render(frame, area);
            return;
        }

        let center = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(4),
                Constraint::Percentage(30),
            ])
            .split(area);

        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No tips loaded yet", Style::default().fg(t.text_muted))),
            Line::from(Span::styled("Press [r] to try again", Style::default().fg(t.coral))),
        ])
        .alignment(Alignment::Center);

        frame.render_widget(msg, center[1]);
        return;
    }

    let rows: Vec<Row> = app
        .category_counts()
        .into_iter()
        .map(|(category, count)| {
            let icon = category.map(|c| c.icon()).unwrap_or(TipIcon::Sun);
            let label = category.map(|c| c.to_string()).unwrap_or_else(|| "other".to_string());
            Row::new(vec![
                Cell::from(format!(" {} ", icon.glyph())),
                Cell::from(label).style(Style::default().fg(t.icon_color(icon)).add_modifier(Modifier::BOLD)),
                Cell::from(count.to_string()).style(t.value()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(55),
            Constraint::Percentage(35),
        ],
    )
    .header(
        Row::new(vec!["", "CATEGORY", "TIPS"])
            .style(Style::default().fg(t.text_muted).add_modifier(Modifier::UNDERLINED)),
    )
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(t.slate_light))
            .title(" Categories ")
            .title_style(Style::default().fg(t.text_muted))
            .padding(Padding::new(1, 1, 0, 0)),
    );

    frame.render_widget(table, area);
}

// ═══════════════════════════════════════════════════════════════════════════
// TIPS LIBRARY
// ═══════════════════════════════════════════════════════════════════════════

fn render_library(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(t.bg()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Table
        ])
        .split(area);

    let category = app
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "all".to_string());
    let search_block = Block::default()
        .title(format!(" {} Search ", icons::SEARCH))
        .title_bottom(Line::from(format!(" [c] category: {} ", category)).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if app.editing_search {
            t.border_active()
        } else {
            t.border_inactive()
        });
    let search_inner = search_block.inner(layout[0]);

    let width = search_inner.width.max(1) as usize;
    let scroll = app.search.visual_scroll(width);
    let search_text = if app.search.value().is_empty() && !app.editing_search {
        Paragraph::new("press / to search").style(Style::default().fg(t.text_muted))
    } else {
        Paragraph::new(app.search.value())
            .style(t.text())
            .scroll((0, scroll as u16))
    };
    frame.render_widget(search_text.block(search_block), layout[0]);

    if app.editing_search {
        frame.set_cursor_position((
            search_inner.x + (app.search.visual_cursor().max(scroll) - scroll) as u16,
            search_inner.y,
        ));
    }

    if app.tips.loading && app.tips.total == 0 {
        LoadingSpinner::new("Fetching tips...").frame(app.tick).render(frame, layout[1]);
        return;
    }

    let tips = app.filtered_tips();
    if tips.is_empty() {
        let text = if app.tips.total == 0 {
            "No tips loaded. Press [r] to retry."
        } else {
            "No tips match the current filter"
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(t.text_muted))
                .alignment(Alignment::Center)
                .block(Block::default().padding(Padding::top(2))),
            layout[1],
        );
        return;
    }

    let rows: Vec<Row> = tips
        .iter()
        .enumerate()
        .map(|(i, tip)| {
            let icon = tip.icon();
            let on_display = **tip == app.tips.tip;
            let marker = if on_display { icons::CHECK } else { " " };
            let row_style = if i == app.library_index {
                Style::default().bg(t.slate_light).fg(t.text_primary)
            } else {
                Style::default().fg(t.text_primary)
            };

            Row::new(vec![
                Cell::from(format!(" {} {}", marker, icon.glyph())),
                Cell::from(tip.category.clone().unwrap_or_default())
                    .style(Style::default().fg(t.icon_color(icon))),
                Cell::from(tip.content.clone()),
            ])
            .style(row_style)
        })
        .collect();

    let title = format!(" Tips {}/{} ", tips.len(), app.tips.total);
    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["", "CATEGORY", "TIP"])
            .style(Style::default().fg(t.text_muted).add_modifier(Modifier::UNDERLINED)),
    )
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(t.slate_light))
            .title(title)
            .title_style(Style::default().fg(t.text_muted))
            .padding(Padding::new(1, 1, 0, 0)),
    );

    frame.render_widget(table, layout[1]);
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP
// ═══════════════════════════════════════════════════════════════════════════

fn render_help(frame: &mut Frame, area: Rect) {
    let t = theme();

    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .title_style(t.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_active())
        .style(t.bg());

    let heading = Style::default().fg(t.coral).add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![Span::styled(format!("  {:<11}", k), t.accent_style()), Span::raw(what)])
    };

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("NAVIGATION", heading)),
        Line::from(""),
        key("↑ / k", "Move up"),
        key("↓ / j", "Move down"),
        key("Enter", "Open selected page"),
        key("Esc", "Go back"),
        Line::from(""),
        Line::from(Span::styled("TIPS", heading)),
        Line::from(""),
        key("r", "Next tip, or retry loading"),
        key("b", "Hide / show the sidebar"),
        key("/", "Search the library"),
        key("c", "Cycle library category"),
        Line::from(""),
        key("?", "Toggle this help"),
        key("q", "Quit application"),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Esc] to close",
            Style::default().fg(t.text_muted).add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS BAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let mode = match app.screen {
        Screen::Dashboard => "DASHBOARD",
        Screen::Library if app.editing_search => "SEARCH",
        Screen::Library => "LIBRARY",
        Screen::Help => "HELP",
    };

    let status = if let Some((msg, kind)) = &app.message {
        let color = match kind {
            MessageType::Error => t.error,
            MessageType::Success => t.success,
            MessageType::Warning => t.warning,
            MessageType::Info => t.accent,
        };
        Span::styled(format!(" {} ", msg), Style::default().bg(color).fg(t.slate))
    } else {
        Span::styled(format!(" {} ", mode), Style::default().bg(t.slate_light).fg(t.text_muted))
    };

    let hints = if app.editing_search {
        " [Enter] Done  [Esc] Clear "
    } else {
        " [↑↓] Navigate  [r] Refresh  [b] Sidebar  [?] Help  [q] Quit "
    };
    let keys = Span::styled(hints, Style::default().fg(t.text_muted));

    let bar = Line::from(vec![status, Span::raw(" "), keys]);

    frame.render_widget(Paragraph::new(bar).style(t.bg()), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[path = "ui_tests.rs"]
mod ui_tests;
