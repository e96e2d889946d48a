//! Application state and screen management.

use std::time::Duration;

use strum::IntoEnumIterator;
use tui_input::Input;
use viva_core::prelude::*;

use crate::tui::theme::icons;

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Overview of the loaded tips
    Dashboard,
    /// Searchable list of every fetched tip
    Library,
    /// Help overlay
    Help,
}

/// Type of status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

/// Sidebar navigation entries.
pub const MENU: [(&str, &str); 4] = [
    (icons::HOME, "Dashboard"),
    (icons::BOOK, "Tips Library"),
    (icons::HELP, "Help"),
    (icons::CLOSE, "Quit"),
];

/// Main application state
pub struct App {
    /// Whether the app should keep running
    pub running: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Selected sidebar menu entry
    pub menu_index: usize,
    /// Whether the sidebar (menu and tip card) is shown
    pub sidebar_open: bool,
    /// Latest snapshot published by the rotator
    pub tips: TipView,
    /// Library search box
    pub search: Input,
    /// Whether keystrokes go to the search box
    pub editing_search: bool,
    /// Library category filter
    pub category: Option<TipCategory>,
    /// Selected row in the library table
    pub library_index: usize,
    /// Status message to display
    pub message: Option<(String, MessageType)>,
    /// Where tips come from, for the header
    pub source_label: String,
    pub rotation_interval: Duration,
    /// Redraw counter, drives the spinners
    pub tick: usize,
    rotator: Option<RotatorHandle>,
}

impl App {
    /// Create an app showing the fallback tip until a rotator is attached.
    pub fn new(source_label: impl Into<String>, config: &RotatorConfig) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            menu_index: 0,
            sidebar_open: true,
            tips: TipRotator::new(config.fallback_tip.clone()).view(),
            search: Input::default(),
            editing_search: false,
            category: None,
            library_index: 0,
            message: None,
            source_label: source_label.into(),
            rotation_interval: config.rotation_interval,
            tick: 0,
            rotator: None,
        }
    }

    /// Hand the running rotator to the app.
    pub fn attach(&mut self, rotator: RotatorHandle) {
        self.tips = rotator.view();
        self.rotator = Some(rotator);
    }

    /// Detach the rotator so the caller can unmount it.
    pub fn take_rotator(&mut self) -> Option<RotatorHandle> {
        self.rotator.take()
    }

    /// Pull the newest view from the rotator. Called once per frame.
    pub fn sync(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let Some(rotator) = &self.rotator else {
            return;
        };

        let view = rotator.view();
        if view.error.is_some() && self.tips.error.is_none() {
            self.message = Some(("Tips unavailable, showing the default tip".to_string(), MessageType::Warning));
        } else if self.tips.total == 0 && view.total > 0 {
            self.message = Some((format!("Loaded {} tips", view.total), MessageType::Success));
        }
        self.tips = view;
        self.clamp_library_index();
    }

    /// Manual refresh: next tip, or a retry when nothing was loaded.
    pub fn refresh_tip(&mut self) {
        if self.tips.loading || self.tips.transitioning {
            return;
        }
        let Some(rotator) = &self.rotator else {
            return;
        };

        if !rotator.refresh() {
            self.message = Some(("Tip rotator has stopped".to_string(), MessageType::Error));
        } else if self.tips.total == 0 {
            self.message = Some(("Retrying tips...".to_string(), MessageType::Info));
        }
    }

    /// Collapse or reopen the sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Move menu selection up
    pub fn menu_up(&mut self) {
        if self.menu_index > 0 {
            self.menu_index -= 1;
        } else {
            self.menu_index = MENU.len() - 1;
        }
    }

    /// Move menu selection down
    pub fn menu_down(&mut self) {
        if self.menu_index < MENU.len() - 1 {
            self.menu_index += 1;
        } else {
            self.menu_index = 0;
        }
    }

    /// Handle menu selection
    pub fn select_menu(&mut self) {
        match self.menu_index {
            0 => self.screen = Screen::Dashboard,
            1 => {
                self.screen = Screen::Library;
                self.library_index = 0;
            }
            2 => self.screen = Screen::Help,
            _ => self.running = false,
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        if self.screen == Screen::Help {
            self.go_back();
        } else {
            self.screen = Screen::Help;
        }
    }

    /// Return to the dashboard.
    pub fn go_back(&mut self) {
        self.screen = Screen::Dashboard;
        self.menu_index = 0;
        self.editing_search = false;
    }

    /// Filter built from the library search box and category.
    pub fn filter(&self) -> TipFilter {
        let filter = TipFilter::new().with_search(self.search.value());
        match self.category {
            Some(category) => filter.with_category(category.as_ref()),
            None => filter,
        }
    }

    /// Tips visible in the library.
    pub fn filtered_tips(&self) -> Vec<&Tip> {
        self.filter().apply(&self.tips.tips)
    }

    /// All, then each known category in turn.
    pub fn cycle_category(&mut self) {
        let categories: Vec<TipCategory> = TipCategory::iter().collect();
        self.category = match self.category {
            None => categories.first().copied(),
            Some(current) => categories
                .iter()
                .position(|c| *c == current)
                .and_then(|i| categories.get(i + 1).copied()),
        };
        self.library_index = 0;
    }

    pub fn library_up(&mut self) {
        self.library_index = self.library_index.saturating_sub(1);
    }

    pub fn library_down(&mut self) {
        let len = self.filtered_tips().len();
        if self.library_index + 1 < len {
            self.library_index += 1;
        }
    }

    fn clamp_library_index(&mut self) {
        let len = self.filtered_tips().len();
        self.library_index = self.library_index.min(len.saturating_sub(1));
    }

    /// Tip counts per known category, plus uncategorized ones.
    pub fn category_counts(&self) -> Vec<(Option<TipCategory>, usize)> {
        let tips = &self.tips.tips;
        let mut counts: Vec<(Option<TipCategory>, usize)> = TipCategory::iter()
            .map(|category| {
                let n = tips
                    .iter()
                    .filter(|tip| tip.known_category() == Some(category))
                    .count();
                (Some(category), n)
            })
            .collect();
        let other = tips.iter().filter(|tip| tip.known_category().is_none()).count();
        counts.push((None, other));
        counts
    }
}
