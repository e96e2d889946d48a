//! Event handling for keyboard input using crossterm.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::tui::app::{App, Screen};

/// Poll for events and handle them.
/// Returns Ok(true) if the app should quit.
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // Short timeout so the rotator's updates reach the screen promptly
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        return Ok(handle_key(app, key));
    }

    Ok(false)
}

/// Apply one key press to the app. Returns true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return false;
    }

    // Handle Ctrl+C globally
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.editing_search {
        handle_search_input(app, key);
        return false;
    }

    app.message = None;

    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('b') => app.toggle_sidebar(),
        KeyCode::Char('r') => app.refresh_tip(),
        code => match app.screen {
            Screen::Dashboard => handle_dashboard(app, code),
            Screen::Library => handle_library(app, code),
            Screen::Help => handle_help(app, code),
        },
    }

    !app.running
}

/// Keystrokes while the library search box has focus
fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.editing_search = false,
        KeyCode::Esc => {
            app.search = Input::default();
            app.editing_search = false;
            app.library_index = 0;
        }
        _ => {
            // Pass the key event to tui-input
            app.search.handle_event(&Event::Key(key));
            app.library_index = 0;
        }
    }
}

fn handle_dashboard(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
        KeyCode::Enter => app.select_menu(),
        _ => {}
    }
}

fn handle_library(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.library_up(),
        KeyCode::Down | KeyCode::Char('j') => app.library_down(),
        KeyCode::Char('/') => app.editing_search = true,
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

fn handle_help(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Enter) {
        app.go_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viva_core::prelude::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new("test", &RotatorConfig::default())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app = self::app();
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_b_collapses_sidebar() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Char('b')));
        assert!(!app.sidebar_open);
        press(&mut app, KeyCode::Char('b'));
        assert!(app.sidebar_open);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.screen, Screen::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn test_search_typing_does_not_trigger_shortcuts() {
        let mut app = app();
        app.menu_index = 1;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Library);

        press(&mut app, KeyCode::Char('/'));
        assert!(app.editing_search);
        for c in "quick".chars() {
            assert!(!press(&mut app, KeyCode::Char(c)));
        }
        assert!(app.running);
        assert_eq!(app.search.value(), "quick");

        press(&mut app, KeyCode::Enter);
        assert!(!app.editing_search);
        assert_eq!(app.search.value(), "quick");

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.search.value(), "");
    }

    #[test]
    fn test_c_cycles_category_in_library() {
        let mut app = app();
        app.screen = Screen::Library;
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.category, Some(TipCategory::Hydration));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!handle_key(&mut app, key));
        assert!(app.running);
    }
}
