#[cfg(test)]
mod tests {
    use crate::tui::app::{App, Screen};
    use crate::tui::ui::ui;
    use ratatui::{Terminal, backend::TestBackend};
    use viva_core::prelude::*;

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn app_with_tips() -> App {
        let tips = vec![
            Tip::new("Drink water").with_category("hydration"),
            Tip::new("Walk daily").with_category("activity"),
            Tip::new("Eat greens").with_category("nutrition"),
        ];
        let mut app = App::new("localhost", &RotatorConfig::default());
        app.tips.tip = tips[1].clone();
        app.tips.icon = TipIcon::Activity;
        app.tips.index = Some(1);
        app.tips.total = tips.len();
        app.tips.tips = tips.into();
        app
    }

    #[test]
    fn test_ui_render_header() {
        let app = App::new("offline", &RotatorConfig::default());
        let screen = render(&app, 100, 30);
        let header = screen.lines().next().unwrap();
        assert!(header.contains("VIVA"), "Header should contain 'VIVA' branding");
    }

    #[test]
    fn test_sidebar_shows_fallback_tip() {
        let app = App::new("offline", &RotatorConfig::default());
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Tip of the Day"));
        assert!(screen.contains("Stay hydrated!"));
        assert!(screen.contains("HYDRATION"));
        assert!(screen.contains("refresh"));
    }

    #[test]
    fn test_collapsed_sidebar_hides_tip_card() {
        let mut app = App::new("offline", &RotatorConfig::default());
        app.toggle_sidebar();
        let screen = render(&app, 100, 30);
        assert!(!screen.contains("Tip of the Day"));
        assert!(screen.contains("VIVA"));
    }

    #[test]
    fn test_error_is_shown_inline() {
        let mut app = App::new("localhost", &RotatorConfig::default());
        app.tips.error = Some(FETCH_FAILED_MESSAGE.to_string());
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Failed"));
        assert!(screen.contains("unreachable"));
        assert!(screen.contains("Stay hydrated!"));
    }

    #[test]
    fn test_dashboard_breakdown() {
        let app = app_with_tips();
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Tips Loaded"));
        assert!(screen.contains("Categories"));
        assert!(screen.contains("nutrition"));
        assert!(screen.contains("Walk daily"));
        assert!(screen.contains("2/3"));
    }

    #[test]
    fn test_library_lists_filtered_tips() {
        let mut app = app_with_tips();
        app.screen = Screen::Library;
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Drink water"));
        assert!(screen.contains("Eat greens"));
        assert!(screen.contains("Tips 3/3"));

        app.category = Some(TipCategory::Hydration);
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Drink water"));
        assert!(!screen.contains("Eat greens"));
        assert!(screen.contains("category: hydration"));
    }

    #[test]
    fn test_library_empty_state() {
        let mut app = App::new("localhost", &RotatorConfig::default());
        app.screen = Screen::Library;
        let screen = render(&app, 100, 30);
        assert!(screen.contains("No tips loaded"));
    }

    #[test]
    fn test_ui_render_help() {
        let mut app = App::new("offline", &RotatorConfig::default());
        app.screen = Screen::Help;
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Toggle this help"));
        assert!(screen.contains("HELP"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let app = app_with_tips();
        render(&app, 20, 6);
    }
}
