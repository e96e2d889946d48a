//! # TUI Module
//!
//! Full-screen terminal sidebar for the Viva tip of the day, built with
//! ratatui.

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use event::handle_events;
pub use ui::ui;
