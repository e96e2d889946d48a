//! Component widgets for the TUI.
//!
//! Reusable pieces of the Viva terminal interface.

pub mod spinner;
pub mod stat_card;
pub mod tip_card;

pub use spinner::LoadingSpinner;
pub use stat_card::StatCard;
pub use tip_card::TipCard;
