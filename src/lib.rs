//! # Viva
//!
//! Tip-of-the-day rotation for the Viva Health navigation sidebar.
//!
//! This facade re-exports [`viva_core`] (tip types, payload normalization,
//! filtering, the rotation state machine and the async session) and, with the
//! `http` feature, the live sources from [`viva_providers`].
//!
//! ```rust,no_run
//! use viva::prelude::*;
//!
//! # async fn demo() {
//! let source = HttpTipSource::new(&NetworkConfig::default());
//! let rotator = RotatorHandle::spawn(source, RotatorConfig::default());
//! let view = rotator.view();
//! println!("{} {}", view.icon.glyph(), view.tip.content);
//! rotator.unmount().await;
//! # }
//! ```

pub use viva_core::*;

#[cfg(feature = "http")]
pub use viva_providers as providers;

pub mod prelude;
