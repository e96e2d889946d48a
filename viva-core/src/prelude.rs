//! Prelude module for viva-core
//!
//! Re-exports the types needed to mount and render a tip rotator.
//!
//! # Usage
//!
//! ```rust
//! use viva_core::prelude::*;
//! ```

pub use crate::config::RotatorConfig;
pub use crate::error::VivaError;
pub use crate::filter::TipFilter;
pub use crate::payload::TipsPayload;
pub use crate::rotator::{FETCH_FAILED_MESSAGE, FetchOutcome, RefreshAction, TipRotator, TipView};
pub use crate::types::{Tip, TipCategory, TipIcon};

#[cfg(feature = "async")]
pub use crate::session::RotatorHandle;
#[cfg(feature = "async")]
pub use crate::source::{StaticTipSource, TipSource};
