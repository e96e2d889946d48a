//! Prelude module for Viva
//!
//! Re-exports the commonly used types from every workspace library.
//!
//! # Usage
//!
//! ```rust
//! use viva::prelude::*;
//! ```

pub use viva_core::prelude::*;

#[cfg(feature = "http")]
pub use viva_providers::{HttpTipSource, NetworkConfig};
