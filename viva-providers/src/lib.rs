//! Live tip sources for the Viva Health tip rotator.
//!
//! ## Feature Flags
//! - `http` (default): [`HttpTipSource`], backed by `reqwest`.

#[cfg(feature = "http")]
pub mod http;
pub mod network;

#[cfg(feature = "http")]
pub use http::HttpTipSource;
pub use network::{DEFAULT_TIPS_ENDPOINT, NetworkConfig};
