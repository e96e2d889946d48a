pub mod config;
pub mod error;
pub mod filter;
pub mod payload;
pub mod prelude;
pub mod rotator;
pub mod types;

#[cfg(feature = "async")]
pub mod session;
#[cfg(feature = "async")]
pub mod source;

pub use config::RotatorConfig;
pub use error::VivaError;
pub use filter::TipFilter;
pub use payload::TipsPayload;
pub use rotator::{FetchOutcome, RefreshAction, TipRotator, TipView, FETCH_FAILED_MESSAGE};
pub use types::{Tip, TipCategory, TipIcon};

#[cfg(feature = "async")]
pub use session::RotatorHandle;
#[cfg(feature = "async")]
pub use source::{StaticTipSource, TipSource};
