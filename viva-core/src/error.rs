use thiserror::Error;

/// Errors produced while fetching tips or validating configuration.
///
/// Network failures, non-2xx responses and unparseable bodies all collapse
/// into [`VivaError::TipsFetch`]; the rotator never distinguishes them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VivaError {
    /// The tips source could not be read.
    #[error("Tips fetch failed: {0}")]
    TipsFetch(String),

    /// A configuration value was rejected.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VivaError {
    /// Builds a [`VivaError::TipsFetch`] from any displayable cause.
    pub fn fetch(cause: impl std::fmt::Display) -> Self {
        VivaError::TipsFetch(cause.to_string())
    }

    /// Returns true for the fetch failure kind.
    pub fn is_fetch(&self) -> bool {
        matches!(self, VivaError::TipsFetch(_))
    }
}
