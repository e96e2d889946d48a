//! Normalization of the shapes the tips endpoint may answer with.
//!
//! The backend has answered with a bare array, `{ "tips": [...] }` and
//! paginated `{ "results": [...] }` at different times. All three collapse
//! into one ordered `Vec<Tip>`.

use serde::{Deserialize, Serialize};

use crate::error::VivaError;
use crate::types::Tip;

/// A tips response body in any of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TipsPayload {
    /// `[ {...}, {...} ]`
    Bare(Vec<Tip>),
    /// `{ "tips": [...] }` or `{ "results": [...] }`.
    Wrapped {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tips: Option<Vec<Tip>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        results: Option<Vec<Tip>>,
    },
}

impl TipsPayload {
    /// Parses a response body.
    pub fn from_json(body: &str) -> Result<Self, VivaError> {
        serde_json::from_str(body).map_err(|e| VivaError::fetch(format!("invalid tips body: {e}")))
    }

    /// Collapses the payload into an ordered sequence of tips.
    ///
    /// `tips` wins over `results` when both are present; an object carrying
    /// neither yields an empty sequence.
    pub fn into_tips(self) -> Vec<Tip> {
        match self {
            TipsPayload::Bare(tips) => tips,
            TipsPayload::Wrapped { tips, results } => tips.or(results).unwrap_or_default(),
        }
    }
}

impl Default for TipsPayload {
    fn default() -> Self {
        TipsPayload::Bare(Vec::new())
    }
}

impl From<Vec<Tip>> for TipsPayload {
    fn from(tips: Vec<Tip>) -> Self {
        TipsPayload::Bare(tips)
    }
}
