//! Tip sources.
//!
//! The rotator reads tips through the [`TipSource`] trait so the same session
//! logic runs against the live endpoint, an offline list, or a test double.

use crate::error::VivaError;
use crate::payload::TipsPayload;
use crate::types::Tip;

/// Something that can produce the tip collection.
///
/// Implementations return the response body as-is; normalization into a
/// single list happens in [`TipsPayload::into_tips`].
#[async_trait::async_trait]
pub trait TipSource: Send + Sync {
    /// Fetches the tip collection.
    async fn fetch_tips(&self) -> Result<TipsPayload, VivaError>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "tips"
    }
}

#[async_trait::async_trait]
impl<S: TipSource + ?Sized> TipSource for std::sync::Arc<S> {
    async fn fetch_tips(&self) -> Result<TipsPayload, VivaError> {
        (**self).fetch_tips().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A fixed tip list, for offline mode and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTipSource {
    payload: TipsPayload,
}

impl StaticTipSource {
    pub fn new(tips: Vec<Tip>) -> Self {
        Self {
            payload: TipsPayload::Bare(tips),
        }
    }

    /// Serves `payload` verbatim, whatever its shape.
    pub fn from_payload(payload: TipsPayload) -> Self {
        Self { payload }
    }
}

#[async_trait::async_trait]
impl TipSource for StaticTipSource {
    async fn fetch_tips(&self) -> Result<TipsPayload, VivaError> {
        Ok(self.payload.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_static_source_serves_payload() {
        let source = StaticTipSource::new(vec![Tip::new("Walk daily").with_category("activity")]);
        let tips = source.fetch_tips().await.unwrap().into_tips();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].content, "Walk daily");
        assert_eq!(source.name(), "static");
    }

    #[tokio::test]
    async fn test_static_source_keeps_shape() {
        let payload = TipsPayload::Wrapped {
            tips: None,
            results: Some(vec![Tip::new("Stretch")]),
        };
        let source = StaticTipSource::from_payload(payload.clone());
        assert_eq!(source.fetch_tips().await.unwrap(), payload);
    }

    #[tokio::test]
    async fn test_arc_source_delegates() {
        let source: Arc<dyn TipSource> = Arc::new(StaticTipSource::default());
        assert!(source.fetch_tips().await.unwrap().into_tips().is_empty());
        assert_eq!(source.name(), "static");
    }
}
