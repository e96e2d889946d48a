//! Tip records and their display metadata.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Content of the hardcoded fallback tip.
pub const FALLBACK_TIP_CONTENT: &str = "Stay hydrated! Drink at least 8 glasses of water daily.";

/// Category of the hardcoded fallback tip.
pub const FALLBACK_TIP_CATEGORY: &str = "hydration";

/// A short piece of wellness advice with an optional category tag.
///
/// Tips are read-only reference data owned by the tips backend. Fields the
/// backend sends beyond `content` and `category` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tip {
    /// The advice text shown to the user.
    pub content: String,
    /// Free-form category; only used to pick an icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Tip {
    /// Creates an uncategorized tip.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            category: None,
        }
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The tip shown before the first successful fetch and after a failed one.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_TIP_CONTENT).with_category(FALLBACK_TIP_CATEGORY)
    }

    /// Recognized category, if the free-form tag names one.
    pub fn known_category(&self) -> Option<TipCategory> {
        self.category
            .as_deref()
            .and_then(|c| TipCategory::from_str(c.trim()).ok())
    }

    /// Display icon for this tip.
    pub fn icon(&self) -> TipIcon {
        TipIcon::for_category(self.category.as_deref())
    }
}

/// Categories the sidebar knows how to decorate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TipCategory {
    Hydration,
    Activity,
    Nutrition,
    Wellness,
}

impl TipCategory {
    pub fn icon(self) -> TipIcon {
        match self {
            TipCategory::Hydration => TipIcon::Droplet,
            TipCategory::Activity => TipIcon::Activity,
            TipCategory::Nutrition => TipIcon::Coffee,
            TipCategory::Wellness => TipIcon::Heart,
        }
    }
}

/// Icon identifier rendered next to the current tip.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TipIcon {
    Droplet,
    Activity,
    Coffee,
    Heart,
    #[default]
    Sun,
}

impl TipIcon {
    /// Maps a free-form category (case-insensitive) to an icon.
    /// Missing or unrecognized categories get [`TipIcon::Sun`].
    pub fn for_category(category: Option<&str>) -> Self {
        category
            .and_then(|c| TipCategory::from_str(c.trim()).ok())
            .map(TipCategory::icon)
            .unwrap_or_default()
    }

    /// Terminal glyph for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            TipIcon::Droplet => "💧",
            TipIcon::Activity => "🏃",
            TipIcon::Coffee => "☕",
            TipIcon::Heart => "❤",
            TipIcon::Sun => "☀",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_icon_mapping_is_case_insensitive() {
        assert_eq!(TipIcon::for_category(Some("hydration")), TipIcon::Droplet);
        assert_eq!(TipIcon::for_category(Some("HYDRATION")), TipIcon::Droplet);
        assert_eq!(TipIcon::for_category(Some("Activity")), TipIcon::Activity);
        assert_eq!(TipIcon::for_category(Some("nutrition")), TipIcon::Coffee);
        assert_eq!(TipIcon::for_category(Some("WeLLness")), TipIcon::Heart);
    }

    #[test]
    fn test_icon_defaults_to_sun() {
        assert_eq!(TipIcon::for_category(None), TipIcon::Sun);
        assert_eq!(TipIcon::for_category(Some("")), TipIcon::Sun);
        assert_eq!(TipIcon::for_category(Some("sleep")), TipIcon::Sun);
        assert_eq!(Tip::new("Rest well").icon(), TipIcon::Sun);
    }

    #[test]
    fn test_fallback_tip() {
        let tip = Tip::fallback();
        assert_eq!(tip.content, FALLBACK_TIP_CONTENT);
        assert_eq!(tip.known_category(), Some(TipCategory::Hydration));
        assert_eq!(tip.icon(), TipIcon::Droplet);
    }

    #[test]
    fn test_every_category_has_a_distinct_icon() {
        let icons: Vec<TipIcon> = TipCategory::iter().map(TipCategory::icon).collect();
        assert_eq!(icons.len(), 4);
        assert!(!icons.contains(&TipIcon::Sun));
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_tip_deserialize_ignores_extra_fields() {
        let tip: Tip = serde_json::from_str(
            r#"{"id": 7, "content": "Walk daily", "category": "activity", "created_at": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(tip, Tip::new("Walk daily").with_category("activity"));

        let tip: Tip = serde_json::from_str(r#"{"content": "Sleep 8 hours"}"#).unwrap();
        assert!(tip.category.is_none());
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(TipIcon::Droplet.to_string(), "droplet");
        assert_eq!(TipIcon::Sun.as_ref(), "sun");
        assert_eq!(TipCategory::Wellness.to_string(), "wellness");
    }
}
