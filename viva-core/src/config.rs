use std::env;
use std::time::Duration;

use crate::error::VivaError;
use crate::types::Tip;

/// Default period between automatic tip rotations.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(30);

/// Default length of the fade window before a new tip is committed.
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// Timing and fallback settings for a tip rotator.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatorConfig {
    pub rotation_interval: Duration,
    pub transition_delay: Duration,
    /// Shown until the first successful fetch, and kept after a failed one.
    pub fallback_tip: Tip,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
            transition_delay: DEFAULT_TRANSITION_DELAY,
            fallback_tip: Tip::fallback(),
            seed: None,
        }
    }
}

impl RotatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the timing values.
    ///
    /// The transition must finish before the next rotation tick, otherwise
    /// every tick would land inside a transition and be skipped.
    pub fn validate(&self) -> Result<(), VivaError> {
        if self.rotation_interval.is_zero() {
            return Err(VivaError::Config("Rotation interval must be positive".to_string()));
        }
        if self.transition_delay >= self.rotation_interval {
            return Err(VivaError::Config(format!(
                "Transition delay ({:?}) must be shorter than the rotation interval ({:?})",
                self.transition_delay, self.rotation_interval
            )));
        }
        if self.fallback_tip.content.trim().is_empty() {
            return Err(VivaError::Config("Fallback tip must have content".to_string()));
        }
        Ok(())
    }

    /// Reads `VIVA_ROTATION_SECS`, `VIVA_TRANSITION_MS` and `VIVA_SEED`,
    /// keeping defaults for unset variables.
    pub fn from_env() -> Result<Self, VivaError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RotatorConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, VivaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secs) = parse_var(&lookup, "VIVA_ROTATION_SECS")? {
            config.rotation_interval = Duration::from_secs(secs);
        }
        if let Some(ms) = parse_var(&lookup, "VIVA_TRANSITION_MS")? {
            config.transition_delay = Duration::from_millis(ms);
        }
        if let Some(seed) = parse_var(&lookup, "VIVA_SEED")? {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_rotation_interval(mut self, interval: Duration) -> Self {
        self.rotation_interval = interval;
        self
    }

    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }

    pub fn with_fallback_tip(mut self, tip: Tip) -> Self {
        self.fallback_tip = tip;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Result<Option<u64>, VivaError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| VivaError::Config(format!("Invalid {}: {}", key, e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RotatorConfig::default();
        assert_eq!(config.rotation_interval, Duration::from_secs(30));
        assert_eq!(config.transition_delay, Duration::from_millis(300));
        assert_eq!(config.fallback_tip, Tip::fallback());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = RotatorConfig::new().with_rotation_interval(Duration::ZERO);
        assert!(matches!(config.validate(), Err(VivaError::Config(_))));
    }

    #[test]
    fn test_rejects_transition_longer_than_rotation() {
        let config = RotatorConfig::new()
            .with_rotation_interval(Duration::from_secs(1))
            .with_transition_delay(Duration::from_secs(2));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_fallback() {
        let config = RotatorConfig::new().with_fallback_tip(Tip::new("  "));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = RotatorConfig::new()
            .with_rotation_interval(Duration::from_secs(5))
            .with_transition_delay(Duration::from_millis(50))
            .with_seed(7);
        assert_eq!(config.rotation_interval, Duration::from_secs(5));
        assert_eq!(config.transition_delay, Duration::from_millis(50));
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_lookup_without_vars_gives_defaults() {
        let config = RotatorConfig::from_lookup(vars(&[])).unwrap();
        assert_eq!(config, RotatorConfig::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = RotatorConfig::from_lookup(vars(&[
            ("VIVA_ROTATION_SECS", " 45 "),
            ("VIVA_TRANSITION_MS", "150"),
            ("VIVA_SEED", "7"),
        ]))
        .unwrap();
        assert_eq!(config.rotation_interval, Duration::from_secs(45));
        assert_eq!(config.transition_delay, Duration::from_millis(150));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_lookup_rejects_malformed_value() {
        let err = RotatorConfig::from_lookup(vars(&[("VIVA_SEED", "lucky")])).unwrap_err();
        assert!(matches!(&err, VivaError::Config(msg) if msg.contains("VIVA_SEED")));

        let err = RotatorConfig::from_lookup(vars(&[("VIVA_ROTATION_SECS", "-5")])).unwrap_err();
        assert!(matches!(&err, VivaError::Config(msg) if msg.contains("VIVA_ROTATION_SECS")));
    }

    #[test]
    fn test_lookup_validates_result() {
        let err = RotatorConfig::from_lookup(vars(&[
            ("VIVA_ROTATION_SECS", "1"),
            ("VIVA_TRANSITION_MS", "1000"),
        ]))
        .unwrap_err();
        assert!(matches!(err, VivaError::Config(_)));

        let err = RotatorConfig::from_lookup(vars(&[("VIVA_ROTATION_SECS", "0")])).unwrap_err();
        assert!(matches!(err, VivaError::Config(_)));
    }
}
