use viva_core::VivaError;

/// Default location of the tips list resource.
pub const DEFAULT_TIPS_ENDPOINT: &str = "http://localhost:8000/api/tips/";

/// Network configuration for live tip sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Full URL of the tips list resource.
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TIPS_ENDPOINT.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl NetworkConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn validate(&self) -> Result<(), VivaError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(VivaError::Config("Tips endpoint must not be empty".to_string()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(VivaError::Config(format!(
                "Tips endpoint must be an http(s) URL, got '{}'",
                endpoint
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(VivaError::Config("Network timeout must be positive".to_string()));
        }
        Ok(())
    }
}
