// crates/routes-core/src/config.rs
//
// Client configuration for the sample programs.
// Loaded from an optional TOML file, populated with defaults otherwise, and
// finally overridden by command-line flags.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::RoutesError;

/// Default remote endpoint of the Routes Preferred API.
pub const DEFAULT_ENDPOINT: &str = "https://routespreferred.googleapis.com:443";

/// Wildcard field mask: asks the server for every response field.
///
/// Fine for testing, discouraged in production. A production ComputeRoutes
/// caller would send e.g.
/// `routes.distanceMeters,routes.duration,routes.polyline.encodedPolyline`.
pub const WILDCARD_FIELD_MASK: &str = "*";

/// Environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Runtime configuration shared by both sample programs.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// `https://host:port` of the RoutesAlpha service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value of the `x-goog-fieldmask` header.
    #[serde(default = "default_field_mask")]
    pub field_mask: String,

    /// Budget for all calls of one program run, fixed when the call context
    /// is created.
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,

    /// Upper bound on establishing the TLS connection.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Value of the `x-goog-api-key` header. Usually supplied through
    /// `GOOGLE_MAPS_API_KEY` rather than the file.
    #[serde(default)]
    pub api_key: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_field_mask() -> String {
    WILDCARD_FIELD_MASK.to_string()
}

fn default_deadline_ms() -> u64 {
    2_000
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            field_mask: default_field_mask(),
            deadline_ms: default_deadline_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            api_key: String::new(),
        }
    }
}

// The API key never goes to the log.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("field_mask", &self.field_mask)
            .field("deadline_ms", &self.deadline_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("api_key_set", &!self.api_key.is_empty())
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RoutesError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            RoutesError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, RoutesError> {
        let config: ClientConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Whether the field mask requests the whole response payload.
    pub fn field_mask_is_wildcard(&self) -> bool {
        self.field_mask.trim() == WILDCARD_FIELD_MASK
    }

    /// Check the values the client itself depends on: a positive deadline and
    /// an https endpoint.
    ///
    /// The API key and field mask are sent as given, even when empty. Judging
    /// them is up to the remote service.
    pub fn validate(&self) -> Result<(), RoutesError> {
        if self.deadline_ms == 0 {
            return Err(RoutesError::Config("deadline must be positive".to_string()));
        }
        if !self.endpoint.starts_with("https://") {
            return Err(RoutesError::Config(format!(
                "endpoint {} is not an https:// address",
                self.endpoint
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ClientConfig {
        ClientConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_match_sample() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://routespreferred.googleapis.com:443");
        assert_eq!(config.field_mask, "*");
        assert_eq!(config.deadline(), Duration::from_secs(2));
        assert!(config.field_mask_is_wildcard());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            field_mask = "routes.distanceMeters,routes.duration"
            deadline_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.field_mask, "routes.distanceMeters,routes.duration");
        assert_eq!(config.deadline_ms, 500);
        assert_eq!(config.connect_timeout_ms, 5_000);
        assert!(!config.field_mask_is_wildcard());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let result = ClientConfig::from_toml("deadline_ms = \"soon\"");
        assert!(matches!(result, Err(RoutesError::Config(_))));
    }

    #[test]
    fn missing_file_is_config_error() {
        let result = ClientConfig::load("/nonexistent/routes-client.toml");
        match result {
            Err(RoutesError::Config(msg)) => assert!(msg.contains("routes-client.toml")),
            other => panic!("Expected Config error, got: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn validate_leaves_credentials_to_the_server() {
        assert!(ClientConfig::default().validate().is_ok());
        let blank_mask = ClientConfig {
            field_mask: String::new(),
            ..Default::default()
        };
        assert!(blank_mask.validate().is_ok());
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_requires_https() {
        let config = ClientConfig {
            endpoint: "http://localhost:50051".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_deadline() {
        let config = ClientConfig {
            deadline_ms: 0,
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_hides_api_key() {
        let rendered = format!("{:?}", valid_config());
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("api_key_set: true"));
    }
}
