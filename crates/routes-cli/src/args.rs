// crates/routes-cli/src/args.rs
//
// Command-line arguments shared by both sample binaries, and the layering of
// defaults, config file, and flags into one `ClientConfig`.

use std::path::Path;

use clap::Args;

use routes_core::{ClientConfig, RoutesError};

/// Connection and call settings common to every sample program.
#[derive(Args, Debug, Clone, Default)]
pub struct ClientArgs {
    /// Path to an optional TOML configuration file.
    #[arg(long)]
    pub config: Option<String>,

    /// API key sent in the x-goog-api-key header.
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Remote endpoint, e.g. https://routespreferred.googleapis.com:443.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Response field mask sent in the x-goog-fieldmask header.
    #[arg(long)]
    pub field_mask: Option<String>,

    /// Deadline in milliseconds covering all calls of the run.
    #[arg(long)]
    pub deadline_ms: Option<u64>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ClientArgs {
    /// Build the effective configuration: defaults, then the config file if
    /// one is named and exists, then any flags given.
    ///
    /// A named file that does not exist is only a warning. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn resolve(&self) -> Result<ClientConfig, RoutesError> {
        let mut config = match &self.config {
            Some(path) if Path::new(path).exists() => {
                let cfg = ClientConfig::load(path)?;
                tracing::info!("Loaded configuration from {}", path);
                cfg
            }
            Some(path) => {
                tracing::warn!("Config file {} not found. Using defaults.", path);
                ClientConfig::default()
            }
            None => ClientConfig::default(),
        };

        // Flags override the file.
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(field_mask) = &self.field_mask {
            config.field_mask = field_mask.clone();
        }
        if let Some(deadline_ms) = self.deadline_ms {
            config.deadline_ms = deadline_ms;
        }

        tracing::debug!("Effective configuration: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_file_no_flags_gives_defaults() {
        let config = ClientArgs::default().resolve().unwrap();
        assert_eq!(config.endpoint, "https://routespreferred.googleapis.com:443");
        assert_eq!(config.field_mask, "*");
        assert_eq!(config.deadline_ms, 2_000);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let args = ClientArgs {
            config: Some("/nonexistent/routes-client.toml".to_string()),
            ..Default::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.deadline_ms, 2_000);
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "field_mask = \"routes.duration\"\ndeadline_ms = 5000\napi_key = \"from-file\""
        )
        .unwrap();

        let args = ClientArgs {
            config: Some(file.path().display().to_string()),
            api_key: Some("from-flag".to_string()),
            deadline_ms: Some(750),
            ..Default::default()
        };
        let config = args.resolve().unwrap();

        assert_eq!(config.api_key, "from-flag");
        assert_eq!(config.deadline_ms, 750);
        // Not overridden, so the file value stands.
        assert_eq!(config.field_mask, "routes.duration");
        assert_eq!(config.endpoint, "https://routespreferred.googleapis.com:443");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "deadline_ms = \"soon\"").unwrap();

        let args = ClientArgs {
            config: Some(file.path().display().to_string()),
            ..Default::default()
        };
        assert!(matches!(args.resolve(), Err(RoutesError::Config(_))));
    }
}
