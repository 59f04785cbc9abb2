// crates/routes-rpc/src/channel.rs
//
// The one TLS-encrypted gRPC connection a sample program opens.

use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use routes_core::{ClientConfig, RoutesError};

/// An established, encrypted channel to the RoutesAlpha service.
///
/// Calls share it through `Channel` clones. tonic closes the connection once
/// the last clone is dropped.
pub struct SecuredChannel {
    channel: Channel,
    endpoint: String,
}

impl std::fmt::Debug for SecuredChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecuredChannel")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl SecuredChannel {
    /// Open a TLS connection to `config.endpoint`.
    ///
    /// Server certificates are checked against the platform's native roots
    /// with the endpoint host as the expected name. There is no retry: any
    /// failure comes back as `RoutesError::Connect`.
    pub async fn connect(config: &ClientConfig) -> Result<Self, RoutesError> {
        let endpoint = build_endpoint(config)?;

        tracing::debug!("Connecting to {}", config.endpoint);
        let channel = endpoint
            .connect()
            .await
            .map_err(|e| RoutesError::Connect(format!("{}: {}", config.endpoint, e)))?;
        tracing::info!("Connected to {}", config.endpoint);

        Ok(Self {
            channel,
            endpoint: config.endpoint.clone(),
        })
    }

    /// A handle for issuing calls over this connection.
    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }
}

/// Turn the configured address into a TLS endpoint without connecting.
pub fn build_endpoint(config: &ClientConfig) -> Result<Endpoint, RoutesError> {
    if !config.endpoint.starts_with("https://") {
        return Err(RoutesError::Config(format!(
            "endpoint {} is not an https:// address",
            config.endpoint
        )));
    }

    let endpoint = Endpoint::from_shared(config.endpoint.clone())
        .map_err(|e| RoutesError::Config(format!("invalid endpoint {}: {}", config.endpoint, e)))?;

    let host = endpoint
        .uri()
        .host()
        .ok_or_else(|| RoutesError::Config(format!("endpoint {} has no host", config.endpoint)))?
        .to_string();

    let tls = ClientTlsConfig::new().with_native_roots().domain_name(host);

    endpoint
        .tls_config(tls)
        .map(|e| e.connect_timeout(config.connect_timeout()))
        .map_err(|e| RoutesError::Config(format!("TLS setup failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(endpoint: &str) -> ClientConfig {
        ClientConfig {
            endpoint: endpoint.to_string(),
            api_key: "test-key".to_string(),
            connect_timeout_ms: 500,
            ..Default::default()
        }
    }

    #[test]
    fn default_endpoint_builds() {
        let endpoint = build_endpoint(&config_for(routes_core::config::DEFAULT_ENDPOINT)).unwrap();
        assert_eq!(endpoint.uri().host(), Some("routespreferred.googleapis.com"));
        assert_eq!(endpoint.uri().port_u16(), Some(443));
    }

    #[test]
    fn plaintext_endpoint_is_rejected() {
        let result = build_endpoint(&config_for("http://localhost:50051"));
        assert!(matches!(result, Err(RoutesError::Config(_))));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let result = build_endpoint(&config_for("https://not a host"));
        assert!(matches!(result, Err(RoutesError::Config(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_to_connect() {
        // Port 1 on loopback is not expected to accept connections.
        let result = SecuredChannel::connect(&config_for("https://127.0.0.1:1")).await;
        assert!(result.is_err());
    }
}
