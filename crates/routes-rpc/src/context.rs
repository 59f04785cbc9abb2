// crates/routes-rpc/src/context.rs
//
// Call context: the fixed deadline and the two headers every call carries.

use std::time::Duration;

use tokio::time::Instant;
use tonic::metadata::{AsciiMetadataValue, MetadataMap};

use routes_core::{ClientConfig, RoutesError};

/// Header carrying the API credential.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Header selecting which response fields the server populates.
pub const FIELD_MASK_HEADER: &str = "x-goog-fieldmask";

/// Deadline and metadata applied to every call of one program run.
///
/// The deadline is an absolute instant fixed at construction. Nothing in the
/// crate moves it, so consecutive calls share a single budget.
#[derive(Clone)]
pub struct CallContext {
    deadline: Instant,
    api_key: AsciiMetadataValue,
    field_mask: AsciiMetadataValue,
}

impl std::fmt::Debug for CallContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallContext")
            .field("remaining", &self.remaining())
            .field("field_mask", &self.field_mask)
            .finish()
    }
}

impl CallContext {
    /// Build a context whose deadline is `config.deadline()` from now.
    ///
    /// Sessions call this after the channel is connected, so connection setup
    /// (bounded by `connect_timeout_ms`) is not charged to the call budget.
    pub fn new(config: &ClientConfig) -> Result<Self, RoutesError> {
        Self::with_deadline(config, Instant::now() + config.deadline())
    }

    /// Build a context with an explicit deadline.
    pub fn with_deadline(config: &ClientConfig, deadline: Instant) -> Result<Self, RoutesError> {
        let mut api_key: AsciiMetadataValue = config.api_key.parse()?;
        api_key.set_sensitive(true);
        let field_mask: AsciiMetadataValue = config.field_mask.parse()?;

        Ok(Self {
            deadline,
            api_key,
            field_mask,
        })
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Wrap `message` in a request carrying both headers and a gRPC timeout
    /// equal to the time remaining.
    ///
    /// Fails with `DeadlineExceeded` when the budget is already spent, so no
    /// call is started past the deadline.
    pub fn request<T>(
        &self,
        method: &'static str,
        message: T,
    ) -> Result<tonic::Request<T>, RoutesError> {
        let remaining = self.remaining();
        if remaining.is_zero() {
            return Err(RoutesError::DeadlineExceeded { method });
        }

        let mut request = tonic::Request::new(message);
        request.set_timeout(remaining);
        self.apply(request.metadata_mut());
        Ok(request)
    }

    fn apply(&self, metadata: &mut MetadataMap) {
        metadata.insert(API_KEY_HEADER, self.api_key.clone());
        metadata.insert(FIELD_MASK_HEADER, self.field_mask.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClientConfig {
        ClientConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn request_carries_both_headers() {
        let ctx = CallContext::new(&test_config()).unwrap();
        let request = ctx.request("ComputeRoutes", ()).unwrap();
        let metadata = request.metadata();

        assert_eq!(metadata.get(API_KEY_HEADER).unwrap().to_str().unwrap(), "test-key");
        assert_eq!(metadata.get(FIELD_MASK_HEADER).unwrap().to_str().unwrap(), "*");
        // Exactly the two headers plus the grpc-timeout set by tonic.
        assert_eq!(metadata.len(), 3);
        assert!(metadata.get("grpc-timeout").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_is_fixed_at_creation() {
        let ctx = CallContext::new(&test_config()).unwrap();
        let deadline = ctx.deadline();

        tokio::time::advance(Duration::from_millis(1_500)).await;
        assert_eq!(ctx.deadline(), deadline);
        assert_eq!(ctx.remaining(), Duration::from_millis(500));

        let _ = ctx.request("ComputeRoutes", ()).unwrap();
        assert_eq!(ctx.deadline(), deadline);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_context_refuses_requests() {
        let ctx = CallContext::new(&test_config()).unwrap();
        tokio::time::advance(Duration::from_secs(3)).await;

        assert_eq!(ctx.remaining(), Duration::ZERO);
        match ctx.request("ComputeRouteMatrix", ()) {
            Err(RoutesError::DeadlineExceeded { method }) => {
                assert_eq!(method, "ComputeRouteMatrix")
            }
            other => panic!("Expected DeadlineExceeded, got: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn empty_api_key_is_still_sent() {
        let ctx = CallContext::new(&ClientConfig::default()).unwrap();
        let request = ctx.request("ComputeRoutes", ()).unwrap();
        let key = request.metadata().get(API_KEY_HEADER).unwrap();
        assert_eq!(key.to_str().unwrap(), "");
    }

    #[test]
    fn non_ascii_api_key_is_config_error() {
        let config = ClientConfig {
            api_key: "clé\n".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            CallContext::with_deadline(&config, Instant::now()),
            Err(RoutesError::Config(_))
        ));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let ctx = CallContext::with_deadline(&test_config(), Instant::now()).unwrap();
        assert!(!format!("{:?}", ctx).contains("test-key"));
    }
}
