// crates/routes-rpc/src/middleware.rs
//
// Client-side interceptor: logs each outgoing call's headers.

use tonic::metadata::KeyRef;
use tonic::{Request, Status};

use crate::context::{API_KEY_HEADER, FIELD_MASK_HEADER};

/// Logging interceptor for outgoing tonic requests.
///
/// Logs the header names and the field mask at debug level. The API key is
/// reported only as present or absent.
pub fn logging_interceptor(req: Request<()>) -> Result<Request<()>, Status> {
    let metadata = req.metadata();
    let headers: Vec<&str> = metadata
        .keys()
        .map(|key| match key {
            KeyRef::Ascii(k) => k.as_str(),
            KeyRef::Binary(k) => k.as_str(),
        })
        .collect();

    tracing::debug!(
        "Outgoing RPC request: headers={:?} api_key_present={} field_mask={:?}",
        headers,
        metadata.contains_key(API_KEY_HEADER),
        metadata
            .get(FIELD_MASK_HEADER)
            .and_then(|v| v.to_str().ok())
    );
    Ok(req)
}

/// The interceptor as a plain function pointer, usable as a type parameter.
pub type LoggingInterceptor = fn(Request<()>) -> Result<Request<()>, Status>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interceptor_passes_request_through() {
        let mut req = Request::new(());
        req.metadata_mut()
            .insert(API_KEY_HEADER, "secret".parse().unwrap());
        let out = logging_interceptor(req).unwrap();
        assert_eq!(
            out.metadata().get(API_KEY_HEADER).unwrap().to_str().unwrap(),
            "secret"
        );
    }
}
