//! Request signature middleware.
//!
//! Reads the whole body (bounded by the configured limit), hands the exact
//! bytes and the two signature headers to the authenticator, and either
//! answers the uniform 401 or re-injects the untouched bytes for the
//! handler. Nothing downstream sees an unauthenticated request.
//!
//! A body over the limit is answered 413; any other read failure (client
//! gone, broken chunking) is answered 400.

use crate::domain::error::ApiError;
use crate::middleware::metrics::GatewayMetrics;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_LENGTH, HeaderMap, Request},
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use ix_01_request_auth::{
    AuthResult, RequestAuthenticationApi, SignedRequest, SIGNATURE_HEADER, TIMESTAMP_HEADER,
};
use std::error::Error as StdError;
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::{debug, warn};

/// Signature verification layer
#[derive(Clone)]
pub struct SignatureLayer {
    authenticator: Arc<dyn RequestAuthenticationApi>,
    metrics: Arc<GatewayMetrics>,
    max_body_bytes: usize,
}

impl SignatureLayer {
    pub fn new(
        authenticator: Arc<dyn RequestAuthenticationApi>,
        metrics: Arc<GatewayMetrics>,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            authenticator,
            metrics,
            max_body_bytes,
        }
    }
}

impl<S> Layer<S> for SignatureLayer {
    type Service = SignatureService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SignatureService {
            inner,
            authenticator: Arc::clone(&self.authenticator),
            metrics: Arc::clone(&self.metrics),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Signature verification service
#[derive(Clone)]
pub struct SignatureService<S> {
    inner: S,
    authenticator: Arc<dyn RequestAuthenticationApi>,
    metrics: Arc<GatewayMetrics>,
    max_body_bytes: usize,
}

impl<S> Service<Request<Body>> for SignatureService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let authenticator = Arc::clone(&self.authenticator);
        let metrics = Arc::clone(&self.metrics);
        let max_body_bytes = self.max_body_bytes;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            metrics.record_request();

            // Content-Length fast path
            if declared_length(req.headers()).is_some_and(|len| len > max_body_bytes) {
                warn!(max = max_body_bytes, "Request too large (from header)");
                metrics.record_oversized_body();
                return Ok(ApiError::payload_too_large(max_body_bytes).into_response());
            }

            let (parts, body) = req.into_parts();
            let raw_body = match to_bytes(body, max_body_bytes).await {
                Ok(bytes) => bytes,
                Err(e) if is_length_limit(&e) => {
                    warn!(max = max_body_bytes, "Request too large (from body)");
                    metrics.record_oversized_body();
                    return Ok(ApiError::payload_too_large(max_body_bytes).into_response());
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read request body");
                    return Ok(ApiError::malformed("request body could not be read").into_response());
                }
            };

            let signed = SignedRequest::new(
                raw_body.clone(),
                header_value(&parts.headers, SIGNATURE_HEADER),
                header_value(&parts.headers, TIMESTAMP_HEADER),
            );

            match authenticator.authenticate(&signed) {
                AuthResult::Authenticated => {
                    debug!(size = raw_body.len(), "Request signature verified");
                    let req = Request::from_parts(parts, Body::from(raw_body));
                    inner.call(req).await
                }
                AuthResult::Rejected { .. } => {
                    warn!("Rejected request with a bad signature");
                    metrics.record_rejected_signature();
                    Ok(ApiError::unauthorized().into_response())
                }
            }
        })
    }
}

/// Whether a body read failed because the length limit was hit.
fn is_length_limit(error: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse::<usize>()
        .ok()
}

/// Header value as a string; non-UTF-8 values count as absent.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
