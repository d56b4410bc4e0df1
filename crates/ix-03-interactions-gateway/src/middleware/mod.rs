//! Middleware stack for the interactions endpoint.
//!
//! Layer order: Request → Tracing → Signature → Handler
//!
//! The health route sits outside the signature layer.

pub mod metrics;
pub mod signature;
pub mod tracing;

pub use metrics::GatewayMetrics;
pub use signature::SignatureLayer;
pub use tracing::TracingLayer;
