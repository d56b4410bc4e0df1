//! # Interactions Gateway (IX-03)
//!
//! The HTTP boundary of the relay: one signed POST endpoint for interaction
//! callbacks and an unsigned health check.
//!
//! ## Request Flow
//!
//! ```text
//! POST /interactions
//!   → TracingLayer      (interaction_request span)
//!   → SignatureLayer    (body limit, Ed25519 gate, 401 on failure)
//!   → handle_interaction
//!        parse JSON            (400 on failure)
//!        route on `type`:
//!          PING                → {"type": 1}
//!          APPLICATION_COMMAND → CommandDispatchApi::dispatch
//!          anything else       → 501
//! ```
//!
//! ## Error Mapping
//!
//! | Failure | Status |
//! |---------|--------|
//! | bad or missing signature | 401 `Bad request signature` |
//! | malformed payload or unreadable body | 400 |
//! | unknown command | 404 |
//! | body over limit | 413 |
//! | unsupported interaction type | 501 |
//! | unknown path / wrong method | 404 / 405, unsigned |
//! | handler / reply / upstream failure | 500 |
//!
//! # Usage
//!
//! ```ignore
//! let service = InteractionsGatewayService::new(config, authenticator, dispatcher)?;
//! service.start().await?;
//! ```

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

pub use domain::config::{
    ConfigError, GatewayConfig, HttpConfig, DEFAULT_INTERACTIONS_PATH, DEFAULT_MAX_BODY_BYTES,
};
pub use domain::error::{codes, ApiError, ApiResult, GatewayError};
pub use middleware::{GatewayMetrics, SignatureLayer, TracingLayer};
pub use router::{build_router, route_interaction, AppState};
pub use service::InteractionsGatewayService;
