//! Top-level interaction routing and the HTTP handlers.
//!
//! A verified body is parsed into an [`Interaction`] and routed on its
//! numeric type: PING is answered directly, APPLICATION_COMMAND goes to the
//! dispatcher, anything else is refused with 501.

use crate::domain::error::{ApiError, ApiResult};
use crate::middleware::{GatewayMetrics, SignatureLayer, TracingLayer};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use ix_01_request_auth::RequestAuthenticationApi;
use ix_02_command_registry::CommandDispatchApi;
use shared_types::{Interaction, InteractionResponse, InteractionType};
use std::sync::Arc;
use tracing::{debug, info};

/// Route one authenticated interaction.
///
/// PING never touches the dispatcher.
pub async fn route_interaction(
    dispatcher: &dyn CommandDispatchApi,
    interaction: Interaction,
) -> ApiResult<InteractionResponse> {
    match interaction.kind {
        InteractionType::Ping => {
            debug!("Answering PING");
            Ok(InteractionResponse::pong())
        }
        InteractionType::ApplicationCommand => {
            let response = dispatcher.dispatch(interaction).await?;
            Ok(response)
        }
        other => {
            info!(interaction_type = %other, "Interaction type not implemented");
            Err(ApiError::not_implemented(other))
        }
    }
}

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<dyn CommandDispatchApi>,
    pub metrics: Arc<GatewayMetrics>,
}

/// Build the HTTP router.
///
/// `interactions_path` is guarded by the signature layer; `/health` is not.
/// Unknown paths and methods are answered 404 / 405 without touching the
/// signature layer or its counters.
pub fn build_router(
    interactions_path: &str,
    authenticator: Arc<dyn RequestAuthenticationApi>,
    dispatcher: Arc<dyn CommandDispatchApi>,
    metrics: Arc<GatewayMetrics>,
    max_body_bytes: usize,
) -> Router {
    let state = AppState {
        dispatcher,
        metrics: Arc::clone(&metrics),
    };

    let interactions = post(handle_interaction)
        .route_layer(SignatureLayer::new(authenticator, metrics, max_body_bytes));

    Router::new()
        .route("/health", get(health_check))
        .route(interactions_path, interactions)
        .layer(TracingLayer::new())
        .with_state(state)
}

/// Handle a verified interaction body
async fn handle_interaction(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let interaction = match Interaction::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            debug!(error = %e, "Unparsable interaction body");
            return ApiError::from(e).into_response();
        }
    };

    let kind = interaction.kind;
    let result = route_interaction(state.dispatcher.as_ref(), interaction).await;

    match kind {
        InteractionType::Ping => state.metrics.record_ping(),
        InteractionType::ApplicationCommand => state.metrics.record_dispatch(result.is_ok()),
        _ => {}
    }

    match result {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let mut body = serde_json::json!({
        "status": "ok",
        "service": "interactions-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "commands": state.dispatcher.command_count(),
    });
    if let (Some(body), serde_json::Value::Object(metrics)) =
        (body.as_object_mut(), state.metrics.to_json())
    {
        body.extend(metrics);
    }
    Json(body)
}
