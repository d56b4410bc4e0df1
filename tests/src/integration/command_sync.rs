//! # Bulk Command Sync
//!
//! `register` and the startup sync against a local stand-in for the
//! platform REST API, through the real reqwest adapter.

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        read_response, relay, relay_config, signed_request, FakePlatform, APPLICATION_ID,
        BOT_TOKEN,
    };
    use axum::http::{Method, StatusCode};
    use ix_02_command_registry::{PlatformError, SyncError};
    use ix_runtime::commands::REGISTERED_MESSAGE;
    use ix_runtime::RelayRuntime;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tower::ServiceExt;

    fn expected_commands() -> Value {
        json!([
            {
                "name": "ping",
                "type": 1,
                "description": "Ping Pong",
                "integration_types": [1],
                "contexts": [0]
            },
            {
                "name": "register",
                "type": 1,
                "description": "Bulk registers all commands",
                "integration_types": [1],
                "contexts": [0]
            },
            {
                "name": "info",
                "type": 1,
                "description": "No description",
                "integration_types": [1],
                "contexts": [0]
            }
        ])
    }

    async fn invoke_register(runtime: &RelayRuntime) -> (StatusCode, Value) {
        let body = br#"{"type":2,"data":{"name":"register"}}"#;
        let response = runtime
            .gateway()
            .router()
            .oneshot(signed_request(body))
            .await
            .unwrap();
        read_response(response).await
    }

    #[tokio::test]
    async fn test_register_command_overwrites_platform_commands() {
        let platform = FakePlatform::start(StatusCode::OK).await;
        let runtime = relay(Some(&platform.base_url()));

        let (status, body) = invoke_register(&runtime).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"type": 4, "data": {"flags": 64, "content": REGISTERED_MESSAGE}})
        );

        let requests = platform.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.path,
            format!("/applications/{APPLICATION_ID}/commands")
        );
        assert_eq!(
            request.authorization.as_deref(),
            Some(format!("Bot {BOT_TOKEN}").as_str())
        );
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
        assert_eq!(request.body, expected_commands());
    }

    #[tokio::test]
    async fn test_platform_failure_fails_the_command() {
        let platform = FakePlatform::start(StatusCode::FORBIDDEN).await;
        let runtime = relay(Some(&platform.base_url()));

        let (status, body) = invoke_register(&runtime).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(platform.requests().len(), 1);
        assert_eq!(runtime.registry().len(), 3);
    }

    #[tokio::test]
    async fn test_repeated_sync_sends_identical_bodies() {
        let platform = FakePlatform::start(StatusCode::OK).await;
        let runtime = relay(Some(&platform.base_url()));

        runtime.sync_commands().await.unwrap();
        runtime.sync_commands().await.unwrap();

        let requests = platform.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].body, requests[1].body);
        assert_eq!(requests[0].path, requests[1].path);
    }

    #[tokio::test]
    async fn test_sync_without_token_is_config_error() {
        let platform = FakePlatform::start(StatusCode::OK).await;
        let mut config = relay_config(Some(&platform.base_url()));
        config.rest.token = None;
        let runtime = RelayRuntime::new(config).unwrap();

        let err = runtime.sync_commands().await.unwrap_err();
        assert!(matches!(
            err,
            SyncError::Upstream(PlatformError::Config(_))
        ));
        assert!(platform.requests().is_empty());
    }

    #[tokio::test]
    async fn test_sync_on_startup_pushes_commands_once() {
        let platform = FakePlatform::start(StatusCode::OK).await;
        let mut config = relay_config(Some(&platform.base_url()));
        config.sync_on_startup = true;
        let runtime = Arc::new(RelayRuntime::new(config).unwrap());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = {
            let runtime = Arc::clone(&runtime);
            tokio::spawn(async move { runtime.serve(listener).await })
        };

        // The sync runs before the gateway starts serving.
        for _ in 0..50 {
            if !platform.requests().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        runtime.shutdown();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();

        assert!(result.is_ok());
        let requests = platform.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, expected_commands());
    }
}
