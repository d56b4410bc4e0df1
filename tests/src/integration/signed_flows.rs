//! # Signed Interaction Flows
//!
//! Every request goes through the full middleware stack of the runtime's
//! router: body limit, signature check, parse, top-level routing, dispatch
//! and envelope shaping.

#[cfg(test)]
mod tests {
    use crate::fixtures::{read_response, relay, relay_config, signed_request};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use ix_runtime::RelayRuntime;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post(runtime: &RelayRuntime, payload: Value) -> (StatusCode, Value) {
        let body = serde_json::to_vec(&payload).unwrap();
        let response = runtime
            .gateway()
            .router()
            .oneshot(signed_request(&body))
            .await
            .unwrap();
        read_response(response).await
    }

    fn member() -> Value {
        json!({
            "user": {
                "id": "80351110224678912",
                "username": "nelly",
                "global_name": "Nelly",
                "avatar": "8342729096ea3675442027381ff50dfe",
                "discriminator": "0"
            },
            "roles": ["41771983423143936"],
            "joined_at": "2015-04-26T06:26:56.936000+00:00",
            "deaf": false,
            "mute": false
        })
    }

    #[tokio::test]
    async fn test_signed_ping_is_ponged() {
        let (status, body) = post(&relay(None), json!({"type": 1, "id": "1"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"type": 1}));
    }

    #[tokio::test]
    async fn test_ping_command_returns_content_envelope() {
        let (status, body) = post(
            &relay(None),
            json!({"type": 2, "id": "2", "data": {"id": "9", "name": "ping", "type": 1}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"type": 4, "data": {"flags": 64, "content": "Pong!"}})
        );
    }

    #[tokio::test]
    async fn test_info_command_returns_single_embed() {
        let (status, body) = post(
            &relay(None),
            json!({
                "type": 2,
                "guild_id": "613425648685547541",
                "data": {"name": "info"},
                "member": member()
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], 4);
        assert_eq!(body["data"]["flags"], 64);
        assert!(body["data"].get("content").is_none());

        let embeds = body["data"]["embeds"].as_array().unwrap();
        assert_eq!(embeds.len(), 1);
        let embed = &embeds[0];
        assert_eq!(embed["type"], "rich");
        assert_eq!(embed["title"], "Nelly - nelly");
        assert_eq!(embed["description"], "<@&41771983423143936>");
        assert_eq!(embed["color"], 0xff0000);
        assert_eq!(embed["footer"]["text"], "Joined: April 26, 2015 06:26:56 AM");
        assert_eq!(
            embed["thumbnail"]["url"],
            "https://cdn.discordapp.com/avatars/80351110224678912/8342729096ea3675442027381ff50dfe"
        );
        assert!(embed["timestamp"].is_string());
        assert!(embed.get("fields").is_none());
    }

    #[tokio::test]
    async fn test_info_without_member_is_internal_error() {
        let (status, body) = post(&relay(None), json!({"type": 2, "data": {"name": "info"}})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_command_is_not_found() {
        let (status, body) =
            post(&relay(None), json!({"type": 2, "data": {"name": "Ping"}})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "COMMAND_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unrouted_interaction_types_are_not_implemented() {
        for kind in [3, 4, 5, 99] {
            let (status, body) = post(&relay(None), json!({"type": kind})).await;
            assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "type {kind}");
            assert_eq!(body["error"]["code"], "NOT_IMPLEMENTED");
        }
    }

    #[tokio::test]
    async fn test_command_without_name_is_bad_request() {
        let (status, body) = post(&relay(None), json!({"type": 2, "data": {"id": "1"}})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MALFORMED_PAYLOAD");
    }

    #[tokio::test]
    async fn test_without_public_key_everything_is_rejected() {
        let mut config = relay_config(None);
        config.public_key = None;
        let runtime = RelayRuntime::new(config).unwrap();

        let (status, body) = post(&runtime, json!({"type": 1})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, Value::String("Bad request signature".into()));
    }

    #[tokio::test]
    async fn test_concurrent_commands_get_independent_envelopes() {
        let runtime = relay(None);
        let router = runtime.gateway().router();

        let mut tasks = Vec::new();
        for i in 0..16 {
            let router = router.clone();
            let payload = if i % 2 == 0 {
                json!({"type": 2, "data": {"name": "ping"}})
            } else {
                json!({"type": 2, "data": {"name": "info"}, "member": member()})
            };
            tasks.push(tokio::spawn(async move {
                let body = serde_json::to_vec(&payload).unwrap();
                let response = router.oneshot(signed_request(&body)).await.unwrap();
                (i, read_response(response).await)
            }));
        }

        for task in tasks {
            let (i, (status, body)) = task.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            if i % 2 == 0 {
                assert_eq!(body["data"]["content"], "Pong!");
                assert!(body["data"].get("embeds").is_none());
            } else {
                assert_eq!(body["data"]["embeds"].as_array().unwrap().len(), 1);
                assert!(body["data"].get("content").is_none());
            }
        }
    }

    #[tokio::test]
    async fn test_health_reports_builtin_commands_and_counters() {
        let runtime = relay(None);
        post(&runtime, json!({"type": 1})).await;
        post(&runtime, json!({"type": 2, "data": {"name": "ping"}})).await;

        let response = runtime
            .gateway()
            .router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let (status, body) = read_response(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["commands"], 3);
        assert_eq!(body["pings"], 1);
        assert_eq!(body["commands_dispatched"], 1);
        assert_eq!(body["requests_total"], 2);
    }
}
