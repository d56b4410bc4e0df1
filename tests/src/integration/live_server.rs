//! # Live Server
//!
//! The runtime serving on a real socket, driven by an HTTP client.

#[cfg(test)]
mod tests {
    use crate::fixtures::{keypair, relay, sign, TIMESTAMP};
    use ix_01_request_auth::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_signed_requests_over_http_then_graceful_shutdown() {
        let runtime = Arc::new(relay(None));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = {
            let runtime = Arc::clone(&runtime);
            tokio::spawn(async move { runtime.serve(listener).await })
        };

        let client = reqwest::Client::new();

        let health: Value = client
            .get(format!("http://{addr}/health"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["commands"], 3);

        let body = br#"{"type":2,"data":{"name":"ping"}}"#.to_vec();
        let response = client
            .post(format!("http://{addr}/interactions"))
            .header(SIGNATURE_HEADER, sign(&keypair(), TIMESTAMP, &body))
            .header(TIMESTAMP_HEADER, TIMESTAMP)
            .header("content-type", "application/json")
            .body(body.clone())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let reply: Value = response.json().await.unwrap();
        assert_eq!(reply, json!({"type": 4, "data": {"flags": 64, "content": "Pong!"}}));

        let response = client
            .post(format!("http://{addr}/interactions"))
            .header(SIGNATURE_HEADER, sign(&keypair(), "1700000001", &body))
            .header(TIMESTAMP_HEADER, TIMESTAMP)
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(response.text().await.unwrap(), "Bad request signature");
        drop(client);

        runtime.shutdown();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
