//! Oversized request bodies.
//!
//! ## Attack Vectors
//!
//! - Declared `Content-Length` above the limit
//! - Body above the limit without a declared length
//!
//! Both are refused with 413 before the signature is checked.

#[cfg(test)]
mod tests {
    use crate::fixtures::{keypair, read_response, relay_config, sign, TIMESTAMP};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use ix_01_request_auth::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
    use ix_runtime::RelayRuntime;
    use tower::ServiceExt;

    const LIMIT: usize = 256;

    fn runtime() -> RelayRuntime {
        let mut config = relay_config(None);
        config.gateway.max_body_bytes = LIMIT;
        RelayRuntime::new(config).unwrap()
    }

    fn oversized_body() -> Vec<u8> {
        let padding = "x".repeat(LIMIT);
        format!(r#"{{"type":1,"padding":"{padding}"}}"#).into_bytes()
    }

    #[tokio::test]
    async fn test_declared_length_over_limit_is_refused() {
        let runtime = runtime();
        let body = oversized_body();
        let request = Request::post("/interactions")
            .header("content-length", body.len())
            .header(SIGNATURE_HEADER, sign(&keypair(), TIMESTAMP, &body))
            .header(TIMESTAMP_HEADER, TIMESTAMP)
            .body(Body::from(body))
            .unwrap();

        let response = runtime.gateway().router().oneshot(request).await.unwrap();
        let (status, body) = read_response(response).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");

        let metrics = runtime.gateway().metrics().to_json();
        assert_eq!(metrics["oversized_bodies"], 1);
        assert_eq!(metrics["rejected_signatures"], 0);
    }

    #[tokio::test]
    async fn test_streamed_body_over_limit_is_refused() {
        let runtime = runtime();
        let body = oversized_body();
        let signature = sign(&keypair(), TIMESTAMP, &body);
        let chunks: Vec<Result<Vec<u8>, std::io::Error>> =
            body.chunks(64).map(|c| Ok(c.to_vec())).collect();
        let request = Request::post("/interactions")
            .header(SIGNATURE_HEADER, signature)
            .header(TIMESTAMP_HEADER, TIMESTAMP)
            .body(Body::from_stream(futures::stream::iter(chunks)))
            .unwrap();

        let response = runtime.gateway().router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_body_at_limit_is_accepted() {
        let runtime = runtime();
        let mut body = br#"{"type":1}"#.to_vec();
        body.resize(LIMIT, b' ');
        let request = Request::post("/interactions")
            .header(SIGNATURE_HEADER, sign(&keypair(), TIMESTAMP, &body))
            .header(TIMESTAMP_HEADER, TIMESTAMP)
            .body(Body::from(body))
            .unwrap();

        let response = runtime.gateway().router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
