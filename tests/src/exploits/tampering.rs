//! Tampered signature material.
//!
//! ## Attack Vectors
//!
//! - Flipping any byte of the body, the timestamp or the signature
//! - Replaying a captured signature under a new timestamp
//! - Moving bytes between timestamp and body (no separator in the message)
//! - Signing with a different key
//! - Malformed hex, truncated or padded signatures

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        keypair, read_response, relay, request_with, sign, TIMESTAMP,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use ix_runtime::RelayRuntime;
    use serde_json::Value;
    use shared_crypto::Ed25519KeyPair;
    use tower::ServiceExt;

    const BODY: &[u8] = br#"{"type":2,"data":{"name":"ping"}}"#;

    async fn send(runtime: &RelayRuntime, request: Request<Body>) -> (StatusCode, Value) {
        let response = runtime.gateway().router().oneshot(request).await.unwrap();
        read_response(response).await
    }

    async fn assert_rejected(runtime: &RelayRuntime, request: Request<Body>, case: &str) {
        let (status, body) = send(runtime, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{case}");
        assert_eq!(body, Value::String("Bad request signature".into()), "{case}");
    }

    fn flip(bytes: &[u8], index: usize) -> Vec<u8> {
        let mut flipped = bytes.to_vec();
        flipped[index] ^= 0x01;
        flipped
    }

    #[tokio::test]
    async fn test_untampered_request_is_accepted() {
        let runtime = relay(None);
        let request = request_with(BODY, Some(sign(&keypair(), TIMESTAMP, BODY)), Some(TIMESTAMP));
        let (status, _) = send(&runtime, request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_any_flipped_body_byte_is_rejected() {
        let runtime = relay(None);
        let signature = sign(&keypair(), TIMESTAMP, BODY);

        for index in 0..BODY.len() {
            let tampered = flip(BODY, index);
            let request = request_with(&tampered, Some(signature.clone()), Some(TIMESTAMP));
            assert_rejected(&runtime, request, &format!("body byte {index}")).await;
        }
    }

    #[tokio::test]
    async fn test_any_flipped_timestamp_byte_is_rejected() {
        let runtime = relay(None);
        let signature = sign(&keypair(), TIMESTAMP, BODY);

        for index in 0..TIMESTAMP.len() {
            let tampered = String::from_utf8(flip(TIMESTAMP.as_bytes(), index)).unwrap();
            let request = request_with(BODY, Some(signature.clone()), Some(&tampered));
            assert_rejected(&runtime, request, &format!("timestamp byte {index}")).await;
        }
    }

    #[tokio::test]
    async fn test_any_flipped_signature_byte_is_rejected() {
        let runtime = relay(None);
        let signature = hex::decode(sign(&keypair(), TIMESTAMP, BODY)).unwrap();

        for index in 0..signature.len() {
            let tampered = hex::encode(flip(&signature, index));
            let request = request_with(BODY, Some(tampered), Some(TIMESTAMP));
            assert_rejected(&runtime, request, &format!("signature byte {index}")).await;
        }
    }

    #[tokio::test]
    async fn test_replay_under_new_timestamp_is_rejected() {
        let runtime = relay(None);
        let captured = sign(&keypair(), TIMESTAMP, BODY);
        let request = request_with(BODY, Some(captured), Some("1700009999"));
        assert_rejected(&runtime, request, "replay").await;
    }

    #[tokio::test]
    async fn test_shifted_boundary_bytes_fail_to_parse() {
        // "1700000000" + "{...}" and "170000000" + "0{...}" concatenate to
        // the same message, so the signature verifies. The moved byte lands
        // in the body, which then no longer parses.
        let runtime = relay(None);
        let mut shifted = b"0".to_vec();
        shifted.extend_from_slice(BODY);
        let signature = sign(&keypair(), TIMESTAMP, BODY);

        let request = request_with(&shifted, Some(signature), Some("170000000"));
        let (status, _) = send(&runtime, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_signature_from_other_key_is_rejected() {
        let runtime = relay(None);
        let attacker = Ed25519KeyPair::from_seed([0x66; 32]);
        let request = request_with(BODY, Some(sign(&attacker, TIMESTAMP, BODY)), Some(TIMESTAMP));
        assert_rejected(&runtime, request, "foreign key").await;
    }

    #[tokio::test]
    async fn test_malformed_signatures_are_rejected() {
        let runtime = relay(None);
        let valid = sign(&keypair(), TIMESTAMP, BODY);
        let cases = [
            String::new(),
            "zz".repeat(64),
            valid[..126].to_string(),
            format!("{valid}00"),
            format!("0x{valid}"),
            "0".repeat(128),
        ];

        for signature in cases {
            let case = format!("signature {signature:?}");
            let request = request_with(BODY, Some(signature), Some(TIMESTAMP));
            assert_rejected(&runtime, request, &case).await;
        }
    }

    #[tokio::test]
    async fn test_missing_headers_are_rejected() {
        let runtime = relay(None);
        let signature = sign(&keypair(), TIMESTAMP, BODY);

        assert_rejected(&runtime, request_with(BODY, None, Some(TIMESTAMP)), "no signature").await;
        assert_rejected(&runtime, request_with(BODY, Some(signature), None), "no timestamp").await;
        assert_rejected(&runtime, request_with(BODY, None, None), "no headers").await;
    }
}
