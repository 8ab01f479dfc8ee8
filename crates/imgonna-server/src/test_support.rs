//! Shared helpers for tests that need a stand-in upstream API.

use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// API key the stand-in upstream accepts
pub const TEST_API_KEY: &str = "test-key";

/// Messages API envelope whose first content block carries `text`
pub fn messages_body(text: &str) -> String {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-sonnet-20241022",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 120, "output_tokens": 48 }
    })
    .to_string()
}

/// Spawn a local messages endpoint answering with `status` and `body`.
///
/// Requests without the expected headers or payload shape get 401/400.
/// Returns the endpoint URL.
pub async fn spawn_upstream(status: StatusCode, body: String) -> String {
    let handler = move |headers: HeaderMap, Json(request): Json<Value>| {
        let body = body.clone();
        async move {
            let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
            if header("x-api-key") != Some(TEST_API_KEY) {
                return (StatusCode::UNAUTHORIZED, "invalid x-api-key".to_string());
            }
            if header("anthropic-version") != Some("2023-06-01") {
                return (StatusCode::BAD_REQUEST, "missing anthropic-version".to_string());
            }
            let well_formed = request["model"].is_string()
                && request["max_tokens"] == 2500
                && request["messages"][0]["role"] == "user"
                && request["messages"][0]["content"].is_string();
            if !well_formed {
                return (StatusCode::BAD_REQUEST, "malformed request".to_string());
            }
            (status, body)
        }
    };

    let app = Router::new().route("/v1/messages", post(handler));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/v1/messages", addr)
}
