//! HTTP server for devkit tools.
//!
//! Serves the diff checker as a JSON endpoint alongside health and info
//! routes. Every failure reaches the caller as `{ "error": "..." }`.

pub mod api;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use api::{ApiError, ErrorBody, DIFF_FAILED};
pub use config::ServerConfig;
pub use endpoint::{endpoints, HealthResponse};
pub use error::{ServerError, ServerResult};
pub use handler::{DiffLimits, DiffRequest};
pub use server::DevkitServer;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app() -> Router {
        router::build_router(&ServerConfig::default())
    }

    async fn post_diff(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(endpoints::DIFF_CHECKER)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(body: Value) -> (StatusCode, Value) {
        post_diff(app(), body.to_string()).await
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(endpoints::HEALTH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn info_lists_diff_checker() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(endpoints::INFO)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let info: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(info["tools"], json!(["diff-checker"]));
    }

    #[tokio::test]
    async fn diff_identical_lines() {
        let (status, body) = post_json(json!({
            "text1": "a\nb\nc",
            "text2": "a\nb\nc",
            "mode": "lines"
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "diff": [
                    { "type": "equal", "value": "a" },
                    { "type": "equal", "value": "b" },
                    { "type": "equal", "value": "c" }
                ],
                "stats": { "additions": 0, "deletions": 0, "unchanged": 3 }
            })
        );
    }

    #[tokio::test]
    async fn diff_defaults_to_lines() {
        let (status, body) = post_json(json!({ "text1": "x\ny", "text2": "x\nz" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["stats"],
            json!({ "additions": 1, "deletions": 1, "unchanged": 1 })
        );
    }

    #[tokio::test]
    async fn diff_chars_insertion() {
        let (status, body) = post_json(json!({ "text1": "ab", "text2": "aXb", "mode": "chars" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["diff"][1], json!({ "type": "insert", "value": "X" }));
        assert_eq!(
            body["stats"],
            json!({ "additions": 1, "deletions": 0, "unchanged": 2 })
        );
    }

    #[tokio::test]
    async fn diff_empty_strings_are_valid() {
        let (status, body) = post_json(json!({ "text1": "", "text2": "", "mode": "chars" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["diff"], json!([]));
    }

    #[tokio::test]
    async fn missing_text1_is_bad_request() {
        let (status, body) = post_json(json!({ "text2": "x", "mode": "lines" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Both text1 and text2 are required" }));
    }

    #[tokio::test]
    async fn missing_text_reported_before_type_errors() {
        let (status, body) = post_json(json!({ "text1": 5 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Both text1 and text2 are required" }));
    }

    #[tokio::test]
    async fn non_object_bodies_are_missing_input() {
        for body in ["[]", "5", "\"text\"", "true"] {
            let (status, json) = post_diff(app(), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert_eq!(json["error"], "Both text1 and text2 are required");
        }
    }

    #[tokio::test]
    async fn null_body_is_generic_failure() {
        let (status, body) = post_diff(app(), "null").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": DIFF_FAILED }));
    }

    #[tokio::test]
    async fn null_text_passes_presence_then_fails() {
        let (status, body) = post_json(json!({ "text1": "x", "text2": null })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to compute diff");
    }

    #[tokio::test]
    async fn invalid_mode_reported_before_type_errors() {
        let (status, body) = post_json(json!({ "text1": 1, "text2": "x", "mode": "paragraphs" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid mode. Use \"chars\", \"words\", or \"lines\"");
    }

    #[tokio::test]
    async fn invalid_mode_is_bad_request() {
        let (status, body) = post_json(json!({ "text1": "a", "text2": "b", "mode": "paragraphs" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Invalid mode. Use \"chars\", \"words\", or \"lines\"" })
        );
    }

    #[tokio::test]
    async fn non_string_mode_is_bad_request() {
        let (status, body) = post_json(json!({ "text1": "a", "text2": "b", "mode": 7 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid mode. Use \"chars\", \"words\", or \"lines\"");
    }

    #[tokio::test]
    async fn null_mode_is_bad_request() {
        let (status, body) = post_json(json!({ "text1": "a", "text2": "b", "mode": null })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid mode. Use \"chars\", \"words\", or \"lines\"");
    }

    #[tokio::test]
    async fn malformed_json_is_generic_failure() {
        let (status, body) = post_diff(app(), "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": DIFF_FAILED }));
    }

    #[tokio::test]
    async fn non_string_text_is_generic_failure() {
        let (status, body) = post_json(json!({ "text1": 42, "text2": "x" })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to compute diff");
    }

    #[tokio::test]
    async fn oversized_table_is_generic_failure() {
        let body = json!({
            "text1": "a".repeat(400_000),
            "text2": "b".repeat(400_000),
            "mode": "chars"
        });
        let (status, body) = post_json(body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": DIFF_FAILED }));
    }

    #[tokio::test]
    async fn table_limit_comes_from_config() {
        let config = ServerConfig {
            max_table_cells: 20,
            ..ServerConfig::default()
        };
        let request = json!({ "text1": "abcde", "text2": "abcdef", "mode": "chars" });
        let (status, _) = post_diff(router::build_router(&config), request.to_string()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let request = json!({ "text1": "ab", "text2": "abc", "mode": "chars" });
        let (status, body) = post_diff(router::build_router(&config), request.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["additions"], 1);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let config = ServerConfig {
            max_body_bytes: 16,
            ..ServerConfig::default()
        };
        let app = router::build_router(&config);
        let body = json!({ "text1": "a".repeat(64), "text2": "b" }).to_string();
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(endpoints::DIFF_CHECKER)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
