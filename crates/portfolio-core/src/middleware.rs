use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use uuid::Uuid;

use crate::error::ErrorParts;

#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(id.parse().unwrap()))
    }
}

/// Build the request-id layer. Apply with `.layer(request_id_layer())` in router.
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(
        axum::http::HeaderName::from_static("x-request-id"),
        MakeUuidRequestId,
    )
}

/// Boundary middleware that renders every error into the uniform envelope
/// `{success, statusCode, timestamp, path, method, error, message}`.
///
/// Service error types attach [`ErrorParts`] as a response extension; this
/// layer adds the request context (path, method) the error type cannot see.
/// 5xx responses are logged as errors, 4xx as warnings.
pub async fn error_envelope(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = next.run(req).await;
    let Some(parts) = resp.extensions().get::<ErrorParts>().cloned() else {
        return resp;
    };

    let status = parts.status;
    if status.is_server_error() {
        // This is the only place server errors are logged; the underlying
        // chain travels here as `cause`.
        let cause = parts.cause.as_deref().unwrap_or("");
        tracing::error!(%method, %path, status = status.as_u16(), error = parts.error, cause, "request failed");
    } else {
        tracing::warn!(%method, %path, status = status.as_u16(), error = parts.error, "request rejected");
    }

    let message = if parts.messages.len() == 1 {
        serde_json::json!(parts.messages[0])
    } else {
        serde_json::json!(parts.messages)
    };
    let body = serde_json::json!({
        "success": false,
        "statusCode": status.as_u16(),
        "timestamp": crate::serde::now_rfc3339_ms(),
        "path": path,
        "method": method.as_str(),
        "error": parts.error,
        "message": message,
    });
    (status, axum::Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::routing::get;
    use tower::ServiceExt as _;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    async fn failing_handler() -> Response {
        let parts = ErrorParts::new(StatusCode::NOT_FOUND, "NOT_FOUND", "thing not found");
        (
            parts.status,
            axum::Extension(parts),
            axum::Json(serde_json::json!({})),
        )
            .into_response()
    }

    async fn broken_handler() -> Response {
        let parts =
            ErrorParts::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", "internal error")
                .with_cause("load profile: connection refused");
        (
            parts.status,
            axum::Extension(parts),
            axum::Json(serde_json::json!({})),
        )
            .into_response()
    }

    fn app() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/fail", get(failing_handler))
            .route("/broken", get(broken_handler))
            .layer(axum::middleware::from_fn(error_envelope))
    }

    #[tokio::test]
    async fn passes_through_success_responses() {
        let resp = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/ok")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn rewrites_error_responses_into_envelope() {
        let resp = app()
            .oneshot(
                axum::http::Request::builder()
                    .method("GET")
                    .uri("/fail")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["path"], "/fail");
        assert_eq!(json["method"], "GET");
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["message"], "thing not found");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn keeps_the_cause_out_of_the_body() {
        let resp = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/broken")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["error"], "INTERNAL");
        assert_eq!(json["message"], "internal error");
        assert!(!text.contains("connection refused"));
    }
}
