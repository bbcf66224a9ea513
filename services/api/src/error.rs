use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use portfolio_core::error::ErrorParts;

/// API domain error variants. Rendering into the response envelope happens
/// in `portfolio_core::middleware::error_envelope`; this type only attaches
/// [`ErrorParts`] so the middleware knows status, kind and messages.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid credentials")]
    Unauthenticated,
    #[error("{0}")]
    InvalidState(String),
    #[error("{0}")]
    Expired(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::Expired(_) => "EXPIRED",
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::InvalidState(_) | Self::Expired(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let messages = match &self {
            Self::Validation(fields) => fields.clone(),
            other => vec![other.to_string()],
        };
        // The anyhow chain only exists here; hand it to the envelope
        // middleware, which owns all error logging.
        let cause = match &self {
            Self::Internal(e) => Some(format!("{e:#}")),
            _ => None,
        };
        let parts = ErrorParts {
            status,
            error: self.kind(),
            messages,
            cause,
        };
        (status, axum::Extension(parts), axum::Json(serde_json::json!({}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_unauthenticated_to_401() {
        let err = ApiError::Unauthenticated;
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.kind(), "UNAUTHENTICATED");
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn should_map_invalid_state_to_400() {
        let err = ApiError::InvalidState("no OTP requested".to_owned());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "INVALID_STATE");
    }

    #[test]
    fn should_map_expired_to_400() {
        let err = ApiError::Expired("OTP expired".to_owned());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "EXPIRED");
    }

    #[test]
    fn should_map_conflict_to_409() {
        let err = ApiError::Conflict("email already registered".to_owned());
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.kind(), "CONFLICT");
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = ApiError::NotFound("project");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "project not found");
    }

    #[test]
    fn should_map_validation_to_400_with_field_list() {
        let err = ApiError::Validation(vec![
            "email must be a valid email address".to_owned(),
            "name must not be empty".to_owned(),
        ]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "VALIDATION");
    }

    #[test]
    fn should_map_internal_to_500() {
        let err = ApiError::Internal(anyhow::anyhow!("db error"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal error");
    }

    #[tokio::test]
    async fn should_attach_error_parts_extension() {
        let resp = ApiError::NotFound("blog").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let parts = resp
            .extensions()
            .get::<ErrorParts>()
            .expect("ErrorParts extension");
        assert_eq!(parts.error, "NOT_FOUND");
        assert_eq!(parts.messages, vec!["blog not found".to_owned()]);
        assert_eq!(parts.cause, None);
    }

    #[tokio::test]
    async fn should_carry_the_anyhow_chain_as_cause() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused").context("load profile"));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let parts = resp
            .extensions()
            .get::<ErrorParts>()
            .expect("ErrorParts extension");
        assert_eq!(parts.error, "INTERNAL");
        // Clients only ever see the generic message.
        assert_eq!(parts.messages, vec!["internal error".to_owned()]);
        let cause = parts.cause.as_deref().expect("cause");
        assert!(cause.contains("load profile"));
        assert!(cause.contains("connection refused"));
    }
}
