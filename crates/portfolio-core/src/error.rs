use axum::http::StatusCode;

/// Error details attached to a response as an extension. The envelope
/// middleware ([`crate::middleware::error_envelope`]) picks this up and
/// rewrites the body into the uniform error envelope; responses without it
/// pass through untouched.
#[derive(Debug, Clone)]
pub struct ErrorParts {
    pub status: StatusCode,
    /// Stable machine-readable kind, e.g. `UNAUTHENTICATED`.
    pub error: &'static str,
    /// One entry for plain errors, one per field for validation errors.
    pub messages: Vec<String>,
    /// Underlying error chain for server errors. Logged by the envelope
    /// middleware, never serialized into the body.
    pub cause: Option<String>,
}

impl ErrorParts {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error,
            messages: vec![message.into()],
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_single_message() {
        let parts = ErrorParts::new(StatusCode::NOT_FOUND, "NOT_FOUND", "project not found");
        assert_eq!(parts.status, StatusCode::NOT_FOUND);
        assert_eq!(parts.error, "NOT_FOUND");
        assert_eq!(parts.messages, vec!["project not found".to_owned()]);
        assert_eq!(parts.cause, None);
    }

    #[test]
    fn with_cause_attaches_the_chain() {
        let parts = ErrorParts::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", "internal error")
            .with_cause("load profile: connection refused");
        assert_eq!(
            parts.cause.as_deref(),
            Some("load profile: connection refused")
        );
    }
}
