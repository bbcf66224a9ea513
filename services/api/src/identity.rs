use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::state::AppState;
use crate::usecase::auth::validate_session_token;

/// Name of the HTTP-only session cookie set by OTP verification.
pub const SESSION_COOKIE: &str = "access_token";

/// Authenticated caller, extracted from the session cookie or a
/// `Authorization: Bearer` header. Write endpoints take this as an argument
/// to require a valid session.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = crate::error::ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_owned())
            .or_else(|| {
                parts
                    .headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.strip_prefix("Bearer "))
                    .map(str::to_owned)
            })
            .ok_or(crate::error::ApiError::Unauthenticated)?;

        let claims = validate_session_token(&token, &state.config.jwt_secret)?;
        Ok(Identity {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
