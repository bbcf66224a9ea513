use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};

use crate::domain::types::PublicUser;
use crate::domain::validate::{FieldErrors, is_email, non_empty};
use crate::error::ApiError;
use crate::identity::SESSION_COOKIE;
use crate::state::AppState;
use crate::usecase::auth::{
    LoginInput, LoginUseCase, ResendOtpUseCase, VerifyOtpInput, VerifyOtpUseCase,
};

#[derive(Serialize)]
pub struct OtpSentResponse {
    pub message: &'static str,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn validate_login(body: &LoginRequest) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(is_email(&body.email), "email must be a valid email address");
    errors.require(non_empty(&body.password), "password must not be empty");
    errors.finish()
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<OtpSentResponse>, ApiError> {
    validate_login(&body)?;
    let usecase = LoginUseCase {
        users: state.user_repo(),
        queue: state.queue(),
        expose_otp_in_response: state.config.expose_otp_in_response,
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(OtpSentResponse {
        message: out.message,
        email: out.email,
        otp: out.otp,
    }))
}

// ── POST /auth/verify-otp ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub access_token: String,
    pub user: PublicUser,
}

fn validate_verify(body: &VerifyOtpRequest) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(is_email(&body.email), "email must be a valid email address");
    errors.require(
        body.otp.len() == 6 && body.otp.chars().all(|c| c.is_ascii_digit()),
        "otp must be a 6-digit code",
    );
    errors.finish()
}

pub async fn verify_otp(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_verify(&body)?;
    let usecase = VerifyOtpUseCase {
        users: state.user_repo(),
        jwt_secret: state.config.jwt_secret.clone(),
        jwt_expires_secs: state.config.jwt_expires_secs,
    };
    let out = usecase
        .execute(VerifyOtpInput {
            email: body.email,
            code: body.otp,
        })
        .await?;

    // Session cookie carries the JWT; validity is bounded by the token's
    // own `exp`, so no Max-Age is set.
    let cookie = Cookie::build((SESSION_COOKIE, out.access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    let jar = jar.add(cookie);

    Ok((
        StatusCode::OK,
        jar,
        Json(VerifyOtpResponse {
            access_token: out.access_token,
            user: out.user,
        }),
    ))
}

// ── POST /auth/resend-otp ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

pub async fn resend_otp(
    State(state): State<AppState>,
    Json(body): Json<ResendOtpRequest>,
) -> Result<Json<OtpSentResponse>, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(is_email(&body.email), "email must be a valid email address");
    errors.finish()?;

    let usecase = ResendOtpUseCase {
        users: state.user_repo(),
        queue: state.queue(),
        expose_otp_in_response: state.config.expose_otp_in_response,
    };
    let out = usecase.execute(body.email).await?;
    Ok(Json(OtpSentResponse {
        message: out.message,
        email: out.email,
        otp: out.otp,
    }))
}
