use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::repository::{JobQueue as _, UserStore as _};
use crate::domain::types::{PublicUser, User, UserUpdate};
use crate::domain::validate::{FieldErrors, is_email, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::notify;

const MIN_PASSWORD_LEN: usize = 8;

fn hash_password(plain: &str) -> Result<String, ApiError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("hash password")))
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn validate_register(body: &RegisterRequest) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.name), "name must not be empty");
    errors.require(is_email(&body.email), "email must be a valid email address");
    errors.require(
        body.password.len() >= MIN_PASSWORD_LEN,
        "password must be at least 8 characters",
    );
    errors.finish()
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_register(&body)?;
    let users = state.user_repo();

    if users.find_by_email(&body.email).await?.is_some() {
        return Err(ApiError::Conflict("email already registered".to_owned()));
    }

    let now = Utc::now();
    let user = User {
        id: Uuid::now_v7(),
        email: body.email,
        name: body.name,
        password: hash_password(&body.password)?,
        is_verified: false,
        otp: None,
        otp_expires_at: None,
        created_at: now,
        updated_at: now,
    };
    users.create(&user).await?;

    state
        .queue()
        .enqueue(notify::welcome_job(&user.email, &user.name))
        .await?;

    Ok((StatusCode::CREATED, Json(user.public())))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = state.user_repo().list().await?;
    Ok(Json(users.iter().map(User::public).collect()))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state
        .user_repo()
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    Ok(Json(user.public()))
}

// ── PATCH /users/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn validate_update(body: &UpdateUserRequest) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    if let Some(name) = &body.name {
        errors.require(non_empty(name), "name must not be empty");
    }
    if let Some(email) = &body.email {
        errors.require(is_email(email), "email must be a valid email address");
    }
    if let Some(password) = &body.password {
        errors.require(
            password.len() >= MIN_PASSWORD_LEN,
            "password must be at least 8 characters",
        );
    }
    errors.finish()
}

pub async fn update_user(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    validate_update(&body)?;
    let users = state.user_repo();
    if users.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound("user"));
    }

    let password = body.password.as_deref().map(hash_password).transpose()?;
    users
        .update(
            id,
            UserUpdate {
                name: body.name,
                email: body.email,
                password,
            },
        )
        .await?;

    let user = users
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    Ok(Json(user.public()))
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

pub async fn delete_user(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.user_repo().delete(id).await? {
        return Err(ApiError::NotFound("user"));
    }
    Ok(StatusCode::NO_CONTENT)
}
