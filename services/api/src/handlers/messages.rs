use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use portfolio_api_schema::user_messages;

use crate::domain::repository::JobQueue as _;
use crate::domain::types::MessageStatus;
use crate::domain::validate::{FieldErrors, is_email, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::notify;

// ── POST /messages (public) ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateMessageRequest {
    pub name: String,
    pub email: String,
    pub title: String,
    pub message: String,
}

fn validate_create(body: &CreateMessageRequest) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.name), "name must not be empty");
    errors.require(is_email(&body.email), "email must be a valid email address");
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.require(non_empty(&body.message), "message must not be empty");
    errors.finish()
}

pub async fn create_message(
    State(state): State<AppState>,
    Json(body): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_create(&body)?;
    let model = state
        .message_repo()
        .insert(body.name, body.email, body.title, body.message)
        .await?;

    let queue = state.queue();
    for job in notify::user_message_jobs(&state.config.admin_email, &model) {
        queue.enqueue(job).await?;
    }

    Ok((StatusCode::CREATED, Json(model)))
}

// ── GET /messages ────────────────────────────────────────────────────────────

pub async fn list_messages(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<user_messages::Model>>, ApiError> {
    Ok(Json(state.message_repo().list().await?))
}

// ── GET /messages/{id} ───────────────────────────────────────────────────────

pub async fn get_message(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<user_messages::Model>, ApiError> {
    let model = state
        .message_repo()
        .get(id)
        .await?
        .ok_or(ApiError::NotFound("message"))?;
    Ok(Json(model))
}

// ── PATCH /messages/{id}/status ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

pub async fn update_message_status(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<user_messages::Model>, ApiError> {
    let status = MessageStatus::parse(&body.status).ok_or_else(|| {
        ApiError::Validation(vec![
            "status must be one of: unread, read, archived".to_owned(),
        ])
    })?;

    if !state.message_repo().set_status(id, status).await? {
        return Err(ApiError::NotFound("message"));
    }
    let model = state
        .message_repo()
        .get(id)
        .await?
        .ok_or(ApiError::NotFound("message"))?;
    Ok(Json(model))
}

// ── DELETE /messages/{id} ────────────────────────────────────────────────────

pub async fn delete_message(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.message_repo().delete(id).await? {
        return Err(ApiError::NotFound("message"));
    }
    Ok(StatusCode::NO_CONTENT)
}
