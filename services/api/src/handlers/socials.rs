use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use uuid::Uuid;

use portfolio_api_schema::socials;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateSocialRequest {
    pub title: String,
    pub url: String,
}

#[derive(Deserialize)]
pub struct UpdateSocialRequest {
    pub title: Option<String>,
    pub url: Option<String>,
}

pub async fn list_socials(
    State(state): State<AppState>,
) -> Result<Json<Vec<socials::Model>>, ApiError> {
    let items =
        content::list::<socials::Entity>(&state.db, socials::Column::CreatedAt, "list socials")
            .await?;
    Ok(Json(items))
}

pub async fn get_social(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<socials::Model>, ApiError> {
    let item = content::get::<socials::Entity>(&state.db, id, "get social")
        .await?
        .ok_or(ApiError::NotFound("social link"))?;
    Ok(Json(item))
}

pub async fn create_social(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateSocialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.require(non_empty(&body.url), "url must not be empty");
    errors.finish()?;

    let model = content::insert(
        &state.db,
        socials::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(body.title),
            url: Set(body.url),
            created_at: Set(Utc::now()),
        },
        "create social",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_social(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSocialRequest>,
) -> Result<Json<socials::Model>, ApiError> {
    if content::get::<socials::Entity>(&state.db, id, "get social")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("social link"));
    }

    let mut am = socials::ActiveModel {
        id: Set(id),
        ..Default::default()
    };
    if let Some(v) = body.title {
        am.title = Set(v);
    }
    if let Some(v) = body.url {
        am.url = Set(v);
    }

    let model = content::update(&state.db, am, "update social").await?;
    Ok(Json(model))
}

pub async fn delete_social(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<socials::Entity>(&state.db, id, "delete social").await? {
        return Err(ApiError::NotFound("social link"));
    }
    Ok(StatusCode::NO_CONTENT)
}
