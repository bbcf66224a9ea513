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

use portfolio_api_schema::skills;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateSkillRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<skills::Model>>, ApiError> {
    let items =
        content::list::<skills::Entity>(&state.db, skills::Column::CreatedAt, "list skills")
            .await?;
    Ok(Json(items))
}

pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<skills::Model>, ApiError> {
    let item = content::get::<skills::Entity>(&state.db, id, "get skill")
        .await?
        .ok_or(ApiError::NotFound("skill"))?;
    Ok(Json(item))
}

pub async fn create_skill(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateSkillRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.name), "name must not be empty");
    errors.finish()?;

    let model = content::insert(
        &state.db,
        skills::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(body.name),
            description: Set(body.description),
            created_at: Set(Utc::now()),
        },
        "create skill",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_skill(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSkillRequest>,
) -> Result<Json<skills::Model>, ApiError> {
    if content::get::<skills::Entity>(&state.db, id, "get skill")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("skill"));
    }

    let mut am = skills::ActiveModel {
        id: Set(id),
        ..Default::default()
    };
    if let Some(v) = body.name {
        am.name = Set(v);
    }
    if let Some(v) = body.description {
        am.description = Set(Some(v));
    }

    let model = content::update(&state.db, am, "update skill").await?;
    Ok(Json(model))
}

pub async fn delete_skill(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<skills::Entity>(&state.db, id, "delete skill").await? {
        return Err(ApiError::NotFound("skill"));
    }
    Ok(StatusCode::NO_CONTENT)
}
