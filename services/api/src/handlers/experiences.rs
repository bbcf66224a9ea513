use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use uuid::Uuid;

use portfolio_api_schema::experiences;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub starting_date: DateTime<Utc>,
    pub ending_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    #[serde(default)]
    pub key_achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub starting_date: Option<DateTime<Utc>>,
    pub ending_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub key_achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
}

pub async fn list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<experiences::Model>>, ApiError> {
    let items = content::list::<experiences::Entity>(
        &state.db,
        experiences::Column::StartingDate,
        "list experiences",
    )
    .await?;
    Ok(Json(items))
}

pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<experiences::Model>, ApiError> {
    let item = content::get::<experiences::Entity>(&state.db, id, "get experience")
        .await?
        .ok_or(ApiError::NotFound("experience"))?;
    Ok(Json(item))
}

pub async fn create_experience(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateExperienceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.require(non_empty(&body.company), "company must not be empty");
    if let Some(end) = body.ending_date {
        errors.require(
            end >= body.starting_date,
            "endingDate must not precede startingDate",
        );
    }
    errors.finish()?;

    let model = content::insert(
        &state.db,
        experiences::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(body.title),
            company: Set(body.company),
            location: Set(body.location),
            starting_date: Set(body.starting_date),
            ending_date: Set(body.ending_date),
            description: Set(body.description),
            key_achievements: Set(serde_json::json!(body.key_achievements)),
            technologies: Set(serde_json::json!(body.technologies)),
            created_at: Set(Utc::now()),
        },
        "create experience",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_experience(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateExperienceRequest>,
) -> Result<Json<experiences::Model>, ApiError> {
    if content::get::<experiences::Entity>(&state.db, id, "get experience")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("experience"));
    }

    let mut am = experiences::ActiveModel {
        id: Set(id),
        ..Default::default()
    };
    if let Some(v) = body.title {
        am.title = Set(v);
    }
    if let Some(v) = body.company {
        am.company = Set(v);
    }
    if let Some(v) = body.location {
        am.location = Set(Some(v));
    }
    if let Some(v) = body.starting_date {
        am.starting_date = Set(v);
    }
    if let Some(v) = body.ending_date {
        am.ending_date = Set(Some(v));
    }
    if let Some(v) = body.description {
        am.description = Set(Some(v));
    }
    if let Some(v) = body.key_achievements {
        am.key_achievements = Set(serde_json::json!(v));
    }
    if let Some(v) = body.technologies {
        am.technologies = Set(serde_json::json!(v));
    }

    let model = content::update(&state.db, am, "update experience").await?;
    Ok(Json(model))
}

pub async fn delete_experience(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<experiences::Entity>(&state.db, id, "delete experience").await? {
        return Err(ApiError::NotFound("experience"));
    }
    Ok(StatusCode::NO_CONTENT)
}
