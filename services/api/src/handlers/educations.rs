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

use portfolio_api_schema::educations;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducationRequest {
    pub title: String,
    pub institution: String,
    pub location: Option<String>,
    pub graduation_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEducationRequest {
    pub title: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub graduation_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub async fn list_educations(
    State(state): State<AppState>,
) -> Result<Json<Vec<educations::Model>>, ApiError> {
    let items = content::list::<educations::Entity>(
        &state.db,
        educations::Column::CreatedAt,
        "list educations",
    )
    .await?;
    Ok(Json(items))
}

pub async fn get_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<educations::Model>, ApiError> {
    let item = content::get::<educations::Entity>(&state.db, id, "get education")
        .await?
        .ok_or(ApiError::NotFound("education"))?;
    Ok(Json(item))
}

pub async fn create_education(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateEducationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.require(non_empty(&body.institution), "institution must not be empty");
    errors.finish()?;

    let model = content::insert(
        &state.db,
        educations::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(body.title),
            institution: Set(body.institution),
            location: Set(body.location),
            graduation_date: Set(body.graduation_date),
            description: Set(body.description),
            image_url: Set(body.image_url),
            created_at: Set(Utc::now()),
        },
        "create education",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_education(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEducationRequest>,
) -> Result<Json<educations::Model>, ApiError> {
    if content::get::<educations::Entity>(&state.db, id, "get education")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("education"));
    }

    let mut am = educations::ActiveModel {
        id: Set(id),
        ..Default::default()
    };
    if let Some(v) = body.title {
        am.title = Set(v);
    }
    if let Some(v) = body.institution {
        am.institution = Set(v);
    }
    if let Some(v) = body.location {
        am.location = Set(Some(v));
    }
    if let Some(v) = body.graduation_date {
        am.graduation_date = Set(Some(v));
    }
    if let Some(v) = body.description {
        am.description = Set(Some(v));
    }
    if let Some(v) = body.image_url {
        am.image_url = Set(Some(v));
    }

    let model = content::update(&state.db, am, "update education").await?;
    Ok(Json(model))
}

pub async fn delete_education(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<educations::Entity>(&state.db, id, "delete education").await? {
        return Err(ApiError::NotFound("education"));
    }
    Ok(StatusCode::NO_CONTENT)
}
