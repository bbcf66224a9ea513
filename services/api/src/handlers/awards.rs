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

use portfolio_api_schema::awards;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAwardRequest {
    pub title: String,
    pub subtitle: Option<String>,
    pub award_from: Option<String>,
    pub award_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAwardRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub award_from: Option<String>,
    pub award_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub async fn list_awards(
    State(state): State<AppState>,
) -> Result<Json<Vec<awards::Model>>, ApiError> {
    let items =
        content::list::<awards::Entity>(&state.db, awards::Column::CreatedAt, "list awards")
            .await?;
    Ok(Json(items))
}

pub async fn get_award(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<awards::Model>, ApiError> {
    let item = content::get::<awards::Entity>(&state.db, id, "get award")
        .await?
        .ok_or(ApiError::NotFound("award"))?;
    Ok(Json(item))
}

pub async fn create_award(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateAwardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.finish()?;

    let model = content::insert(
        &state.db,
        awards::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(body.title),
            subtitle: Set(body.subtitle),
            award_from: Set(body.award_from),
            award_date: Set(body.award_date),
            description: Set(body.description),
            image_url: Set(body.image_url),
            created_at: Set(Utc::now()),
        },
        "create award",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_award(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAwardRequest>,
) -> Result<Json<awards::Model>, ApiError> {
    if content::get::<awards::Entity>(&state.db, id, "get award")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("award"));
    }

    let mut am = awards::ActiveModel {
        id: Set(id),
        ..Default::default()
    };
    if let Some(v) = body.title {
        am.title = Set(v);
    }
    if let Some(v) = body.subtitle {
        am.subtitle = Set(Some(v));
    }
    if let Some(v) = body.award_from {
        am.award_from = Set(Some(v));
    }
    if let Some(v) = body.award_date {
        am.award_date = Set(Some(v));
    }
    if let Some(v) = body.description {
        am.description = Set(Some(v));
    }
    if let Some(v) = body.image_url {
        am.image_url = Set(Some(v));
    }

    let model = content::update(&state.db, am, "update award").await?;
    Ok(Json(model))
}

pub async fn delete_award(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<awards::Entity>(&state.db, id, "delete award").await? {
        return Err(ApiError::NotFound("award"));
    }
    Ok(StatusCode::NO_CONTENT)
}
