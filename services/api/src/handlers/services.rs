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

use portfolio_api_schema::services;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub core_tech_stacks: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub bullet_points: Option<Vec<String>>,
    pub core_tech_stacks: Option<Vec<String>>,
}

pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<services::Model>>, ApiError> {
    let items =
        content::list::<services::Entity>(&state.db, services::Column::CreatedAt, "list services")
            .await?;
    Ok(Json(items))
}

pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<services::Model>, ApiError> {
    let item = content::get::<services::Entity>(&state.db, id, "get service")
        .await?
        .ok_or(ApiError::NotFound("service"))?;
    Ok(Json(item))
}

pub async fn create_service(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.finish()?;

    let model = content::insert(
        &state.db,
        services::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(body.title),
            subtitle: Set(body.subtitle),
            bullet_points: Set(serde_json::json!(body.bullet_points)),
            core_tech_stacks: Set(serde_json::json!(body.core_tech_stacks)),
            created_at: Set(Utc::now()),
        },
        "create service",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_service(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateServiceRequest>,
) -> Result<Json<services::Model>, ApiError> {
    if content::get::<services::Entity>(&state.db, id, "get service")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("service"));
    }

    let mut am = services::ActiveModel {
        id: Set(id),
        ..Default::default()
    };
    if let Some(v) = body.title {
        am.title = Set(v);
    }
    if let Some(v) = body.subtitle {
        am.subtitle = Set(Some(v));
    }
    if let Some(v) = body.bullet_points {
        am.bullet_points = Set(serde_json::json!(v));
    }
    if let Some(v) = body.core_tech_stacks {
        am.core_tech_stacks = Set(serde_json::json!(v));
    }

    let model = content::update(&state.db, am, "update service").await?;
    Ok(Json(model))
}

pub async fn delete_service(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<services::Entity>(&state.db, id, "delete service").await? {
        return Err(ApiError::NotFound("service"));
    }
    Ok(StatusCode::NO_CONTENT)
}
