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

use portfolio_api_schema::npm_packages;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNpmPackageRequest {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub installable: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNpmPackageRequest {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub installable: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub async fn list_npm_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<npm_packages::Model>>, ApiError> {
    let items = content::list::<npm_packages::Entity>(
        &state.db,
        npm_packages::Column::CreatedAt,
        "list npm packages",
    )
    .await?;
    Ok(Json(items))
}

pub async fn get_npm_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<npm_packages::Model>, ApiError> {
    let item = content::get::<npm_packages::Entity>(&state.db, id, "get npm package")
        .await?
        .ok_or(ApiError::NotFound("npm package"))?;
    Ok(Json(item))
}

pub async fn create_npm_package(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateNpmPackageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.require(non_empty(&body.version), "version must not be empty");
    errors.finish()?;

    let now = Utc::now();
    let model = content::insert(
        &state.db,
        npm_packages::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(body.title),
            version: Set(body.version),
            description: Set(body.description),
            live_url: Set(body.live_url),
            github_url: Set(body.github_url),
            installable: Set(body.installable),
            tags: Set(serde_json::json!(body.tags)),
            created_at: Set(now),
            updated_at: Set(now),
        },
        "create npm package",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_npm_package(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateNpmPackageRequest>,
) -> Result<Json<npm_packages::Model>, ApiError> {
    if content::get::<npm_packages::Entity>(&state.db, id, "get npm package")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("npm package"));
    }

    let mut am = npm_packages::ActiveModel {
        id: Set(id),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    if let Some(v) = body.title {
        am.title = Set(v);
    }
    if let Some(v) = body.version {
        am.version = Set(v);
    }
    if let Some(v) = body.description {
        am.description = Set(Some(v));
    }
    if let Some(v) = body.live_url {
        am.live_url = Set(Some(v));
    }
    if let Some(v) = body.github_url {
        am.github_url = Set(Some(v));
    }
    if let Some(v) = body.installable {
        am.installable = Set(Some(v));
    }
    if let Some(v) = body.tags {
        am.tags = Set(serde_json::json!(v));
    }

    let model = content::update(&state.db, am, "update npm package").await?;
    Ok(Json(model))
}

pub async fn delete_npm_package(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<npm_packages::Entity>(&state.db, id, "delete npm package").await? {
        return Err(ApiError::NotFound("npm package"));
    }
    Ok(StatusCode::NO_CONTENT)
}
