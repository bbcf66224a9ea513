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

use portfolio_api_schema::projects;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub frontend_techs: Vec<String>,
    #[serde(default)]
    pub backend_techs: Vec<String>,
    #[serde(default)]
    pub devops_techs: Vec<String>,
    #[serde(default)]
    pub others_techs: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub frontend_techs: Option<Vec<String>>,
    pub backend_techs: Option<Vec<String>>,
    pub devops_techs: Option<Vec<String>>,
    pub others_techs: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
}

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<projects::Model>>, ApiError> {
    let items = content::list::<projects::Entity>(
        &state.db,
        projects::Column::CreatedAt,
        "list projects",
    )
    .await?;
    Ok(Json(items))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<projects::Model>, ApiError> {
    let item = content::get::<projects::Entity>(&state.db, id, "get project")
        .await?
        .ok_or(ApiError::NotFound("project"))?;
    Ok(Json(item))
}

pub async fn create_project(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.finish()?;

    let now = Utc::now();
    let model = content::insert(
        &state.db,
        projects::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(body.title),
            subtitle: Set(body.subtitle),
            description: Set(body.description),
            frontend_techs: Set(serde_json::json!(body.frontend_techs)),
            backend_techs: Set(serde_json::json!(body.backend_techs)),
            devops_techs: Set(serde_json::json!(body.devops_techs)),
            others_techs: Set(serde_json::json!(body.others_techs)),
            is_featured: Set(body.is_featured),
            live_url: Set(body.live_url),
            github_url: Set(body.github_url),
            image_url: Set(body.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        },
        "create project",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_project(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProjectRequest>,
) -> Result<Json<projects::Model>, ApiError> {
    if let Some(title) = &body.title {
        let mut errors = FieldErrors::new();
        errors.require(non_empty(title), "title must not be empty");
        errors.finish()?;
    }
    if content::get::<projects::Entity>(&state.db, id, "get project")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("project"));
    }

    let mut am = projects::ActiveModel {
        id: Set(id),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    if let Some(v) = body.title {
        am.title = Set(v);
    }
    if let Some(v) = body.subtitle {
        am.subtitle = Set(Some(v));
    }
    if let Some(v) = body.description {
        am.description = Set(Some(v));
    }
    if let Some(v) = body.frontend_techs {
        am.frontend_techs = Set(serde_json::json!(v));
    }
    if let Some(v) = body.backend_techs {
        am.backend_techs = Set(serde_json::json!(v));
    }
    if let Some(v) = body.devops_techs {
        am.devops_techs = Set(serde_json::json!(v));
    }
    if let Some(v) = body.others_techs {
        am.others_techs = Set(serde_json::json!(v));
    }
    if let Some(v) = body.is_featured {
        am.is_featured = Set(v);
    }
    if let Some(v) = body.live_url {
        am.live_url = Set(Some(v));
    }
    if let Some(v) = body.github_url {
        am.github_url = Set(Some(v));
    }
    if let Some(v) = body.image_url {
        am.image_url = Set(Some(v));
    }

    let model = content::update(&state.db, am, "update project").await?;
    Ok(Json(model))
}

pub async fn delete_project(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<projects::Entity>(&state.db, id, "delete project").await? {
        return Err(ApiError::NotFound("project"));
    }
    Ok(StatusCode::NO_CONTENT)
}
