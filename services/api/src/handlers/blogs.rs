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

use portfolio_api_schema::blogs;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub category: Option<String>,
    /// Rich-text block list, stored verbatim.
    #[serde(default)]
    pub blocks: serde_json::Value,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover_image_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub blocks: Option<serde_json::Value>,
    pub tags: Option<Vec<String>>,
    pub cover_image_url: Option<String>,
}

pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<blogs::Model>>, ApiError> {
    let items =
        content::list::<blogs::Entity>(&state.db, blogs::Column::CreatedAt, "list blogs").await?;
    Ok(Json(items))
}

pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<blogs::Model>, ApiError> {
    let item = content::get::<blogs::Entity>(&state.db, id, "get blog")
        .await?
        .ok_or(ApiError::NotFound("blog"))?;
    Ok(Json(item))
}

pub async fn create_blog(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateBlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.title), "title must not be empty");
    errors.finish()?;

    let now = Utc::now();
    let model = content::insert(
        &state.db,
        blogs::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(body.title),
            category: Set(body.category),
            blocks: Set(body.blocks),
            tags: Set(serde_json::json!(body.tags)),
            cover_image_url: Set(body.cover_image_url),
            created_at: Set(now),
            updated_at: Set(now),
        },
        "create blog",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_blog(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateBlogRequest>,
) -> Result<Json<blogs::Model>, ApiError> {
    if let Some(title) = &body.title {
        let mut errors = FieldErrors::new();
        errors.require(non_empty(title), "title must not be empty");
        errors.finish()?;
    }
    if content::get::<blogs::Entity>(&state.db, id, "get blog")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("blog"));
    }

    let mut am = blogs::ActiveModel {
        id: Set(id),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    if let Some(v) = body.title {
        am.title = Set(v);
    }
    if let Some(v) = body.category {
        am.category = Set(Some(v));
    }
    if let Some(v) = body.blocks {
        am.blocks = Set(v);
    }
    if let Some(v) = body.tags {
        am.tags = Set(serde_json::json!(v));
    }
    if let Some(v) = body.cover_image_url {
        am.cover_image_url = Set(Some(v));
    }

    let model = content::update(&state.db, am, "update blog").await?;
    Ok(Json(model))
}

pub async fn delete_blog(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<blogs::Entity>(&state.db, id, "delete blog").await? {
        return Err(ApiError::NotFound("blog"));
    }
    Ok(StatusCode::NO_CONTENT)
}
