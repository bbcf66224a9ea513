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

use portfolio_api_schema::faqs;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
}

pub async fn list_faqs(State(state): State<AppState>) -> Result<Json<Vec<faqs::Model>>, ApiError> {
    let items =
        content::list::<faqs::Entity>(&state.db, faqs::Column::CreatedAt, "list faqs").await?;
    Ok(Json(items))
}

pub async fn get_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<faqs::Model>, ApiError> {
    let item = content::get::<faqs::Entity>(&state.db, id, "get faq")
        .await?
        .ok_or(ApiError::NotFound("faq"))?;
    Ok(Json(item))
}

pub async fn create_faq(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateFaqRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.question), "question must not be empty");
    errors.require(non_empty(&body.answer), "answer must not be empty");
    errors.finish()?;

    let model = content::insert(
        &state.db,
        faqs::ActiveModel {
            id: Set(Uuid::now_v7()),
            question: Set(body.question),
            answer: Set(body.answer),
            category: Set(body.category),
            created_at: Set(Utc::now()),
        },
        "create faq",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_faq(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateFaqRequest>,
) -> Result<Json<faqs::Model>, ApiError> {
    if content::get::<faqs::Entity>(&state.db, id, "get faq")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("faq"));
    }

    let mut am = faqs::ActiveModel {
        id: Set(id),
        ..Default::default()
    };
    if let Some(v) = body.question {
        am.question = Set(v);
    }
    if let Some(v) = body.answer {
        am.answer = Set(v);
    }
    if let Some(v) = body.category {
        am.category = Set(Some(v));
    }

    let model = content::update(&state.db, am, "update faq").await?;
    Ok(Json(model))
}

pub async fn delete_faq(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<faqs::Entity>(&state.db, id, "delete faq").await? {
        return Err(ApiError::NotFound("faq"));
    }
    Ok(StatusCode::NO_CONTENT)
}
