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

use portfolio_api_schema::reviews;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::content;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub name: String,
    pub subtitle: Option<String>,
    pub rate: i16,
    pub comment: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub rate: Option<i16>,
    pub comment: Option<String>,
}

fn valid_rate(rate: i16) -> bool {
    (1..=5).contains(&rate)
}

pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<reviews::Model>>, ApiError> {
    let items =
        content::list::<reviews::Entity>(&state.db, reviews::Column::CreatedAt, "list reviews")
            .await?;
    Ok(Json(items))
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<reviews::Model>, ApiError> {
    let item = content::get::<reviews::Entity>(&state.db, id, "get review")
        .await?
        .ok_or(ApiError::NotFound("review"))?;
    Ok(Json(item))
}

pub async fn create_review(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.name), "name must not be empty");
    errors.require(valid_rate(body.rate), "rate must be between 1 and 5");
    errors.finish()?;

    let model = content::insert(
        &state.db,
        reviews::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(body.name),
            subtitle: Set(body.subtitle),
            rate: Set(body.rate),
            comment: Set(body.comment),
            created_at: Set(Utc::now()),
        },
        "create review",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update_review(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateReviewRequest>,
) -> Result<Json<reviews::Model>, ApiError> {
    if let Some(rate) = body.rate {
        let mut errors = FieldErrors::new();
        errors.require(valid_rate(rate), "rate must be between 1 and 5");
        errors.finish()?;
    }
    if content::get::<reviews::Entity>(&state.db, id, "get review")
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("review"));
    }

    let mut am = reviews::ActiveModel {
        id: Set(id),
        ..Default::default()
    };
    if let Some(v) = body.name {
        am.name = Set(v);
    }
    if let Some(v) = body.subtitle {
        am.subtitle = Set(Some(v));
    }
    if let Some(v) = body.rate {
        am.rate = Set(v);
    }
    if let Some(v) = body.comment {
        am.comment = Set(Some(v));
    }

    let model = content::update(&state.db, am, "update review").await?;
    Ok(Json(model))
}

pub async fn delete_review(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !content::delete::<reviews::Entity>(&state.db, id, "delete review").await? {
        return Err(ApiError::NotFound("review"));
    }
    Ok(StatusCode::NO_CONTENT)
}
