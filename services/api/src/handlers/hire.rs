use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portfolio_api_schema::{file_documents, hire_requests};

use crate::domain::repository::{CdnClient as _, JobQueue as _};
use crate::domain::types::HireStatus;
use crate::domain::validate::{FieldErrors, is_email};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::notify;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HireRequestResponse {
    #[serde(flatten)]
    pub request: hire_requests::Model,
    pub files: Vec<file_documents::Model>,
}

// ── POST /hire-requests (public) ─────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHireRequest {
    pub email: String,
    pub name: Option<String>,
    pub company_name: Option<String>,
}

pub async fn create_hire_request(
    State(state): State<AppState>,
    Json(body): Json<CreateHireRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(is_email(&body.email), "email must be a valid email address");
    errors.finish()?;

    let now = Utc::now();
    let model = state
        .hire_repo()
        .insert(hire_requests::ActiveModel {
            id: Set(Uuid::now_v7()),
            email: Set(body.email),
            name: Set(body.name),
            company_name: Set(body.company_name),
            linkedin_url: Set(None),
            notes: Set(None),
            project_desc: Set(None),
            estimate_budget: Set(None),
            timeline: Set(None),
            core_features: Set(serde_json::json!([])),
            tech_suggestion: Set(serde_json::json!([])),
            status: Set(HireStatus::Inprocess.as_str().to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .await?;

    state
        .queue()
        .enqueue(notify::admin_hire_notification(
            &state.config.admin_email,
            &model,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(model)))
}

// ── PATCH /hire-requests/{id} (public: form completion) ──────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHireRequest {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub linkedin_url: Option<String>,
    pub notes: Option<String>,
    pub project_desc: Option<String>,
    pub estimate_budget: Option<String>,
    pub timeline: Option<String>,
    pub core_features: Option<Vec<String>>,
    pub tech_suggestion: Option<Vec<String>>,
}

pub async fn update_hire_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateHireRequest>,
) -> Result<Json<hire_requests::Model>, ApiError> {
    let repo = state.hire_repo();
    let existing = repo.get(id).await?.ok_or(ApiError::NotFound("hire request"))?;

    let mut am = hire_requests::ActiveModel {
        id: Set(id),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    if let Some(v) = body.name {
        am.name = Set(Some(v));
    }
    if let Some(v) = body.company_name {
        am.company_name = Set(Some(v));
    }
    if let Some(v) = body.linkedin_url {
        am.linkedin_url = Set(Some(v));
    }
    if let Some(v) = body.notes {
        am.notes = Set(Some(v));
    }
    if let Some(v) = body.project_desc {
        am.project_desc = Set(Some(v));
    }
    if let Some(v) = body.estimate_budget {
        am.estimate_budget = Set(Some(v));
    }
    if let Some(v) = body.timeline {
        am.timeline = Set(Some(v));
    }
    if let Some(v) = body.core_features {
        am.core_features = Set(serde_json::json!(v));
    }
    if let Some(v) = body.tech_suggestion {
        am.tech_suggestion = Set(serde_json::json!(v));
    }

    // Completing the form moves the request out of `inprocess` and fires
    // the confirmation + admin emails exactly once.
    let submitted = existing.status == HireStatus::Inprocess.as_str();
    if submitted {
        am.status = Set(HireStatus::Unread.as_str().to_owned());
    }

    let model = repo.update(am).await?;

    if submitted {
        let queue = state.queue();
        for job in notify::hire_submission_jobs(&state.config.admin_email, &model) {
            queue.enqueue(job).await?;
        }
    }

    Ok(Json(model))
}

// ── GET /hire-requests ───────────────────────────────────────────────────────

pub async fn list_hire_requests(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<hire_requests::Model>>, ApiError> {
    Ok(Json(state.hire_repo().list().await?))
}

// ── GET /hire-requests/{id} ──────────────────────────────────────────────────

pub async fn get_hire_request(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HireRequestResponse>, ApiError> {
    let repo = state.hire_repo();
    let request = repo.get(id).await?.ok_or(ApiError::NotFound("hire request"))?;
    let files = repo.files_for(id).await?;
    Ok(Json(HireRequestResponse { request, files }))
}

// ── PATCH /hire-requests/{id}/status ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateHireStatusRequest {
    pub status: String,
}

pub async fn update_hire_status(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateHireStatusRequest>,
) -> Result<Json<hire_requests::Model>, ApiError> {
    let status = HireStatus::parse(&body.status).ok_or_else(|| {
        ApiError::Validation(vec![
            "status must be one of: inprocess, unread, read, archived".to_owned(),
        ])
    })?;

    let repo = state.hire_repo();
    if !repo.set_status(id, status).await? {
        return Err(ApiError::NotFound("hire request"));
    }
    let model = repo.get(id).await?.ok_or(ApiError::NotFound("hire request"))?;
    Ok(Json(model))
}

// ── POST /hire-requests/{id}/files (multipart) ───────────────────────────────

pub async fn attach_file(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.hire_repo();
    if repo.get(id).await?.is_none() {
        return Err(ApiError::NotFound("hire request"));
    }

    let mut uploaded = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(vec![format!("invalid multipart body: {e}")]))?
    {
        let filename = field
            .file_name()
            .unwrap_or("attachment")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(vec![format!("unreadable file part: {e}")]))?;
        let file = state.cdn.upload(&filename, bytes.to_vec()).await?;
        uploaded.push(repo.insert_file(id, &file).await?);
    }

    if uploaded.is_empty() {
        return Err(ApiError::Validation(vec![
            "request must contain at least one file".to_owned(),
        ]));
    }
    Ok((StatusCode::CREATED, Json(uploaded)))
}

// ── DELETE /hire-requests/{id} ───────────────────────────────────────────────

pub async fn delete_hire_request(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = state.hire_repo();
    if repo.get(id).await?.is_none() {
        return Err(ApiError::NotFound("hire request"));
    }

    // Drop CDN copies before the rows; file rows go with the request via
    // the FK cascade.
    for file in repo.files_for(id).await? {
        state.cdn.delete(&file.public_id).await?;
    }
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
