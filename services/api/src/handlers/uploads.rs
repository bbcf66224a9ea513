use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::domain::repository::CdnClient as _;
use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub public_id: String,
    pub format: Option<String>,
    pub resource_type: Option<String>,
    pub bytes: Option<i64>,
}

// ── POST /uploads (multipart) ────────────────────────────────────────────────

pub async fn upload(
    _identity: Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(vec![format!("invalid multipart body: {e}")]))?
    else {
        return Err(ApiError::Validation(vec![
            "request must contain a file".to_owned(),
        ]));
    };

    let filename = field.file_name().unwrap_or("upload").to_owned();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::Validation(vec![format!("unreadable file part: {e}")]))?;

    let file = state.cdn.upload(&filename, bytes.to_vec()).await?;
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url: file.url,
            public_id: file.public_id,
            format: file.format,
            resource_type: file.resource_type,
            bytes: file.bytes,
        }),
    ))
}

// ── DELETE /uploads/{public_id} ──────────────────────────────────────────────

pub async fn delete_upload(
    _identity: Identity,
    State(state): State<AppState>,
    Path(public_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.cdn.delete(&public_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
