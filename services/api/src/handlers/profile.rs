use axum::{Json, extract::State};
use serde::Deserialize;

use portfolio_api_schema::profiles;

use crate::domain::validate::{FieldErrors, is_email};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::profile::ProfileFields;
use crate::state::AppState;

// ── GET /profile ─────────────────────────────────────────────────────────────

pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Json<Option<profiles::Model>>, ApiError> {
    let profile = state.profile_repo().get().await?;
    Ok(Json(profile))
}

// ── PATCH /profile ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub resume_url: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub working_hour: Option<String>,
    pub avatar_url: Option<String>,
}

fn validate(body: &UpdateProfileRequest) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    if let Some(email) = &body.email {
        errors.require(is_email(email), "email must be a valid email address");
    }
    if let Some(email) = &body.contact_email {
        errors.require(is_email(email), "contactEmail must be a valid email address");
    }
    errors.finish()
}

pub async fn update_profile(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<profiles::Model>, ApiError> {
    validate(&body)?;
    let profile = state
        .profile_repo()
        .upsert(ProfileFields {
            email: body.email,
            name: body.name,
            subtitle: body.subtitle,
            location: body.location,
            bio: body.bio,
            description: body.description,
            resume_url: body.resume_url,
            contact_email: body.contact_email,
            phone: body.phone,
            working_hour: body.working_hour,
            avatar_url: body.avatar_url,
        })
        .await?;
    Ok(Json(profile))
}
