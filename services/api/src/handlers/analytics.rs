use axum::http::HeaderMap;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validate::{FieldErrors, non_empty};
use crate::error::ApiError;
use crate::identity::Identity;
use crate::infra::db::analytics::PageStat;
use crate::state::AppState;

/// Anonymous visitor cookie; a fresh UUID is minted on first sight.
pub const VISITOR_COOKIE: &str = "visitor_id";

// ── POST /analytics/track (public) ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct TrackRequest {
    pub slug: String,
    pub title: Option<String>,
}

pub async fn track(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(body): Json<TrackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require(non_empty(&body.slug), "slug must not be empty");
    errors.finish()?;

    let visitor_id = jar
        .get(VISITOR_COOKIE)
        .and_then(|c| c.value().parse::<Uuid>().ok())
        .unwrap_or_else(Uuid::new_v4);

    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_owned());

    let repo = state.analytics_repo();
    repo.touch_visitor(visitor_id, user_agent, ip_address)
        .await?;
    let page = repo.upsert_page(&body.slug, body.title).await?;
    repo.insert_view(visitor_id, page.id).await?;

    let cookie = Cookie::build((VISITOR_COOKIE, visitor_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    Ok((StatusCode::NO_CONTENT, jar.add(cookie)))
}

// ── GET /analytics/summary ───────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_views: u64,
    pub unique_visitors: u64,
}

pub async fn summary(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let repo = state.analytics_repo();
    Ok(Json(SummaryResponse {
        total_views: repo.total_views().await?,
        unique_visitors: repo.total_visitors().await?,
    }))
}

// ── GET /analytics/pages ─────────────────────────────────────────────────────

pub async fn page_stats(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<PageStat>>, ApiError> {
    Ok(Json(state.analytics_repo().page_stats().await?))
}

// ── GET /analytics/dashboard ─────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_views: u64,
    pub unique_visitors: u64,
    pub pages: Vec<PageStat>,
}

pub async fn dashboard(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let repo = state.analytics_repo();
    Ok(Json(DashboardResponse {
        total_views: repo.total_views().await?,
        unique_visitors: repo.total_visitors().await?,
        pages: repo.page_stats().await?,
    }))
}
