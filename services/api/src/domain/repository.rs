#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{CdnFile, EmailJob, JobHandle, QueuedJob, User, UserUpdate};
use crate::error::ApiError;

/// Store for user accounts and their login-code state.
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn create(&self, user: &User) -> Result<(), ApiError>;
    async fn update(&self, id: Uuid, update: UserUpdate) -> Result<(), ApiError>;
    /// Delete a user. Returns `true` if deleted, `false` if not found.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;

    /// Store a fresh login code, superseding any prior one.
    async fn set_otp(
        &self,
        id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError>;

    /// Null out the login code and mark the account verified.
    async fn clear_otp_and_verify(&self, id: Uuid) -> Result<(), ApiError>;
}

/// Durable queue for email jobs. Delivery happens in the worker loop.
pub trait JobQueue: Send + Sync {
    async fn enqueue(&self, job: EmailJob) -> Result<JobHandle, ApiError>;
}

/// Row-level view of the persisted queue, as the delivery worker drives it.
pub trait JobStore: Send + Sync {
    /// Jobs whose next attempt is due, oldest first. Parked (failed) jobs
    /// are excluded.
    async fn due(&self, limit: u64) -> Result<Vec<QueuedJob>, ApiError>;
    /// Delivered: the row disappears.
    async fn delete(&self, id: Uuid) -> Result<(), ApiError>;
    /// Attempt failed with retries left: bump the counter and push
    /// `next_attempt_at` out.
    async fn reschedule(
        &self,
        id: Uuid,
        attempts: i32,
        last_error: &str,
        next_attempt_at: DateTime<Utc>,
    ) -> Result<(), ApiError>;
    /// Attempts exhausted: keep the row for inspection, never poll it again.
    async fn mark_failed(
        &self,
        id: Uuid,
        attempts: i32,
        last_error: &str,
    ) -> Result<(), ApiError>;
}

/// Outbound mail transport.
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), anyhow::Error>;
}

/// Hosted CDN for user-supplied files.
pub trait CdnClient: Send + Sync {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<CdnFile, ApiError>;
    async fn delete(&self, public_id: &str) -> Result<(), ApiError>;
}
