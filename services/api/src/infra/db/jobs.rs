use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use portfolio_api_schema::email_jobs;

use crate::domain::repository::JobStore;
use crate::domain::types::QueuedJob;
use crate::error::ApiError;

/// Row-level store for the durable email queue. Enqueue/worker policy lives
/// in `crate::infra::queue`.
#[derive(Clone)]
pub struct DbJobRepository {
    pub db: DatabaseConnection,
}

impl DbJobRepository {
    pub async fn insert(
        &self,
        id: Uuid,
        kind: &str,
        payload: serde_json::Value,
    ) -> Result<(), ApiError> {
        let now = Utc::now();
        email_jobs::ActiveModel {
            id: Set(id),
            kind: Set(kind.to_owned()),
            payload: Set(payload),
            attempts: Set(0),
            last_error: Set(None),
            next_attempt_at: Set(now),
            created_at: Set(now),
            failed_at: Set(None),
        }
        .insert(&self.db)
        .await
        .context("enqueue email job")?;
        Ok(())
    }
}

impl JobStore for DbJobRepository {
    async fn due(&self, limit: u64) -> Result<Vec<QueuedJob>, ApiError> {
        let now = Utc::now();
        let models = email_jobs::Entity::find()
            .filter(email_jobs::Column::FailedAt.is_null())
            .filter(email_jobs::Column::NextAttemptAt.lte(now))
            .order_by_asc(email_jobs::Column::NextAttemptAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("poll due email jobs")?;
        Ok(models
            .into_iter()
            .map(|m| QueuedJob {
                id: m.id,
                kind: m.kind,
                payload: m.payload,
                attempts: m.attempts,
            })
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        email_jobs::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete email job")?;
        Ok(())
    }

    async fn reschedule(
        &self,
        id: Uuid,
        attempts: i32,
        last_error: &str,
        next_attempt_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        email_jobs::ActiveModel {
            id: Set(id),
            attempts: Set(attempts),
            last_error: Set(Some(last_error.to_owned())),
            next_attempt_at: Set(next_attempt_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("reschedule email job")?;
        Ok(())
    }

    async fn mark_failed(&self, id: Uuid, attempts: i32, last_error: &str) -> Result<(), ApiError> {
        email_jobs::ActiveModel {
            id: Set(id),
            attempts: Set(attempts),
            last_error: Set(Some(last_error.to_owned())),
            failed_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark email job failed")?;
        Ok(())
    }
}
