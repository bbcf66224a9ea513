use chrono::{Duration, Utc};
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::repository::{JobQueue, JobStore, Mailer};
use crate::domain::types::{EmailJob, JOB_BACKOFF_BASE_SECS, JobHandle, MAX_JOB_ATTEMPTS};
use crate::error::ApiError;
use crate::infra::db::jobs::DbJobRepository;
use crate::infra::mailer::render;

/// Durable DB-backed queue. `enqueue` persists the job; the worker loop
/// delivers it.
#[derive(Clone)]
pub struct DbJobQueue {
    pub repo: DbJobRepository,
}

impl JobQueue for DbJobQueue {
    async fn enqueue(&self, job: EmailJob) -> Result<JobHandle, ApiError> {
        let id = Uuid::now_v7();
        let payload = serde_json::to_value(&job)
            .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("encode job")))?;
        self.repo.insert(id, job.kind(), payload).await?;
        Ok(JobHandle { id })
    }
}

/// Delay before the next attempt: 2s, 4s, 8s, ... per completed attempt.
pub fn backoff_delay(attempts_done: i32) -> Duration {
    let exp = attempts_done.saturating_sub(1).clamp(0, 30) as u32;
    Duration::seconds(JOB_BACKOFF_BASE_SECS << exp)
}

const POLL_INTERVAL_SECS: u64 = 1;
const POLL_BATCH: u64 = 10;

/// Worker loop: poll due jobs and deliver them until `shutdown` flips.
pub async fn run_worker<S: JobStore, M: Mailer>(
    store: S,
    mailer: M,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut tick = tokio::time::interval(std::time::Duration::from_secs(POLL_INTERVAL_SECS));
    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    tracing::info!("email worker stopping");
                    return;
                }
            }
            _ = tick.tick() => {
                if let Err(e) = drain_due(&store, &mailer).await {
                    tracing::error!(error = ?e, "email worker poll failed");
                }
            }
        }
    }
}

async fn drain_due<S: JobStore, M: Mailer>(store: &S, mailer: &M) -> Result<(), ApiError> {
    for row in store.due(POLL_BATCH).await? {
        let job: EmailJob = match serde_json::from_value(row.payload.clone()) {
            Ok(job) => job,
            Err(e) => {
                // Undecodable payload can never succeed; park it immediately.
                tracing::error!(id = %row.id, kind = %row.kind, error = %e, "unreadable job payload");
                store
                    .mark_failed(row.id, row.attempts, &format!("decode payload: {e}"))
                    .await?;
                continue;
            }
        };
        deliver(store, mailer, row.id, row.attempts, &job).await?;
    }
    Ok(())
}

async fn deliver<S: JobStore, M: Mailer>(
    store: &S,
    mailer: &M,
    id: Uuid,
    prior_attempts: i32,
    job: &EmailJob,
) -> Result<(), ApiError> {
    let (subject, html) = render(job);
    let attempts = prior_attempts + 1;
    match mailer.send(job.recipient(), &subject, &html).await {
        Ok(()) => {
            tracing::info!(
                success = true,
                kind = job.kind(),
                recipient = job.recipient(),
                "email delivered"
            );
            store.delete(id).await
        }
        Err(e) if attempts >= MAX_JOB_ATTEMPTS => {
            tracing::error!(
                success = false,
                kind = job.kind(),
                recipient = job.recipient(),
                attempts,
                error = ?e,
                "email failed permanently"
            );
            store.mark_failed(id, attempts, &e.to_string()).await
        }
        Err(e) => {
            let next = Utc::now() + backoff_delay(attempts);
            tracing::warn!(
                success = false,
                kind = job.kind(),
                recipient = job.recipient(),
                attempts,
                error = ?e,
                "email attempt failed, rescheduling"
            );
            store.reschedule(id, attempts, &e.to_string(), next).await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::DateTime;

    use super::*;
    use crate::domain::types::QueuedJob;

    #[derive(Clone, Default)]
    struct MockJobStore {
        rows: Arc<Mutex<Vec<QueuedJob>>>,
        deleted: Arc<Mutex<Vec<Uuid>>>,
        rescheduled: Arc<Mutex<Vec<(Uuid, i32, String, DateTime<Utc>)>>>,
        parked: Arc<Mutex<Vec<(Uuid, i32, String)>>>,
    }

    impl MockJobStore {
        fn with_rows(rows: Vec<QueuedJob>) -> Self {
            Self {
                rows: Arc::new(Mutex::new(rows)),
                ..Default::default()
            }
        }
    }

    impl JobStore for MockJobStore {
        async fn due(&self, limit: u64) -> Result<Vec<QueuedJob>, ApiError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().take(limit as usize).cloned().collect())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }

        async fn reschedule(
            &self,
            id: Uuid,
            attempts: i32,
            last_error: &str,
            next_attempt_at: DateTime<Utc>,
        ) -> Result<(), ApiError> {
            self.rescheduled
                .lock()
                .unwrap()
                .push((id, attempts, last_error.to_owned(), next_attempt_at));
            Ok(())
        }

        async fn mark_failed(
            &self,
            id: Uuid,
            attempts: i32,
            last_error: &str,
        ) -> Result<(), ApiError> {
            self.parked
                .lock()
                .unwrap()
                .push((id, attempts, last_error.to_owned()));
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MockMailer {
        sent: Arc<Mutex<Vec<(String, String)>>>,
        fail_with: Option<&'static str>,
    }

    impl MockMailer {
        fn failing(reason: &'static str) -> Self {
            Self {
                fail_with: Some(reason),
                ..Default::default()
            }
        }
    }

    impl Mailer for MockMailer {
        async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), anyhow::Error> {
            if let Some(reason) = self.fail_with {
                return Err(anyhow::anyhow!(reason));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_owned(), subject.to_owned()));
            Ok(())
        }
    }

    fn otp_job() -> EmailJob {
        EmailJob::SendOtp {
            to: "a@b.c".to_owned(),
            name: "A".to_owned(),
            code: "123456".to_owned(),
        }
    }

    #[test]
    fn should_double_backoff_per_attempt() {
        assert_eq!(backoff_delay(1), Duration::seconds(2));
        assert_eq!(backoff_delay(2), Duration::seconds(4));
        assert_eq!(backoff_delay(3), Duration::seconds(8));
    }

    #[test]
    fn should_clamp_backoff_for_degenerate_attempt_counts() {
        assert_eq!(backoff_delay(0), Duration::seconds(2));
        assert_eq!(backoff_delay(-5), Duration::seconds(2));
        // Large counts must not overflow the shift.
        assert!(backoff_delay(64) > Duration::seconds(0));
    }

    #[tokio::test]
    async fn should_delete_the_job_after_successful_delivery() {
        let store = MockJobStore::default();
        let mailer = MockMailer::default();
        let id = Uuid::now_v7();

        deliver(&store, &mailer, id, 0, &otp_job()).await.unwrap();

        assert_eq!(*store.deleted.lock().unwrap(), vec![id]);
        assert!(store.rescheduled.lock().unwrap().is_empty());
        assert!(store.parked.lock().unwrap().is_empty());
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reschedule_a_failed_attempt_with_backoff() {
        let store = MockJobStore::default();
        let mailer = MockMailer::failing("smtp refused");
        let id = Uuid::now_v7();
        let before = Utc::now();

        deliver(&store, &mailer, id, 0, &otp_job()).await.unwrap();

        let rescheduled = store.rescheduled.lock().unwrap();
        let (row_id, attempts, last_error, next) = rescheduled.first().expect("rescheduled");
        assert_eq!(*row_id, id);
        assert_eq!(*attempts, 1);
        assert_eq!(last_error, "smtp refused");
        // First retry lands ~2s out.
        assert!(*next >= before + Duration::seconds(2));
        assert!(*next <= Utc::now() + Duration::seconds(2));
        assert!(store.deleted.lock().unwrap().is_empty());
        assert!(store.parked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_park_the_job_after_the_final_attempt() {
        let store = MockJobStore::default();
        let mailer = MockMailer::failing("smtp refused");
        let id = Uuid::now_v7();

        // Two attempts already burned; this one is the last.
        deliver(&store, &mailer, id, MAX_JOB_ATTEMPTS - 1, &otp_job())
            .await
            .unwrap();

        let parked = store.parked.lock().unwrap();
        assert_eq!(
            *parked,
            vec![(id, MAX_JOB_ATTEMPTS, "smtp refused".to_owned())]
        );
        assert!(store.deleted.lock().unwrap().is_empty());
        assert!(store.rescheduled.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_park_unreadable_payloads_without_attempting_delivery() {
        let id = Uuid::now_v7();
        let store = MockJobStore::with_rows(vec![QueuedJob {
            id,
            kind: "send-otp".to_owned(),
            payload: serde_json::json!({ "kind": "bogus" }),
            attempts: 1,
        }]);
        let mailer = MockMailer::default();

        drain_due(&store, &mailer).await.unwrap();

        let parked = store.parked.lock().unwrap();
        let (row_id, attempts, last_error) = parked.first().expect("parked");
        assert_eq!(*row_id, id);
        assert_eq!(*attempts, 1);
        assert!(last_error.starts_with("decode payload:"));
        assert!(mailer.sent.lock().unwrap().is_empty());
        assert!(store.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_drain_a_batch_of_due_jobs() {
        let ids = [Uuid::now_v7(), Uuid::now_v7()];
        let rows = ids
            .iter()
            .map(|&id| QueuedJob {
                id,
                kind: "send-otp".to_owned(),
                payload: serde_json::to_value(otp_job()).unwrap(),
                attempts: 0,
            })
            .collect();
        let store = MockJobStore::with_rows(rows);
        let mailer = MockMailer::default();

        drain_due(&store, &mailer).await.unwrap();

        assert_eq!(*store.deleted.lock().unwrap(), ids.to_vec());
        assert_eq!(mailer.sent.lock().unwrap().len(), 2);
    }
}
