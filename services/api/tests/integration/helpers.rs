use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use portfolio_api::domain::repository::{JobQueue, UserStore};
use portfolio_api::domain::types::{EmailJob, JobHandle, User, UserUpdate};
use portfolio_api::error::ApiError;

// Low bcrypt cost keeps the test suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;
pub const TEST_PASSWORD: &str = "correct horse battery";

pub fn test_user() -> User {
    User {
        id: Uuid::now_v7(),
        email: "owner@example.com".to_owned(),
        name: "Owner".to_owned(),
        password: bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST).unwrap(),
        is_verified: false,
        otp: None,
        otp_expires_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// ── MockUserStore ────────────────────────────────────────────────────────────

pub struct MockUserStore {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserStore for MockUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, update: UserUpdate) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            if let Some(name) = update.name {
                user.name = name;
            }
            if let Some(email) = update.email {
                user.email = email;
            }
            if let Some(password) = update.password {
                user.password = password;
            }
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn set_otp(
        &self,
        id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.otp = Some(code.to_owned());
            user.otp_expires_at = Some(expires_at);
        }
        Ok(())
    }

    async fn clear_otp_and_verify(&self, id: Uuid) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.otp = None;
            user.otp_expires_at = None;
            user.is_verified = true;
        }
        Ok(())
    }
}

// ── MockJobQueue ─────────────────────────────────────────────────────────────

pub struct MockJobQueue {
    pub jobs: Arc<Mutex<Vec<EmailJob>>>,
}

impl MockJobQueue {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn jobs_handle(&self) -> Arc<Mutex<Vec<EmailJob>>> {
        Arc::clone(&self.jobs)
    }
}

impl JobQueue for MockJobQueue {
    async fn enqueue(&self, job: EmailJob) -> Result<JobHandle, ApiError> {
        self.jobs.lock().unwrap().push(job);
        Ok(JobHandle { id: Uuid::now_v7() })
    }
}
