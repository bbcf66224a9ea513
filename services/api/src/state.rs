use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::ApiConfig;
use crate::infra::cdn::ReqwestCdnClient;
use crate::infra::db::analytics::DbAnalyticsRepository;
use crate::infra::db::hire::DbHireRepository;
use crate::infra::db::jobs::DbJobRepository;
use crate::infra::db::messages::DbMessageRepository;
use crate::infra::db::profile::DbProfileRepository;
use crate::infra::db::users::DbUserRepository;
use crate::infra::queue::DbJobQueue;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<ApiConfig>,
    pub cdn: ReqwestCdnClient,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn job_repo(&self) -> DbJobRepository {
        DbJobRepository {
            db: self.db.clone(),
        }
    }

    pub fn queue(&self) -> DbJobQueue {
        DbJobQueue {
            repo: self.job_repo(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn message_repo(&self) -> DbMessageRepository {
        DbMessageRepository {
            db: self.db.clone(),
        }
    }

    pub fn hire_repo(&self) -> DbHireRepository {
        DbHireRepository {
            db: self.db.clone(),
        }
    }

    pub fn analytics_repo(&self) -> DbAnalyticsRepository {
        DbAnalyticsRepository {
            db: self.db.clone(),
        }
    }
}
