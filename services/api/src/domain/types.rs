use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account holder. `password` is a bcrypt hash; `otp` / `otp_expires_at`
/// hold the single active login code, or `None` when no code is pending.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password: String,
    pub is_verified: bool,
    pub otp: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Client-facing view. Never carries the password hash or OTP fields.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            is_verified: self.is_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub is_verified: bool,
    #[serde(serialize_with = "portfolio_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "portfolio_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

/// Fields a user update may change. `password` is already hashed.
#[derive(Debug, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Durable email work unit. The `kind` tag doubles as the queue's dispatch
/// key and as the `kind` column on the jobs table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EmailJob {
    SendOtp {
        to: String,
        name: String,
        code: String,
    },
    SendWelcome {
        to: String,
        name: String,
    },
    UserMessageConfirmation {
        to: String,
        name: String,
        title: String,
    },
    AdminNewMessageNotification {
        to: String,
        sender_name: String,
        sender_email: String,
        title: String,
        message: String,
    },
    HireRequestConfirmation {
        to: String,
        name: String,
    },
    AdminHireRequestNotification {
        to: String,
        requester_email: String,
        company_name: Option<String>,
    },
}

impl EmailJob {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SendOtp { .. } => "send-otp",
            Self::SendWelcome { .. } => "send-welcome",
            Self::UserMessageConfirmation { .. } => "user-message-confirmation",
            Self::AdminNewMessageNotification { .. } => "admin-new-message-notification",
            Self::HireRequestConfirmation { .. } => "hire-request-confirmation",
            Self::AdminHireRequestNotification { .. } => "admin-hire-request-notification",
        }
    }

    pub fn recipient(&self) -> &str {
        match self {
            Self::SendOtp { to, .. }
            | Self::SendWelcome { to, .. }
            | Self::UserMessageConfirmation { to, .. }
            | Self::AdminNewMessageNotification { to, .. }
            | Self::HireRequestConfirmation { to, .. }
            | Self::AdminHireRequestNotification { to, .. } => to,
        }
    }
}

/// Handle returned by `JobQueue::enqueue`.
#[derive(Debug, Clone, Copy)]
pub struct JobHandle {
    pub id: Uuid,
}

/// Persisted job row as the delivery worker sees it. `attempts` counts
/// completed delivery attempts; `payload` decodes into an [`EmailJob`].
#[derive(Debug, Clone)]
pub struct QueuedJob {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub attempts: i32,
}

/// Hire request lifecycle. `Inprocess` while the client is still filling
/// the form; the first full update moves it to `Unread`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HireStatus {
    Inprocess,
    Unread,
    Read,
    Archived,
}

impl HireStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inprocess => "inprocess",
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inprocess" => Some(Self::Inprocess),
            "unread" => Some(Self::Unread),
            "read" => Some(Self::Read),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// Contact-message lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Unread,
    Read,
    Archived,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unread" => Some(Self::Unread),
            "read" => Some(Self::Read),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// File stored on the hosted CDN.
#[derive(Debug, Clone)]
pub struct CdnFile {
    pub url: String,
    pub public_id: String,
    pub format: Option<String>,
    pub resource_type: Option<String>,
    pub bytes: Option<i64>,
}

/// Login code time-to-live.
pub const OTP_TTL_SECS: i64 = 600;

/// Delivery attempts before a job is parked as failed.
pub const MAX_JOB_ATTEMPTS: i32 = 3;

/// First retry delay; doubles per attempt.
pub const JOB_BACKOFF_BASE_SECS: i64 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_tag_jobs_with_kebab_case_kinds() {
        let job = EmailJob::SendOtp {
            to: "a@b.c".to_owned(),
            name: "A".to_owned(),
            code: "123456".to_owned(),
        };
        assert_eq!(job.kind(), "send-otp");
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["kind"], "send-otp");
        assert_eq!(json["to"], "a@b.c");
    }

    #[test]
    fn should_round_trip_job_payloads() {
        let job = EmailJob::AdminHireRequestNotification {
            to: "admin@site.dev".to_owned(),
            requester_email: "client@corp.com".to_owned(),
            company_name: Some("Corp".to_owned()),
        };
        let json = serde_json::to_value(&job).unwrap();
        let back: EmailJob = serde_json::from_value(json).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn should_strip_credentials_from_public_user() {
        let user = User {
            id: Uuid::now_v7(),
            email: "a@b.c".to_owned(),
            name: "A".to_owned(),
            password: "$2b$hash".to_owned(),
            is_verified: true,
            otp: Some("123456".to_owned()),
            otp_expires_at: Some(Utc::now()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(user.public()).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("otp").is_none());
        assert_eq!(json["email"], "a@b.c");
    }

    #[test]
    fn should_parse_hire_statuses() {
        assert_eq!(HireStatus::parse("inprocess"), Some(HireStatus::Inprocess));
        assert_eq!(HireStatus::parse("unread"), Some(HireStatus::Unread));
        assert_eq!(HireStatus::parse("bogus"), None);
        assert_eq!(HireStatus::Archived.as_str(), "archived");
    }
}
