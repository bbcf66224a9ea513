//! Builds the email-job sets each domain event produces. Handlers enqueue
//! the returned jobs; delivery and retry live in the queue worker.

use portfolio_api_schema::{hire_requests, user_messages};

use crate::domain::types::EmailJob;

pub fn welcome_job(email: &str, name: &str) -> EmailJob {
    EmailJob::SendWelcome {
        to: email.to_owned(),
        name: name.to_owned(),
    }
}

/// A new contact message notifies both sides: confirmation to the sender,
/// alert to the admin inbox.
pub fn user_message_jobs(admin_email: &str, message: &user_messages::Model) -> [EmailJob; 2] {
    [
        EmailJob::UserMessageConfirmation {
            to: message.email.clone(),
            name: message.name.clone(),
            title: message.title.clone(),
        },
        EmailJob::AdminNewMessageNotification {
            to: admin_email.to_owned(),
            sender_name: message.name.clone(),
            sender_email: message.email.clone(),
            title: message.title.clone(),
            message: message.message.clone(),
        },
    ]
}

pub fn admin_hire_notification(admin_email: &str, hire: &hire_requests::Model) -> EmailJob {
    EmailJob::AdminHireRequestNotification {
        to: admin_email.to_owned(),
        requester_email: hire.email.clone(),
        company_name: hire.company_name.clone(),
    }
}

/// Jobs for a hire request completing its form (status flip to `unread`).
pub fn hire_submission_jobs(admin_email: &str, hire: &hire_requests::Model) -> [EmailJob; 2] {
    [
        EmailJob::HireRequestConfirmation {
            to: hire.email.clone(),
            name: hire.name.clone().unwrap_or_else(|| "there".to_owned()),
        },
        admin_hire_notification(admin_email, hire),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_message() -> user_messages::Model {
        user_messages::Model {
            id: Uuid::now_v7(),
            name: "Jo".to_owned(),
            email: "jo@x.io".to_owned(),
            title: "Hello".to_owned(),
            message: "Hi there".to_owned(),
            status: "unread".to_owned(),
            created_at: Utc::now(),
        }
    }

    fn sample_hire() -> hire_requests::Model {
        hire_requests::Model {
            id: Uuid::now_v7(),
            email: "client@corp.com".to_owned(),
            name: Some("Client".to_owned()),
            company_name: Some("Corp".to_owned()),
            linkedin_url: None,
            notes: None,
            project_desc: None,
            estimate_budget: None,
            timeline: None,
            core_features: serde_json::json!([]),
            tech_suggestion: serde_json::json!([]),
            status: "unread".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn should_notify_sender_and_admin_for_new_message() {
        let jobs = user_message_jobs("admin@site.dev", &sample_message());
        assert_eq!(jobs[0].kind(), "user-message-confirmation");
        assert_eq!(jobs[0].recipient(), "jo@x.io");
        assert_eq!(jobs[1].kind(), "admin-new-message-notification");
        assert_eq!(jobs[1].recipient(), "admin@site.dev");
    }

    #[test]
    fn should_notify_client_and_admin_for_hire_submission() {
        let jobs = hire_submission_jobs("admin@site.dev", &sample_hire());
        assert_eq!(jobs[0].kind(), "hire-request-confirmation");
        assert_eq!(jobs[0].recipient(), "client@corp.com");
        assert_eq!(jobs[1].kind(), "admin-hire-request-notification");
        assert_eq!(jobs[1].recipient(), "admin@site.dev");
    }
}
