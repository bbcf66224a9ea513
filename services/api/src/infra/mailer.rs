use anyhow::Context as _;
use lettre::message::header::ContentType;
use lettre::transport::smtp::PoolConfig;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::ApiConfig;
use crate::domain::repository::Mailer;
use crate::domain::types::EmailJob;

const SMTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// SMTP mailer. Without an `SMTP_HOST` it degrades to log-only mode: every
/// send is recorded and reported as success.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
}

impl SmtpMailer {
    pub fn from_config(config: &ApiConfig) -> Result<Self, anyhow::Error> {
        let transport = match &config.smtp_host {
            Some(host) => {
                let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                    .context("build smtp transport")?
                    .port(config.smtp_port)
                    .timeout(Some(SMTP_TIMEOUT))
                    .pool_config(PoolConfig::default());
                if let (Some(user), Some(password)) = (&config.smtp_user, &config.smtp_password) {
                    builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
                }
                Some(builder.build())
            }
            None => {
                tracing::warn!("SMTP_HOST not set, mailer running in log-only mode");
                None
            }
        };
        Ok(Self {
            transport,
            from: config.email_from.clone(),
        })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), anyhow::Error> {
        let Some(transport) = &self.transport else {
            tracing::info!(to, subject, "log-only mail");
            return Ok(());
        };
        let message = Message::builder()
            .from(self.from.parse().context("parse from address")?)
            .to(to.parse().context("parse recipient address")?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_owned())
            .context("build message")?;
        transport.send(message).await.context("smtp send")?;
        Ok(())
    }
}

/// Render a job into `(subject, html body)`.
pub fn render(job: &EmailJob) -> (String, String) {
    match job {
        EmailJob::SendOtp { name, code, .. } => (
            "Your login code".to_owned(),
            format!(
                "<p>Hi {name},</p>\
                 <p>Your one-time login code is <strong>{code}</strong>.</p>\
                 <p>It expires in 10 minutes.</p>"
            ),
        ),
        EmailJob::SendWelcome { name, .. } => (
            "Welcome!".to_owned(),
            format!("<p>Hi {name},</p><p>Your account has been created.</p>"),
        ),
        EmailJob::UserMessageConfirmation { name, title, .. } => (
            "We received your message".to_owned(),
            format!(
                "<p>Hi {name},</p>\
                 <p>Thanks for reaching out about \u{201c}{title}\u{201d}. \
                 I'll get back to you soon.</p>"
            ),
        ),
        EmailJob::AdminNewMessageNotification {
            sender_name,
            sender_email,
            title,
            message,
            ..
        } => (
            format!("New message: {title}"),
            format!(
                "<p><strong>{sender_name}</strong> &lt;{sender_email}&gt; wrote:</p>\
                 <blockquote>{message}</blockquote>"
            ),
        ),
        EmailJob::HireRequestConfirmation { name, .. } => (
            "Your hire request".to_owned(),
            format!(
                "<p>Hi {name},</p>\
                 <p>Thanks for your interest in working together. \
                 I'll review your request and reply shortly.</p>"
            ),
        ),
        EmailJob::AdminHireRequestNotification {
            requester_email,
            company_name,
            ..
        } => {
            let company = company_name.as_deref().unwrap_or("unknown company");
            (
                "New hire request".to_owned(),
                format!("<p>New hire request from {requester_email} ({company}).</p>"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_otp_into_body() {
        let job = EmailJob::SendOtp {
            to: "a@b.co".to_owned(),
            name: "Ada".to_owned(),
            code: "314159".to_owned(),
        };
        let (subject, html) = render(&job);
        assert_eq!(subject, "Your login code");
        assert!(html.contains("314159"));
        assert!(html.contains("Ada"));
    }

    #[test]
    fn should_render_admin_notification_with_sender() {
        let job = EmailJob::AdminNewMessageNotification {
            to: "admin@site.dev".to_owned(),
            sender_name: "Jo".to_owned(),
            sender_email: "jo@x.io".to_owned(),
            title: "Hello".to_owned(),
            message: "Hi".to_owned(),
        };
        let (subject, html) = render(&job);
        assert_eq!(subject, "New message: Hello");
        assert!(html.contains("jo@x.io"));
    }
}
