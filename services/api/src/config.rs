/// API service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 5000). Env var: `PORT`.
    pub port: u16,
    /// Path prefix for every route (default "/api/v1"). Env var: `API_PREFIX`.
    pub api_prefix: String,
    /// Whether to attach the CORS layer. Env var: `CORS_ENABLED`.
    pub cors_enabled: bool,
    /// Allowed CORS origin (default "*"). Env var: `CORS_ORIGIN`.
    pub cors_origin: String,
    /// HMAC secret for signing session JWTs.
    pub jwt_secret: String,
    /// Session token lifetime in seconds (default 86400). Env var: `JWT_EXPIRES_SECS`.
    pub jwt_expires_secs: i64,
    /// SMTP relay host. Absent → mailer runs in log-only mode.
    pub smtp_host: Option<String>,
    /// SMTP port (default 587). Env var: `SMTP_PORT`.
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    /// From address for all outgoing mail.
    pub email_from: String,
    /// Recipient of admin notifications (new messages, hire requests).
    pub admin_email: String,
    /// Hosted CDN API base URL (e.g. "https://api.cloudinary.com/v1_1/<cloud>").
    pub cdn_base_url: Option<String>,
    pub cdn_api_key: Option<String>,
    pub cdn_api_secret: Option<String>,
    /// Include the literal OTP in the login response. Development only.
    /// Env var: `EXPOSE_OTP_IN_RESPONSE`.
    pub expose_otp_in_response: bool,
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            api_prefix: env_opt("API_PREFIX").unwrap_or_else(|| "/api/v1".to_owned()),
            cors_enabled: std::env::var("CORS_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            cors_origin: env_opt("CORS_ORIGIN").unwrap_or_else(|| "*".to_owned()),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            jwt_expires_secs: std::env::var("JWT_EXPIRES_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400),
            smtp_host: env_opt("SMTP_HOST"),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_user: env_opt("SMTP_USER"),
            smtp_password: env_opt("SMTP_PASSWORD"),
            email_from: env_opt("EMAIL_FROM")
                .unwrap_or_else(|| "no-reply@localhost".to_owned()),
            admin_email: std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL"),
            cdn_base_url: env_opt("CDN_BASE_URL"),
            cdn_api_key: env_opt("CDN_API_KEY"),
            cdn_api_secret: env_opt("CDN_API_SECRET"),
            expose_otp_in_response: std::env::var("EXPOSE_OTP_IN_RESPONSE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}
