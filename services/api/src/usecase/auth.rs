use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngExt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repository::{JobQueue, UserStore};
use crate::domain::types::{EmailJob, OTP_TTL_SECS, PublicUser, User};
use crate::error::ApiError;

pub const OTP_SENT_MESSAGE: &str = "OTP sent successfully. Please verify to complete login.";

/// Uniform 6-digit code. Not cryptographic; single-use with a 10-minute TTL.
fn generate_otp() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..1_000_000u32).to_string()
}

// ── Session tokens ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub email: String,
    pub exp: u64,
}

pub fn issue_session_token(
    user: &User,
    secret: &str,
    expires_secs: i64,
) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::seconds(expires_secs)).timestamp() as u64;
    let claims = SessionClaims {
        sub: user.id,
        email: user.email.clone(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("sign session token")))
}

pub fn validate_session_token(token: &str, secret: &str) -> Result<SessionClaims, ApiError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthenticated)
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginOutput {
    pub message: &'static str,
    pub email: String,
    /// Populated only when `expose_otp_in_response` is on.
    pub otp: Option<String>,
}

pub struct LoginUseCase<U, Q>
where
    U: UserStore,
    Q: JobQueue,
{
    pub users: U,
    pub queue: Q,
    pub expose_otp_in_response: bool,
}

impl<U, Q> LoginUseCase<U, Q>
where
    U: UserStore,
    Q: JobQueue,
{
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        let matches = bcrypt::verify(&input.password, &user.password)
            .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("verify password")))?;
        if !matches {
            return Err(ApiError::Unauthenticated);
        }

        let code = issue_otp(&self.users, &self.queue, &user).await?;

        Ok(LoginOutput {
            message: OTP_SENT_MESSAGE,
            email: user.email,
            otp: self.expose_otp_in_response.then_some(code),
        })
    }
}

/// Generate, store (superseding any prior code) and enqueue the OTP email.
/// An enqueue failure propagates: the login outcome is coupled to the
/// notification side effect.
async fn issue_otp<U: UserStore, Q: JobQueue>(
    users: &U,
    queue: &Q,
    user: &User,
) -> Result<String, ApiError> {
    let code = generate_otp();
    let expires_at = Utc::now() + Duration::seconds(OTP_TTL_SECS);
    users.set_otp(user.id, &code, expires_at).await?;
    queue
        .enqueue(EmailJob::SendOtp {
            to: user.email.clone(),
            name: user.name.clone(),
            code: code.clone(),
        })
        .await?;
    Ok(code)
}

// ── POST /auth/verify-otp ────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub access_token: String,
    pub user: PublicUser,
}

pub struct VerifyOtpUseCase<U>
where
    U: UserStore,
{
    pub users: U,
    pub jwt_secret: String,
    pub jwt_expires_secs: i64,
}

impl<U> VerifyOtpUseCase<U>
where
    U: UserStore,
{
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, ApiError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        // Expiry is checked lazily here; there is no background sweeper.
        let (stored, expires_at) = match (&user.otp, user.otp_expires_at) {
            (Some(code), Some(expires_at)) => (code, expires_at),
            _ => {
                return Err(ApiError::InvalidState(
                    "no OTP requested; log in first".to_owned(),
                ));
            }
        };
        if Utc::now() > expires_at {
            return Err(ApiError::Expired(
                "OTP expired; request a new one".to_owned(),
            ));
        }
        // Mismatch leaves the stored code untouched.
        if *stored != input.code {
            return Err(ApiError::Unauthenticated);
        }

        self.users.clear_otp_and_verify(user.id).await?;

        let verified = User {
            is_verified: true,
            otp: None,
            otp_expires_at: None,
            ..user
        };
        let access_token =
            issue_session_token(&verified, &self.jwt_secret, self.jwt_expires_secs)?;

        Ok(VerifyOtpOutput {
            access_token,
            user: verified.public(),
        })
    }
}

// ── POST /auth/resend-otp ────────────────────────────────────────────────────

pub struct ResendOtpUseCase<U, Q>
where
    U: UserStore,
    Q: JobQueue,
{
    pub users: U,
    pub queue: Q,
    pub expose_otp_in_response: bool,
}

impl<U, Q> ResendOtpUseCase<U, Q>
where
    U: UserStore,
    Q: JobQueue,
{
    pub async fn execute(&self, email: String) -> Result<LoginOutput, ApiError> {
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        let code = issue_otp(&self.users, &self.queue, &user).await?;

        Ok(LoginOutput {
            message: OTP_SENT_MESSAGE,
            email: user.email,
            otp: self.expose_otp_in_response.then_some(code),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_six_digit_codes() {
        for _ in 0..64 {
            let code = generate_otp();
            assert_eq!(code.len(), 6);
            let n: u32 = code.parse().unwrap();
            assert!((100_000..1_000_000).contains(&n));
        }
    }

    #[test]
    fn should_round_trip_session_tokens() {
        let user = User {
            id: Uuid::now_v7(),
            email: "a@b.co".to_owned(),
            name: "A".to_owned(),
            password: String::new(),
            is_verified: true,
            otp: None,
            otp_expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let token = issue_session_token(&user, "secret", 3600).unwrap();
        let claims = validate_session_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "a@b.co");
    }

    #[test]
    fn should_reject_tokens_signed_with_other_secret() {
        let user = User {
            id: Uuid::now_v7(),
            email: "a@b.co".to_owned(),
            name: "A".to_owned(),
            password: String::new(),
            is_verified: true,
            otp: None,
            otp_expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let token = issue_session_token(&user, "secret", 3600).unwrap();
        assert!(matches!(
            validate_session_token(&token, "other"),
            Err(ApiError::Unauthenticated)
        ));
    }

    #[test]
    fn should_reject_expired_session_tokens() {
        let user = User {
            id: Uuid::now_v7(),
            email: "a@b.co".to_owned(),
            name: "A".to_owned(),
            password: String::new(),
            is_verified: true,
            otp: None,
            otp_expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        // Expired an hour ago; default Validation enforces exp.
        let token = issue_session_token(&user, "secret", -3600).unwrap();
        assert!(matches!(
            validate_session_token(&token, "secret"),
            Err(ApiError::Unauthenticated)
        ));
    }
}
