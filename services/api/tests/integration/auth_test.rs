use chrono::{Duration, Utc};

use portfolio_api::domain::types::EmailJob;
use portfolio_api::error::ApiError;
use portfolio_api::usecase::auth::{
    LoginInput, LoginUseCase, ResendOtpUseCase, VerifyOtpInput, VerifyOtpUseCase,
};

use crate::helpers::{MockJobQueue, MockUserStore, TEST_PASSWORD, test_user};

fn login_uc(
    users: MockUserStore,
    queue: MockJobQueue,
    expose: bool,
) -> LoginUseCase<MockUserStore, MockJobQueue> {
    LoginUseCase {
        users,
        queue,
        expose_otp_in_response: expose,
    }
}

fn verify_uc(users: MockUserStore) -> VerifyOtpUseCase<MockUserStore> {
    VerifyOtpUseCase {
        users,
        jwt_secret: "test-secret".to_owned(),
        jwt_expires_secs: 3600,
    }
}

#[tokio::test]
async fn should_store_code_and_enqueue_one_email_on_login() {
    let user = test_user();
    let store = MockUserStore::new(vec![user.clone()]);
    let users_handle = store.users_handle();
    let queue = MockJobQueue::new();
    let jobs_handle = queue.jobs_handle();

    let out = login_uc(store, queue, false)
        .execute(LoginInput {
            email: user.email.clone(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.email, user.email);
    assert!(out.otp.is_none(), "code must stay server-side by default");

    let stored = users_handle.lock().unwrap()[0].clone();
    let code = stored.otp.expect("login should store a code");
    assert_eq!(code.len(), 6);
    assert!(stored.otp_expires_at.unwrap() > Utc::now());

    let jobs = jobs_handle.lock().unwrap();
    assert_eq!(jobs.len(), 1, "exactly one email job per login");
    match &jobs[0] {
        EmailJob::SendOtp { to, code: sent, .. } => {
            assert_eq!(to, &user.email);
            assert_eq!(sent, &code, "emailed code must match the stored one");
        }
        other => panic!("expected a send-otp job, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reject_wrong_password_without_enqueueing() {
    let user = test_user();
    let queue = MockJobQueue::new();
    let jobs_handle = queue.jobs_handle();

    let result = login_uc(MockUserStore::new(vec![user.clone()]), queue, false)
        .execute(LoginInput {
            email: user.email,
            password: "wrong".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Unauthenticated)));
    assert!(jobs_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_expose_code_when_configured() {
    let user = test_user();
    let store = MockUserStore::new(vec![user.clone()]);
    let users_handle = store.users_handle();

    let out = login_uc(store, MockJobQueue::new(), true)
        .execute(LoginInput {
            email: user.email,
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    let stored = users_handle.lock().unwrap()[0].otp.clone().unwrap();
    assert_eq!(out.otp.as_deref(), Some(stored.as_str()));
}

#[tokio::test]
async fn should_verify_once_then_reject_reuse() {
    let mut user = test_user();
    user.otp = Some("123456".to_owned());
    user.otp_expires_at = Some(Utc::now() + Duration::minutes(5));
    let store = MockUserStore::new(vec![user.clone()]);
    let users_handle = store.users_handle();
    let uc = verify_uc(store);

    let out = uc
        .execute(VerifyOtpInput {
            email: user.email.clone(),
            code: "123456".to_owned(),
        })
        .await
        .unwrap();
    assert!(!out.access_token.is_empty());
    assert!(out.user.is_verified);

    {
        let stored = &users_handle.lock().unwrap()[0];
        assert!(stored.otp.is_none(), "code must be cleared on success");
        assert!(stored.is_verified);
    }

    // The code is single-use; replaying it is a state error, not a 401.
    let replay = uc
        .execute(VerifyOtpInput {
            email: user.email,
            code: "123456".to_owned(),
        })
        .await;
    assert!(matches!(replay, Err(ApiError::InvalidState(_))));
}

#[tokio::test]
async fn should_reject_expired_code() {
    let mut user = test_user();
    user.otp = Some("123456".to_owned());
    user.otp_expires_at = Some(Utc::now() - Duration::minutes(1));

    let result = verify_uc(MockUserStore::new(vec![user.clone()]))
        .execute(VerifyOtpInput {
            email: user.email,
            code: "123456".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Expired(_))));
}

#[tokio::test]
async fn should_leave_stored_code_untouched_on_mismatch() {
    let mut user = test_user();
    user.otp = Some("123456".to_owned());
    user.otp_expires_at = Some(Utc::now() + Duration::minutes(5));
    let store = MockUserStore::new(vec![user.clone()]);
    let users_handle = store.users_handle();
    let uc = verify_uc(store);

    let result = uc
        .execute(VerifyOtpInput {
            email: user.email.clone(),
            code: "999999".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::Unauthenticated)));

    {
        let stored = &users_handle.lock().unwrap()[0];
        assert_eq!(stored.otp.as_deref(), Some("123456"));
        assert!(!stored.is_verified);
    }

    // The right code still works after a failed guess.
    uc.execute(VerifyOtpInput {
        email: user.email,
        code: "123456".to_owned(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn should_reject_verify_without_active_code() {
    let user = test_user();

    let result = verify_uc(MockUserStore::new(vec![user.clone()]))
        .execute(VerifyOtpInput {
            email: user.email,
            code: "123456".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidState(_))),
        "missing code is a flow error, not bad credentials: {result:?}"
    );
}

#[tokio::test]
async fn should_supersede_prior_code_on_resend() {
    let mut user = test_user();
    user.otp = Some("111111".to_owned());
    user.otp_expires_at = Some(Utc::now() + Duration::minutes(5));
    let store = MockUserStore::new(vec![user.clone()]);
    let users_handle = store.users_handle();
    let queue = MockJobQueue::new();
    let jobs_handle = queue.jobs_handle();

    let uc = ResendOtpUseCase {
        users: store,
        queue,
        expose_otp_in_response: false,
    };
    uc.execute(user.email.clone()).await.unwrap();

    let stored = users_handle.lock().unwrap()[0].otp.clone().unwrap();
    let jobs = jobs_handle.lock().unwrap();
    assert_eq!(jobs.len(), 1);
    match &jobs[0] {
        EmailJob::SendOtp { code, .. } => {
            assert_eq!(code, &stored, "only the latest code is valid");
        }
        other => panic!("expected a send-otp job, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reject_login_for_unknown_email() {
    let result = login_uc(MockUserStore::empty(), MockJobQueue::new(), false)
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Unauthenticated)));
}
