use async_trait::async_trait;
use projectboard::services::auth::{AuthSession, MockAuthProvider, VERIFY_EMAIL_MESSAGE};
use projectboard::services::{AuthMode, AuthOutcome, AuthProvider, AuthService, BoardError, BoardResult};
use std::sync::Arc;
use std::time::Duration;

fn session(email: &str) -> AuthSession {
    AuthSession {
        user_id: None,
        email: email.to_string(),
        access_token: Some("token".to_string()),
    }
}

#[tokio::test]
async fn test_sign_in_stores_the_session() {
    let mut provider = MockAuthProvider::new();
    provider
        .expect_sign_in()
        .withf(|email, password| email.to_string() == "ada@example.com" && password.to_string() == "secret")
        .times(1)
        .returning(|email, _| Ok(session(email)));

    let service = AuthService::new(Arc::new(provider));
    let outcome = service.submit(AuthMode::SignIn, " ada@example.com ", "secret").await.unwrap();

    assert!(matches!(outcome, AuthOutcome::SignedIn(ref s) if s.email == "ada@example.com"));
    assert_eq!(service.session().map(|s| s.email), Some("ada@example.com".to_string()));
    assert!(!service.is_pending());

    service.sign_out();
    assert!(service.session().is_none());
}

#[tokio::test]
async fn test_sign_up_asks_for_verification() {
    let mut provider = MockAuthProvider::new();
    provider.expect_sign_up().times(1).returning(|email, _| Ok(session(email)));

    let service = AuthService::new(Arc::new(provider));
    let outcome = service.submit(AuthMode::SignUp, "new@example.com", "pw").await.unwrap();

    assert_eq!(outcome, AuthOutcome::VerificationSent);
    assert!(service.session().is_none());
    assert_eq!(VERIFY_EMAIL_MESSAGE, "Please check your email to verify your account.");
}

#[tokio::test]
async fn test_provider_error_is_surfaced_and_flag_released() {
    let mut provider = MockAuthProvider::new();
    provider.expect_sign_in().times(2).returning(|_, _| {
        Err(BoardError::Auth {
            message: "Invalid login credentials".to_string(),
        })
    });

    let service = AuthService::new(Arc::new(provider));
    let first = service.submit(AuthMode::SignIn, "a@example.com", "bad").await.unwrap_err();
    assert_eq!(first.to_string(), "Invalid login credentials");

    // The in-flight flag must not stay set after a failure.
    let second = service.submit(AuthMode::SignIn, "a@example.com", "bad").await.unwrap_err();
    assert!(matches!(second, BoardError::Auth { .. }));
}

#[tokio::test]
async fn test_empty_credentials_never_reach_the_provider() {
    let provider = MockAuthProvider::new();
    let service = AuthService::new(Arc::new(provider));

    let error = service.submit(AuthMode::SignIn, "   ", "pw").await.unwrap_err();
    assert_eq!(error.to_string(), "Email and password are required");
}

struct SlowProvider;

#[async_trait]
impl AuthProvider for SlowProvider {
    async fn sign_up(&self, email: &str, _password: &str) -> BoardResult<AuthSession> {
        Ok(session(email))
    }

    async fn sign_in(&self, email: &str, _password: &str) -> BoardResult<AuthSession> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(session(email))
    }
}

#[tokio::test]
async fn test_second_submit_while_pending_is_rejected() {
    let service = AuthService::new(Arc::new(SlowProvider));

    let (first, second) = tokio::join!(
        service.submit(AuthMode::SignIn, "a@example.com", "pw"),
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            assert!(service.is_pending());
            let bounced = service.submit(AuthMode::SignIn, "a@example.com", "pw").await;
            // The first request still holds the flag after the bounce.
            assert!(service.is_pending());
            bounced
        }
    );

    assert!(first.is_ok());
    let second = second.unwrap_err();
    assert!(second.is_in_flight());
    assert!(matches!(second, BoardError::AuthInFlight));
    assert!(!service.is_pending());
}

#[tokio::test]
async fn test_unconfigured_provider_reports_itself() {
    let service = AuthService::from_config(&Default::default());

    let error = service.submit(AuthMode::SignIn, "a@example.com", "pw").await.unwrap_err();
    assert_eq!(error.to_string(), "Authentication provider is not configured");
}
