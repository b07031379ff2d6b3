use async_trait::async_trait;
use mockall::automock;
use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};
use uuid::Uuid;

use super::error_handling::{BoardError, BoardResult};
use crate::config::AuthConfig;

pub const VERIFY_EMAIL_MESSAGE: &str = "Please check your email to verify your account.";
const NOT_CONFIGURED: &str = "Authentication provider is not configured";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: Option<Uuid>,
    pub email: String,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Signed in; the caller navigates to the dashboard.
    SignedIn(AuthSession),
    /// Account created; the user has to confirm the address first.
    VerificationSent,
}

/// External identity provider. Treated as opaque.
#[automock]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> BoardResult<AuthSession>;
    async fn sign_in(&self, email: &str, password: &str) -> BoardResult<AuthSession>;
}

/// Provider used when no endpoint is configured. Every call fails.
pub struct UnconfiguredAuthProvider;

#[async_trait]
impl AuthProvider for UnconfiguredAuthProvider {
    async fn sign_up(&self, _email: &str, _password: &str) -> BoardResult<AuthSession> {
        Err(BoardError::Auth {
            message: NOT_CONFIGURED.to_string(),
        })
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> BoardResult<AuthSession> {
        Err(BoardError::Auth {
            message: NOT_CONFIGURED.to_string(),
        })
    }
}

/// Talks to a Supabase-style auth REST endpoint.
pub struct HttpAuthProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Option<Uuid>,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: Option<String>,
    user: Option<AuthUser>,
    id: Option<Uuid>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl AuthErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg.or(self.error_description).or(self.message).or(self.error)
    }
}

impl HttpAuthProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Option<Self> {
        let base_url = config.base_url.as_deref()?.trim();
        if base_url.is_empty() {
            return None;
        }
        Some(Self::new(base_url, config.api_key.clone().unwrap_or_default()))
    }

    async fn post(&self, path: &str, email: &str, password: &str) -> BoardResult<AuthSession> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(auth_error)?;

        let status = response.status();
        if !status.is_success() {
            let body: AuthErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .into_message()
                .unwrap_or_else(|| format!("Authentication failed ({})", status));
            warn!(url = %url, status = %status, "Auth provider rejected request");
            return Err(BoardError::Auth { message });
        }

        let body: AuthResponse = response.json().await.map_err(auth_error)?;
        let (user_id, user_email) = match body.user {
            Some(user) => (user.id, user.email),
            None => (body.id, body.email),
        };
        Ok(AuthSession {
            user_id,
            email: user_email.unwrap_or_else(|| email.to_string()),
            access_token: body.access_token,
        })
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> BoardResult<AuthSession> {
        self.post("/auth/v1/signup", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> BoardResult<AuthSession> {
        self.post("/auth/v1/token?grant_type=password", email, password).await
    }
}

fn auth_error(error: reqwest::Error) -> BoardError {
    BoardError::Auth {
        message: error.to_string(),
    }
}

/// Releases the in-flight flag when the request ends, however it ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> BoardResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| BoardError::AuthInFlight)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Sign-in/sign-up flow with duplicate-submission protection.
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
    in_flight: AtomicBool,
    session: RwLock<Option<AuthSession>>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            provider,
            in_flight: AtomicBool::new(false),
            session: RwLock::new(None),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        match HttpAuthProvider::from_config(config) {
            Some(provider) => Self::new(Arc::new(provider)),
            None => {
                warn!("No auth endpoint configured, sign-in is disabled");
                Self::new(Arc::new(UnconfiguredAuthProvider))
            }
        }
    }

    pub async fn submit(&self, mode: AuthMode, email: &str, password: &str) -> BoardResult<AuthOutcome> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(BoardError::validation("email", "Email and password are required"));
        }

        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        match mode {
            AuthMode::SignUp => {
                self.provider.sign_up(email, password).await?;
                info!(email = %email, "Sign-up accepted, verification pending");
                Ok(AuthOutcome::VerificationSent)
            }
            AuthMode::SignIn => {
                let session = self.provider.sign_in(email, password).await?;
                info!(email = %session.email, "Signed in");
                *self.session.write() = Some(session.clone());
                Ok(AuthOutcome::SignedIn(session))
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn session(&self) -> Option<AuthSession> {
        self.session.read().clone()
    }

    pub fn sign_out(&self) {
        *self.session.write() = None;
    }
}
