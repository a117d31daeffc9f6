//! Authentication session state machine.
//!
//! This module defines the contract between the auth layer and the UI:
//! a [`SessionStore`] owns the session state, is its only writer, and
//! publishes every change over a watch channel; consumers subscribe and
//! pick a [`RenderTarget`] with the pure [`select`] function.
//!
//! State invariants:
//! - `loading` is true only during the startup restore or an in-flight
//!   login/register call, and settles to false on every path.
//! - a user is present if and only if a token is present.

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, watch};

use crate::api::types::{RegisterRequest, Role, UserRecord};
use crate::api::{ApiClient, ApiError, ApiErrorKind};
use crate::credentials::Credentials;

/// Coarse-grained UI mode selected from session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Startup restore (or an auth call) is in flight.
    Loading,
    /// No session: show the login/register stack.
    AuthStack,
    /// Authenticated: show the main tab set.
    MainTabs,
}

/// Selects the render target for a session snapshot.
///
/// Pure and total: `loading` wins, then presence of a user decides.
pub fn select(snapshot: &SessionSnapshot) -> RenderTarget {
    if snapshot.loading {
        RenderTarget::Loading
    } else if snapshot.user.is_some() {
        RenderTarget::MainTabs
    } else {
        RenderTarget::AuthStack
    }
}

/// Observable session state.
///
/// Constructed only through the helpers below so that a user is always
/// paired with its token.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    user: Option<UserRecord>,
    token: Option<String>,
    loading: bool,
}

impl SessionSnapshot {
    /// State at process start, before restore has settled.
    pub fn initial() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }

    /// Settled state with no session.
    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    /// Settled state with a session.
    pub fn authenticated(user: UserRecord, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
        }
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Client-side validation failures; these never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    MissingFields,
    /// Password and confirmation differ.
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "Please fill in all fields"),
            ValidationError::PasswordMismatch => write!(f, "Passwords don't match"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors returned by session operations.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// Rejected client-side before any network call.
    Validation(ValidationError),
    /// Network, auth, or server failure from the API.
    Api(ApiError),
}

impl SessionError {
    /// Returns true if this is an invalid-credentials/rejected-token error.
    pub fn is_auth(&self) -> bool {
        matches!(self, SessionError::Api(err) if err.kind == ApiErrorKind::Auth)
    }

    /// Returns true if this was rejected client-side.
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Validation(_))
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Validation(err) => write!(f, "{err}"),
            SessionError::Api(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        SessionError::Api(err)
    }
}

/// Register form fields, validated client-side before submission.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl RegisterForm {
    /// Validates required fields and password confirmation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            &self.email,
            &self.password,
            &self.first_name,
            &self.last_name,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.password_confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            role: self.role,
        }
    }
}

/// Owner and single writer of session state.
///
/// Mutations happen only through `restore`, `login`, `register` and
/// `logout`; everything else observes through [`SessionStore::subscribe`].
/// The async operations are serialized behind an internal lock so that
/// duplicate submissions cannot interleave state writes.
pub struct SessionStore {
    api: ApiClient,
    credentials_path: PathBuf,
    tx: watch::Sender<SessionSnapshot>,
    restore_done: AtomicBool,
    op_lock: Mutex<()>,
}

impl SessionStore {
    /// Creates a store in the initial (restoring) state.
    pub fn new(api: ApiClient) -> Self {
        Self::with_credentials_path(api, Credentials::path())
    }

    /// Creates a store persisting credentials at a specific path.
    pub fn with_credentials_path(api: ApiClient, credentials_path: PathBuf) -> Self {
        let (tx, _rx) = watch::channel(SessionSnapshot::initial());
        Self {
            api,
            credentials_path,
            tx,
            restore_done: AtomicBool::new(false),
            op_lock: Mutex::new(()),
        }
    }

    /// Returns the API client this store authenticates.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Subscribes to session state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    /// Returns the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    fn publish(&self, snapshot: SessionSnapshot) {
        self.tx.send_replace(snapshot);
    }

    fn set_loading(&self) {
        self.tx.send_modify(|snapshot| snapshot.loading = true);
    }

    fn settle_loading(&self) {
        self.tx.send_modify(|snapshot| snapshot.loading = false);
    }

    /// Attempts to recover a persisted session without user interaction.
    ///
    /// Runs at most once per process lifetime; later calls are no-ops.
    /// On any failure (missing/corrupt file, rejected token, transport
    /// error) the persisted credential is cleared and the store settles
    /// unauthenticated. Every path settles `loading`.
    pub async fn restore(&self) {
        let _guard = self.op_lock.lock().await;
        if self.restore_done.swap(true, Ordering::SeqCst) {
            return;
        }

        match Credentials::load_from(&self.credentials_path) {
            Ok(Some(credentials)) => {
                self.api.set_token(&credentials.token);
                match self.api.profile().await {
                    Ok(user) => {
                        tracing::debug!(email = %user.email, "session restored");
                        self.publish(SessionSnapshot::authenticated(user, credentials.token));
                        return;
                    }
                    Err(err) => {
                        tracing::debug!("persisted session rejected: {err}");
                        self.api.clear_token();
                        let _ = Credentials::clear_at(&self.credentials_path);
                    }
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("unreadable credentials file, clearing: {err:#}");
                let _ = Credentials::clear_at(&self.credentials_path);
            }
        }

        self.publish(SessionSnapshot::unauthenticated());
    }

    /// Exchanges credentials for a session.
    ///
    /// On success the token is installed on the API client, persisted,
    /// and the authenticated state published. On failure the store
    /// settles unauthenticated and the typed error is returned.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, SessionError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SessionError::Validation(ValidationError::MissingFields));
        }

        let _guard = self.op_lock.lock().await;
        self.set_loading();

        match self.api.login(email.trim(), password).await {
            Ok(response) => {
                self.api.set_token(&response.token);
                let credentials = Credentials {
                    token: response.token.clone(),
                    user: response.user.clone(),
                };
                if let Err(err) = credentials.save_to(&self.credentials_path) {
                    tracing::warn!("failed to persist credentials: {err:#}");
                }
                self.publish(SessionSnapshot::authenticated(
                    response.user.clone(),
                    response.token,
                ));
                Ok(response.user)
            }
            Err(err) => {
                self.publish(SessionSnapshot::unauthenticated());
                Err(err.into())
            }
        }
    }

    /// Creates an account. Does not authenticate: on success the session
    /// state is untouched and the caller decides what to do next.
    pub async fn register(&self, form: &RegisterForm) -> Result<UserRecord, SessionError> {
        form.validate().map_err(SessionError::Validation)?;

        let _guard = self.op_lock.lock().await;
        self.set_loading();

        let result = self.api.register(&form.to_request()).await;
        self.settle_loading();
        result.map_err(SessionError::Api)
    }

    /// Ends the session: clears the installed token and the persisted
    /// credential, and publishes the unauthenticated state. Synchronous;
    /// the wire contract has no logout endpoint, so cleanup is local.
    pub fn logout(&self) {
        self.api.clear_token();
        if let Err(err) = Credentials::clear_at(&self.credentials_path) {
            tracing::warn!("failed to clear credentials: {err:#}");
        }
        self.publish(SessionSnapshot::unauthenticated());
    }
}
