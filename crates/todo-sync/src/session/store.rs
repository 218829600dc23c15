//! Session Store
//!
//! Login, registration and logout on top of a [`KeyValueStorage`].

use super::storage::{KeyValueStorage, TOKEN_KEY, USER_NAME_KEY};
use crate::api::{ApiError, AuthApi, LoginRequest, RegisterRequest};
use crate::domain::{Session, SyncError, SyncResult};

const LOGIN_FALLBACK: &str = "An error occurred while logging in";
const REGISTER_FALLBACK: &str = "An error occurred during registration. Please try again.";
const NO_TOKEN: &str = "Login failed: No token received";
const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Confirmation shown after a successful registration
pub const REGISTERED_NOTICE: &str = "Registration successful! Please login.";

/// Login form values
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form values
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Owns the persisted session
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Session restored from storage, if a non-blank token is present
    ///
    /// A name cached at registration stands in when the token has none.
    pub fn current(&self) -> Option<Session> {
        let session = self.storage.get(TOKEN_KEY).and_then(Session::from_token)?;
        if !session.is_anonymous() {
            return Some(session);
        }
        match self.storage.get(USER_NAME_KEY).filter(|n| !n.trim().is_empty()) {
            Some(name) => Some(session.with_display_name(name)),
            None => Some(session),
        }
    }

    /// Submit credentials and persist the issued token
    ///
    /// Not retried. A success response without a token is a failure.
    pub async fn login<A: AuthApi + ?Sized>(&self, api: &A, credentials: &Credentials) -> SyncResult<Session> {
        let request = LoginRequest {
            user_email: credentials.email.trim().to_string(),
            password: credentials.password.clone(),
        };
        let response = api
            .login(&request)
            .await
            .map_err(|e| auth_error(e, LOGIN_FALLBACK))?;

        let session = response
            .token
            .and_then(Session::from_token)
            .ok_or_else(|| SyncError::Auth(NO_TOKEN.to_string()))?;

        self.storage.set(TOKEN_KEY, session.token())?;
        tracing::info!("login succeeded for {}", session.display_name());
        Ok(session)
    }

    /// Create an account
    ///
    /// Mismatched passwords fail before any request. A token in the response
    /// is persisted; its absence is still a success.
    pub async fn register<A: AuthApi + ?Sized>(&self, api: &A, form: &Registration) -> SyncResult<Option<Session>> {
        if form.password != form.confirm_password {
            return Err(SyncError::Validation(PASSWORD_MISMATCH.to_string()));
        }

        let request = RegisterRequest {
            user_name: form.username.trim().to_string(),
            user_email: form.email.trim().to_string(),
            password: form.password.clone(),
        };
        let response = api
            .register(&request)
            .await
            .map_err(|e| auth_error(e, REGISTER_FALLBACK))?;

        if let Some(name) = response.user_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            if let Err(e) = self.storage.set(USER_NAME_KEY, name) {
                tracing::warn!("user name not cached: {:?}", e);
            }
        }
        if let Some(token) = response.token.as_deref().filter(|t| !t.trim().is_empty()) {
            if let Err(e) = self.storage.set(TOKEN_KEY, token) {
                tracing::warn!("registration token not persisted: {:?}", e);
            }
        }
        tracing::info!("registration succeeded for {}", request.user_name);
        Ok(self.current())
    }

    /// Drop everything persisted for this origin; no server call
    pub fn logout(&self) {
        self.storage.clear();
        tracing::info!("logged out");
    }

    /// The server rejected the token; forget it the same way logout does
    pub fn invalidate(&self) {
        self.storage.clear();
        tracing::warn!("session invalidated by server");
    }
}

fn auth_error(error: ApiError, fallback: &str) -> SyncError {
    tracing::warn!("authentication request failed: {}", error);
    SyncError::Auth(error.server_message().unwrap_or(fallback).to_string())
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;
    use crate::api::{ApiResult, AuthResponse};
    use crate::session::MemoryStorage;

    /// Canned responses, counting calls
    #[derive(Default)]
    struct FakeAuth {
        login: RefCell<Option<ApiResult<AuthResponse>>>,
        register: RefCell<Option<ApiResult<AuthResponse>>>,
        calls: Cell<usize>,
        last_register: RefCell<Option<RegisterRequest>>,
    }

    impl FakeAuth {
        fn login_returns(result: ApiResult<AuthResponse>) -> Self {
            let fake = Self::default();
            *fake.login.borrow_mut() = Some(result);
            fake
        }

        fn register_returns(result: ApiResult<AuthResponse>) -> Self {
            let fake = Self::default();
            *fake.register.borrow_mut() = Some(result);
            fake
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuth {
        async fn login(&self, _request: &LoginRequest) -> ApiResult<AuthResponse> {
            self.calls.set(self.calls.get() + 1);
            self.login.borrow_mut().take().unwrap_or_else(|| Ok(AuthResponse::default()))
        }

        async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
            self.calls.set(self.calls.get() + 1);
            *self.last_register.borrow_mut() = Some(request.clone());
            self.register.borrow_mut().take().unwrap_or_else(|| Ok(AuthResponse::default()))
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "sachin@example.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    fn registration(confirm: &str) -> Registration {
        Registration {
            username: "sachin".to_string(),
            email: "sachin@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_token() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::login_returns(Ok(AuthResponse {
            token: Some("tok".to_string()),
            user_name: None,
        }));

        let session = store.login(&api, &credentials()).await.unwrap();
        assert_eq!(session.token(), "tok");
        assert_eq!(store.current(), Some(session));
    }

    #[tokio::test]
    async fn test_login_without_token_fails() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::login_returns(Ok(AuthResponse::default()));

        let err = store.login(&api, &credentials()).await.unwrap_err();
        assert_eq!(err, SyncError::Auth(NO_TOKEN.to_string()));
        assert!(store.current().is_none());
        assert!(store.storage().is_empty());
    }

    #[tokio::test]
    async fn test_login_blank_token_fails() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::login_returns(Ok(AuthResponse {
            token: Some("  ".to_string()),
            user_name: None,
        }));

        assert!(store.login(&api, &credentials()).await.is_err());
        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn test_login_uses_server_message() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::login_returns(Err(ApiError::Status {
            status: 401,
            message: Some("Invalid email or password".to_string()),
        }));

        let err = store.login(&api, &credentials()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_login_network_failure_uses_fallback() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::login_returns(Err(ApiError::Network("connection refused".to_string())));

        let err = store.login(&api, &credentials()).await.unwrap_err();
        assert_eq!(err, SyncError::Auth(LOGIN_FALLBACK.to_string()));
    }

    #[tokio::test]
    async fn test_register_password_mismatch_makes_no_call() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::default();

        let err = store.register(&api, &registration("different")).await.unwrap_err();
        assert_eq!(err, SyncError::Validation(PASSWORD_MISMATCH.to_string()));
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_register_without_token_succeeds() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::default();

        let session = store.register(&api, &registration("secret1")).await.unwrap();
        assert!(session.is_none());
        assert!(store.current().is_none());

        let sent = api.last_register.borrow().clone().unwrap();
        assert_eq!(sent.user_name, "sachin");
        assert_eq!(sent.password, "secret1");
    }

    #[tokio::test]
    async fn test_register_with_token_persists_it() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::register_returns(Ok(AuthResponse {
            token: Some("fresh".to_string()),
            user_name: Some("sachin".to_string()),
        }));

        let session = store.register(&api, &registration("secret1")).await.unwrap().unwrap();
        assert_eq!(session.token(), "fresh");
        assert_eq!(session.display_name(), "sachin");
        assert_eq!(store.current(), Some(session));
    }

    #[tokio::test]
    async fn test_register_caches_user_name_for_later_login() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::register_returns(Ok(AuthResponse {
            token: None,
            user_name: Some(" sachin ".to_string()),
        }));

        assert!(store.register(&api, &registration("secret1")).await.unwrap().is_none());
        assert_eq!(store.storage().get(USER_NAME_KEY).as_deref(), Some("sachin"));

        let api = FakeAuth::login_returns(Ok(AuthResponse {
            token: Some("opaque".to_string()),
            user_name: None,
        }));
        store.login(&api, &credentials()).await.unwrap();
        assert_eq!(store.current().unwrap().display_name(), "sachin");
    }

    #[test]
    fn test_claimed_name_wins_over_cache() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine;

        use crate::domain::NAME_CLAIM;

        let claims = serde_json::json!({ NAME_CLAIM: "from-token" }).to_string();
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(claims));
        let store = SessionStore::new(MemoryStorage::new());
        store.storage().set(TOKEN_KEY, &token).unwrap();
        store.storage().set(USER_NAME_KEY, "cached").unwrap();

        assert_eq!(store.current().unwrap().display_name(), "from-token");
    }

    #[tokio::test]
    async fn test_register_failure_fallback() {
        let store = SessionStore::new(MemoryStorage::new());
        let api = FakeAuth::register_returns(Err(ApiError::Status { status: 500, message: None }));

        let err = store.register(&api, &registration("secret1")).await.unwrap_err();
        assert_eq!(err, SyncError::Auth(REGISTER_FALLBACK.to_string()));
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = SessionStore::new(MemoryStorage::new());
        store.storage().set(TOKEN_KEY, "tok").unwrap();
        store.storage().set(USER_NAME_KEY, "sachin").unwrap();
        assert!(store.current().is_some());

        store.logout();
        assert!(store.current().is_none());
        assert!(store.storage().is_empty());
    }
}
