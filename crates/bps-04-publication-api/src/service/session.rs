//! Auth Session
//!
//! Holds the signed-in user and token, mirrored into a [`TokenStore`] under
//! the `user` (JSON) and `token` keys so a restart can restore them.
//!
//! Restoring needs both keys. If either one cannot be read or the user JSON
//! does not parse, both keys are removed and the session starts signed out.

use std::sync::Arc;

use bps_03_validation::{validate_login, validate_registration, RegistrationForm};
use parking_lot::RwLock;
use shared_types::{AuthGrant, User};
use tracing::{info, warn};

use crate::error::{SessionError, StorageError};
use crate::ports::{AuthGateway, TokenStore, TOKEN_KEY, USER_KEY};

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
    initialized: bool,
}

pub struct AuthSession {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
}

impl AuthSession {
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            gateway,
            store,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Load the persisted session. Call once at startup.
    pub fn restore(&self) -> Option<User> {
        let restored = match self.read_persisted() {
            Ok(found) => found,
            Err(err) => {
                warn!(%err, "[bps-04] Stored session is corrupt, clearing it");
                self.forget_persisted();
                None
            }
        };

        let mut state = self.state.write();
        state.initialized = true;
        match restored {
            Some((user, token)) => {
                info!(user = %user.display_name(), "[bps-04] Session restored");
                state.user = Some(user.clone());
                state.token = Some(token);
                Some(user)
            }
            None => None,
        }
    }

    fn read_persisted(&self) -> Result<Option<(User, String)>, StorageError> {
        let user = self.store.get(USER_KEY)?;
        let token = self.store.get(TOKEN_KEY)?;
        match (user, token) {
            (Some(user), Some(token)) if !token.is_empty() => {
                let user: User =
                    serde_json::from_str(&user).map_err(|e| StorageError::Corrupt {
                        key: USER_KEY.to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(Some((user, token)))
            }
            _ => Ok(None),
        }
    }

    fn forget_persisted(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(err) = self.store.remove(key) {
                warn!(key, %err, "[bps-04] Could not remove stored value");
            }
        }
    }

    fn accept(&self, grant: AuthGrant) -> Result<User, SessionError> {
        let user_json = serde_json::to_string(&grant.user).map_err(StorageError::from)?;
        {
            let mut state = self.state.write();
            state.user = Some(grant.user.clone());
            state.token = Some(grant.token.clone());
        }
        self.store.set(USER_KEY, &user_json)?;
        self.store.set(TOKEN_KEY, &grant.token)?;
        Ok(grant.user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        validate_login(email, password)
            .into_result()
            .map_err(SessionError::Validation)?;

        let grant = self.gateway.login(email, password).await.map_err(|err| {
            warn!(%err, "[bps-04] Login failed");
            err
        })?;
        let user = self.accept(grant)?;
        info!(user = %user.display_name(), "[bps-04] Logged in");
        Ok(user)
    }

    /// Create an account. The grant is not kept: the new user signs in
    /// through the login tab like everyone else.
    pub async fn register(&self, form: &RegistrationForm) -> Result<User, SessionError> {
        validate_registration(form)
            .into_result()
            .map_err(SessionError::Validation)?;

        let grant = self
            .gateway
            .register(&form.name, &form.email, &form.password)
            .await
            .map_err(|err| {
                warn!(%err, "[bps-04] Registration failed");
                err
            })?;
        info!(user = %grant.user.display_name(), "[bps-04] Registered");
        Ok(grant.user)
    }

    /// End the session remotely, then locally.
    ///
    /// A remote failure keeps the session, except for 401: the token is
    /// already dead, so the local copy is dropped too.
    pub async fn logout(&self) -> Result<(), SessionError> {
        if let Err(err) = self.gateway.logout().await {
            if !err.is_unauthorized() {
                warn!(%err, "[bps-04] Logout failed");
                return Err(err.into());
            }
            warn!("[bps-04] Token already rejected by server, clearing session");
        }

        {
            let mut state = self.state.write();
            state.user = None;
            state.token = None;
        }
        self.store.remove(USER_KEY)?;
        self.store.remove(TOKEN_KEY)?;
        info!("[bps-04] Logged out");
        Ok(())
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().initialized
    }

    /// Header label: the user's name or `"User"`.
    pub fn display_name(&self) -> String {
        self.state
            .read()
            .user
            .as_ref()
            .map(|u| u.display_name().to_string())
            .unwrap_or_else(|| "User".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryBackend, MemoryTokenStore, DEMO_EMAIL, DEMO_PASSWORD};

    fn setup() -> (AuthSession, Arc<InMemoryBackend>, Arc<MemoryTokenStore>) {
        let backend = Arc::new(InMemoryBackend::demo());
        let store = Arc::new(MemoryTokenStore::new());
        let session = AuthSession::new(backend.clone(), store.clone());
        (session, backend, store)
    }

    #[tokio::test]
    async fn test_login_persists_user_and_token() {
        let (session, _, store) = setup();
        let user = session.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        assert_eq!(user.name, "Admin BPS");
        assert!(session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), session.token());
        assert!(store.get(USER_KEY).unwrap().unwrap().contains("Admin BPS"));
    }

    #[tokio::test]
    async fn test_login_with_empty_fields_never_calls_server() {
        let (session, backend, _) = setup();
        let err = session.login("", "").await.unwrap_err();
        assert_eq!(err.login_message(), "Username dan password harus diisi!");
        assert_eq!(backend.calls("login"), 0);
    }

    #[tokio::test]
    async fn test_wrong_password_surfaces_server_message() {
        let (session, _, _) = setup();
        let err = session.login(DEMO_EMAIL, "salah").await.unwrap_err();
        assert_eq!(err.login_message(), "Email atau password salah");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore_round_trip() {
        let (session, backend, store) = setup();
        store.set(USER_KEY, r#"{"id":1,"name":"Admin BPS","email":"a@b"}"#).unwrap();
        store.set(TOKEN_KEY, "tok").unwrap();

        let user = session.restore().unwrap();
        assert_eq!(user.name, "Admin BPS");
        assert!(session.is_initialized());

        let fresh = AuthSession::new(backend, Arc::new(MemoryTokenStore::new()));
        assert!(fresh.restore().is_none());
        assert_eq!(fresh.display_name(), "User");
    }

    #[test]
    fn test_restore_clears_corrupt_user() {
        let (session, _, store) = setup();
        store.set(USER_KEY, "{oops").unwrap();
        store.set(TOKEN_KEY, "tok").unwrap();

        assert!(session.restore().is_none());
        assert_eq!(store.get(USER_KEY).unwrap(), None);
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert!(session.is_initialized());
    }

    #[tokio::test]
    async fn test_register_validates_before_calling_server() {
        let (session, backend, _) = setup();
        let form = RegistrationForm {
            name: "Operator".to_string(),
            email: "op@bps.go.id".to_string(),
            password: "short".to_string(),
            confirm_password: "other".to_string(),
            terms_accepted: false,
        };
        let err = session.register(&form).await.unwrap_err();
        assert!(matches!(err, SessionError::Validation(ref e) if e.len() == 3));
        assert_eq!(backend.calls("register"), 0);
    }

    #[tokio::test]
    async fn test_register_leaves_session_signed_out() {
        let (session, backend, store) = setup();
        let form = RegistrationForm {
            name: "Operator".to_string(),
            email: "operator@bps.go.id".to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
            terms_accepted: true,
        };
        let user = session.register(&form).await.unwrap();

        assert_eq!(user.name, "Operator");
        assert_eq!(backend.calls("register"), 1);
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);

        let user = session.login("operator@bps.go.id", "password123").await.unwrap();
        assert_eq!(user.name, "Operator");
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_uses_generic_message() {
        let (session, _, _) = setup();
        let form = RegistrationForm {
            name: "Admin".to_string(),
            email: DEMO_EMAIL.to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
            terms_accepted: true,
        };
        let err = session.register(&form).await.unwrap_err();
        assert_eq!(err.register_message(), "Terjadi kesalahan. Silakan coba lagi.");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (session, backend, store) = setup();
        session.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        backend.fail_next(500, "Server Error");
        assert!(session.logout().await.is_err());
        assert!(session.is_authenticated());

        backend.fail_next(401, "Unauthenticated.");
        session.logout().await.unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }
}
