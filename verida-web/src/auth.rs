//! Session manager: the mock login flow and its storage-backed state.
//!
//! The manager is a thin handle over the auth store's dispatch; components
//! construct it from `use_store` rather than reaching for a module-level
//! singleton.

use crate::models::auth_state::AuthState;
use crate::storage::SessionStore;
use shared::models::SessionUser;
use yewdux::Dispatch;

/// Demo Stellar account assigned to every mocked session.
pub const DEMO_STELLAR_PUBLIC_KEY: &str =
    "GCKFBEIYTKP33XDVHFED7JKUEWCADHJHTJTGXLYJJ7QSMMHD5PFCZDQX";

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Mock credential rule: any non-empty email with a long-enough password.
#[must_use]
pub fn valid_credentials(email: &str, password: &str) -> bool {
    !email.is_empty() && password.len() >= MIN_PASSWORD_LEN
}

/// Display name derived from the email's local part.
#[must_use]
pub fn derive_display_name(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Build the session record the mock login produces.
#[must_use]
pub fn mock_session(email: &str) -> SessionUser {
    SessionUser {
        id: "1".to_string(),
        email: email.to_string(),
        name: derive_display_name(email),
        stellar_public_key: DEMO_STELLAR_PUBLIC_KEY.to_string(),
    }
}

/// Handle for mutating the auth store.
#[derive(Clone, PartialEq)]
pub struct SessionManager {
    dispatch: Dispatch<AuthState>,
}

impl SessionManager {
    /// Wrap a dispatch obtained from `use_store::<AuthState>()`.
    pub fn new(dispatch: Dispatch<AuthState>) -> Self {
        Self { dispatch }
    }

    /// Attempt a login. Fails closed: `false` for an empty email or a
    /// password under six characters, and the current state is left
    /// untouched. On success the record is persisted before the new state
    /// is published, so a reload mid-transition still restores it.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if !valid_credentials(email, password) {
            return false;
        }
        self.dispatch.reduce_mut(|state| state.loading = true);
        let session = mock_session(email);
        SessionStore::save(&session);
        self.dispatch.set(AuthState::restored(Some(session)));
        true
    }

    /// Drop the session record and storage entry. Idempotent.
    pub fn logout(&self) {
        SessionStore::clear();
        self.dispatch.set(AuthState::anonymous());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_demo_credentials() {
        assert!(valid_credentials("demo@verida.org", "demo123"));
    }

    #[test]
    fn rejects_short_password() {
        assert!(!valid_credentials("a@b.com", "short"));
        assert!(!valid_credentials("a@b.com", ""));
    }

    #[test]
    fn rejects_empty_email() {
        assert!(!valid_credentials("", "longenough"));
    }

    #[test]
    fn accepts_exactly_six_characters() {
        assert!(valid_credentials("a@b.com", "123456"));
        assert!(!valid_credentials("a@b.com", "12345"));
    }

    #[test]
    fn display_name_is_email_local_part() {
        assert_eq!(derive_display_name("demo@verida.org"), "demo");
        assert_eq!(derive_display_name("maria.lopez@ong.example"), "maria.lopez");
        // no '@' at all: the whole string is the local part
        assert_eq!(derive_display_name("demo"), "demo");
    }

    #[test]
    fn mock_session_fields() {
        let session = mock_session("demo@verida.org");
        assert_eq!(session.id, "1");
        assert_eq!(session.email, "demo@verida.org");
        assert_eq!(session.name, "demo");
        assert_eq!(session.stellar_public_key, DEMO_STELLAR_PUBLIC_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use yewdux::{Context, Dispatch};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn failed_login_writes_nothing() {
        SessionStore::clear();
        let cx = Context::new();
        let dispatch = Dispatch::<AuthState>::new(&cx);
        let before = dispatch.get();
        let session = SessionManager::new(dispatch.clone());

        assert!(!session.login("a@b.com", "short"));

        // Neither the store state nor the persisted record moved.
        assert_eq!(dispatch.get(), before);
        assert_eq!(SessionStore::load(), None);
    }

    #[wasm_bindgen_test]
    fn successful_login_publishes_and_persists() {
        SessionStore::clear();
        let cx = Context::new();
        let dispatch = Dispatch::<AuthState>::new(&cx);
        let session = SessionManager::new(dispatch.clone());

        assert!(session.login("demo@verida.org", "demo123"));
        assert!(dispatch.get().is_authenticated());
        assert_eq!(
            SessionStore::load().map(|user| user.email),
            Some("demo@verida.org".to_string())
        );

        session.logout();
        assert!(!dispatch.get().is_authenticated());
        assert_eq!(SessionStore::load(), None);
    }
}
