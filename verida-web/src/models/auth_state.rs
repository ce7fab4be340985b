use crate::storage::SessionStore;
use shared::models::SessionUser;
use yewdux::{Context, Store};

/// App-wide authentication state.
///
/// `loading` is true only before the initial restore has run and while a
/// login call is in flight; the route guard must not make a redirect
/// decision during that window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// The active session record, if any. Its presence is the sole source
    /// of truth for "is authenticated".
    pub user: Option<SessionUser>,
    /// Whether a restore or login is still settling.
    pub loading: bool,
}

impl AuthState {
    /// State before the restore pass has run.
    #[must_use]
    pub fn restoring() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// State after restore or login settled.
    #[must_use]
    pub fn restored(user: Option<SessionUser>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// Settled state with no session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::restored(None)
    }

    /// Whether a session record is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::restoring()
    }
}

impl Store for AuthState {
    fn new(_cx: &Context) -> Self {
        // Single synchronous pass: trust local storage at boot. No network
        // validation; a stale record is accepted until the first 401.
        Self::restored(SessionStore::load())
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionUser {
        SessionUser {
            id: "1".to_string(),
            email: "demo@verida.org".to_string(),
            name: "demo".to_string(),
            stellar_public_key: "GABC".to_string(),
        }
    }

    #[test]
    fn default_is_restoring() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn restored_with_user_is_authenticated() {
        let state = AuthState::restored(Some(session()));
        assert!(!state.loading);
        assert!(state.is_authenticated());
    }

    #[test]
    fn anonymous_is_settled_and_unauthenticated() {
        let state = AuthState::anonymous();
        assert!(!state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn notifies_only_on_change() {
        let a = AuthState::anonymous();
        let b = AuthState::anonymous();
        assert!(!Store::should_notify(&a, &b));
        let c = AuthState::restored(Some(session()));
        assert!(Store::should_notify(&c, &b));
    }
}
