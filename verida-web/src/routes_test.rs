//! Tests for the routing system
//!
//! Validates route definitions, the guard decision rule, and the
//! post-login target resolution.

#[cfg(test)]
mod tests {
    use crate::models::auth_state::AuthState;
    use crate::routes::{GuardDecision, MainRoute, guard, login_target};
    use crate::storage::decode_session;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    fn signed_in() -> AuthState {
        let raw = r#"{
            "id": "1",
            "email": "demo@verida.org",
            "name": "demo",
            "stellar_public_key": "GCKFBEIYTKP33XDVHFED7JKUEWCADHJHTJTGXLYJJ7QSMMHD5PFCZDQX"
        }"#;
        AuthState::restored(decode_session(raw))
    }

    /// Tests path recognition for every declared route
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Landing));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/dashboard"), Some(MainRoute::Dashboard));
        assert_eq!(MainRoute::recognize("/donations"), Some(MainRoute::Donations));
        assert_eq!(MainRoute::recognize("/communities"), Some(MainRoute::Communities));
        assert_eq!(MainRoute::recognize("/account"), Some(MainRoute::Account));
        assert_eq!(MainRoute::recognize("/home"), Some(MainRoute::Home));
    }

    /// Tests the legacy deliveries spelling
    #[test]
    fn test_legacy_deliveries_path() {
        assert_eq!(MainRoute::recognize("/deliverys"), Some(MainRoute::Deliveries));
        assert_eq!(MainRoute::Deliveries.to_path(), "/deliverys");
    }

    /// Tests that unknown paths fall through to the not-found route
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(MainRoute::recognize("/nowhere"), Some(MainRoute::NotFound));
    }

    /// Tests the protected set against the nav labels
    #[test]
    fn test_protected_routes_have_nav_labels() {
        for route in MainRoute::iter() {
            assert_eq!(route.is_protected(), route.nav_label().is_some());
        }
    }

    /// Tests that public routes stay outside the guard
    #[test]
    fn test_public_routes() {
        assert!(!MainRoute::Landing.is_protected());
        assert!(!MainRoute::Login.is_protected());
        assert!(!MainRoute::Home.is_protected());
        assert!(!MainRoute::NotFound.is_protected());
    }

    /// Tests that the guard never redirects while the restore is settling
    #[test]
    fn test_guard_waits_while_loading() {
        let state = AuthState::restoring();
        assert_eq!(guard(&state, "/account"), GuardDecision::Wait);
    }

    /// Tests the anonymous redirect carries the requested path
    #[test]
    fn test_guard_redirects_anonymous() {
        let state = AuthState::anonymous();
        assert_eq!(
            guard(&state, "/account"),
            GuardDecision::Redirect {
                from: "/account".to_string()
            }
        );
    }

    /// Tests that an authenticated session renders the protected content
    #[test]
    fn test_guard_renders_authenticated() {
        assert_eq!(guard(&signed_in(), "/donations"), GuardDecision::Render);
    }

    /// Tests the post-login target for a remembered path
    #[test]
    fn test_login_target_honors_pending_path() {
        assert_eq!(login_target(Some("/account")), MainRoute::Account);
        assert_eq!(login_target(Some("/deliverys")), MainRoute::Deliveries);
    }

    /// Tests the post-login fallbacks
    #[test]
    fn test_login_target_fallbacks() {
        assert_eq!(login_target(None), MainRoute::Dashboard);
        assert_eq!(login_target(Some("/login")), MainRoute::Dashboard);
        assert_eq!(login_target(Some("/no-such-page")), MainRoute::Dashboard);
    }
}
