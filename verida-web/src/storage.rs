//! Browser-local persistence for the session record and the bearer token.
//!
//! Two independent entries: `verida_user` holds the JSON session record
//! written by the mock login, `authToken` holds the opaque bearer string
//! set by a real backend login. Neither carries an expiry; they are cleared
//! only by logout and 401 handling respectively.

use gloo_storage::{LocalStorage, Storage};
use shared::models::SessionUser;

/// Storage key for the persisted session record.
pub const SESSION_KEY: &str = "verida_user";

/// Storage key for the opaque bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// Parse a raw storage payload into a session record.
///
/// A corrupt record is equivalent to "logged out", so any parse failure
/// collapses to `None` instead of propagating.
pub fn decode_session(raw: &str) -> Option<SessionUser> {
    serde_json::from_str(raw).ok()
}

/// Persists the single session record across reloads (same-origin only).
#[derive(Debug)]
pub struct SessionStore;

impl SessionStore {
    /// Serialize and write the record under [`SESSION_KEY`].
    pub fn save(user: &SessionUser) {
        let _ = LocalStorage::set(SESSION_KEY, user);
    }

    /// Read the record if present; absent on missing or malformed data.
    pub fn load() -> Option<SessionUser> {
        let raw = LocalStorage::raw().get_item(SESSION_KEY).ok().flatten()?;
        decode_session(&raw)
    }

    /// Remove the record. Idempotent.
    pub fn clear() {
        LocalStorage::delete(SESSION_KEY);
    }
}

/// Holds the bearer token the HTTP layer attaches to outgoing requests.
#[derive(Debug)]
pub struct TokenStore;

impl TokenStore {
    /// Persist the token under [`TOKEN_KEY`].
    pub fn save(token: &str) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    /// Read the token if one is stored.
    pub fn load() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    /// Remove the token. Idempotent.
    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_well_formed_record() {
        let raw = r#"{"id":"1","email":"demo@verida.org","name":"demo","stellar_public_key":"GABC"}"#;
        let session = decode_session(raw).unwrap();
        assert_eq!(session.email, "demo@verida.org");
        assert_eq!(session.name, "demo");
    }

    #[test]
    fn decode_treats_malformed_data_as_absent() {
        assert!(decode_session("").is_none());
        assert!(decode_session("not json").is_none());
        assert!(decode_session(r#"{"id":"1"}"#).is_none());
        assert!(decode_session(r#"{"id":1,"email":"x","name":"x","stellar_public_key":"x"}"#).is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_session() -> SessionUser {
        SessionUser {
            id: "1".to_string(),
            email: "demo@verida.org".to_string(),
            name: "demo".to_string(),
            stellar_public_key: "GABC".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn session_round_trip() {
        SessionStore::clear();
        let session = sample_session();
        SessionStore::save(&session);
        assert_eq!(SessionStore::load(), Some(session));
    }

    #[wasm_bindgen_test]
    fn load_after_clear_is_absent() {
        SessionStore::save(&sample_session());
        SessionStore::clear();
        assert_eq!(SessionStore::load(), None);
        // clearing again is a no-op
        SessionStore::clear();
        assert_eq!(SessionStore::load(), None);
    }

    #[wasm_bindgen_test]
    fn corrupt_record_reads_as_logged_out() {
        let _ = LocalStorage::raw().set_item(SESSION_KEY, "{broken");
        assert_eq!(SessionStore::load(), None);
        SessionStore::clear();
    }

    #[wasm_bindgen_test]
    fn token_round_trip() {
        TokenStore::clear();
        TokenStore::save("dummy-jwt-token");
        assert_eq!(TokenStore::load(), Some("dummy-jwt-token".to_string()));
        TokenStore::clear();
        assert_eq!(TokenStore::load(), None);
    }
}
