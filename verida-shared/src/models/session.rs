use serde::{Deserialize, Serialize};

/// The locally persisted representation of "who is logged in".
///
/// Exactly one record may be active at a time; its presence is the sole
/// source of truth for the authenticated state. It is written to browser
/// storage on login and destroyed on logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// Identifier assigned by the login flow.
    pub id: String,

    /// Email the user signed in with.
    pub email: String,

    /// Display name shown in the header and account page.
    pub name: String,

    /// Stellar account associated with the session.
    pub stellar_public_key: String,
}
