use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Role of an account on the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserType {
    /// Donor organisation.
    #[serde(rename = "ONG")]
    Ong,
    /// Recipient community account.
    Community,
    /// Community representative confirming deliveries.
    Representative,
    /// Third-party delivery validator.
    Validator,
}

impl UserType {
    /// Return the canonical string used on the wire and in the UI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ong => "ONG",
            Self::Community => "Community",
            Self::Representative => "Representative",
            Self::Validator => "Validator",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ONG" => Ok(Self::Ong),
            "Community" => Ok(Self::Community),
            "Representative" => Ok(Self::Representative),
            "Validator" => Ok(Self::Validator),
            _ => Err("unknown user type"),
        }
    }
}

/// A registered platform user as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// Stellar account the user transacts from.
    pub stellar_public_key: String,

    /// Role of the account.
    pub user_type: UserType,

    /// Display name.
    pub name: String,

    /// Contact email, if one was registered.
    pub email: Option<String>,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Stellar account the user will transact from.
    pub stellar_public_key: String,

    /// Role of the account.
    pub user_type: UserType,

    /// Display name.
    pub name: String,

    /// Optional contact email.
    pub email: Option<String>,
}

/// Request to authenticate against the backend by Stellar key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Stellar account to authenticate as.
    pub stellar_public_key: String,
}

/// Response to `login` and `register`: the user plus a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// The authenticated user.
    pub user: User,
    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

/// Envelope for `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsersResponse {
    /// All registered users.
    pub users: Vec<User>,
}

/// Envelope for `GET /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    /// The requested user.
    pub user: User,
}
