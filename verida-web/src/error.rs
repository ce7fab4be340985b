//! Client-side error taxonomy.
//!
//! A closed set of kinds replaces ad-hoc message strings: every failure a
//! page can see is one of these four, and each maps to one user-facing
//! message with a manual retry.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a page and the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Input rejected before any request was made; surfaced inline on the
    /// originating form.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the credentials or token.
    #[error("Invalid credentials")]
    Unauthorized,

    /// The server could not be reached, or the request timed out.
    #[error("Unable to connect to server")]
    Network,

    /// Any other failure, carrying whatever detail we saw.
    #[error("Request failed: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Map an HTTP status (or the lack of one) onto an error kind.
    #[must_use]
    pub fn from_status(status: Option<StatusCode>) -> Self {
        match status {
            Some(StatusCode::UNAUTHORIZED) => Self::Unauthorized,
            Some(status) => Self::Unknown(status.to_string()),
            None => Self::Network,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Unknown("unexpected response shape".to_string());
        }
        Self::from_status(err.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_closed_over_four_kinds() {
        assert_eq!(
            ApiError::from_status(Some(StatusCode::UNAUTHORIZED)),
            ApiError::Unauthorized
        );
        assert_eq!(ApiError::from_status(None), ApiError::Network);
        assert!(matches!(
            ApiError::from_status(Some(StatusCode::INTERNAL_SERVER_ERROR)),
            ApiError::Unknown(_)
        ));
        assert!(matches!(
            ApiError::from_status(Some(StatusCode::NOT_FOUND)),
            ApiError::Unknown(_)
        ));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ApiError::Network.to_string(), "Unable to connect to server");
        assert_eq!(ApiError::Unauthorized.to_string(), "Invalid credentials");
        assert_eq!(
            ApiError::Validation("Please fill in all fields".to_string()).to_string(),
            "Please fill in all fields"
        );
        assert!(
            ApiError::Unknown("500 Internal Server Error".to_string())
                .to_string()
                .starts_with("Request failed")
        );
    }
}
