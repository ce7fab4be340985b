use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Verification state shared by communities and deliveries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// Awaiting review.
    Pending,
    /// Confirmed by a validator or representative.
    Verified,
    /// Review failed.
    Rejected,
}

impl VerificationStatus {
    /// Canonical wire and display string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(Self::Pending),
            "Verified" => Ok(Self::Verified),
            "Rejected" => Ok(Self::Rejected),
            _ => Err("unknown verification status"),
        }
    }
}

/// A recipient community registered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Community {
    /// Unique identifier for the community.
    pub id: Uuid,

    /// Community name.
    pub name: String,

    /// Where the community is located.
    pub location: String,

    /// What the community is raising funds for.
    pub description: String,

    /// The representative accountable for deliveries.
    pub representative_id: Uuid,

    /// Stellar account donations are escrowed towards.
    pub stellar_public_key: String,

    /// Whether the community has been verified.
    pub verification_status: VerificationStatus,

    /// When the community was registered.
    pub created_at: DateTime<Utc>,

    /// When the community was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Request to register a new community.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCommunityRequest {
    /// Community name.
    pub name: String,

    /// Where the community is located.
    pub location: String,

    /// What the community is raising funds for.
    pub description: String,

    /// Stellar key of the accountable representative.
    pub representative_stellar_key: String,
}

/// Envelope for `GET /communities`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunitiesResponse {
    /// All registered communities.
    pub communities: Vec<Community>,
}

/// Envelope for `GET /communities/{id}` and `POST /communities`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityResponse {
    /// The requested or created community.
    pub community: Community,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_status_round_trip() {
        for (text, status) in [
            ("Pending", VerificationStatus::Pending),
            ("Verified", VerificationStatus::Verified),
            ("Rejected", VerificationStatus::Rejected),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(VerificationStatus::from_str(text).unwrap(), status);
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{text}\""));
        }
    }

    #[test]
    fn community_deserializes_from_backend_json() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "name": "San José Community",
            "location": "Guatemala",
            "description": "Food and medicine for 40 families",
            "representative_id": Uuid::new_v4(),
            "stellar_public_key": "GCKFBEIYTKP33XDVHFED7JKUEWCADHJHTJTGXLYJJ7QSMMHD5PFCZDQX",
            "verification_status": "Pending",
            "created_at": Utc::now(),
            "updated_at": Utc::now(),
        });

        let community: Community = serde_json::from_value(json).unwrap();
        assert_eq!(community.verification_status, VerificationStatus::Pending);
        assert_eq!(community.name, "San José Community");
    }
}
