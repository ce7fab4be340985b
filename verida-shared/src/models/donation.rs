use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Stroops per lumen; donation amounts are stored in stroops.
pub const STROOPS_PER_XLM: i64 = 10_000_000;

/// Lifecycle of a donation from creation to settlement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DonationStatus {
    /// Recorded but not yet funded.
    Created,
    /// Funds held pending delivery validation.
    InEscrow,
    /// Delivery validated by a representative.
    Validated,
    /// Goods handed over to the community.
    Delivered,
    /// Escrow released, donation settled.
    Completed,
    /// Under dispute resolution.
    Disputed,
    /// Cancelled before settlement.
    Cancelled,
}

impl DonationStatus {
    /// Canonical wire and display string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::InEscrow => "InEscrow",
            Self::Validated => "Validated",
            Self::Delivered => "Delivered",
            Self::Completed => "Completed",
            Self::Disputed => "Disputed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Created" => Ok(Self::Created),
            "InEscrow" => Ok(Self::InEscrow),
            "Validated" => Ok(Self::Validated),
            "Delivered" => Ok(Self::Delivered),
            "Completed" => Ok(Self::Completed),
            "Disputed" => Ok(Self::Disputed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err("unknown donation status"),
        }
    }
}

/// A donation tracked through the escrow lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donation {
    /// Unique identifier for the donation.
    pub id: Uuid,

    /// The donating user.
    pub donor_id: Uuid,

    /// The recipient community.
    pub community_id: Uuid,

    /// Amount in stroops.
    pub amount: i64,

    /// What the donation funds.
    pub description: String,

    /// Conditions for releasing the escrow.
    pub conditions: String,

    /// Hash of the funding transaction, once submitted.
    pub stellar_transaction_hash: Option<String>,

    /// Address of the donation contract.
    pub contract_address: String,

    /// Address escrowed funds are held at.
    pub escrow_address: String,

    /// Current lifecycle status.
    pub status: DonationStatus,

    /// When the donation was created.
    pub created_at: DateTime<Utc>,

    /// When the donation was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Donation {
    /// Amount converted from stroops to lumens for display.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn amount_xlm(&self) -> f64 {
        self.amount as f64 / STROOPS_PER_XLM as f64
    }
}

/// Request to create a new donation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDonationRequest {
    /// The recipient community.
    pub community_id: Uuid,

    /// Amount in lumens, as entered on the form.
    pub amount: f64,

    /// What the donation funds.
    pub description: String,

    /// Conditions for releasing the escrow.
    pub conditions: String,

    /// Stellar key the funds are sent from.
    pub donor_stellar_key: String,
}

/// Envelope for `GET /donations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationsResponse {
    /// All tracked donations.
    pub donations: Vec<Donation>,
}

/// Envelope for `GET /donations/{id}` and `POST /donations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationResponse {
    /// The requested or created donation.
    pub donation: Donation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_donation(status: DonationStatus) -> Donation {
        Donation {
            id: Uuid::new_v4(),
            donor_id: Uuid::new_v4(),
            community_id: Uuid::new_v4(),
            amount: 5 * STROOPS_PER_XLM,
            description: "Food packages".to_string(),
            conditions: "Delivery verified by community".to_string(),
            stellar_transaction_hash: None,
            contract_address: "CONTRACT_ADDR".to_string(),
            escrow_address: "ESCROW_ADDR".to_string(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn donation_status_round_trip() {
        for (text, status) in [
            ("Created", DonationStatus::Created),
            ("InEscrow", DonationStatus::InEscrow),
            ("Validated", DonationStatus::Validated),
            ("Delivered", DonationStatus::Delivered),
            ("Completed", DonationStatus::Completed),
            ("Disputed", DonationStatus::Disputed),
            ("Cancelled", DonationStatus::Cancelled),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(status.to_string(), text);
            assert_eq!(DonationStatus::from_str(text).unwrap(), status);
        }
    }

    #[test]
    fn donation_status_invalid() {
        assert!(DonationStatus::from_str("Escrowed").is_err());
    }

    #[test]
    fn amount_converts_to_lumens() {
        let donation = sample_donation(DonationStatus::InEscrow);
        assert!((donation.amount_xlm() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn donation_round_trip() {
        let donation = sample_donation(DonationStatus::Completed);
        let serialized = serde_json::to_string(&donation).unwrap();
        let deserialized: Donation = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, donation);
    }
}
