use super::community::VerificationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded hand-over of goods funded by a donation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Delivery {
    /// Unique identifier for the delivery.
    pub id: Uuid,

    /// The donation this delivery fulfils.
    pub donation_id: Uuid,

    /// The receiving community account.
    pub recipient_id: Uuid,

    /// The representative who confirmed the hand-over.
    pub representative_id: Uuid,

    /// Description of the goods handed over.
    pub goods_received: String,

    /// Quantity of goods handed over.
    pub quantity: i32,

    /// URL or hash of the delivery proof.
    pub delivery_proof: String,

    /// Whether the delivery has been verified.
    pub verification_status: VerificationStatus,

    /// Hash of the settlement transaction, once submitted.
    pub stellar_transaction_hash: Option<String>,

    /// When the delivery was recorded.
    pub created_at: DateTime<Utc>,

    /// When the delivery was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Request to record a delivery against a donation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateDeliveryRequest {
    /// The donation being fulfilled.
    pub donation_id: Uuid,

    /// Description of the goods handed over.
    pub goods_received: String,

    /// Quantity of goods handed over.
    pub quantity: i32,

    /// URL or hash of the delivery proof.
    pub delivery_proof: String,

    /// Stellar key of the confirming representative.
    pub representative_stellar_key: String,
}

/// Envelope for `GET /deliveries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveriesResponse {
    /// All recorded deliveries.
    pub deliveries: Vec<Delivery>,
}

/// Envelope for `GET /deliveries/{id}` and `POST /deliveries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryResponse {
    /// The requested or created delivery.
    pub delivery: Delivery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_round_trip() {
        let delivery = Delivery {
            id: Uuid::new_v4(),
            donation_id: Uuid::new_v4(),
            recipient_id: Uuid::new_v4(),
            representative_id: Uuid::new_v4(),
            goods_received: "School supplies".to_string(),
            quantity: 100,
            delivery_proof: "https://proofs.example/kit-100".to_string(),
            verification_status: VerificationStatus::Pending,
            stellar_transaction_hash: Some("abc123".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let serialized = serde_json::to_string(&delivery).unwrap();
        let deserialized: Delivery = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, delivery);
    }

    #[test]
    fn validate_request_serializes_expected_fields() {
        let request = ValidateDeliveryRequest {
            donation_id: Uuid::new_v4(),
            goods_received: "Cement bags".to_string(),
            quantity: 20,
            delivery_proof: "hash".to_string(),
            representative_stellar_key: "GREP".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("donation_id").is_some());
        assert!(json.get("representative_stellar_key").is_some());
        assert_eq!(json["quantity"], 20);
    }
}
