use serde::{Deserialize, Serialize};

/// Aggregate platform statistics from `GET /stats`.
///
/// The backend emits camelCase keys for this endpoint only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of donations tracked.
    pub total_donations: u64,

    /// Percentage of donations with a completed delivery.
    pub success_rate: f64,

    /// Number of registered communities.
    pub total_communities: u64,

    /// Total donated amount in lumens.
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_uses_camel_case_keys() {
        let json = r#"{"totalDonations":12,"successRate":66.0,"totalCommunities":3,"totalAmount":2500.0}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_donations, 12);
        assert_eq!(stats.total_communities, 3);
        assert!((stats.success_rate - 66.0).abs() < f64::EPSILON);

        let round_tripped = serde_json::to_string(&stats).unwrap();
        assert!(round_tripped.contains("totalDonations"));
        assert!(!round_tripped.contains("total_donations"));
    }

    #[test]
    fn statistics_accepts_integer_amounts() {
        // The backend computes totals as integers; both forms must parse.
        let json = r#"{"totalDonations":0,"successRate":0,"totalCommunities":0,"totalAmount":0}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats, Statistics::default());
    }
}
