use serde::{Deserialize, Serialize};

/// Account details from the read-only Stellar proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StellarAccount {
    /// The queried public key.
    pub public_key: String,
    /// Native balance in stroops.
    pub balance: i64,
    /// Current sequence number.
    pub sequence: String,
    /// Horizon account identifier.
    pub account_id: String,
}

/// Balance lookup result; the proxy reports the balance as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StellarBalance {
    /// The queried public key.
    pub public_key: String,
    /// Native balance in lumens, e.g. `"1000.0000000"`.
    pub balance: String,
}

/// Transaction lookup result from the proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StellarTransaction {
    /// The queried transaction hash.
    pub tx_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_parses_proxy_payload() {
        // Extra fields like "message" are ignored.
        let json = r#"{"public_key":"GABC","balance":"1000.0000000","message":"ok"}"#;
        let balance: StellarBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.balance, "1000.0000000");
        assert_eq!(balance.public_key, "GABC");
    }

    #[test]
    fn account_round_trip() {
        let account = StellarAccount {
            public_key: "GABC".to_string(),
            balance: 1_500_000_000,
            sequence: "1024".to_string(),
            account_id: "GABC".to_string(),
        };
        let serialized = serde_json::to_string(&account).unwrap();
        let deserialized: StellarAccount = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, account);
    }
}
