//! Ledger construction parameters.
//!
//! Provides JSON-serializable configuration chosen once when the ledger is
//! instantiated: the fixed protocol fee recipient, which fee-split revision
//! the ledger runs, and what happens to the aggregator share when a mint
//! names no aggregator.
//!
//! ## Split modes
//!
//! [`FeeSplitMode::ProtocolOnly`] is the two-party revision: posts carry only
//! a protocol share, and mints accept no aggregator.
//! [`FeeSplitMode::ProtocolAndAggregator`] is the three-party revision with a
//! mint-time referral aggregator.  The mode is a construction-time choice,
//! never a per-call one.
//!
//! ## No-aggregator policy
//!
//! In the three-party revision a mint may still omit the aggregator.
//! [`NoAggregatorPolicy`] decides that share's fate explicitly:
//! [`Withhold`](NoAggregatorPolicy::Withhold) (default) deducts it anyway and
//! leaves it in the ledger's retained value, while
//! [`CreditCreator`](NoAggregatorPolicy::CreditCreator) folds it back into
//! the creator's residual.

use folio_primitives::AccountAddr;
use serde::{Deserialize, Serialize};

/// Which fee-split revision the ledger runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FeeSplitMode {
    /// Two-party split: creator residual plus the protocol share only.
    ProtocolOnly,

    /// Three-party split with a mint-time referral aggregator.
    ProtocolAndAggregator,
}

/// Destination of the aggregator share when a mint names no aggregator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Default)]
pub enum NoAggregatorPolicy {
    /// Deduct the share anyway and retain it in the ledger, unclaimed.
    #[default]
    Withhold,

    /// Fold the share back into the creator's residual.
    CreditCreator,
}

/// Ledger parameters, fixed at construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LedgerParams {
    /// Beneficiary of the protocol share of every mint.
    pub protocol_recipient: AccountAddr,

    /// Fee-split revision.
    pub split_mode: FeeSplitMode,

    /// Aggregator-share fallback. Defaults to [`NoAggregatorPolicy::Withhold`].
    #[serde(default)]
    pub no_aggregator_policy: NoAggregatorPolicy,
}

impl LedgerParams {
    /// Deserializes from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> LedgerParams {
        LedgerParams {
            protocol_recipient: AccountAddr::from([0xaa; 20]),
            split_mode: FeeSplitMode::ProtocolAndAggregator,
            no_aggregator_policy: NoAggregatorPolicy::CreditCreator,
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let params = sample_params();
        let json = params.to_json().expect("serialization failed");
        let decoded = LedgerParams::from_json(&json).expect("deserialization failed");
        assert_eq!(params, decoded);
    }

    #[test]
    fn test_policy_defaults_to_withhold() {
        let json = r#"{
            "protocol_recipient": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "split_mode": "ProtocolAndAggregator"
        }"#;

        let params = LedgerParams::from_json(json).expect("parse failed");
        assert_eq!(params.no_aggregator_policy, NoAggregatorPolicy::Withhold);
        assert_eq!(params.protocol_recipient, AccountAddr::from([0xaa; 20]));
    }

    #[test]
    fn test_missing_required_field_errors() {
        // Missing split_mode.
        let json = r#"{
            "protocol_recipient": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
        }"#;

        assert!(LedgerParams::from_json(json).is_err());
    }

    #[test]
    fn test_malformed_recipient_errors() {
        // Address too short to be 20 bytes of hex.
        let json = r#"{
            "protocol_recipient": "aaaa",
            "split_mode": "ProtocolOnly"
        }"#;

        assert!(LedgerParams::from_json(json).is_err());
    }

    #[test]
    fn test_pretty_json_output() {
        let params = sample_params();
        let pretty = params.to_json_pretty().expect("pretty serialization failed");
        assert!(pretty.contains('\n'));
        // Verify it round-trips.
        let decoded = LedgerParams::from_json(&pretty).expect("deserialization failed");
        assert_eq!(params, decoded);
    }
}
