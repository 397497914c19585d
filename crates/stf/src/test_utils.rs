//! Test utilities for the ledger STF.

#![allow(unreachable_pub, reason = "test util module")]

use std::collections::{BTreeMap, BTreeSet};

use folio_ledger_types::FeeConfig;
use folio_params::{FeeSplitMode, LedgerParams, NoAggregatorPolicy};
use folio_primitives::{AccountAddr, Amount, BasisPoints};

use crate::{
    registry::PostParams,
    sink::{PaymentSink, Payout, PayoutError},
};

/// Create test addresses with predictable values.
pub fn test_addr(index: u32) -> AccountAddr {
    let mut bytes = [0u8; 20];
    bytes[0..4].copy_from_slice(&index.to_le_bytes());
    AccountAddr::from(bytes)
}

/// Post params with a fixed content ref and the given price and fee shares.
pub fn sample_post(price: u64, protocol_bps: u16, aggregator_bps: u16) -> PostParams {
    PostParams {
        content_ref: "ipfs://Qm".to_owned(),
        price: Amount::from(price),
        fees: FeeConfig::new(
            BasisPoints::from(protocol_bps),
            BasisPoints::from(aggregator_bps),
        ),
    }
}

/// Three-party params with the given protocol recipient and policy.
pub fn three_party_params(
    protocol_recipient: AccountAddr,
    policy: NoAggregatorPolicy,
) -> LedgerParams {
    LedgerParams {
        protocol_recipient,
        split_mode: FeeSplitMode::ProtocolAndAggregator,
        no_aggregator_policy: policy,
    }
}

/// Two-party params with the given protocol recipient.
pub fn two_party_params(protocol_recipient: AccountAddr) -> LedgerParams {
    LedgerParams {
        protocol_recipient,
        split_mode: FeeSplitMode::ProtocolOnly,
        no_aggregator_policy: NoAggregatorPolicy::Withhold,
    }
}

/// In-memory payment sink tracking delivered balances per recipient.
///
/// Recipients can be marked as rejecting, in which case the whole delivery
/// fails without moving anything, matching the sink's all-or-nothing
/// contract.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    balances: BTreeMap<AccountAddr, u64>,
    rejecting: BTreeSet<AccountAddr>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a recipient as refusing funds.
    pub fn reject(&mut self, addr: AccountAddr) {
        self.rejecting.insert(addr);
    }

    /// Total value delivered to a recipient.
    pub fn balance(&self, addr: AccountAddr) -> u64 {
        self.balances.get(&addr).copied().unwrap_or(0)
    }

    /// Total value delivered to everyone.
    pub fn total_delivered(&self) -> u64 {
        self.balances.values().sum()
    }
}

impl PaymentSink for RecordingSink {
    fn deliver(&mut self, payouts: &[Payout]) -> Result<(), PayoutError> {
        // Validate the whole set before moving any value.
        for payout in payouts {
            if self.rejecting.contains(&payout.dest()) {
                return Err(PayoutError {
                    dest: payout.dest(),
                    amount: payout.amount(),
                });
            }
        }
        for payout in payouts {
            *self.balances.entry(payout.dest()).or_insert(0) += u64::from(payout.amount());
        }
        Ok(())
    }
}
