//! Payment delivery boundary.

use folio_primitives::{AccountAddr, Amount};
use thiserror::Error;

/// A single payout owed to an external recipient.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    dest: AccountAddr,
    amount: Amount,
}

impl Payout {
    /// Constructs a new instance.
    pub fn new(dest: AccountAddr, amount: Amount) -> Self {
        Self { dest, amount }
    }

    /// Gets the destination address.
    pub fn dest(&self) -> AccountAddr {
        self.dest
    }

    /// Gets the payout amount.
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// A recipient (or the transfer environment) refused a payout.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("recipient {dest} rejected payout of {amount}")]
pub struct PayoutError {
    /// Recipient that refused the funds.
    pub dest: AccountAddr,

    /// Amount that could not be delivered.
    pub amount: Amount,
}

/// Trait that exposes the external funds-transfer interface to the ledger.
///
/// Implementations deliver every payout in the set or none of them; a
/// partial application would break the ledger's all-or-nothing mint
/// semantics, so a sink must validate the whole set before moving any value.
/// On `Err` the ledger treats the payment as returned to the payer and
/// applies no state change.
pub trait PaymentSink {
    /// Delivers a set of payouts atomically.
    fn deliver(&mut self, payouts: &[Payout]) -> Result<(), PayoutError>;
}
