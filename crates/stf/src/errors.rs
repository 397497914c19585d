use folio_primitives::{AccountAddr, Amount, BasisPoints, PostId};
use thiserror::Error;

use crate::sink::PayoutError;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger operation error types.
///
/// Every variant rejects the whole attempted operation; no error leaves
/// partial state behind, and the ledger never retries internally.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LedgerError {
    /// Fee configuration breaks the basis-point bounds for the configured
    /// split mode.
    #[error("invalid fee config: protocol {protocol_fee_bps} + aggregator {aggregator_fee_bps} bps")]
    InvalidFee {
        protocol_fee_bps: BasisPoints,
        aggregator_fee_bps: BasisPoints,
    },

    /// Referenced post index was never assigned.
    #[error("post {0} does not exist")]
    NonexistentPost(PostId),

    /// Caller tried to update a post it didn't create.
    #[error("{caller} does not own post {post}")]
    NotOwner { post: PostId, caller: AccountAddr },

    /// Mint payment below the post's price.
    #[error("insufficient funds: price {need}, paid {got}")]
    InsufficientFunds { need: Amount, got: Amount },

    /// A payout recipient refused its share, failing the whole mint.
    #[error("payout delivery failed: {0}")]
    TransferFailed(#[from] PayoutError),

    /// An aggregator was supplied but the ledger runs a two-party split.
    #[error("aggregator {0} supplied under a two-party split")]
    UnexpectedAggregator(AccountAddr),

    /// Access transfer debit exceeds the holder's grant.
    #[error("insufficient access balance for {holder} on post {post}")]
    InsufficientBalance { post: PostId, holder: AccountAddr },
}
