//! Events emitted by ledger operations.
//!
//! Events are the durable observational surface for off-chain indexers; they
//! are collected in the operation context's buffer and returned to the
//! embedder alongside the result, never persisted by the ledger itself.

use folio_ledger_types::PostRecord;
use folio_primitives::{AccountAddr, PostId};
use serde::{Deserialize, Serialize};

/// Event emitted during a ledger operation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A new post was registered, carrying its full stored state.
    PostCreated { post: PostId, record: PostRecord },

    /// An existing post's mutable fields were overwritten by its creator,
    /// carrying the new stored state.
    PostUpdated { post: PostId, record: PostRecord },

    /// Access units were issued from the null origin to `recipient`.
    /// Observers track supply by diffing these.
    AccessIssued {
        post: PostId,
        recipient: AccountAddr,
        units: u64,
    },

    /// Access units moved between holders.
    AccessTransferred {
        from: AccountAddr,
        to: AccountAddr,
        entries: Vec<(PostId, u64)>,
    },
}
