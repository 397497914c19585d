//! Content-access ledger state transition functions.
//!
//! This crate implements the operations over [`LedgerState`], including:
//! - Post registration and creator-restricted updates
//! - Paginated per-account post enumeration
//! - Fee-splitting mint logic with payout delivery via the
//!   [`Coin`](folio_ledger_types::Coin) abstraction
//! - Holder-to-holder access-unit transfers
//!
//! ## Architecture
//!
//! - `registry`: post creation, update, lookup, and pagination
//! - `access`: mint, balance queries, and bulk transfers
//! - `split`: pure payment-splitting arithmetic
//! - `sink`: the external funds-delivery boundary
//! - `context`: per-operation caller identity and event collection
//!
//! Every mutating operation either fully applies or fully rejects; the event
//! buffer in [`OpContext`] is the only output channel besides the state
//! itself.
//!
//! [`LedgerState`]: folio_ledger_types::LedgerState

pub mod access;
pub mod context;
pub mod errors;
pub mod events;
pub mod registry;
pub mod sink;
pub mod split;
pub mod test_utils;


pub use access::{MintArgs, balance_of, mint, transfer_access};
pub use context::{EventBuffer, OpContext};
pub use errors::{LedgerError, LedgerResult};
pub use events::LedgerEvent;
pub use registry::{
    ACCOUNT_PAGE_SIZE, PostPage, PostParams, PostSummary, create_post, get_post,
    list_posts_by_account, post_count, update_post,
};
pub use sink::{PaymentSink, Payout, PayoutError};
pub use split::{PaymentSplit, split_payment};
