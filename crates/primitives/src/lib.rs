//! Core primitive types for the folio ledger.
//!
//! These are the identifier and arithmetic newtypes shared by every other
//! crate: account addresses, native-currency amounts, basis-point fee shares,
//! and post identifiers.

mod addr;
mod amount;
mod bps;
mod macros;
mod post_id;

pub use addr::AccountAddr;
pub use amount::Amount;
pub use bps::{BPS_DENOMINATOR, BasisPoints};
pub use post_id::PostId;
