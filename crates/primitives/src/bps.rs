use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Amount;

type RawBasisPoints = u16;

/// Fee denominator: shares are expressed out of 10000 (100.00%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A fee share in basis points (1/100 of a percent).
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default,
)]
#[repr(transparent)]
pub struct BasisPoints(RawBasisPoints);

crate::impl_transparent_thin_wrapper!(BasisPoints => RawBasisPoints);

impl BasisPoints {
    /// A zero share.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Checks that the share does not exceed the denominator.
    pub fn is_valid(&self) -> bool {
        u64::from(self.0) <= BPS_DENOMINATOR
    }

    /// Computes this share of `amount`, rounding down.
    ///
    /// Callers must only apply validated shares; the quotient fits the amount
    /// type because `self <= BPS_DENOMINATOR`.
    pub fn share_of(&self, amount: Amount) -> Amount {
        debug_assert!(self.is_valid(), "bps: share out of range");
        let raw = u128::from(u64::from(amount)) * u128::from(self.0) / u128::from(BPS_DENOMINATOR);
        Amount::from(raw as u64)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
