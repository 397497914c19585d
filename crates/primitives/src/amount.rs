use std::fmt;

use serde::{Deserialize, Serialize};

type RawAmount = u64;

/// Describes an amount of value in the native currency's smallest unit.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default,
)]
#[repr(transparent)]
pub struct Amount(RawAmount);

crate::impl_transparent_thin_wrapper!(Amount => RawAmount);

impl Amount {
    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Checked addition, `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction, `None` on underflow.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
