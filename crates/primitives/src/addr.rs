use std::fmt;

use serde::{Deserialize, Serialize};

/// Account address, as supplied by the external wallet layer.
///
/// The ledger never derives or verifies these; whoever hands us a caller
/// address is trusted to have authenticated it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct AccountAddr(#[serde(with = "hex::serde")] [u8; 20]);

crate::impl_opaque_thin_wrapper!(AccountAddr => [u8; 20]);

impl AccountAddr {
    /// The all-zeroes address.
    pub const fn zero() -> Self {
        Self([0; 20])
    }

    /// Checks if this is the all-zeroes address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 20]
    }
}

impl fmt::Display for AccountAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
