use std::fmt;

use serde::{Deserialize, Serialize};

use crate::AccountAddr;

/// Identifies a post by its creator and the creator's 0-based sequence index.
///
/// Indices are assigned sequentially per creator and never reused, so the
/// pair is a stable global identifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct PostId {
    creator: AccountAddr,
    index: u64,
}

impl PostId {
    /// Constructs a new instance.
    pub fn new(creator: AccountAddr, index: u64) -> Self {
        Self { creator, index }
    }

    /// Gets the creator address.
    pub fn creator(&self) -> AccountAddr {
        self.creator
    }

    /// Gets the creator-scoped sequence index.
    pub fn index(&self) -> u64 {
        self.index
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.creator, self.index)
    }
}
