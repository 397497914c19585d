use folio_primitives::{Amount, BasisPoints};
use serde::{Deserialize, Serialize};

/// Fee configuration stored with each post.
///
/// Both shares are direct basis-point cuts of the paid amount: the first is
/// owed to the ledger's fixed protocol recipient, the second to whichever
/// aggregator the minting caller names.  The creator receives the residual.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    protocol_fee_bps: BasisPoints,
    aggregator_fee_bps: BasisPoints,
}

impl FeeConfig {
    /// Constructs a new instance.  Bounds are enforced by the registry
    /// operations, not here.
    pub fn new(protocol_fee_bps: BasisPoints, aggregator_fee_bps: BasisPoints) -> Self {
        Self {
            protocol_fee_bps,
            aggregator_fee_bps,
        }
    }

    /// Gets the protocol share.
    pub fn protocol_fee_bps(&self) -> BasisPoints {
        self.protocol_fee_bps
    }

    /// Gets the aggregator share.
    pub fn aggregator_fee_bps(&self) -> BasisPoints {
        self.aggregator_fee_bps
    }

    /// Sum of both shares, widened so an invalid config can't wrap.
    pub fn fee_sum(&self) -> u64 {
        u64::from(u16::from(self.protocol_fee_bps)) + u64::from(u16::from(self.aggregator_fee_bps))
    }
}

/// A creator-authored, priced reference to off-ledger content.
///
/// The `content_ref` is an opaque locator resolved by an external content
/// store; the ledger never parses or fetches it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    content_ref: String,
    price: Amount,
    fees: FeeConfig,
}

impl PostRecord {
    /// Constructs a new instance.
    pub fn new(content_ref: String, price: Amount, fees: FeeConfig) -> Self {
        Self {
            content_ref,
            price,
            fees,
        }
    }

    /// Gets the content locator.
    pub fn content_ref(&self) -> &str {
        &self.content_ref
    }

    /// Gets the mint price.
    pub fn price(&self) -> Amount {
        self.price
    }

    /// Gets the fee configuration.
    pub fn fees(&self) -> &FeeConfig {
        &self.fees
    }
}

/// Append-only table of a single creator's posts.
///
/// The position of a record in the table is the post's sequence index;
/// records are never removed, so indices are never reused.
#[derive(Clone, Debug, Default)]
pub struct CreatorPostsTable {
    posts: Vec<PostRecord>,
}

impl CreatorPostsTable {
    /// Creates a new empty table.
    pub fn new_empty() -> Self {
        Self { posts: Vec::new() }
    }

    /// Number of posts this creator has registered.
    pub fn post_count(&self) -> u64 {
        self.posts.len() as u64
    }

    /// Gets a post record by sequence index, if assigned.
    pub fn get(&self, index: u64) -> Option<&PostRecord> {
        usize::try_from(index).ok().and_then(|i| self.posts.get(i))
    }

    /// Gets a mutable post record by sequence index, if assigned.
    pub fn get_mut(&mut self, index: u64) -> Option<&mut PostRecord> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.posts.get_mut(i))
    }

    /// Appends a record, returning the sequence index it was assigned.
    pub fn append(&mut self, record: PostRecord) -> u64 {
        let index = self.post_count();
        self.posts.push(record);
        index
    }
}
