use std::collections::BTreeMap;

use folio_primitives::{AccountAddr, Amount, PostId};

use crate::{
    balances::AccessBalanceTable,
    coin::Coin,
    index::AccountIndex,
    post::{CreatorPostsTable, PostRecord},
};

/// Toplevel ledger state.
///
/// Owns every durable structure: post tables keyed by creator, access-unit
/// balances, the derived account index, and the `undistributed` accumulator
/// holding value the ledger retained for itself (e.g. a withheld aggregator
/// share).  Mutating operations take this by exclusive reference, so each
/// read-validate-write sequence is atomic from every other caller's
/// perspective.
#[derive(Clone, Debug, Default)]
pub struct LedgerState {
    posts: BTreeMap<AccountAddr, CreatorPostsTable>,
    balances: AccessBalanceTable,
    index: AccountIndex,
    undistributed: Amount,
}

impl LedgerState {
    /// Creates a new empty state.
    pub fn new_empty() -> Self {
        Self::default()
    }

    // ===== Post registry =====

    /// Number of posts a creator has registered.
    pub fn post_count(&self, creator: AccountAddr) -> u64 {
        self.posts
            .get(&creator)
            .map(CreatorPostsTable::post_count)
            .unwrap_or(0)
    }

    /// Gets a post record, if its index was ever assigned.
    pub fn post(&self, id: PostId) -> Option<&PostRecord> {
        self.posts.get(&id.creator())?.get(id.index())
    }

    /// Gets a mutable post record, if its index was ever assigned.
    pub fn post_mut(&mut self, id: PostId) -> Option<&mut PostRecord> {
        self.posts.get_mut(&id.creator())?.get_mut(id.index())
    }

    /// Stores a new post for a creator and feeds the account index, returning
    /// the assigned sequence index.
    pub fn create_post(&mut self, creator: AccountAddr, record: PostRecord) -> u64 {
        let table = self.posts.entry(creator).or_default();
        let index = table.append(record);
        self.index.record(creator, index);
        index
    }

    /// Gets a creator's post indices in creation order.
    pub fn posts_index_for(&self, creator: AccountAddr) -> &[u64] {
        self.index.posts_for(creator)
    }

    // ===== Access grants =====

    /// Gets a holder's unit balance for a post.
    pub fn balance_of(&self, post: PostId, holder: AccountAddr) -> u64 {
        self.balances.balance(post, holder)
    }

    /// Adds units to a holder's balance.
    pub fn credit_access(&mut self, post: PostId, holder: AccountAddr, units: u64) {
        self.balances.credit(post, holder, units);
    }

    /// Removes units from a holder's balance, if funds are available.
    #[must_use]
    pub fn debit_access(&mut self, post: PostId, holder: AccountAddr, units: u64) -> Option<()> {
        self.balances.debit(post, holder, units)
    }

    // ===== Retained value =====

    /// Value the ledger has retained rather than paid out.
    pub fn undistributed(&self) -> Amount {
        self.undistributed
    }

    /// Banks a coin into the retained-value accumulator.
    ///
    /// # Panics
    ///
    /// On accumulator overflow, which would mean more value was retained than
    /// can exist.
    pub fn bank_undistributed(&mut self, coin: Coin) {
        let amt = coin.amt();
        coin.safely_consume_unchecked();
        let Some(updated) = self.undistributed.checked_add(amt) else {
            panic!("state: undistributed accumulator overflow banking {amt}");
        };
        self.undistributed = updated;
    }
}
