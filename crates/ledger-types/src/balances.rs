use std::collections::BTreeMap;

use folio_primitives::{AccountAddr, PostId};

/// Access-unit balances keyed by (post, holder).
///
/// A missing entry is a zero balance; entries that reach zero are removed so
/// the two states stay indistinguishable.
#[derive(Clone, Debug, Default)]
pub struct AccessBalanceTable {
    balances: BTreeMap<(PostId, AccountAddr), u64>,
}

impl AccessBalanceTable {
    /// Creates a new empty table.
    pub fn new_empty() -> Self {
        Self {
            balances: BTreeMap::new(),
        }
    }

    /// Gets a holder's unit balance for a post.
    pub fn balance(&self, post: PostId, holder: AccountAddr) -> u64 {
        self.balances.get(&(post, holder)).copied().unwrap_or(0)
    }

    /// Adds units to a holder's balance.
    ///
    /// # Panics
    ///
    /// On balance overflow, which would mean the ledger issued more units
    /// than can exist.
    pub fn credit(&mut self, post: PostId, holder: AccountAddr, units: u64) {
        if units == 0 {
            return;
        }
        let entry = self.balances.entry((post, holder)).or_insert(0);
        let Some(updated) = entry.checked_add(units) else {
            panic!("balances: grant overflow for {holder} on {post}");
        };
        *entry = updated;
    }

    /// Removes units from a holder's balance, if funds are available.
    ///
    /// Returns `None` (without changes) when the balance is insufficient.
    #[must_use]
    pub fn debit(&mut self, post: PostId, holder: AccountAddr, units: u64) -> Option<()> {
        if units == 0 {
            return Some(());
        }
        let key = (post, holder);
        let entry = self.balances.get_mut(&key)?;
        let updated = entry.checked_sub(units)?;
        if updated == 0 {
            self.balances.remove(&key);
        } else {
            *entry = updated;
        }
        Some(())
    }
}
