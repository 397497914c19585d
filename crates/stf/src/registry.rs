//! Post registry operations: creation, updates, lookups, and the paginated
//! per-account enumeration.

use folio_ledger_types::{FeeConfig, LedgerState, PostRecord};
use folio_params::{FeeSplitMode, LedgerParams};
use folio_primitives::{AccountAddr, Amount, BPS_DENOMINATOR, PostId};
use tracing::debug;

use crate::{
    context::OpContext,
    errors::{LedgerError, LedgerResult},
    events::LedgerEvent,
};

/// Number of slots in every account page.
pub const ACCOUNT_PAGE_SIZE: usize = 100;

/// Mutable fields supplied when creating or updating a post.
#[derive(Clone, Debug)]
pub struct PostParams {
    pub content_ref: String,
    pub price: Amount,
    pub fees: FeeConfig,
}

/// Checks a fee configuration against the ledger's split mode.
fn check_fee_config(params: &LedgerParams, fees: &FeeConfig) -> LedgerResult<()> {
    let invalid = || LedgerError::InvalidFee {
        protocol_fee_bps: fees.protocol_fee_bps(),
        aggregator_fee_bps: fees.aggregator_fee_bps(),
    };

    if !fees.protocol_fee_bps().is_valid() || !fees.aggregator_fee_bps().is_valid() {
        return Err(invalid());
    }
    if fees.fee_sum() > BPS_DENOMINATOR {
        return Err(invalid());
    }
    // The two-party revision has no aggregator to pay.
    if params.split_mode == FeeSplitMode::ProtocolOnly
        && u16::from(fees.aggregator_fee_bps()) != 0
    {
        return Err(invalid());
    }

    Ok(())
}

/// Registers a new post for the caller, assigning it the caller's next
/// sequence index.
pub fn create_post(
    params: &LedgerParams,
    state: &mut LedgerState,
    ctx: &mut OpContext,
    post: PostParams,
) -> LedgerResult<PostId> {
    check_fee_config(params, &post.fees)?;

    let creator = ctx.caller();
    let record = PostRecord::new(post.content_ref, post.price, post.fees);
    let index = state.create_post(creator, record.clone());
    let id = PostId::new(creator, index);

    ctx.emit_event(LedgerEvent::PostCreated { post: id, record });
    debug!(post = %id, "registered post");

    Ok(id)
}

/// Overwrites a post's mutable fields in place.
///
/// Only the original creator may update; the post's identity never changes.
pub fn update_post(
    params: &LedgerParams,
    state: &mut LedgerState,
    ctx: &mut OpContext,
    id: PostId,
    post: PostParams,
) -> LedgerResult<()> {
    // Existence before ownership: a never-assigned index has no owner to
    // compare against.
    let caller = ctx.caller();
    let Some(record) = state.post_mut(id) else {
        return Err(LedgerError::NonexistentPost(id));
    };
    if caller != id.creator() {
        return Err(LedgerError::NotOwner { post: id, caller });
    }
    check_fee_config(params, &post.fees)?;

    *record = PostRecord::new(post.content_ref, post.price, post.fees);
    let record = record.clone();

    ctx.emit_event(LedgerEvent::PostUpdated { post: id, record });
    debug!(post = %id, "updated post");

    Ok(())
}

/// Gets a post's stored record.
pub fn get_post(state: &LedgerState, id: PostId) -> LedgerResult<&PostRecord> {
    state.post(id).ok_or(LedgerError::NonexistentPost(id))
}

/// Number of posts a creator has registered.
pub fn post_count(state: &LedgerState, creator: AccountAddr) -> u64 {
    state.post_count(creator)
}

/// One occupied slot of an account page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostSummary {
    pub index: u64,
    pub content_ref: String,
    pub price: Amount,
    pub fees: FeeConfig,
}

/// Fixed-length page of a creator's posts.
///
/// Always [`ACCOUNT_PAGE_SIZE`] slots long; slots past the creator's actual
/// post count are empty rather than the page being shortened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostPage {
    slots: Vec<Option<PostSummary>>,
}

impl PostPage {
    fn new_empty() -> Self {
        Self {
            slots: vec![None; ACCOUNT_PAGE_SIZE],
        }
    }

    /// Gets the page's slots, occupied entries first.
    pub fn slots(&self) -> &[Option<PostSummary>] {
        &self.slots
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Pages through a creator's posts in creation order.
///
/// Out-of-range pages and unknown creators yield an all-empty page; reads
/// have no error surface.
pub fn list_posts_by_account(state: &LedgerState, creator: AccountAddr, page: u64) -> PostPage {
    let mut out = PostPage::new_empty();

    let Some(start) = page.checked_mul(ACCOUNT_PAGE_SIZE as u64) else {
        return out;
    };
    let indices = state.posts_index_for(creator);

    for (slot, out_slot) in out.slots.iter_mut().enumerate() {
        let Some(pos) = start
            .checked_add(slot as u64)
            .and_then(|p| usize::try_from(p).ok())
        else {
            break;
        };
        let Some(&index) = indices.get(pos) else {
            break;
        };
        let id = PostId::new(creator, index);
        let Some(record) = state.post(id) else {
            panic!("registry: account index references unassigned post {id}");
        };
        *out_slot = Some(PostSummary {
            index,
            content_ref: record.content_ref().to_owned(),
            price: record.price(),
            fees: *record.fees(),
        });
    }

    out
}
