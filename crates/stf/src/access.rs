//! Access-unit operations: mint, balance queries, and holder transfers.

use std::collections::BTreeMap;

use folio_ledger_types::{Coin, LedgerState};
use folio_params::{FeeSplitMode, LedgerParams};
use folio_primitives::{AccountAddr, Amount, PostId};
use tracing::debug;

use crate::{
    context::OpContext,
    errors::{LedgerError, LedgerResult},
    events::LedgerEvent,
    sink::{PaymentSink, Payout},
    split::{SplitCoins, split_payment},
};

/// Arguments to a mint call.
#[derive(Clone, Debug)]
pub struct MintArgs {
    /// Post to unlock.
    pub post: PostId,

    /// Holder credited with the unit; need not be the payer.
    pub recipient: AccountAddr,

    /// Referral aggregator named by the payer, if any.  Only meaningful
    /// under the three-party split.
    pub aggregator: Option<AccountAddr>,

    /// Value attached to the call.
    pub payment: Amount,
}

/// Pays for and issues exactly one access unit of a post to the recipient.
///
/// The payment is split per the post's fee configuration and delivered
/// through the sink before any state changes; a rejected payout fails the
/// whole mint.  Repeat mints are unlimited.
pub fn mint<S: PaymentSink>(
    params: &LedgerParams,
    state: &mut LedgerState,
    ctx: &mut OpContext,
    sink: &mut S,
    args: MintArgs,
) -> LedgerResult<()> {
    let record = state
        .post(args.post)
        .ok_or(LedgerError::NonexistentPost(args.post))?;
    if args.payment < record.price() {
        return Err(LedgerError::InsufficientFunds {
            need: record.price(),
            got: args.payment,
        });
    }
    if params.split_mode == FeeSplitMode::ProtocolOnly
        && let Some(aggregator) = args.aggregator
    {
        return Err(LedgerError::UnexpectedAggregator(aggregator));
    }

    let fees = *record.fees();
    let split = split_payment(
        args.payment,
        &fees,
        args.aggregator.is_some(),
        params.no_aggregator_policy,
    );

    // The attached value enters the ledger as a single coin and every share
    // of it must be explicitly delivered, banked, or returned.
    let payment = Coin::new_unchecked(args.payment);
    let SplitCoins {
        creator,
        protocol,
        aggregator,
        withheld,
    } = split.apportion(payment);

    let mut payouts = Vec::with_capacity(3);
    if creator.amt() > Amount::zero() {
        payouts.push(Payout::new(args.post.creator(), creator.amt()));
    }
    if protocol.amt() > Amount::zero() {
        payouts.push(Payout::new(params.protocol_recipient, protocol.amt()));
    }
    if let Some(dest) = args.aggregator
        && aggregator.amt() > Amount::zero()
    {
        payouts.push(Payout::new(dest, aggregator.amt()));
    }

    if let Err(e) = sink.deliver(&payouts) {
        // Nothing moved; the environment returns the payment to the payer.
        creator.safely_consume_unchecked();
        protocol.safely_consume_unchecked();
        aggregator.safely_consume_unchecked();
        withheld.safely_consume_unchecked();
        return Err(LedgerError::TransferFailed(e));
    }

    // Delivered shares have left the ledger; the withheld share stays in it.
    creator.safely_consume_unchecked();
    protocol.safely_consume_unchecked();
    aggregator.safely_consume_unchecked();
    state.bank_undistributed(withheld);

    state.credit_access(args.post, args.recipient, 1);
    ctx.emit_event(LedgerEvent::AccessIssued {
        post: args.post,
        recipient: args.recipient,
        units: 1,
    });
    debug!(post = %args.post, recipient = %args.recipient, "minted access unit");

    Ok(())
}

/// Gets a holder's unit balance for a post.
pub fn balance_of(state: &LedgerState, post: PostId, holder: AccountAddr) -> u64 {
    state.balance_of(post, holder)
}

/// Moves access units from the caller to another holder.
///
/// All-or-nothing over the whole entry set: every debit (including repeats
/// of the same post within one call) is checked against the caller's grants
/// before any balance moves.
pub fn transfer_access(
    state: &mut LedgerState,
    ctx: &mut OpContext,
    to: AccountAddr,
    entries: &[(PostId, u64)],
) -> LedgerResult<()> {
    let from = ctx.caller();

    // Aggregate per post first so duplicated entries can't sneak a partial
    // application past a per-entry check.
    let mut required: BTreeMap<PostId, u64> = BTreeMap::new();
    for (post, units) in entries {
        let total = required.entry(*post).or_insert(0);
        *total = total.checked_add(*units).ok_or(LedgerError::InsufficientBalance {
            post: *post,
            holder: from,
        })?;
    }
    for (post, units) in &required {
        if state.balance_of(*post, from) < *units {
            return Err(LedgerError::InsufficientBalance {
                post: *post,
                holder: from,
            });
        }
    }

    for (post, units) in entries {
        let debited = state.debit_access(*post, from, *units);
        assert!(debited.is_some(), "access: transfer debit underflow");
        state.credit_access(*post, to, *units);
    }

    ctx.emit_event(LedgerEvent::AccessTransferred {
        from,
        to,
        entries: entries.to_vec(),
    });
    debug!(%from, %to, count = entries.len(), "transferred access units");

    Ok(())
}
