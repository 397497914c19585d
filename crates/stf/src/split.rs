//! Pure payment-splitting arithmetic.

use folio_ledger_types::{Coin, FeeConfig};
use folio_params::NoAggregatorPolicy;
use folio_primitives::Amount;

/// Computed division of a paid amount between its destinations.
///
/// `withheld` is the portion the ledger keeps for itself: the aggregator
/// share of an aggregator-less mint under the withhold policy, zero
/// otherwise.  The four parts always sum to the paid amount.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PaymentSplit {
    creator: Amount,
    protocol: Amount,
    aggregator: Amount,
    withheld: Amount,
}

impl PaymentSplit {
    /// Gets the creator's residual share.
    pub fn creator(&self) -> Amount {
        self.creator
    }

    /// Gets the protocol recipient's share.
    pub fn protocol(&self) -> Amount {
        self.protocol
    }

    /// Gets the aggregator's share.
    pub fn aggregator(&self) -> Amount {
        self.aggregator
    }

    /// Gets the share retained by the ledger.
    pub fn withheld(&self) -> Amount {
        self.withheld
    }

    /// Apportions a payment coin into one coin per destination.
    ///
    /// # Panics
    ///
    /// If the coin's value doesn't equal the split's total; the split must
    /// have been computed from the same payment.
    pub fn apportion(self, payment: Coin) -> SplitCoins {
        let (creator, rest) = payment.split(self.creator);
        let (protocol, rest) = rest.split(self.protocol);
        let (aggregator, withheld) = rest.split(self.aggregator);
        assert_eq!(
            withheld.amt(),
            self.withheld,
            "split: apportioned coin doesn't match the split"
        );
        SplitCoins {
            creator,
            protocol,
            aggregator,
            withheld,
        }
    }
}

/// Linear coins for each destination of a split payment.
#[derive(Debug)]
pub struct SplitCoins {
    pub creator: Coin,
    pub protocol: Coin,
    pub aggregator: Coin,
    pub withheld: Coin,
}

/// Splits a paid amount per a post's fee configuration, using floor division
/// on each basis-point share.
///
/// The protocol and aggregator fees are each a direct share of the full paid
/// amount; the creator receives the residual.  When no aggregator was named,
/// `policy` decides whether the aggregator share is withheld by the ledger or
/// folded back into the creator's residual.
///
/// # Panics
///
/// If the fee shares exceed the paid amount, which a registry-validated
/// configuration (sum at most 10000 bps) cannot produce.
pub fn split_payment(
    amount: Amount,
    fees: &FeeConfig,
    has_aggregator: bool,
    policy: NoAggregatorPolicy,
) -> PaymentSplit {
    let protocol = fees.protocol_fee_bps().share_of(amount);
    let aggregator_cut = fees.aggregator_fee_bps().share_of(amount);

    let (aggregator, withheld) = if has_aggregator {
        (aggregator_cut, Amount::zero())
    } else {
        match policy {
            NoAggregatorPolicy::Withhold => (Amount::zero(), aggregator_cut),
            NoAggregatorPolicy::CreditCreator => (Amount::zero(), Amount::zero()),
        }
    };

    let fee_total = protocol
        .checked_add(aggregator)
        .and_then(|t| t.checked_add(withheld));
    let creator = fee_total.and_then(|t| amount.checked_sub(t));
    let Some(creator) = creator else {
        panic!("split: fees exceed payment of {amount}");
    };

    PaymentSplit {
        creator,
        protocol,
        aggregator,
        withheld,
    }
}

#[cfg(test)]
mod tests {
    use folio_primitives::BasisPoints;
    use proptest::prelude::*;

    use super::*;

    fn fees(protocol: u16, aggregator: u16) -> FeeConfig {
        FeeConfig::new(BasisPoints::from(protocol), BasisPoints::from(aggregator))
    }

    fn total(split: &PaymentSplit) -> u64 {
        u64::from(split.creator())
            + u64::from(split.protocol())
            + u64::from(split.aggregator())
            + u64::from(split.withheld())
    }

    #[test]
    fn test_three_party_split() {
        let split = split_payment(
            Amount::from(1_000),
            &fees(200, 300),
            true,
            NoAggregatorPolicy::Withhold,
        );
        assert_eq!(split.protocol(), Amount::from(20));
        assert_eq!(split.aggregator(), Amount::from(30));
        assert_eq!(split.creator(), Amount::from(950));
        assert_eq!(split.withheld(), Amount::zero());
    }

    #[test]
    fn test_floor_rounding() {
        // 999 * 250 / 10000 floors from 24.975 to 24; the creator picks up
        // the remainder.
        let split = split_payment(
            Amount::from(999),
            &fees(250, 0),
            false,
            NoAggregatorPolicy::Withhold,
        );
        assert_eq!(split.protocol(), Amount::from(24));
        assert_eq!(split.creator(), Amount::from(975));
    }

    #[test]
    fn test_no_aggregator_withhold() {
        let split = split_payment(
            Amount::from(1_000),
            &fees(200, 300),
            false,
            NoAggregatorPolicy::Withhold,
        );
        assert_eq!(split.aggregator(), Amount::zero());
        assert_eq!(split.withheld(), Amount::from(30));
        assert_eq!(split.creator(), Amount::from(950));
    }

    #[test]
    fn test_no_aggregator_credit_creator() {
        let split = split_payment(
            Amount::from(1_000),
            &fees(200, 300),
            false,
            NoAggregatorPolicy::CreditCreator,
        );
        assert_eq!(split.aggregator(), Amount::zero());
        assert_eq!(split.withheld(), Amount::zero());
        assert_eq!(split.creator(), Amount::from(980));
    }

    #[test]
    fn test_everything_to_fees() {
        let split = split_payment(
            Amount::from(777),
            &fees(10_000, 0),
            false,
            NoAggregatorPolicy::Withhold,
        );
        assert_eq!(split.protocol(), Amount::from(777));
        assert_eq!(split.creator(), Amount::zero());
    }

    #[test]
    fn test_apportion_matches_split() {
        let amount = Amount::from(1_000);
        let split = split_payment(amount, &fees(200, 300), true, NoAggregatorPolicy::Withhold);
        let coins = split.apportion(Coin::new_unchecked(amount));
        assert_eq!(coins.creator.amt(), split.creator());
        assert_eq!(coins.protocol.amt(), split.protocol());
        assert_eq!(coins.aggregator.amt(), split.aggregator());
        assert_eq!(coins.withheld.amt(), split.withheld());
        coins.creator.safely_consume_unchecked();
        coins.protocol.safely_consume_unchecked();
        coins.aggregator.safely_consume_unchecked();
        coins.withheld.safely_consume_unchecked();
    }

    proptest! {
        #[test]
        fn prop_split_conserves_value(
            amount in 0u64..=u64::MAX,
            protocol in 0u16..=10_000,
            aggregator in 0u16..=10_000,
            has_aggregator in any::<bool>(),
            credit_creator in any::<bool>(),
        ) {
            prop_assume!(u32::from(protocol) + u32::from(aggregator) <= 10_000);
            let policy = if credit_creator {
                NoAggregatorPolicy::CreditCreator
            } else {
                NoAggregatorPolicy::Withhold
            };
            let split = split_payment(
                Amount::from(amount),
                &fees(protocol, aggregator),
                has_aggregator,
                policy,
            );
            prop_assert_eq!(total(&split), amount);
        }

        #[test]
        fn prop_fees_never_exceed_their_share(
            amount in 0u64..=u64::MAX,
            protocol in 0u16..=10_000,
        ) {
            let split = split_payment(
                Amount::from(amount),
                &fees(protocol, 0),
                false,
                NoAggregatorPolicy::Withhold,
            );
            // A floor-divided cut can never exceed the exact proportion.
            prop_assert!(
                u128::from(u64::from(split.protocol())) * 10_000 <= u128::from(amount) * u128::from(protocol)
            );
        }
    }
}
