#[cfg(test)]
mod tests {
    use crate::consts::{BASE_PRICE, BPS_DENOMINATOR};
    use crate::pricing::*;

    // Parameters observed on the reference deployment
    const GROWTH_RATE: u64 = 2;
    const SUPPLY_CAP: u64 = 32_000;

    fn fee(amount: u64, bps: u16) -> u64 {
        (amount as u128 * bps as u128 / BPS_DENOMINATOR as u128) as u64
    }

    fn total(growth_rate: u64, sold: u64, delta: u64, p_bps: u16, c_bps: u16) -> u64 {
        let gross = sweep_cost(growth_rate, sold, sold + delta).unwrap();
        gross + fee(gross, p_bps) + fee(gross, c_bps)
    }

    #[test]
    fn spot_price_is_affine_in_supply() {
        assert_eq!(spot_price(GROWTH_RATE, 0).unwrap(), BASE_PRICE);
        assert_eq!(spot_price(GROWTH_RATE, 10).unwrap(), BASE_PRICE + 20);
        assert_eq!(spot_price(3, 4).unwrap(), BASE_PRICE + 12);
    }

    #[test]
    fn spot_price_overflow_is_an_error() {
        assert!(spot_price(u64::MAX, 2).is_err());
    }

    #[test]
    fn sweep_cost_of_empty_range_is_zero() {
        assert_eq!(sweep_cost(GROWTH_RATE, 0, 0).unwrap(), 0);
        assert_eq!(sweep_cost(GROWTH_RATE, 500, 500).unwrap(), 0);
    }

    #[test]
    fn sweep_cost_matches_unit_step_sum() {
        for growth_rate in [0, 1, 2, 7] {
            for (from, to) in [(0u64, 1u64), (0, 31), (5, 8), (100, 163)] {
                let mut by_units = 0u64;
                for s in from..to {
                    by_units += spot_price(growth_rate, s).unwrap();
                }
                assert_eq!(sweep_cost(growth_rate, from, to).unwrap(), by_units);
            }
        }
    }

    #[test]
    fn sweep_cost_reference_values() {
        // growth 2 and base 1 collapse to a perfect square from zero supply
        assert_eq!(sweep_cost(GROWTH_RATE, 0, 1).unwrap(), 1);
        assert_eq!(sweep_cost(GROWTH_RATE, 0, 31).unwrap(), 961);
        assert_eq!(sweep_cost(GROWTH_RATE, 5, 8).unwrap(), 39);
        // flat curve sells at the base price
        assert_eq!(sweep_cost(0, 10, 20).unwrap(), 10 * BASE_PRICE);
    }

    #[test]
    fn sweep_cost_is_additive_over_adjacent_ranges() {
        let whole = sweep_cost(7, 0, 25).unwrap();
        let split = sweep_cost(7, 0, 10).unwrap() + sweep_cost(7, 10, 25).unwrap();
        assert_eq!(whole, split);
    }

    #[test]
    fn sweep_cost_overflow_is_an_error() {
        assert!(sweep_cost(u64::MAX, u64::MAX - 10, u64::MAX).is_err());
    }

    #[test]
    fn quote_buy_without_fees_finds_largest_quantity() {
        let (tokens, gross, protocol_fee, creator_fee) = quote_buy(GROWTH_RATE, 0, 1_000, 0, 0);
        assert_eq!((tokens, gross, protocol_fee, creator_fee), (31, 961, 0, 0));
        // tight on both sides of the boundary
        assert_eq!(quote_buy(GROWTH_RATE, 0, 961, 0, 0).0, 31);
        assert_eq!(quote_buy(GROWTH_RATE, 0, 960, 0, 0).0, 30);
    }

    #[test]
    fn quote_buy_charges_fees_on_top_of_the_curve_cost() {
        let (tokens, gross, protocol_fee, creator_fee) = quote_buy(GROWTH_RATE, 0, 1_000, 500, 500);
        assert_eq!((tokens, gross, protocol_fee, creator_fee), (30, 900, 45, 45));
        assert!(gross + protocol_fee + creator_fee <= 1_000);
        // one more unit would cost 961 + 48 + 48
        assert_eq!(total(GROWTH_RATE, 0, 31, 500, 500), 1_057);
    }

    #[test]
    fn quote_buy_from_nonzero_supply() {
        let (tokens, gross, _, _) = quote_buy(GROWTH_RATE, 31, 200, 0, 0);
        assert_eq!((tokens, gross), (3, 195));
        assert_eq!(sweep_cost(GROWTH_RATE, 31, 34).unwrap(), 195);
    }

    #[test]
    fn quote_buy_with_zero_budget_buys_nothing() {
        assert_eq!(quote_buy(GROWTH_RATE, 0, 0, 500, 500), (0, 0, 0, 0));
    }

    #[test]
    fn quote_buy_is_maximal() {
        for budget in [1u64, 17, 100, 999, 1_000, 5_000, 123_456] {
            let (tokens, gross, protocol_fee, creator_fee) =
                quote_buy(GROWTH_RATE, 12, budget, 250, 750);
            assert_eq!(gross + protocol_fee + creator_fee, total(GROWTH_RATE, 12, tokens, 250, 750));
            assert!(gross + protocol_fee + creator_fee <= budget);
            assert!(total(GROWTH_RATE, 12, tokens + 1, 250, 750) > budget);
        }
    }

    #[test]
    fn quote_buy_is_monotone_in_budget() {
        let mut last = 0u64;
        for budget in 0..200u64 {
            let (tokens, ..) = quote_buy(5, 0, budget, 100, 100);
            assert!(tokens >= last);
            last = tokens;
        }
    }

    #[test]
    fn split_payout_is_exhaustive() {
        let (protocol_fee, creator_fee, net) = split_payout(961, 500, 500).unwrap();
        assert_eq!((protocol_fee, creator_fee, net), (48, 48, 865));
        assert_eq!(protocol_fee + creator_fee + net, 961);
    }

    #[test]
    fn split_payout_truncation_remainder_stays_in_net() {
        let (protocol_fee, creator_fee, net) = split_payout(999, 333, 333).unwrap();
        assert_eq!((protocol_fee, creator_fee), (33, 33));
        assert_eq!(net, 933);
    }

    #[test]
    fn split_payout_with_zero_fees_pays_everything_out() {
        assert_eq!(split_payout(100, 0, 0).unwrap(), (0, 0, 100));
    }

    #[test]
    fn split_payout_at_full_rate_leaves_nothing() {
        assert_eq!(split_payout(u64::MAX, 10_000, 0).unwrap(), (u64::MAX, 0, 0));
    }

    #[test]
    fn split_payout_rejects_fee_rates_over_one_hundred_percent() {
        assert!(split_payout(100, 6_000, 5_000).is_err());
    }

    #[test]
    fn round_trip_never_pays_out_more_than_it_cost() {
        let (tokens, gross_in, buy_protocol_fee, buy_creator_fee) =
            quote_buy(3, 0, 10_000, 250, 750);
        assert!(tokens > 0);
        let paid = gross_in + buy_protocol_fee + buy_creator_fee;

        let gross_out = sweep_cost(3, 0, tokens).unwrap();
        assert_eq!(gross_out, gross_in);

        let (sell_protocol_fee, sell_creator_fee, net) =
            split_payout(gross_out, 250, 750).unwrap();
        assert_eq!(sell_protocol_fee + sell_creator_fee + net, gross_out);
        assert!(net <= paid);
    }

    #[test]
    fn round_trip_without_fees_is_lossless() {
        let (tokens, gross_in, _, _) = quote_buy(GROWTH_RATE, 0, 1_000, 0, 0);
        let gross_out = sweep_cost(GROWTH_RATE, 0, tokens).unwrap();
        let (_, _, net) = split_payout(gross_out, 0, 0).unwrap();
        assert_eq!(net, gross_in);
    }

    #[test]
    fn reserve_tracks_the_curve_integral_across_trades() {
        // (tokens bought, tokens sold) sequences never overdraw a reserve
        // that banks the full gross cost of every buy
        let growth_rate = 4u64;
        let mut sold = 0u64;
        let mut reserve = 0u64;

        for (buy_units, sell_units) in [(40u64, 30u64), (25, 35), (500, 0), (0, 500)] {
            if buy_units > 0 {
                let gross = sweep_cost(growth_rate, sold, sold + buy_units).unwrap();
                sold += buy_units;
                reserve += gross;
                assert!(sold <= SUPPLY_CAP);
            }
            if sell_units > 0 {
                let gross = sweep_cost(growth_rate, sold - sell_units, sold).unwrap();
                assert!(gross <= reserve);
                sold -= sell_units;
                reserve -= gross;
            }
            assert_eq!(reserve, sweep_cost(growth_rate, 0, sold).unwrap());
        }
        assert_eq!((sold, reserve), (0, 0));
    }
}
