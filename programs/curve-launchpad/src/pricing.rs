use anchor_lang::prelude::*;

use crate::consts::{BASE_PRICE, BPS_DENOMINATOR};
use crate::errors::LaunchpadError;

/// Spot price of the next unit at cumulative sold supply `supply`:
/// `BASE_PRICE + growth_rate * supply`.
pub fn spot_price(growth_rate: u64, supply: u64) -> Result<u64> {
    (growth_rate as u128)
        .checked_mul(supply as u128)
        .and_then(|v| v.checked_add(BASE_PRICE as u128))
        .and_then(|v| u64::try_from(v).ok())
        .ok_or(LaunchpadError::ArithmeticOverflow.into())
}

// Closed form for sum_{s=from}^{to-1} (BASE_PRICE + growth_rate * s).
// (from + to - 1) * (to - from) is always even, so the halving is exact.
fn curve_sum(growth_rate: u64, from_supply: u64, to_supply: u64) -> Option<u128> {
    if from_supply == to_supply {
        return Some(0);
    }
    let n = (to_supply - from_supply) as u128;
    let base = (BASE_PRICE as u128).checked_mul(n)?;
    let triangle = (from_supply as u128 + to_supply as u128 - 1).checked_mul(n)? / 2;
    let slope = (growth_rate as u128).checked_mul(triangle)?;
    base.checked_add(slope)
}

/// Exact cost of moving the sold supply from `from_supply` to `to_supply`,
/// the discrete integral of `spot_price` over `[from_supply, to_supply)`.
pub fn sweep_cost(growth_rate: u64, from_supply: u64, to_supply: u64) -> Result<u64> {
    require!(from_supply <= to_supply, LaunchpadError::InvalidParameter);
    curve_sum(growth_rate, from_supply, to_supply)
        .and_then(|cost| u64::try_from(cost).ok())
        .ok_or(LaunchpadError::ArithmeticOverflow.into())
}

// Truncating basis-point fee. Callers validate fee_bps <= BPS_DENOMINATOR,
// which keeps the result within u64.
fn bps_fee(amount: u64, fee_bps: u16) -> u64 {
    ((amount as u128) * (fee_bps as u128) / (BPS_DENOMINATOR as u128)) as u64
}

// Gross cost plus both fees for buying `delta` units above `sold_supply`.
// None means the candidate overflows, which can only happen past any u64
// budget, so callers may read None as "over budget".
fn total_outlay(
    growth_rate: u64,
    sold_supply: u64,
    delta: u64,
    protocol_fee_bps: u16,
    creator_fee_bps: u16,
) -> Option<(u128, u64, u64, u64)> {
    let to_supply = sold_supply.checked_add(delta)?;
    let gross = u64::try_from(curve_sum(growth_rate, sold_supply, to_supply)?).ok()?;
    let protocol_fee = bps_fee(gross, protocol_fee_bps);
    let creator_fee = bps_fee(gross, creator_fee_bps);
    let total = gross as u128 + protocol_fee as u128 + creator_fee as u128;
    Some((total, gross, protocol_fee, creator_fee))
}

/// Largest purchase whose gross curve cost plus both fees fits in `budget`,
/// found by binary search over the token quantity. Never approximates:
/// the predicate is evaluated with exact integer arithmetic at every probe.
/// Returns: (tokens_out, gross_cost, protocol_fee, creator_fee)
pub fn quote_buy(
    growth_rate: u64,
    sold_supply: u64,
    budget: u64,
    protocol_fee_bps: u16,
    creator_fee_bps: u16,
) -> (u64, u64, u64, u64) {
    // BASE_PRICE >= 1 means total(delta) >= delta, so the answer is <= budget
    let mut lo = 0u64;
    let mut hi = budget;
    let mut best = (0u64, 0u64, 0u64);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        match total_outlay(growth_rate, sold_supply, mid, protocol_fee_bps, creator_fee_bps) {
            Some((total, gross, protocol_fee, creator_fee)) if total <= budget as u128 => {
                lo = mid;
                best = (gross, protocol_fee, creator_fee);
            }
            _ => hi = mid - 1,
        }
    }
    (lo, best.0, best.1, best.2)
}

/// Split a gross amount into protocol fee, creator fee and net remainder.
/// Both fees truncate toward zero and the parts always sum to `gross`
/// exactly, so truncation remainders stay in the net component.
/// Returns: (protocol_fee, creator_fee, net)
pub fn split_payout(
    gross: u64,
    protocol_fee_bps: u16,
    creator_fee_bps: u16,
) -> Result<(u64, u64, u64)> {
    require!(
        protocol_fee_bps as u64 + creator_fee_bps as u64 <= BPS_DENOMINATOR,
        LaunchpadError::InvalidParameter
    );
    let protocol_fee = bps_fee(gross, protocol_fee_bps);
    let creator_fee = bps_fee(gross, creator_fee_bps);
    let net = gross
        .checked_sub(protocol_fee)
        .and_then(|v| v.checked_sub(creator_fee))
        .ok_or(LaunchpadError::ArithmeticOverflow)?;
    Ok((protocol_fee, creator_fee, net))
}
