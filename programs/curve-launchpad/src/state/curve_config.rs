use anchor_lang::prelude::*;

/// Global pricing parameters, written once and never mutated.
#[account]
#[derive(InitSpace)]
pub struct CurveConfig {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub growth_rate: u64,
    pub supply_cap: u64,
}

impl CurveConfig {
    pub const SEED_PREFIX: &'static str = "curve_config";
}
