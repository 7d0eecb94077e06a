use anchor_lang::prelude::*;

/// Per-token market state. The account itself custodies the reserve
/// lamports; `reserve` counts trade proceeds only, never the rent-exempt
/// minimum underneath them.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub mint: Pubkey,
    pub treasury: Pubkey,
    pub creator_vault: Pubkey,
    #[max_len(32)]
    pub creator_id: String,
    pub protocol_fee_bps: u16,
    pub creator_fee_bps: u16,
    pub reserve: u64,
    pub sold_supply: u64,
    #[max_len(32)]
    pub display_name: String,
    #[max_len(200)]
    pub metadata_uri: String,
}

impl Pool {
    pub const SEED_PREFIX: &'static str = "pool";

    // Must match the #[max_len] bounds above
    pub const MAX_CREATOR_ID_LEN: usize = 32;
    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_URI_LEN: usize = 200;
}
