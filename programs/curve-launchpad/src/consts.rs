// Anchor account discriminator size
pub const DISCRIMINATOR: usize = 8;

// Launched mints use whole-unit tokens so curve math stays exact in lamports
pub const DECIMALS: u8 = 0;

// Spot price at zero sold supply, in lamports per token unit
pub const BASE_PRICE: u64 = 1;

// Basis point denominator, 10_000 bps = 100%
pub const BPS_DENOMINATOR: u64 = 10_000;

// Shared symbol for every token launched through the program
pub const TOKEN_SYMBOL: &str = "LPAD";

// Seed of the per-creator fee vault PDA
pub const CREATOR_VAULT_SEED: &str = "creator_vault";
