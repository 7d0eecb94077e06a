use anchor_lang::prelude::*;

/// Program-derived signer holding mint authority over every launched token.
/// No human key exists for it; it signs only through program seeds.
#[account]
#[derive(InitSpace)]
pub struct MintAuthorityPda {}

impl MintAuthorityPda {
    pub const SEED_PREFIX: &'static str = "mint_authority";
}
