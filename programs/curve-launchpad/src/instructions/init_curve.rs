use anchor_lang::prelude::*;

use crate::consts::DISCRIMINATOR;
use crate::errors::LaunchpadError;
use crate::state::{CurveConfig, MintAuthorityPda};

pub fn init_curve(ctx: Context<InitCurve>, growth_rate: u64, supply_cap: u64) -> Result<()> {
    require!(supply_cap > 0, LaunchpadError::InvalidParameter);

    **ctx.accounts.curve_config = CurveConfig {
        admin: ctx.accounts.admin.key(),
        treasury: ctx.accounts.treasury.key(),
        growth_rate,
        supply_cap,
    };

    Ok(())
}

#[derive(Accounts)]
pub struct InitCurve<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Program-wide protocol fee destination, fixed here for every pool
    pub treasury: SystemAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR + CurveConfig::INIT_SPACE,
        seeds = [CurveConfig::SEED_PREFIX.as_bytes()],
        bump,
    )]
    pub curve_config: Box<Account<'info, CurveConfig>>,

    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR + MintAuthorityPda::INIT_SPACE,
        seeds = [MintAuthorityPda::SEED_PREFIX.as_bytes()],
        bump,
    )]
    pub mint_authority: Box<Account<'info, MintAuthorityPda>>,

    pub system_program: Program<'info, System>,
}
