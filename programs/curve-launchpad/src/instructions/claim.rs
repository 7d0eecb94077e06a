use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::consts::CREATOR_VAULT_SEED;
use crate::errors::LaunchpadError;
use crate::state::CurveConfig;

/// Drain a creator vault to a recipient wallet. Creator ids are off-chain
/// identities, so routing a vault to a wallet is an administrative act.
pub fn claim(ctx: Context<Claim>, creator_id: String) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.curve_config.admin,
        LaunchpadError::Unauthorized
    );

    let amount = ctx.accounts.creator_vault.lamports();
    if amount == 0 {
        return Ok(());
    }

    let seeds: &[&[u8]] = &[
        CREATOR_VAULT_SEED.as_bytes(),
        creator_id.as_bytes(),
        &[ctx.bumps.creator_vault],
    ];

    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_vault.to_account_info(),
                to: ctx.accounts.recipient.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )
}

#[derive(Accounts)]
#[instruction(creator_id: String)]
pub struct Claim<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(seeds = [CurveConfig::SEED_PREFIX.as_bytes()], bump)]
    pub curve_config: Box<Account<'info, CurveConfig>>,

    #[account(mut, seeds = [CREATOR_VAULT_SEED.as_bytes(), creator_id.as_bytes()], bump)]
    pub creator_vault: SystemAccount<'info>,

    #[account(mut)]
    pub recipient: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
