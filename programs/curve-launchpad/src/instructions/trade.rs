use crate::state::{CurveConfig, MintAuthorityPda, Pool};
use {
    anchor_lang::prelude::*,
    anchor_spl::{
        associated_token::AssociatedToken,
        token::{Mint, Token, TokenAccount},
    },
};

/// Shared account set for buy and sell. The pool account custodies the
/// reserve lamports; the fee destinations are pinned to the ones recorded
/// at pool creation.
#[event_cpi]
#[derive(Accounts)]
pub struct Trade<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(seeds = [CurveConfig::SEED_PREFIX.as_bytes()], bump)]
    pub curve_config: Box<Account<'info, CurveConfig>>,

    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX.as_bytes(), mint.key().as_ref()],
        bump,
        has_one = treasury,
        has_one = creator_vault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(seeds = [MintAuthorityPda::SEED_PREFIX.as_bytes()], bump)]
    pub mint_authority: Box<Account<'info, MintAuthorityPda>>,

    #[account(mut)]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub creator_vault: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
