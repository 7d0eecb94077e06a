use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata,
    },
    token::{Mint, Token},
};

use crate::consts::{BPS_DENOMINATOR, CREATOR_VAULT_SEED, DECIMALS, DISCRIMINATOR, TOKEN_SYMBOL};
use crate::errors::LaunchpadError;
use crate::events::PoolCreatedEvent;
use crate::state::{CurveConfig, MintAuthorityPda, Pool};

pub fn init_pool(
    ctx: Context<InitPool>,
    creator_id: String,
    protocol_fee_bps: u16,
    creator_fee_bps: u16,
    display_name: String,
    metadata_uri: String,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.curve_config.admin,
        LaunchpadError::Unauthorized
    );
    require!(
        protocol_fee_bps as u64 + creator_fee_bps as u64 <= BPS_DENOMINATOR,
        LaunchpadError::InvalidParameter
    );
    require!(
        !creator_id.is_empty() && creator_id.len() <= Pool::MAX_CREATOR_ID_LEN,
        LaunchpadError::InvalidParameter
    );
    require!(
        display_name.len() <= Pool::MAX_NAME_LEN,
        LaunchpadError::InvalidParameter
    );
    require!(
        metadata_uri.len() <= Pool::MAX_URI_LEN,
        LaunchpadError::InvalidParameter
    );

    let mint_authority_signer_seeds: &[&[&[u8]]] = &[&[
        MintAuthorityPda::SEED_PREFIX.as_bytes(),
        &[ctx.bumps.mint_authority],
    ]];

    // Register the descriptive fields with the metadata registry before any
    // pool state is written; a failed registry call aborts the whole launch
    create_metadata_accounts_v3(
        CpiContext::new(
            ctx.accounts.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: ctx.accounts.metadata.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                mint_authority: ctx.accounts.mint_authority.to_account_info(),
                update_authority: ctx.accounts.mint_authority.to_account_info(),
                payer: ctx.accounts.admin.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
        )
        .with_signer(mint_authority_signer_seeds),
        DataV2 {
            name: display_name.clone(),
            symbol: TOKEN_SYMBOL.to_owned(),
            uri: metadata_uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        },
        false, // Is mutable
        true,  // Update authority is signer
        None,  // Collection details
    )?;
    msg!("metadata registered");

    **ctx.accounts.pool = Pool {
        mint: ctx.accounts.mint.key(),
        treasury: ctx.accounts.curve_config.treasury,
        creator_vault: ctx.accounts.creator_vault.key(),
        creator_id: creator_id.clone(),
        protocol_fee_bps,
        creator_fee_bps,
        reserve: 0,
        sold_supply: 0,
        display_name,
        metadata_uri,
    };

    emit_cpi!(PoolCreatedEvent {
        mint: ctx.accounts.mint.key(),
        creator_id,
        creator_vault: ctx.accounts.creator_vault.key(),
        treasury: ctx.accounts.curve_config.treasury,
        protocol_fee_bps,
        creator_fee_bps,
    });

    Ok(())
}

#[event_cpi]
#[derive(Accounts)]
#[instruction(creator_id: String)]
pub struct InitPool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(seeds = [CurveConfig::SEED_PREFIX.as_bytes()], bump)]
    pub curve_config: Box<Account<'info, CurveConfig>>,

    #[account(seeds = [MintAuthorityPda::SEED_PREFIX.as_bytes()], bump)]
    pub mint_authority: Box<Account<'info, MintAuthorityPda>>,

    #[account(
        init,
        payer = admin,
        mint::decimals = DECIMALS,
        mint::authority = mint_authority.key(),
    )]
    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: Validate address by deriving pda
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [Pool::SEED_PREFIX.as_bytes(), mint.key().as_ref()],
        bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(seeds = [CREATOR_VAULT_SEED.as_bytes(), creator_id.as_bytes()], bump)]
    pub creator_vault: SystemAccount<'info>,

    pub token_metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
