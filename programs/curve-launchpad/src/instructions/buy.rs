use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{mint_to, MintTo};

use crate::errors::LaunchpadError;
use crate::events::BuyEvent;
use crate::instructions::Trade;
use crate::pricing;
use crate::state::MintAuthorityPda;

pub fn buy(ctx: Context<Trade>, currency_in: u64, min_tokens_out: u64) -> Result<()> {
    let config = &ctx.accounts.curve_config;
    let pool = &mut ctx.accounts.pool;

    let (tokens_out, gross_cost, protocol_fee, creator_fee) = pricing::quote_buy(
        config.growth_rate,
        pool.sold_supply,
        currency_in,
        pool.protocol_fee_bps,
        pool.creator_fee_bps,
    );

    require!(tokens_out >= min_tokens_out, LaunchpadError::SlippageExceeded);

    let new_sold_supply = pool
        .sold_supply
        .checked_add(tokens_out)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;
    require!(
        new_sold_supply <= config.supply_cap,
        LaunchpadError::SupplyCapExceeded
    );

    let cost_paid = gross_cost
        .checked_add(protocol_fee)
        .and_then(|v| v.checked_add(creator_fee))
        .ok_or(LaunchpadError::ArithmeticOverflow)?;

    // Every check has passed; move funds. The gross curve cost backs the
    // reserve, both fees are charged to the buyer on top of it.
    if gross_cost > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.user.to_account_info(),
                    to: pool.to_account_info(),
                },
            ),
            gross_cost,
        )?;
    }

    if protocol_fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.user.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            protocol_fee,
        )?;
    }

    if creator_fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.user.to_account_info(),
                    to: ctx.accounts.creator_vault.to_account_info(),
                },
            ),
            creator_fee,
        )?;
    }

    if tokens_out > 0 {
        mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: ctx.accounts.user_token_account.to_account_info(),
                    authority: ctx.accounts.mint_authority.to_account_info(),
                },
                &[&[
                    MintAuthorityPda::SEED_PREFIX.as_bytes(),
                    &[ctx.bumps.mint_authority],
                ]],
            ),
            tokens_out,
        )?;
    }

    pool.reserve = pool
        .reserve
        .checked_add(gross_cost)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;
    pool.sold_supply = new_sold_supply;

    emit_cpi!(BuyEvent {
        mint: ctx.accounts.mint.key(),
        buyer: ctx.accounts.user.key(),
        cost_paid,
        tokens_out,
        protocol_fee,
        creator_fee,
        reserve: pool.reserve,
        sold_supply: pool.sold_supply,
        price: pricing::spot_price(config.growth_rate, pool.sold_supply)?,
    });

    Ok(())
}
