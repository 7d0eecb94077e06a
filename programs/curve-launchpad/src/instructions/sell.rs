use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn};

use crate::errors::LaunchpadError;
use crate::events::SellEvent;
use crate::instructions::Trade;
use crate::pricing;

pub fn sell(ctx: Context<Trade>, tokens_in: u64, min_currency_out: u64) -> Result<()> {
    let config = &ctx.accounts.curve_config;
    let pool = &mut ctx.accounts.pool;

    require!(
        tokens_in <= pool.sold_supply,
        LaunchpadError::InsufficientSupply
    );

    let new_sold_supply = pool.sold_supply - tokens_in;
    let gross = pricing::sweep_cost(config.growth_rate, new_sold_supply, pool.sold_supply)?;
    let (protocol_fee, creator_fee, net) =
        pricing::split_payout(gross, pool.protocol_fee_bps, pool.creator_fee_bps)?;

    require!(gross <= pool.reserve, LaunchpadError::InsufficientReserve);
    require!(net >= min_currency_out, LaunchpadError::SlippageExceeded);

    if tokens_in > 0 {
        burn(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.mint.to_account_info(),
                    from: ctx.accounts.user_token_account.to_account_info(),
                    authority: ctx.accounts.user.to_account_info(),
                },
            ),
            tokens_in,
        )?;
    }

    // The pool account custodies the reserve; debit it directly
    **pool.to_account_info().try_borrow_mut_lamports()? -= net;
    **ctx.accounts.user.to_account_info().try_borrow_mut_lamports()? += net;

    **pool.to_account_info().try_borrow_mut_lamports()? -= creator_fee;
    **ctx
        .accounts
        .creator_vault
        .to_account_info()
        .try_borrow_mut_lamports()? += creator_fee;

    **pool.to_account_info().try_borrow_mut_lamports()? -= protocol_fee;
    **ctx
        .accounts
        .treasury
        .to_account_info()
        .try_borrow_mut_lamports()? += protocol_fee;

    pool.reserve -= gross;
    pool.sold_supply = new_sold_supply;

    emit_cpi!(SellEvent {
        mint: ctx.accounts.mint.key(),
        seller: ctx.accounts.user.key(),
        currency_out: net,
        tokens_in,
        protocol_fee,
        creator_fee,
        reserve: pool.reserve,
        sold_supply: pool.sold_supply,
        price: pricing::spot_price(config.growth_rate, pool.sold_supply)?,
    });

    Ok(())
}
