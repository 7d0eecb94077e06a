use anchor_lang::prelude::*;
use instructions::*;

pub mod consts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pricing;
pub mod state;

mod pricing_test;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod curve_launchpad {
    use super::*;

    pub fn init_curve(ctx: Context<InitCurve>, growth_rate: u64, supply_cap: u64) -> Result<()> {
        instructions::init_curve(ctx, growth_rate, supply_cap)
    }

    pub fn init_pool(
        ctx: Context<InitPool>,
        creator_id: String,
        protocol_fee_bps: u16,
        creator_fee_bps: u16,
        display_name: String,
        metadata_uri: String,
    ) -> Result<()> {
        instructions::init_pool(
            ctx,
            creator_id,
            protocol_fee_bps,
            creator_fee_bps,
            display_name,
            metadata_uri,
        )
    }

    pub fn buy(ctx: Context<Trade>, currency_in: u64, min_tokens_out: u64) -> Result<()> {
        instructions::buy(ctx, currency_in, min_tokens_out)
    }

    pub fn sell(ctx: Context<Trade>, tokens_in: u64, min_currency_out: u64) -> Result<()> {
        instructions::sell(ctx, tokens_in, min_currency_out)
    }

    pub fn claim(ctx: Context<Claim>, creator_id: String) -> Result<()> {
        instructions::claim(ctx, creator_id)
    }
}
