use anchor_lang::prelude::*;

#[event]
pub struct PoolCreatedEvent {
    pub mint: Pubkey,
    pub creator_id: String,
    pub creator_vault: Pubkey,
    pub treasury: Pubkey,
    pub protocol_fee_bps: u16,
    pub creator_fee_bps: u16,
}

#[event]
pub struct BuyEvent {
    pub mint: Pubkey,
    pub buyer: Pubkey,
    pub cost_paid: u64,
    pub tokens_out: u64,
    pub protocol_fee: u64,
    pub creator_fee: u64,
    pub reserve: u64,
    pub sold_supply: u64,
    pub price: u64,
}

#[event]
pub struct SellEvent {
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub currency_out: u64,
    pub tokens_in: u64,
    pub protocol_fee: u64,
    pub creator_fee: u64,
    pub reserve: u64,
    pub sold_supply: u64,
    pub price: u64,
}
