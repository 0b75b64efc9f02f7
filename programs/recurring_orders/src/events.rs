use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct SchedulerConfigured {
    pub admin: Pubkey,
    pub swap_router: Pubkey,
    pub keeper: Option<Pubkey>,
}

#[event]
#[derive(Debug)]
pub struct OrderCreated {
    pub order_id: u64,
    pub creator: Pubkey,
    pub position: u64,
    pub recipient: Pubkey,
    pub src_mint: Pubkey,
    pub dest_mint: Pubkey,
    pub src_qty: u64,
    pub num_trades: u64,
    pub min_block_interval: u64,
    pub max_price_ceiling: u64,
    pub height: u64,
}

#[event]
#[derive(Debug)]
pub struct OrderUpdated {
    pub order_id: u64,
    pub recipient: Pubkey,
    pub src_mint: Pubkey,
    pub dest_mint: Pubkey,
    pub src_qty: u64,
    pub num_trades_left: u64,
    pub min_block_interval: u64,
    pub max_price_ceiling: u64,
}

#[event]
#[derive(Debug)]
pub struct OrderStatusChanged {
    pub order_id: u64,
    pub active: bool,
    /// False when the call left the flag as it was
    pub changed: bool,
}

#[event]
#[derive(Debug)]
pub struct TradeTriggered {
    pub order_id: u64,
    pub keeper: Pubkey,
    pub src_mint: Pubkey,
    pub src_qty: u64,
    pub num_trades_left: u64,
    pub height: u64,
}

#[event]
#[derive(Debug)]
pub struct VaultSwept {
    pub mint: Pubkey,
    pub swap_router: Pubkey,
    pub amount: u64,
}
