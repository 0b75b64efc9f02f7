use anchor_lang::prelude::*;

pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::Order;

declare_id!("EeNv3knvLktdWHnaJxDAeYiczzKCh5M9nEn3Ls3YwRct");

#[program]
pub mod recurring_orders {
    use super::*;

    /// Creates the scheduler config; the signer becomes admin
    pub fn initialize(ctx: Context<Initialize>, swap_router: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, swap_router)
    }

    pub fn set_swap_router(ctx: Context<UpdateConfig>, swap_router: Pubkey) -> Result<()> {
        instructions::config::set_swap_router_handler(ctx, swap_router)
    }

    /// Restricts triggering to one keeper, or opens it to anyone with `None`
    pub fn set_keeper(ctx: Context<UpdateConfig>, keeper: Option<Pubkey>) -> Result<()> {
        instructions::config::set_keeper_handler(ctx, keeper)
    }

    /// Moves pulled source assets from a custody vault to the swap router
    pub fn sweep_vault(ctx: Context<SweepVault>, amount: u64) -> Result<()> {
        instructions::sweep_vault::handler(ctx, amount)
    }

    /// Registers a recurring order and returns its id
    #[allow(clippy::too_many_arguments)]
    pub fn create_order(
        ctx: Context<CreateOrder>,
        recipient: Pubkey,
        src_mint: Pubkey,
        dest_mint: Pubkey,
        src_qty: u64,
        num_trades: u64,
        min_block_interval: u64,
        max_price_ceiling: u64,
    ) -> Result<u64> {
        instructions::create_order::handler(
            ctx,
            recipient,
            src_mint,
            dest_mint,
            src_qty,
            num_trades,
            min_block_interval,
            max_price_ceiling,
        )
    }

    /// Owner-only: replaces the order's mutable terms
    #[allow(clippy::too_many_arguments)]
    pub fn update_order(
        ctx: Context<UpdateOrder>,
        order_id: u64,
        recipient: Pubkey,
        src_mint: Pubkey,
        dest_mint: Pubkey,
        src_qty: u64,
        num_trades_left: u64,
        min_block_interval: u64,
        max_price_ceiling: u64,
    ) -> Result<()> {
        instructions::update_order::handler(
            ctx,
            order_id,
            recipient,
            src_mint,
            dest_mint,
            src_qty,
            num_trades_left,
            min_block_interval,
            max_price_ceiling,
        )
    }

    pub fn deactivate_order(ctx: Context<SetOrderActive>, _order_id: u64) -> Result<()> {
        instructions::set_active::handler(ctx, false)
    }

    pub fn reactivate_order(ctx: Context<SetOrderActive>, _order_id: u64) -> Result<()> {
        instructions::set_active::handler(ctx, true)
    }

    /// Executes one repetition of an eligible order
    pub fn trigger_trade(ctx: Context<TriggerTrade>, order_id: u64) -> Result<()> {
        instructions::trigger_trade::handler(ctx, order_id)
    }

    pub fn get_order(ctx: Context<GetOrder>, order_id: u64) -> Result<Order> {
        instructions::views::get_order(ctx, order_id)
    }

    pub fn get_order_by_creator(
        ctx: Context<GetOrderByCreator>,
        creator: Pubkey,
        position: u64,
    ) -> Result<Order> {
        instructions::views::get_order_by_creator(ctx, creator, position)
    }

    pub fn count_by_creator(ctx: Context<CountByCreator>, creator: Pubkey) -> Result<u64> {
        instructions::views::count_by_creator(ctx, creator)
    }

    pub fn total_orders(ctx: Context<TotalOrders>) -> Result<u64> {
        instructions::views::total_orders(ctx)
    }

    pub fn owner_of(ctx: Context<GetOrder>, order_id: u64) -> Result<Pubkey> {
        instructions::views::owner_of(ctx, order_id)
    }
}
