//! Read-only lookups. Each returns its value as instruction return data, so
//! clients read them through transaction simulation.

use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::state::{CreatorIndex, Order, OrderSlot, Scheduler};
use crate::utils::{CREATOR_SEED, ORDER_SEED, SCHEDULER_SEED, SLOT_SEED};

#[derive(Accounts)]
#[instruction(order_id: u64)]
pub struct GetOrder<'info> {
    #[account(
        seeds = [ORDER_SEED, order_id.to_le_bytes().as_ref()],
        bump = order.bump
    )]
    pub order: Account<'info, Order>,
}

#[derive(Accounts)]
#[instruction(creator: Pubkey, position: u64)]
pub struct GetOrderByCreator<'info> {
    #[account(
        seeds = [SLOT_SEED, creator.as_ref(), position.to_le_bytes().as_ref()],
        bump = order_slot.bump
    )]
    pub order_slot: Account<'info, OrderSlot>,

    #[account(
        seeds = [ORDER_SEED, order_slot.order_id.to_le_bytes().as_ref()],
        bump = order.bump
    )]
    pub order: Account<'info, Order>,
}

#[derive(Accounts)]
#[instruction(creator: Pubkey)]
pub struct CountByCreator<'info> {
    /// CHECK: creator index PDA; may not exist before the first order.
    /// Owner and discriminator are checked in the handler once it has data.
    #[account(seeds = [CREATOR_SEED, creator.as_ref()], bump)]
    pub creator_index: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct TotalOrders<'info> {
    #[account(seeds = [SCHEDULER_SEED], bump = scheduler.bump)]
    pub scheduler: Account<'info, Scheduler>,
}

pub fn get_order(ctx: Context<GetOrder>, _order_id: u64) -> Result<Order> {
    Ok(Order::clone(&ctx.accounts.order))
}

pub fn get_order_by_creator(
    ctx: Context<GetOrderByCreator>,
    _creator: Pubkey,
    _position: u64,
) -> Result<Order> {
    Ok(Order::clone(&ctx.accounts.order))
}

pub fn count_by_creator(ctx: Context<CountByCreator>, _creator: Pubkey) -> Result<u64> {
    let info = &ctx.accounts.creator_index;
    if !info.data_is_empty() {
        require_keys_eq!(*info.owner, crate::ID, ErrorCode::InvalidCreatorIndex);
    }
    let data = info.try_borrow_data()?;
    CreatorIndex::count_in(&data)
}

pub fn total_orders(ctx: Context<TotalOrders>) -> Result<u64> {
    Ok(ctx.accounts.scheduler.total_orders)
}

pub fn owner_of(ctx: Context<GetOrder>, _order_id: u64) -> Result<Pubkey> {
    Ok(ctx.accounts.order.creator)
}
