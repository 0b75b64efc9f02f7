use anchor_lang::prelude::*;
use crate::engine::{lifecycle, HeightSource, SlotClock};
use crate::state::{CreatorIndex, Order, OrderSlot, OrderTerms, Scheduler};
use crate::utils::{CREATOR_SEED, ORDER_SEED, SCHEDULER_SEED, SLOT_SEED};

#[derive(Accounts)]
pub struct CreateOrder<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [SCHEDULER_SEED],
        bump = scheduler.bump
    )]
    pub scheduler: Account<'info, Scheduler>,

    /// Created on the creator's first order
    #[account(
        init_if_needed,
        payer = creator,
        space = CreatorIndex::SIZE,
        seeds = [CREATOR_SEED, creator.key().as_ref()],
        bump
    )]
    pub creator_index: Account<'info, CreatorIndex>,

    #[account(
        init,
        payer = creator,
        space = OrderSlot::SIZE,
        seeds = [
            SLOT_SEED,
            creator.key().as_ref(),
            creator_index.order_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub order_slot: Account<'info, OrderSlot>,

    #[account(
        init,
        payer = creator,
        space = Order::SIZE,
        seeds = [ORDER_SEED, scheduler.total_orders.to_le_bytes().as_ref()],
        bump
    )]
    pub order: Account<'info, Order>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<CreateOrder>,
    recipient: Pubkey,
    src_mint: Pubkey,
    dest_mint: Pubkey,
    src_qty: u64,
    num_trades: u64,
    min_block_interval: u64,
    max_price_ceiling: u64,
) -> Result<u64> {
    let terms = OrderTerms {
        recipient,
        src_mint,
        dest_mint,
        src_qty,
        num_trades,
        min_block_interval,
        max_price_ceiling,
    };
    let height = SlotClock.current_height()?;
    let creator = ctx.accounts.creator.key();

    let created = lifecycle::create_order(
        &mut ctx.accounts.scheduler,
        &mut ctx.accounts.creator_index,
        &mut ctx.accounts.order_slot,
        &mut ctx.accounts.order,
        creator,
        &terms,
        height,
    )?;

    ctx.accounts.creator_index.bump = ctx.bumps.creator_index;
    ctx.accounts.order_slot.bump = ctx.bumps.order_slot;
    ctx.accounts.order.bump = ctx.bumps.order;

    let order_id = created.order_id;
    msg!(
        "Order {} created by {} (slot {}): {} x{} every {} slots",
        order_id,
        creator,
        created.position,
        src_qty,
        num_trades,
        min_block_interval
    );
    emit!(created);

    Ok(order_id)
}
