use anchor_lang::prelude::*;
use crate::engine::lifecycle;
use crate::state::{Order, OrderTerms};
use crate::utils::ORDER_SEED;

#[derive(Accounts)]
#[instruction(order_id: u64)]
pub struct UpdateOrder<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ORDER_SEED, order_id.to_le_bytes().as_ref()],
        bump = order.bump
    )]
    pub order: Account<'info, Order>,
}

/// Replaces the mutable terms, `num_trades_left` included.
#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<UpdateOrder>,
    _order_id: u64,
    recipient: Pubkey,
    src_mint: Pubkey,
    dest_mint: Pubkey,
    src_qty: u64,
    num_trades_left: u64,
    min_block_interval: u64,
    max_price_ceiling: u64,
) -> Result<()> {
    let terms = OrderTerms {
        recipient,
        src_mint,
        dest_mint,
        src_qty,
        num_trades: num_trades_left,
        min_block_interval,
        max_price_ceiling,
    };
    let caller = ctx.accounts.creator.key();

    let updated = lifecycle::update_order(&mut ctx.accounts.order, &caller, &terms)?;

    msg!(
        "Order {} updated: {} trades left",
        updated.order_id,
        updated.num_trades_left
    );
    emit!(updated);

    Ok(())
}
