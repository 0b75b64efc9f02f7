use anchor_lang::prelude::*;
use crate::engine::lifecycle;
use crate::state::Order;
use crate::utils::ORDER_SEED;

/// Shared by deactivate_order and reactivate_order
#[derive(Accounts)]
#[instruction(order_id: u64)]
pub struct SetOrderActive<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ORDER_SEED, order_id.to_le_bytes().as_ref()],
        bump = order.bump
    )]
    pub order: Account<'info, Order>,
}

pub fn handler(ctx: Context<SetOrderActive>, active: bool) -> Result<()> {
    let caller = ctx.accounts.creator.key();

    let status = lifecycle::set_active(&mut ctx.accounts.order, &caller, active)?;

    msg!(
        "Order {} {}{}",
        status.order_id,
        if active { "reactivated" } else { "deactivated" },
        if status.changed { "" } else { " (unchanged)" }
    );
    emit!(status);

    Ok(())
}
