use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::engine::{trigger, SlotClock, SplTokenLedger};
use crate::errors::ErrorCode;
use crate::events::TradeTriggered;
use crate::state::{Order, Scheduler};
use crate::utils::{
    is_allowed_keeper, scheduler_signer_seeds, ORDER_SEED, SCHEDULER_SEED, VAULT_SEED,
};

#[derive(Accounts)]
#[instruction(order_id: u64)]
pub struct TriggerTrade<'info> {
    /// Any signer unless the scheduler names a keeper
    #[account(mut)]
    pub keeper: Signer<'info>,

    #[account(
        mut,
        seeds = [SCHEDULER_SEED],
        bump = scheduler.bump,
        constraint = is_allowed_keeper(&scheduler, &keeper.key()) @ ErrorCode::KeeperNotAllowed
    )]
    pub scheduler: Account<'info, Scheduler>,

    #[account(
        mut,
        seeds = [ORDER_SEED, order_id.to_le_bytes().as_ref()],
        bump = order.bump
    )]
    pub order: Account<'info, Order>,

    #[account(constraint = src_mint.key() == order.src_mint @ ErrorCode::InvalidMint)]
    pub src_mint: InterfaceAccount<'info, Mint>,

    /// Creator's source account, delegated to the scheduler PDA
    #[account(
        mut,
        constraint = creator_src_account.owner == order.creator @ ErrorCode::InvalidTokenAccount,
        constraint = creator_src_account.mint == order.src_mint @ ErrorCode::InvalidMint
    )]
    pub creator_src_account: InterfaceAccount<'info, TokenAccount>,

    /// Custody vault for the source mint (PDA owned by the scheduler)
    #[account(
        init_if_needed,
        payer = keeper,
        seeds = [VAULT_SEED, src_mint.key().as_ref()],
        bump,
        token::mint = src_mint,
        token::authority = scheduler,
        token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TriggerTrade>, _order_id: u64) -> Result<()> {
    let scheduler_key = ctx.accounts.scheduler.key();
    let bump_bytes = [ctx.accounts.scheduler.bump];
    let seeds = scheduler_signer_seeds(&bump_bytes);
    let signer_seeds: &[&[&[u8]]] = &[&seeds];

    let mut ledger = SplTokenLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.src_mint,
        &ctx.accounts.creator_src_account,
        &mut ctx.accounts.vault,
        ctx.accounts.scheduler.to_account_info(),
        signer_seeds,
    );
    let execution = trigger::execute(
        &mut ctx.accounts.order,
        &scheduler_key,
        &SlotClock,
        &mut ledger,
    )?;

    ctx.accounts.scheduler.record_trigger()?;

    msg!(
        "Order {} triggered at slot {}: pulled {}, {} trades left",
        execution.order_id,
        execution.height,
        execution.src_qty,
        execution.num_trades_left
    );
    emit!(TradeTriggered {
        order_id: execution.order_id,
        keeper: ctx.accounts.keeper.key(),
        src_mint: execution.src_mint,
        src_qty: execution.src_qty,
        num_trades_left: execution.num_trades_left,
        height: execution.height,
    });

    Ok(())
}
