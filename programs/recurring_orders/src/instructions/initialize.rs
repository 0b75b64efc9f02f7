use anchor_lang::prelude::*;
use crate::events::SchedulerConfigured;
use crate::state::Scheduler;
use crate::utils::{validate_identity, SCHEDULER_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = Scheduler::SIZE,
        seeds = [SCHEDULER_SEED],
        bump
    )]
    pub scheduler: Account<'info, Scheduler>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, swap_router: Pubkey) -> Result<()> {
    validate_identity(&swap_router)?;

    let scheduler = &mut ctx.accounts.scheduler;
    scheduler.admin = ctx.accounts.admin.key();
    scheduler.swap_router = swap_router;
    scheduler.keeper = None;
    scheduler.total_orders = 0;
    scheduler.total_triggers = 0;
    scheduler.bump = ctx.bumps.scheduler;

    emit!(SchedulerConfigured {
        admin: scheduler.admin,
        swap_router,
        keeper: None,
    });
    msg!("Scheduler initialized: admin {} router {}", scheduler.admin, swap_router);

    Ok(())
}
