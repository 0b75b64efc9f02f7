use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::events::SchedulerConfigured;
use crate::state::Scheduler;
use crate::utils::{is_admin, validate_identity, SCHEDULER_SEED};

/// Shared accounts for admin-only config changes
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SCHEDULER_SEED],
        bump = scheduler.bump,
        constraint = is_admin(&scheduler, &admin.key()) @ ErrorCode::NotAdmin
    )]
    pub scheduler: Account<'info, Scheduler>,
}

pub fn set_swap_router_handler(ctx: Context<UpdateConfig>, swap_router: Pubkey) -> Result<()> {
    validate_identity(&swap_router)?;

    let scheduler = &mut ctx.accounts.scheduler;
    scheduler.swap_router = swap_router;

    emit!(SchedulerConfigured {
        admin: scheduler.admin,
        swap_router,
        keeper: scheduler.keeper,
    });
    msg!("Swap router set to {}", swap_router);

    Ok(())
}

/// `None` lets any signer trigger trades.
pub fn set_keeper_handler(ctx: Context<UpdateConfig>, keeper: Option<Pubkey>) -> Result<()> {
    if let Some(key) = keeper.as_ref() {
        validate_identity(key)?;
    }

    let scheduler = &mut ctx.accounts.scheduler;
    scheduler.keeper = keeper;

    emit!(SchedulerConfigured {
        admin: scheduler.admin,
        swap_router: scheduler.swap_router,
        keeper,
    });
    match keeper {
        Some(key) => msg!("Triggering restricted to keeper {}", key),
        None => msg!("Triggering open to any caller"),
    }

    Ok(())
}
