use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use crate::errors::ErrorCode;
use crate::events::VaultSwept;
use crate::state::Scheduler;
use crate::utils::{is_admin, scheduler_signer_seeds, validate_sweep, SCHEDULER_SEED, VAULT_SEED};

/// Hands custody of pulled source assets to the swap router.
#[derive(Accounts)]
pub struct SweepVault<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SCHEDULER_SEED],
        bump = scheduler.bump,
        constraint = is_admin(&scheduler, &admin.key()) @ ErrorCode::NotAdmin
    )]
    pub scheduler: Account<'info, Scheduler>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [VAULT_SEED, mint.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = router_account.owner == scheduler.swap_router @ ErrorCode::InvalidTokenAccount,
        constraint = router_account.mint == mint.key() @ ErrorCode::InvalidMint
    )]
    pub router_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<SweepVault>, amount: u64) -> Result<()> {
    validate_sweep(amount, ctx.accounts.vault.amount)?;

    let bump_bytes = [ctx.accounts.scheduler.bump];
    let seeds = scheduler_signer_seeds(&bump_bytes);
    let signer_seeds: &[&[&[u8]]] = &[&seeds];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.vault.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.router_account.to_account_info(),
                authority: ctx.accounts.scheduler.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    msg!(
        "Swept {} of {} to router {}",
        amount,
        ctx.accounts.mint.key(),
        ctx.accounts.scheduler.swap_router
    );
    emit!(VaultSwept {
        mint: ctx.accounts.mint.key(),
        swap_router: ctx.accounts.scheduler.swap_router,
        amount,
    });

    Ok(())
}
