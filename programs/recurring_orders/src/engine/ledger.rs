use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use crate::errors::ErrorCode;

/// Fungible-asset collaborator for a single source mint.
///
/// `approve` is not part of the trait: creators grant the allowance with
/// their own instruction to the token program.
pub trait AssetLedger {
    fn balance_of(&self, owner: &Pubkey) -> Result<u64>;

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u64>;

    /// Moves `amount` from `from` into the custody of `to`, spending the
    /// allowance `from` granted to `to`.
    fn pull_transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}

/// SPL Token / Token-2022 binding. The allowance is the source account's
/// delegation to the scheduler PDA, which signs the pull. Custody is
/// reloaded after every pull so `balance_of` sees what actually arrived.
pub struct SplTokenLedger<'a, 'info> {
    token_program: &'a Interface<'info, TokenInterface>,
    mint: &'a InterfaceAccount<'info, Mint>,
    source: &'a InterfaceAccount<'info, TokenAccount>,
    custody: &'a mut InterfaceAccount<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SplTokenLedger<'a, 'info> {
    pub fn new(
        token_program: &'a Interface<'info, TokenInterface>,
        mint: &'a InterfaceAccount<'info, Mint>,
        source: &'a InterfaceAccount<'info, TokenAccount>,
        custody: &'a mut InterfaceAccount<'info, TokenAccount>,
        authority: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            token_program,
            mint,
            source,
            custody,
            authority,
            signer_seeds,
        }
    }
}

impl AssetLedger for SplTokenLedger<'_, '_> {
    fn balance_of(&self, owner: &Pubkey) -> Result<u64> {
        if self.source.owner == *owner {
            Ok(self.source.amount)
        } else if self.custody.owner == *owner {
            Ok(self.custody.amount)
        } else {
            Ok(0)
        }
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u64> {
        if self.source.owner != *owner {
            return Ok(0);
        }
        match self.source.delegate {
            COption::Some(delegate) if delegate == *spender => Ok(self.source.delegated_amount),
            _ => Ok(0),
        }
    }

    fn pull_transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.source.owner, *from, ErrorCode::InvalidTokenAccount);
        require_keys_eq!(self.custody.owner, *to, ErrorCode::InvalidTokenAccount);
        require!(
            self.allowance(from, self.authority.key)? >= amount,
            ErrorCode::InsufficientAllowance
        );
        require!(self.source.amount >= amount, ErrorCode::InsufficientBalance);

        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.source.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.custody.to_account_info(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
            self.mint.decimals,
        )?;

        // Deserialized state is stale after the CPI
        self.custody.reload()
    }
}

#[cfg(test)]
pub use memory::MemoryLedger;
