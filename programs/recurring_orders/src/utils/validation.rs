use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::state::OrderTerms;

/// Reserved key standing for the chain's native asset. Valid as a
/// destination, never as a pull source.
pub const NATIVE_ASSET_SENTINEL: Pubkey = Pubkey::new_from_array([0xee; 32]);

/// Validates that a key is not the null identity
pub fn validate_identity(key: &Pubkey) -> Result<()> {
    require!(*key != Pubkey::default(), ErrorCode::InvalidIdentity);
    Ok(())
}

/// Validates that a source mint can be pulled through an allowance
pub fn validate_source_asset(mint: &Pubkey) -> Result<()> {
    validate_identity(mint)?;
    require!(*mint != NATIVE_ASSET_SENTINEL, ErrorCode::InvalidSourceAsset);
    Ok(())
}

/// Validates that an amount is greater than zero
pub fn validate_amount(amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    Ok(())
}

/// Validates a custody sweep: non-zero and covered by the vault balance
pub fn validate_sweep(amount: u64, vault_balance: u64) -> Result<()> {
    validate_amount(amount)?;
    require!(vault_balance >= amount, ErrorCode::InsufficientBalance);
    Ok(())
}

/// Shared create/update validation. Identities are checked before amounts.
pub fn validate_terms(terms: &OrderTerms) -> Result<()> {
    validate_identity(&terms.recipient)?;
    validate_source_asset(&terms.src_mint)?;
    validate_identity(&terms.dest_mint)?;

    validate_amount(terms.src_qty)?;
    validate_amount(terms.num_trades)?;
    validate_amount(terms.min_block_interval)?;
    validate_amount(terms.max_price_ceiling)?;
    Ok(())
}
