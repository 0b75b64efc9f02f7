use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Identity must not be the null key")]
    InvalidIdentity,

    #[msg("Source asset cannot be the native-currency sentinel")]
    InvalidSourceAsset,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Caller does not own this order")]
    Unauthorized,

    #[msg("Order is deactivated")]
    OrderInactive,

    #[msg("Minimum block interval has not elapsed")]
    CooldownNotElapsed,

    #[msg("Order has no trades left")]
    TradesExhausted,

    #[msg("Scheduler allowance is below the order quantity")]
    InsufficientAllowance,

    #[msg("Source balance is below the order quantity")]
    InsufficientBalance,

    #[msg("Math operation overflow")]
    MathOverflow,

    // Ledger binding error codes
    #[msg("Mint does not match the order's source asset")]
    InvalidMint,

    #[msg("Token account does not belong to the expected owner or mint")]
    InvalidTokenAccount,

    #[msg("Custody received less than the order quantity")]
    TransferShortfall,

    #[msg("Creator index account is not owned by this program")]
    InvalidCreatorIndex,

    #[msg("Only the scheduler admin may do this")]
    NotAdmin,

    #[msg("Caller is not the configured keeper")]
    KeeperNotAllowed,
}
