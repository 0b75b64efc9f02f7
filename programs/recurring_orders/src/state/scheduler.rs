use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Singleton scheduler config. Also the delegate every creator approves and
/// the authority of the custody vaults.
#[account]
#[derive(Default, Debug)]
pub struct Scheduler {
    /// May change the router and keeper policy, and sweep vaults
    pub admin: Pubkey,

    /// Downstream conversion collaborator receiving swept custody
    pub swap_router: Pubkey,

    /// When set, only this key may trigger trades
    pub keeper: Option<Pubkey>,

    /// Number of orders ever created, also the next order id
    pub total_orders: u64,

    pub total_triggers: u64,

    /// PDA bump
    pub bump: u8,
}

impl Scheduler {
    pub const SIZE: usize = 8 + 32 + 32 + (1 + 32) + 8 + 8 + 1;

    /// Hands out the next order id.
    pub fn allocate_order_id(&mut self) -> Result<u64> {
        let order_id = self.total_orders;
        self.total_orders = self
            .total_orders
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(order_id)
    }

    pub fn record_trigger(&mut self) -> Result<()> {
        self.total_triggers = self
            .total_triggers
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}
