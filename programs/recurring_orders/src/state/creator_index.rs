use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Per-creator order counter.
#[account]
#[derive(Default, Debug)]
pub struct CreatorIndex {
    pub creator: Pubkey,

    /// Number of orders this creator has made, also the next slot position
    pub order_count: u64,

    /// PDA bump
    pub bump: u8,
}

impl CreatorIndex {
    pub const SIZE: usize = 8 + 32 + 8 + 1;

    pub fn allocate_position(&mut self) -> Result<u64> {
        let position = self.order_count;
        self.order_count = self
            .order_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(position)
    }

    /// Order count held in raw index account data. A creator with no orders
    /// has no index account yet, which reads as zero.
    pub fn count_in(data: &[u8]) -> Result<u64> {
        if data.is_empty() {
            return Ok(0);
        }
        Ok(Self::try_deserialize(&mut &data[..])?.order_count)
    }
}

/// Entry `position` of a creator's order list.
#[account]
#[derive(Default, Debug)]
pub struct OrderSlot {
    pub creator: Pubkey,
    pub position: u64,
    pub order_id: u64,

    /// PDA bump
    pub bump: u8,
}

impl OrderSlot {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 1;
}
