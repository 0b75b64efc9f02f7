use anchor_lang::prelude::*;

/// Monotonic ledger height used as the cooldown clock.
pub trait HeightSource {
    fn current_height(&self) -> Result<u64>;
}

/// Reads the current slot from the `Clock` sysvar.
pub struct SlotClock;

impl HeightSource for SlotClock {
    fn current_height(&self) -> Result<u64> {
        Ok(Clock::get()?.slot)
    }
}

#[cfg(test)]
pub use fixed::FixedHeight;
