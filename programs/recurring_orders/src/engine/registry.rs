use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::state::{CreatorIndex, OrderSlot, Scheduler};

/// Where a new order lands in the global and per-creator indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    pub order_id: u64,
    pub position: u64,
}

/// Reserves the next global order id and the creator's next position.
pub fn register(
    scheduler: &mut Scheduler,
    creator_index: &mut CreatorIndex,
    creator: &Pubkey,
) -> Result<Registration> {
    // Freshly allocated index accounts are zeroed
    if creator_index.order_count == 0 {
        creator_index.creator = *creator;
    }
    require_keys_eq!(creator_index.creator, *creator, ErrorCode::Unauthorized);

    let position = creator_index.allocate_position()?;
    let order_id = scheduler.allocate_order_id()?;
    Ok(Registration { order_id, position })
}

/// Writes the creator -> order entry for a registration.
pub fn fill_slot(slot: &mut OrderSlot, creator: &Pubkey, registration: Registration) {
    slot.creator = *creator;
    slot.position = registration.position;
    slot.order_id = registration.order_id;
}
