use anchor_lang::prelude::*;
use crate::engine::registry::{self, Registration};
use crate::events::{OrderCreated, OrderStatusChanged, OrderUpdated};
use crate::state::{CreatorIndex, Order, OrderSlot, OrderTerms, Scheduler};
use crate::utils::{require_owner, validate_terms};

/// Validates the terms, then registers and opens the order.
pub fn create_order(
    scheduler: &mut Scheduler,
    creator_index: &mut CreatorIndex,
    slot: &mut OrderSlot,
    order: &mut Order,
    creator: Pubkey,
    terms: &OrderTerms,
    height: u64,
) -> Result<OrderCreated> {
    validate_terms(terms)?;

    let registration: Registration = registry::register(scheduler, creator_index, &creator)?;
    registry::fill_slot(slot, &creator, registration);
    order.open(
        registration.order_id,
        creator,
        registration.position,
        terms,
        height,
    );

    Ok(OrderCreated {
        order_id: registration.order_id,
        creator,
        position: registration.position,
        recipient: terms.recipient,
        src_mint: terms.src_mint,
        dest_mint: terms.dest_mint,
        src_qty: terms.src_qty,
        num_trades: terms.num_trades,
        min_block_interval: terms.min_block_interval,
        max_price_ceiling: terms.max_price_ceiling,
        height,
    })
}

/// Owner-only replacement of the mutable terms, including the remaining
/// trade count.
pub fn update_order(
    order: &mut Order,
    caller: &Pubkey,
    terms: &OrderTerms,
) -> Result<OrderUpdated> {
    require_owner(order, caller)?;
    validate_terms(terms)?;

    order.apply_terms(terms);

    Ok(OrderUpdated {
        order_id: order.order_id,
        recipient: order.recipient,
        src_mint: order.src_mint,
        dest_mint: order.dest_mint,
        src_qty: order.src_qty,
        num_trades_left: order.num_trades_left,
        min_block_interval: order.min_block_interval,
        max_price_ceiling: order.max_price_ceiling,
    })
}

/// Owner-only activity toggle. Setting the current value again succeeds.
pub fn set_active(
    order: &mut Order,
    caller: &Pubkey,
    active: bool,
) -> Result<OrderStatusChanged> {
    require_owner(order, caller)?;

    let changed = order.active != active;
    order.active = active;

    Ok(OrderStatusChanged {
        order_id: order.order_id,
        active,
        changed,
    })
}
