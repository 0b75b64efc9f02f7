use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Mutable terms of a recurring order, as supplied on create and update.
/// On create `num_trades` is the total; on update it replaces `num_trades_left`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderTerms {
    pub recipient: Pubkey,
    pub src_mint: Pubkey,
    pub dest_mint: Pubkey,
    pub src_qty: u64,
    pub num_trades: u64,
    pub min_block_interval: u64,
    pub max_price_ceiling: u64,
}

/// A recurring transfer instruction. Never closed once created.
#[account]
#[derive(Default, Debug)]
pub struct Order {
    /// Global sequential id, also the PDA seed
    pub order_id: u64,

    /// Order owner, fixed for the lifetime of the order
    pub creator: Pubkey,

    /// Destination for funds produced downstream
    pub recipient: Pubkey,

    /// Mint pulled from the creator on every trigger
    pub src_mint: Pubkey,

    /// Mint the downstream collaborator converts into (may be the native sentinel)
    pub dest_mint: Pubkey,

    /// Quantity pulled per trigger (raw token units)
    pub src_qty: u64,

    /// Remaining executions
    pub num_trades_left: u64,

    /// Minimum slots between two successful triggers
    pub min_block_interval: u64,

    /// Slot of creation or of the last successful trigger
    pub last_trigger_height: u64,

    /// Stored execution-cost ceiling
    pub max_price_ceiling: u64,

    pub active: bool,

    /// Position of this order in the creator's index
    pub creator_position: u64,

    pub created_height: u64,
    pub trades_executed: u64,

    /// PDA bump
    pub bump: u8,
}

impl Order {
    pub const SIZE: usize =
        8 + 8 + 32 + 32 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 1 + 8 + 8 + 8 + 1;

    /// Fills a freshly allocated order record.
    pub fn open(
        &mut self,
        order_id: u64,
        creator: Pubkey,
        creator_position: u64,
        terms: &OrderTerms,
        height: u64,
    ) {
        self.order_id = order_id;
        self.creator = creator;
        self.creator_position = creator_position;
        self.apply_terms(terms);
        self.last_trigger_height = height;
        self.created_height = height;
        self.trades_executed = 0;
        self.active = true;
    }

    /// Replaces the mutable fields. Identity, activity and the trigger
    /// height are left alone.
    pub fn apply_terms(&mut self, terms: &OrderTerms) {
        self.recipient = terms.recipient;
        self.src_mint = terms.src_mint;
        self.dest_mint = terms.dest_mint;
        self.src_qty = terms.src_qty;
        self.num_trades_left = terms.num_trades;
        self.min_block_interval = terms.min_block_interval;
        self.max_price_ceiling = terms.max_price_ceiling;
    }

    pub fn cooldown_elapsed(&self, height: u64) -> bool {
        height.saturating_sub(self.last_trigger_height) >= self.min_block_interval
    }

    pub fn is_exhausted(&self) -> bool {
        self.num_trades_left == 0
    }

    /// Order-local eligibility: active, cooled down, trades left.
    pub fn check_trigger(&self, height: u64) -> Result<()> {
        require!(self.active, ErrorCode::OrderInactive);
        require!(self.cooldown_elapsed(height), ErrorCode::CooldownNotElapsed);
        require!(!self.is_exhausted(), ErrorCode::TradesExhausted);
        Ok(())
    }

    pub fn record_trigger(&mut self, height: u64) -> Result<()> {
        self.num_trades_left = self
            .num_trades_left
            .checked_sub(1)
            .ok_or(ErrorCode::TradesExhausted)?;
        self.trades_executed = self
            .trades_executed
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.last_trigger_height = height;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn terms() -> OrderTerms {
        OrderTerms {
            recipient: Pubkey::new_unique(),
            src_mint: Pubkey::new_unique(),
            dest_mint: Pubkey::new_unique(),
            src_qty: 1_000,
            num_trades: 2,
            min_block_interval: 8,
            max_price_ceiling: 10,
        }
    }

    fn opened(height: u64) -> Order {
        let mut order = Order::default();
        order.open(3, Pubkey::new_unique(), 0, &terms(), height);
        order
    }

    #[test]
    fn open_sets_lifecycle_fields() {
        let order = opened(100);
        assert!(order.active);
        assert_eq!(order.order_id, 3);
        assert_eq!(order.num_trades_left, 2);
        assert_eq!(order.last_trigger_height, 100);
        assert_eq!(order.created_height, 100);
    }

    #[test]
    fn cooldown_is_inclusive_of_interval() {
        let order = opened(100);
        assert!(!order.cooldown_elapsed(107));
        assert!(order.cooldown_elapsed(108));
        // A height behind the last trigger never counts as elapsed
        assert!(!order.cooldown_elapsed(50));
    }

    #[test]
    fn check_trigger_reports_first_failure() {
        let mut order = opened(100);
        order.active = false;
        order.num_trades_left = 0;
        assert_eq!(
            order.check_trigger(100).unwrap_err(),
            Error::from(ErrorCode::OrderInactive)
        );

        order.active = true;
        assert_eq!(
            order.check_trigger(100).unwrap_err(),
            Error::from(ErrorCode::CooldownNotElapsed)
        );
        assert_eq!(
            order.check_trigger(200).unwrap_err(),
            Error::from(ErrorCode::TradesExhausted)
        );
    }

    #[test]
    fn record_trigger_never_goes_below_zero() {
        let mut order = opened(100);
        order.record_trigger(108).unwrap();
        order.record_trigger(116).unwrap();
        assert_eq!(order.num_trades_left, 0);
        assert_eq!(order.trades_executed, 2);
        assert_eq!(order.last_trigger_height, 116);

        assert!(order.record_trigger(124).is_err());
        assert_eq!(order.num_trades_left, 0);
        assert_eq!(order.last_trigger_height, 116);
    }

    #[test]
    fn apply_terms_keeps_identity_and_height() {
        let mut order = opened(100);
        let creator = order.creator;
        order.active = false;
        let mut next = terms();
        next.num_trades = 9;
        order.apply_terms(&next);
        assert_eq!(order.creator, creator);
        assert_eq!(order.order_id, 3);
        assert_eq!(order.last_trigger_height, 100);
        assert!(!order.active);
        assert_eq!(order.num_trades_left, 9);
        assert_eq!(order.recipient, next.recipient);
    }
}
