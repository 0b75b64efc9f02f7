use anchor_lang::prelude::*;
use crate::engine::{AssetLedger, HeightSource};
use crate::errors::ErrorCode;
use crate::state::Order;

/// Result of one successful trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Execution {
    pub order_id: u64,
    pub src_mint: Pubkey,
    pub src_qty: u64,
    pub num_trades_left: u64,
    pub height: u64,
}

/// Executes one repetition of `order`, pulling `src_qty` from the creator
/// into the custody of `scheduler`.
///
/// Checks run in a fixed order: active, cooldown, trades left, allowance.
/// Counters are advanced before the pull and restored if the pull fails, so
/// the order is never left half-updated and a re-entered trigger never sees
/// the pre-trigger counters.
pub fn execute<H, L>(
    order: &mut Order,
    scheduler: &Pubkey,
    clock: &H,
    ledger: &mut L,
) -> Result<Execution>
where
    H: HeightSource,
    L: AssetLedger,
{
    let height = clock.current_height()?;
    order.check_trigger(height)?;

    let allowance = ledger.allowance(&order.creator, scheduler)?;
    require!(allowance >= order.src_qty, ErrorCode::InsufficientAllowance);

    let checkpoint = (
        order.num_trades_left,
        order.last_trigger_height,
        order.trades_executed,
    );
    let custody_before = ledger.balance_of(scheduler)?;
    order.record_trigger(height)?;

    let pulled = ledger
        .pull_transfer(&order.creator, scheduler, order.src_qty)
        .and_then(|()| received(ledger, scheduler, custody_before, order.src_qty));
    if let Err(err) = pulled {
        (
            order.num_trades_left,
            order.last_trigger_height,
            order.trades_executed,
        ) = checkpoint;
        return Err(err);
    }

    Ok(Execution {
        order_id: order.order_id,
        src_mint: order.src_mint,
        src_qty: order.src_qty,
        num_trades_left: order.num_trades_left,
        height,
    })
}

/// Custody must grow by exactly the pulled quantity. Mints that withhold a
/// transfer fee deliver less and are refused.
fn received<L: AssetLedger>(ledger: &L, custodian: &Pubkey, before: u64, qty: u64) -> Result<()> {
    let after = ledger.balance_of(custodian)?;
    require!(
        after.checked_sub(before) == Some(qty),
        ErrorCode::TransferShortfall
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use crate::engine::{FixedHeight, MemoryLedger};
    use crate::state::OrderTerms;

    const QTY: u64 = 1_000 * 1_000_000;

    struct Fixture {
        order: Order,
        creator: Pubkey,
        scheduler: Pubkey,
        clock: FixedHeight,
        ledger: MemoryLedger,
    }

    impl Fixture {
        fn new(num_trades: u64) -> Self {
            let creator = Pubkey::new_unique();
            let scheduler = Pubkey::new_unique();
            let clock = FixedHeight::at(1_000);
            let mut order = Order::default();
            let terms = OrderTerms {
                recipient: Pubkey::new_unique(),
                src_mint: Pubkey::new_unique(),
                dest_mint: Pubkey::new_unique(),
                src_qty: QTY,
                num_trades,
                min_block_interval: 8,
                max_price_ceiling: 10,
            };
            order.open(0, creator, 0, &terms, 1_000);

            let mut ledger = MemoryLedger::default();
            ledger.mint_to(creator, 1_000_000 * 1_000_000);
            Self {
                order,
                creator,
                scheduler,
                clock,
                ledger,
            }
        }

        fn trigger(&mut self) -> Result<Execution> {
            execute(&mut self.order, &self.scheduler, &self.clock, &mut self.ledger)
        }

        fn approve(&mut self, amount: u64) {
            self.ledger.approve(self.creator, self.scheduler, amount);
        }

        fn assert_unchanged(&self, trades_left: u64, height: u64, creator_balance: u64) {
            assert_eq!(self.order.num_trades_left, trades_left);
            assert_eq!(self.order.last_trigger_height, height);
            assert_eq!(self.ledger.balance_of(&self.creator).unwrap(), creator_balance);
        }
    }

    #[test]
    fn trigger_moves_quantity_into_custody() {
        let mut fx = Fixture::new(5);
        fx.approve(1_000_000 * 1_000_000);
        let creator_before = fx.ledger.balance_of(&fx.creator).unwrap();
        fx.clock.advance(8);

        let execution = fx.trigger().unwrap();
        assert_eq!(execution.num_trades_left, 4);
        assert_eq!(execution.height, 1_008);
        assert_eq!(fx.order.num_trades_left, 4);
        assert_eq!(fx.order.last_trigger_height, 1_008);
        assert_eq!(fx.ledger.balance_of(&fx.scheduler).unwrap(), QTY);
        assert_eq!(fx.ledger.balance_of(&fx.creator).unwrap(), creator_before - QTY);
    }

    #[test]
    fn immediate_retrigger_is_cooling_down() {
        let mut fx = Fixture::new(5);
        fx.approve(u64::MAX);
        fx.clock.advance(8);
        fx.trigger().unwrap();
        let balance = fx.ledger.balance_of(&fx.creator).unwrap();

        assert_eq!(fx.trigger().unwrap_err(), Error::from(ErrorCode::CooldownNotElapsed));
        fx.assert_unchanged(4, 1_008, balance);
    }

    #[test]
    fn inactive_order_is_rejected() {
        let mut fx = Fixture::new(5);
        fx.approve(u64::MAX);
        fx.clock.advance(8);
        fx.order.active = false;
        let balance = fx.ledger.balance_of(&fx.creator).unwrap();

        assert_eq!(fx.trigger().unwrap_err(), Error::from(ErrorCode::OrderInactive));
        fx.assert_unchanged(5, 1_000, balance);

        fx.order.active = true;
        assert!(fx.trigger().is_ok());
    }

    #[test]
    fn missing_allowance_is_rejected() {
        let mut fx = Fixture::new(5);
        fx.approve(0);
        fx.clock.advance(8);
        let balance = fx.ledger.balance_of(&fx.creator).unwrap();

        assert_eq!(fx.trigger().unwrap_err(), Error::from(ErrorCode::InsufficientAllowance));
        fx.assert_unchanged(5, 1_000, balance);

        fx.approve(QTY - 1);
        assert_eq!(fx.trigger().unwrap_err(), Error::from(ErrorCode::InsufficientAllowance));

        fx.approve(QTY);
        assert!(fx.trigger().is_ok());
    }

    #[test]
    fn failed_pull_restores_counters() {
        let mut fx = Fixture::new(5);
        fx.approve(u64::MAX);
        fx.clock.advance(8);
        // Drain the creator so the pull fails after the counters moved
        let all = fx.ledger.balance_of(&fx.creator).unwrap();
        let sink = Pubkey::new_unique();
        fx.ledger.approve(fx.creator, sink, all);
        fx.ledger.pull_transfer(&fx.creator, &sink, all).unwrap();

        assert_eq!(fx.trigger().unwrap_err(), Error::from(ErrorCode::InsufficientBalance));
        fx.assert_unchanged(5, 1_000, 0);
        assert_eq!(fx.order.trades_executed, 0);
    }

    #[test]
    fn fee_withholding_mint_is_refused() {
        let mut fx = Fixture::new(5);
        fx.approve(u64::MAX);
        fx.clock.advance(8);
        fx.ledger.set_transfer_fee(1);

        assert_eq!(fx.trigger().unwrap_err(), Error::from(ErrorCode::TransferShortfall));
        assert_eq!(fx.order.num_trades_left, 5);
        assert_eq!(fx.order.last_trigger_height, 1_000);
        assert_eq!(fx.order.trades_executed, 0);

        fx.ledger.set_transfer_fee(0);
        assert_eq!(fx.trigger().unwrap().num_trades_left, 4);
    }

    #[test]
    fn exhaustion_is_permanent_until_updated() {
        let mut fx = Fixture::new(2);
        fx.approve(u64::MAX);
        for _ in 0..2 {
            fx.clock.advance(8);
            fx.trigger().unwrap();
        }
        assert_eq!(fx.order.num_trades_left, 0);

        for _ in 0..3 {
            fx.clock.advance(100);
            assert_eq!(fx.trigger().unwrap_err(), Error::from(ErrorCode::TradesExhausted));
            assert_eq!(fx.order.num_trades_left, 0);
        }
        assert_eq!(fx.ledger.balance_of(&fx.scheduler).unwrap(), 2 * QTY);

        fx.order.num_trades_left = 1;
        assert_eq!(fx.trigger().unwrap().num_trades_left, 0);
    }

    #[test]
    fn allowance_is_spent_per_trigger() {
        let mut fx = Fixture::new(5);
        fx.approve(2 * QTY);
        fx.clock.advance(8);
        fx.trigger().unwrap();
        fx.clock.advance(8);
        fx.trigger().unwrap();
        fx.clock.advance(8);
        assert_eq!(fx.trigger().unwrap_err(), Error::from(ErrorCode::InsufficientAllowance));
        assert_eq!(fx.order.num_trades_left, 3);
    }
}
