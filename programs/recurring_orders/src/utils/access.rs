use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::state::{Order, Scheduler};

pub fn is_owner(order: &Order, caller: &Pubkey) -> bool {
    order.creator == *caller
}

/// Gate for update, deactivate and reactivate
pub fn require_owner(order: &Order, caller: &Pubkey) -> Result<()> {
    require!(is_owner(order, caller), ErrorCode::Unauthorized);
    Ok(())
}

pub fn is_admin(scheduler: &Scheduler, caller: &Pubkey) -> bool {
    scheduler.admin == *caller
}

/// With no keeper configured anyone may trigger.
pub fn is_allowed_keeper(scheduler: &Scheduler, caller: &Pubkey) -> bool {
    scheduler.keeper.map_or(true, |keeper| keeper == *caller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn owner_check_matches_creator_only() {
        let creator = Pubkey::new_unique();
        let order = Order {
            creator,
            ..Order::default()
        };
        assert!(require_owner(&order, &creator).is_ok());
        assert_eq!(
            require_owner(&order, &Pubkey::new_unique()).unwrap_err(),
            Error::from(ErrorCode::Unauthorized)
        );
    }

    #[test]
    fn keeper_policy() {
        let mut scheduler = Scheduler::default();
        let anyone = Pubkey::new_unique();
        assert!(is_allowed_keeper(&scheduler, &anyone));

        let keeper = Pubkey::new_unique();
        scheduler.keeper = Some(keeper);
        assert!(is_allowed_keeper(&scheduler, &keeper));
        assert!(!is_allowed_keeper(&scheduler, &anyone));
    }
}
