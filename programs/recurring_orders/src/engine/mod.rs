//! Ledger-independent scheduler logic.
//!
//! Handlers in `instructions` bind these functions to accounts, the `Clock`
//! sysvar and the token program. Tests drive them with `FixedHeight` and
//! `MemoryLedger` instead.

pub mod clock;
pub mod ledger;
pub mod lifecycle;
pub mod registry;
pub mod trigger;

pub use clock::*;
pub use ledger::*;
