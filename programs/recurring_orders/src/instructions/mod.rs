pub mod config;
pub mod create_order;
pub mod initialize;
pub mod set_active;
pub mod sweep_vault;
pub mod trigger_trade;
pub mod update_order;
pub mod views;

// Glob imports are required for Anchor's #[program] macro.
// Handlers are called through their module path.
#[allow(ambiguous_glob_reexports)]
pub use config::*;
#[allow(ambiguous_glob_reexports)]
pub use create_order::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize::*;
#[allow(ambiguous_glob_reexports)]
pub use set_active::*;
#[allow(ambiguous_glob_reexports)]
pub use sweep_vault::*;
#[allow(ambiguous_glob_reexports)]
pub use trigger_trade::*;
#[allow(ambiguous_glob_reexports)]
pub use update_order::*;
#[allow(ambiguous_glob_reexports)]
pub use views::*;
