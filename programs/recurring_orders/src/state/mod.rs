pub mod creator_index;
pub mod order;
pub mod scheduler;

pub use creator_index::*;
pub use order::*;
pub use scheduler::*;
