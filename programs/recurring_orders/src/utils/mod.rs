pub mod access;
pub mod pda;
pub mod validation;

pub use access::*;
pub use pda::*;
pub use validation::*;
