// Domain layer module
pub mod base;
pub mod entities;

pub use base::*;
pub use entities::*;
