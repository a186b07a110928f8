mod interface;
mod minter;
mod v7;


pub use interface::*;
pub use minter::*;
pub use v7::*;
