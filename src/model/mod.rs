//! Pure data structures: cart state, checkout phase, catalog products and order wire types.

pub mod cart;
pub mod checkout;
pub mod order;
pub mod product;

pub use cart::*;
pub use checkout::*;
pub use order::*;
pub use product::*;
