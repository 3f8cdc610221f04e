//! Typed clients for the promotion and coupon stores.

#[macro_use]
mod macros;

pub mod coupon_client;
pub mod promotion_client;

pub use coupon_client::*;
pub use promotion_client::*;
