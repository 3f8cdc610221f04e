//! Promotion storage, including the action that attaches coupons in order.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
