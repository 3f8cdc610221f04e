//! Coupon storage rules: creation checks and which fields a save may change.

pub mod entity;
pub mod error;

pub use error::*;
