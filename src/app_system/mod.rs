//! System orchestration, startup, and shutdown logic.

pub mod catalog;
pub mod coupon_system;
pub mod tracing;

pub use catalog::*;
pub use coupon_system::*;
pub use self::tracing::setup_tracing;
