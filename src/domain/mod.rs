pub mod coupon;
pub mod promotion;

pub use coupon::*;
pub use promotion::*;
