/// A redeemable code tied to a promotion, with usage caps.
///
/// Both limits use 0 for "unlimited".
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub id: String,
    pub promotion_id: String,
    pub code: String,
    pub usage_limit: u32,
    pub customer_usage_limit: u32,
}

/// Payload for creating a new coupon.
#[derive(Debug, Clone)]
pub struct CouponCreate {
    pub promotion_id: String,
    pub code: String,
    pub usage_limit: u32,
    pub customer_usage_limit: u32,
}

impl Coupon {
    /// Creates an unlimited coupon. The store assigns the real id on creation.
    pub fn new(id: impl Into<String>, promotion_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            promotion_id: promotion_id.into(),
            code: code.into(),
            usage_limit: 0,
            customer_usage_limit: 0,
        }
    }

    pub fn set_usage_limit(&mut self, limit: u32) {
        self.usage_limit = limit;
    }

    pub fn set_customer_usage_limit(&mut self, limit: u32) {
        self.customer_usage_limit = limit;
    }
}
