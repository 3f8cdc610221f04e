/// A discount campaign that owns an ordered set of coupons.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub id: String,
    pub name: String,
    /// Coupon ids in the order they were attached.
    pub coupon_ids: Vec<String>,
}

/// Payload for creating a new promotion.
#[derive(Debug, Clone)]
pub struct PromotionCreate {
    pub name: String,
}

impl Promotion {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coupon_ids: Vec::new(),
        }
    }
}
