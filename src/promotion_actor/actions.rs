/// Custom actions for Promotion entities.
#[derive(Debug, Clone)]
pub enum PromotionAction {
    /// Appends a coupon id to the promotion's ordered coupon list.
    ///
    /// # Errors
    /// Will fail if the coupon is already attached.
    AttachCoupon(String),
}

/// Results from PromotionActions - variants match 1:1 with PromotionAction
#[derive(Debug, Clone, PartialEq)]
pub enum PromotionActionResult {
    /// Number of coupons attached after the action
    AttachCoupon(usize),
}
