use crate::actor_framework::Entity;
use crate::domain::{Promotion, PromotionCreate};
use super::actions::{PromotionAction, PromotionActionResult};

impl Entity for Promotion {
    type Id = String;
    type CreateParams = PromotionCreate;
    type Action = PromotionAction;
    type ActionResult = PromotionActionResult;

    fn id(&self) -> &String { &self.id }

    /// Creates an empty promotion. Coupons are attached afterwards.
    fn from_create_params(id: String, params: PromotionCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Promotion name required".to_string());
        }
        Ok(Self::new(id, params.name))
    }

    /// Handles promotion-specific actions.
    ///
    /// # Errors
    /// Returns an error when attaching a coupon that is already attached.
    fn handle_action(&mut self, action: PromotionAction) -> Result<PromotionActionResult, String> {
        match action {
            PromotionAction::AttachCoupon(coupon_id) => {
                if self.coupon_ids.contains(&coupon_id) {
                    return Err(format!("Coupon {} already attached to {}", coupon_id, self.id));
                }
                self.coupon_ids.push(coupon_id);
                Ok(PromotionActionResult::AttachCoupon(self.coupon_ids.len()))
            }
        }
    }
}
