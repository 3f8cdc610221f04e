use crate::actor_framework::Entity;
use crate::domain::{Coupon, CouponCreate};

impl Entity for Coupon {
    type Id = String;
    type CreateParams = CouponCreate;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Coupon from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the coupon
    /// * `params` - Owning promotion, code and initial limits
    fn from_create_params(id: String, params: CouponCreate) -> Result<Self, String> {
        if params.code.trim().is_empty() {
            return Err("Coupon code required".to_string());
        }
        if params.promotion_id.is_empty() {
            return Err("Coupon must belong to a promotion".to_string());
        }
        Ok(Self {
            id,
            promotion_id: params.promotion_id,
            code: params.code,
            usage_limit: params.usage_limit,
            customer_usage_limit: params.customer_usage_limit,
        })
    }

    /// Only the usage limits may change once a coupon exists.
    fn on_save(&self, previous: &Self) -> Result<(), String> {
        if self.code != previous.code {
            return Err(format!("Coupon code is immutable: {}", previous.code));
        }
        if self.promotion_id != previous.promotion_id {
            return Err(format!("Coupon {} cannot move to another promotion", self.id));
        }
        Ok(())
    }

    /// No custom actions are defined for coupons.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
