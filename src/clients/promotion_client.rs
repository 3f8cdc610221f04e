use tracing::{debug, instrument};
use crate::domain::{Promotion, PromotionCreate};
use crate::promotion_actor::{PromotionAction, PromotionActionResult, PromotionError};
use crate::actor_framework::ResourceClient;

/// Client for the promotion store. The bulk modify job only reads through it.
#[derive(Clone)]
pub struct PromotionClient {
    inner: ResourceClient<Promotion>,
}

impl_basic_client!(PromotionClient, Promotion, PromotionError, promotion);

impl PromotionClient {
    #[instrument(skip(self))]
    pub async fn create_promotion(&self, name: String) -> Result<String, PromotionError> {
        debug!("Sending request");
        self.inner.create(PromotionCreate { name }).await.map_err(PromotionError::from)
    }

    /// Attaches a coupon and returns how many coupons the promotion now owns.
    #[instrument(skip(self))]
    pub async fn attach_coupon(&self, promotion_id: String, coupon_id: String) -> Result<usize, PromotionError> {
        debug!("Sending request");
        match self.inner.perform_action(promotion_id, PromotionAction::AttachCoupon(coupon_id)).await {
            Ok(PromotionActionResult::AttachCoupon(count)) => Ok(count),
            Err(e) => Err(PromotionError::from(e)),
        }
    }
}
