use tracing::{debug, instrument, warn};
use crate::domain::{Coupon, CouponCreate};
use crate::coupon_actor::CouponError;
use crate::actor_framework::ResourceClient;

/// Client for the coupon store. This is the persistence collaborator of the
/// bulk modify job: it loads coupons and saves them back after mutation.
#[derive(Clone)]
pub struct CouponClient {
    inner: ResourceClient<Coupon>,
}

impl_basic_client!(CouponClient, Coupon, CouponError, coupon);

impl CouponClient {
    #[instrument(skip(self, params), fields(code = %params.code))]
    pub async fn create_coupon(&self, params: CouponCreate) -> Result<String, CouponError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CouponError::from)
    }

    #[instrument(skip(self, coupon), fields(coupon_id = %coupon.id))]
    pub async fn save_coupon(&self, coupon: Coupon) -> Result<(), CouponError> {
        debug!("Sending request");
        self.inner.save(coupon).await.map_err(CouponError::from)
    }

    /// Loads coupons in the order of `ids`. Ids that no longer resolve are skipped.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn load_coupons(&self, ids: &[String]) -> Result<Vec<Coupon>, CouponError> {
        let mut coupons = Vec::with_capacity(ids.len());
        for id in ids {
            match self.inner.get(id.clone()).await.map_err(CouponError::from)? {
                Some(coupon) => coupons.push(coupon),
                None => warn!(coupon_id = %id, "Referenced coupon not found, skipping"),
            }
        }
        Ok(coupons)
    }
}
