use tracing::{error, info, instrument, warn};
use crate::clients::{CouponClient, PromotionClient};
use crate::actor_framework::ResourceActor;
use crate::domain::{Coupon, Promotion};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Owns the promotion and coupon store actors.
///
/// Responsible for starting them, handing out clients, and shutting them down.
pub struct CouponSystem {
    pub promotion_client: PromotionClient,
    pub coupon_client: CouponClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn id_sequence(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

impl CouponSystem {
    #[instrument(name = "coupon_system")]
    pub fn new() -> Self {
        info!("Starting coupon system");

        let (promotion_actor, promotion_resource_client) =
            ResourceActor::<Promotion>::new(32, id_sequence("promotion"));
        let promotion_handle = tokio::spawn(promotion_actor.run());

        let (coupon_actor, coupon_resource_client) =
            ResourceActor::<Coupon>::new(32, id_sequence("coupon"));
        let coupon_handle = tokio::spawn(coupon_actor.run());

        Self {
            promotion_client: PromotionClient::new(promotion_resource_client),
            coupon_client: CouponClient::new(coupon_resource_client),
            handles: vec![promotion_handle, coupon_handle],
        }
    }

    /// Stops both store actors and waits for them to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down coupon system");

        if let Err(e) = self.promotion_client.shutdown().await {
            warn!(error = %e, "Promotion store already stopped");
        }
        if let Err(e) = self.coupon_client.shutdown().await {
            warn!(error = %e, "Coupon store already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Store actor failed");
                return Err(format!("Store actor failed: {:?}", e));
            }
        }

        info!("Coupon system shutdown complete");
        Ok(())
    }
}

impl Default for CouponSystem {
    fn default() -> Self {
        Self::new()
    }
}
