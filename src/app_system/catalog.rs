//! Seed data for the in-memory stores.
//!
//! A catalog file is JSON:
//! ```json
//! { "promotions": [ { "name": "Spring sale", "coupons": [ { "code": "SPRING-001" } ] } ] }
//! ```

use std::path::Path;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};
use crate::clients::{CouponClient, PromotionClient};
use crate::coupon_actor::CouponError;
use crate::domain::CouponCreate;
use crate::promotion_actor::PromotionError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Promotion(#[from] PromotionError),
    #[error(transparent)]
    Coupon(#[from] CouponError),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Catalog {
    pub promotions: Vec<CatalogPromotion>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogPromotion {
    pub name: String,
    #[serde(default)]
    pub coupons: Vec<CatalogCoupon>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogCoupon {
    pub code: String,
    #[serde(default)]
    pub usage_limit: u32,
    #[serde(default)]
    pub customer_usage_limit: u32,
}

impl Catalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// A spring sale with 60 unlimited coupons and a small loyalty promotion.
    pub fn demo() -> Self {
        let spring = (1..=60)
            .map(|n| CatalogCoupon {
                code: format!("SPRING-{:03}", n),
                usage_limit: 0,
                customer_usage_limit: 0,
            })
            .collect();
        let loyalty = ["LOYAL-A", "LOYAL-B", "LOYAL-C"]
            .into_iter()
            .map(|code| CatalogCoupon {
                code: code.to_string(),
                usage_limit: 10,
                customer_usage_limit: 1,
            })
            .collect();

        Self {
            promotions: vec![
                CatalogPromotion { name: "Spring sale".to_string(), coupons: spring },
                CatalogPromotion { name: "Loyalty".to_string(), coupons: loyalty },
            ],
        }
    }

    /// Creates every promotion and its coupons, attaching coupons in file order.
    /// Returns the new promotion ids in catalog order.
    #[instrument(skip_all, fields(promotions = self.promotions.len()))]
    pub async fn seed(
        &self,
        promotion_client: &PromotionClient,
        coupon_client: &CouponClient,
    ) -> Result<Vec<String>, CatalogError> {
        let mut promotion_ids = Vec::with_capacity(self.promotions.len());

        for promotion in &self.promotions {
            let promotion_id = promotion_client.create_promotion(promotion.name.clone()).await?;

            for coupon in &promotion.coupons {
                let coupon_id = coupon_client
                    .create_coupon(CouponCreate {
                        promotion_id: promotion_id.clone(),
                        code: coupon.code.clone(),
                        usage_limit: coupon.usage_limit,
                        customer_usage_limit: coupon.customer_usage_limit,
                    })
                    .await?;
                promotion_client.attach_coupon(promotion_id.clone(), coupon_id).await?;
            }

            info!(promotion_id = %promotion_id, coupons = promotion.coupons.len(), "Promotion seeded");
            promotion_ids.push(promotion_id);
        }

        Ok(promotion_ids)
    }
}
