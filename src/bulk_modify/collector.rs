use tracing::{info, instrument, warn};
use crate::clients::{CouponClient, PromotionClient};
use crate::domain::Coupon;
use super::error::ModifyError;
use super::options::{ModifierOptions, UpdateRequest};

/// Everything the updater needs: the resolved request and the promotion's
/// coupons in promotion order.
#[derive(Debug, Clone)]
pub struct PreparedJob {
    pub request: UpdateRequest,
    pub coupons: Vec<Coupon>,
}

/// Turns operator input into a [`PreparedJob`].
pub struct RequestCollector {
    promotion_client: PromotionClient,
    coupon_client: CouponClient,
}

impl RequestCollector {
    pub fn new(promotion_client: PromotionClient, coupon_client: CouponClient) -> Self {
        Self { promotion_client, coupon_client }
    }

    /// The promotions an operator can pick from, as `(id, name)` in creation order.
    #[instrument(skip(self))]
    pub async fn promotion_options(&self) -> Result<Vec<(String, String)>, ModifyError> {
        let promotions = self
            .promotion_client
            .list_promotions()
            .await
            .map_err(|e| ModifyError::Lookup(e.to_string()))?;
        Ok(promotions.into_iter().map(|p| (p.id, p.name)).collect())
    }

    /// Validates the submission and loads the coupons of the selected promotion.
    #[instrument(skip(self, options), fields(promotion_id = ?options.promotion_id))]
    pub async fn submit(&self, options: &ModifierOptions) -> Result<PreparedJob, ModifyError> {
        let request = options.resolve().inspect_err(|e| warn!(error = %e, "Submission rejected"))?;

        let promotion = self
            .promotion_client
            .get_promotion(request.promotion_id().to_string())
            .await
            .map_err(|e| ModifyError::Lookup(e.to_string()))?
            .ok_or_else(|| ModifyError::Validation(format!(
                "Unknown promotion: {}", request.promotion_id()
            )))?;

        let coupons = self
            .coupon_client
            .load_coupons(&promotion.coupon_ids)
            .await
            .map_err(|e| ModifyError::Lookup(e.to_string()))?;

        info!(
            promotion_name = %promotion.name,
            coupons = coupons.len(),
            usage_limit = request.usage_limit(),
            customer_usage_limit = request.customer_usage_limit(),
            chunk_size = request.chunk_size().get(),
            "Submission accepted"
        );

        Ok(PreparedJob { request, coupons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Promotion;
    use crate::mock_framework::{create_mock_client, expect_get, expect_list};

    fn collector() -> (
        RequestCollector,
        tokio::sync::mpsc::Receiver<crate::actor_framework::ResourceRequest<Promotion>>,
        tokio::sync::mpsc::Receiver<crate::actor_framework::ResourceRequest<Coupon>>,
    ) {
        let (promotion_inner, promotion_rx) = create_mock_client::<Promotion>(10);
        let (coupon_inner, coupon_rx) = create_mock_client::<Coupon>(10);
        let collector = RequestCollector::new(
            PromotionClient::new(promotion_inner),
            CouponClient::new(coupon_inner),
        );
        (collector, promotion_rx, coupon_rx)
    }

    #[tokio::test]
    async fn test_promotion_options() {
        let (collector, mut promotion_rx, _coupon_rx) = collector();

        let task = tokio::spawn(async move { collector.promotion_options().await });

        let responder = expect_list(&mut promotion_rx).await.expect("Expected List");
        responder
            .send(Ok(vec![
                Promotion::new("promotion_1", "Spring sale"),
                Promotion::new("promotion_2", "Loyalty"),
            ]))
            .unwrap();

        let options = task.await.unwrap().unwrap();
        assert_eq!(
            options,
            vec![
                ("promotion_1".to_string(), "Spring sale".to_string()),
                ("promotion_2".to_string(), "Loyalty".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_loads_coupons_in_promotion_order() {
        let (collector, mut promotion_rx, mut coupon_rx) = collector();

        let task = tokio::spawn(async move {
            let options = ModifierOptions {
                promotion_id: Some("promotion_1".to_string()),
                limit: 1,
                usage_limit: 5,
                ..ModifierOptions::default()
            };
            collector.submit(&options).await
        });

        let (id, responder) = expect_get(&mut promotion_rx).await.expect("Expected Promotion Get");
        assert_eq!(id, "promotion_1");
        let mut promotion = Promotion::new("promotion_1", "Spring sale");
        promotion.coupon_ids = vec!["coupon_2".to_string(), "coupon_1".to_string()];
        responder.send(Ok(Some(promotion))).unwrap();

        for expected in ["coupon_2", "coupon_1"] {
            let (id, responder) = expect_get(&mut coupon_rx).await.expect("Expected Coupon Get");
            assert_eq!(id, expected);
            responder.send(Ok(Some(Coupon::new(id.clone(), "promotion_1", id)))).unwrap();
        }

        let job = task.await.unwrap().unwrap();
        assert_eq!(job.request.usage_limit(), 5);
        let ids: Vec<&str> = job.coupons.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["coupon_2", "coupon_1"]);
    }

    #[tokio::test]
    async fn test_submit_unknown_promotion() {
        let (collector, mut promotion_rx, _coupon_rx) = collector();

        let task = tokio::spawn(async move {
            let options = ModifierOptions {
                promotion_id: Some("promotion_404".to_string()),
                ..ModifierOptions::default()
            };
            collector.submit(&options).await
        });

        let (_, responder) = expect_get(&mut promotion_rx).await.expect("Expected Promotion Get");
        responder.send(Ok(None)).unwrap();

        assert!(matches!(task.await.unwrap(), Err(ModifyError::Validation(_))));
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_input_without_lookup() {
        let (collector, mut promotion_rx, _coupon_rx) = collector();

        let options = ModifierOptions { promotion_id: None, ..ModifierOptions::default() };
        let result = collector.submit(&options).await;
        assert!(matches!(result, Err(ModifyError::Validation(_))));

        drop(collector);
        assert!(promotion_rx.recv().await.is_none());
    }
}
