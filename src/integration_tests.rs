#[cfg(test)]
mod tests {
    use crate::app_system::{Catalog, CatalogCoupon, CatalogPromotion, CouponSystem};
    use crate::bulk_modify::error::ModifyError;
    use crate::bulk_modify::{BatchScheduler, ChunkedUpdater, FailurePolicy, ModifierOptions, RequestCollector};
    use crate::domain::Coupon;
    use tokio::sync::mpsc;

    fn catalog(sizes: &[usize]) -> Catalog {
        Catalog {
            promotions: sizes
                .iter()
                .enumerate()
                .map(|(p, &n)| CatalogPromotion {
                    name: format!("Promotion {}", p + 1),
                    coupons: (1..=n)
                        .map(|c| CatalogCoupon {
                            code: format!("P{}-{:03}", p + 1, c),
                            usage_limit: 9,
                            customer_usage_limit: 9,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    async fn coupons_of(system: &CouponSystem, promotion_id: &str) -> Vec<Coupon> {
        system
            .coupon_client
            .list_coupons()
            .await
            .unwrap()
            .into_iter()
            .filter(|c| c.promotion_id == promotion_id)
            .collect()
    }

    #[tokio::test]
    async fn test_limited_update_flow() {
        // 1. Seed two promotions so the untouched one can be checked too
        let system = CouponSystem::new();
        let ids = catalog(&[60, 3])
            .seed(&system.promotion_client, &system.coupon_client)
            .await
            .unwrap();

        // 2. Collect the submission
        let collector = RequestCollector::new(system.promotion_client.clone(), system.coupon_client.clone());
        let options = ModifierOptions {
            promotion_id: Some(ids[0].clone()),
            limit: 1,
            usage_limit: 5,
            limit_customer: 1,
            usage_limit_customer: 2,
            ..ModifierOptions::default()
        };
        let job = collector.submit(&options).await.unwrap();
        assert_eq!(job.coupons.len(), 60);

        // 3. Run the job with a progress subscriber
        let (tx, mut rx) = mpsc::channel(100);
        let updater = ChunkedUpdater::new(system.coupon_client.clone(), job, FailurePolicy::Abort);
        let outcome = BatchScheduler::with_progress(tx).run(updater, || false).await;

        assert!(outcome.success);
        assert_eq!(outcome.steps, 3);
        assert_eq!(outcome.message, "60 coupons processed.");

        let mut messages = Vec::new();
        while let Some(event) = rx.recv().await {
            messages.push(event.message);
        }
        assert_eq!(messages.len(), 60);
        assert_eq!(messages[0], "Updating coupon: P1-001 - Promotion ID: promotion_1");
        assert_eq!(messages[59], "Updating coupon: P1-060 - Promotion ID: promotion_1");

        // 4. Verify stored coupons
        let updated = coupons_of(&system, &ids[0]).await;
        assert_eq!(updated.len(), 60);
        assert!(updated.iter().all(|c| c.usage_limit == 5 && c.customer_usage_limit == 2));

        let untouched = coupons_of(&system, &ids[1]).await;
        assert!(untouched.iter().all(|c| c.usage_limit == 9 && c.customer_usage_limit == 9));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unlimited_update_flow() {
        let system = CouponSystem::new();
        let ids = catalog(&[7])
            .seed(&system.promotion_client, &system.coupon_client)
            .await
            .unwrap();

        let collector = RequestCollector::new(system.promotion_client.clone(), system.coupon_client.clone());
        let options = ModifierOptions {
            promotion_id: Some(ids[0].clone()),
            modify_limit: 3,
            ..ModifierOptions::default()
        };
        let job = collector.submit(&options).await.unwrap();
        let updater = ChunkedUpdater::new(system.coupon_client.clone(), job, FailurePolicy::Abort);
        let outcome = BatchScheduler::default().run(updater, || false).await;

        assert_eq!(outcome.steps, 3);
        assert_eq!(outcome.message, "7 coupons processed.");
        let updated = coupons_of(&system, &ids[0]).await;
        assert!(updated.iter().all(|c| c.usage_limit == 0 && c.customer_usage_limit == 0));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_promotion_flow() {
        let system = CouponSystem::new();
        let ids = catalog(&[0])
            .seed(&system.promotion_client, &system.coupon_client)
            .await
            .unwrap();

        let collector = RequestCollector::new(system.promotion_client.clone(), system.coupon_client.clone());
        let options = ModifierOptions { promotion_id: Some(ids[0].clone()), ..ModifierOptions::default() };
        let job = collector.submit(&options).await.unwrap();
        let updater = ChunkedUpdater::new(system.coupon_client.clone(), job, FailurePolicy::Abort);
        let outcome = BatchScheduler::default().run(updater, || false).await;

        assert!(outcome.success);
        assert_eq!(outcome.results, 0);
        assert_eq!(outcome.message, "0 coupons processed.");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_submission_never_starts() {
        let system = CouponSystem::new();
        Catalog::demo()
            .seed(&system.promotion_client, &system.coupon_client)
            .await
            .unwrap();

        let collector = RequestCollector::new(system.promotion_client.clone(), system.coupon_client.clone());
        let missing = ModifierOptions { promotion_id: Some("promotion_99".to_string()), ..ModifierOptions::default() };
        assert!(matches!(collector.submit(&missing).await, Err(ModifyError::Validation(_))));

        let non_positive = ModifierOptions {
            promotion_id: Some("promotion_1".to_string()),
            limit: 1,
            usage_limit: 0,
            ..ModifierOptions::default()
        };
        assert!(matches!(collector.submit(&non_positive).await, Err(ModifyError::Validation(_))));

        let untouched = coupons_of(&system, "promotion_1").await;
        assert!(untouched.iter().all(|c| c.usage_limit == 0));

        let options = collector.promotion_options().await.unwrap();
        assert_eq!(options[0], ("promotion_1".to_string(), "Spring sale".to_string()));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_promotion_options_in_creation_order() {
        let system = CouponSystem::new();
        let ids = catalog(&[1; 11])
            .seed(&system.promotion_client, &system.coupon_client)
            .await
            .unwrap();

        let collector = RequestCollector::new(system.promotion_client.clone(), system.coupon_client.clone());
        let options = collector.promotion_options().await.unwrap();

        let listed: Vec<String> = options.iter().map(|(id, _)| id.clone()).collect();
        let expected: Vec<String> = (1..=11).map(|i| format!("promotion_{}", i)).collect();
        assert_eq!(listed, expected);
        assert_eq!(listed, ids);
        assert_eq!(options[10].1, "Promotion 11");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_skip_policy_flow_reports_not_saved() {
        let system = CouponSystem::new();
        let ids = catalog(&[5])
            .seed(&system.promotion_client, &system.coupon_client)
            .await
            .unwrap();

        let collector = RequestCollector::new(system.promotion_client.clone(), system.coupon_client.clone());
        let options = ModifierOptions { promotion_id: Some(ids[0].clone()), modify_limit: 2, ..ModifierOptions::default() };
        let mut job = collector.submit(&options).await.unwrap();
        // A changed code is rejected by the store on save.
        job.coupons[2].code = "RENAMED".to_string();
        let broken_id = job.coupons[2].id.clone();

        let updater = ChunkedUpdater::new(system.coupon_client.clone(), job, FailurePolicy::Skip);
        let outcome = BatchScheduler::default().run(updater, || false).await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "5 coupons processed, 1 not saved.");
        assert_eq!(outcome.failed_coupons, vec![broken_id]);

        system.shutdown().await.unwrap();
    }
}
