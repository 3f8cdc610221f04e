//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_save`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Tests that only care about how a caller talks to a store (for example the
/// chunked updater saving coupons) do not need a running `ResourceActor`.
/// The mock client sends its messages to a channel the test controls, so the
/// test can inspect each request and answer it with success or a failure of
/// its choosing.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Answers every Save request until the client side hangs up.
///
/// `verdict` decides the reply for each saved item; every item seen is
/// returned in arrival order.
pub fn serve_saves<T: Entity>(
    mut receiver: mpsc::Receiver<ResourceRequest<T>>,
    verdict: impl Fn(&T) -> Result<(), FrameworkError> + Send + 'static,
) -> tokio::task::JoinHandle<Vec<T>> {
    tokio::spawn(async move {
        let mut saved = Vec::new();
        while let Some((item, respond_to)) = expect_save(&mut receiver).await {
            let _ = respond_to.send(verdict(&item));
            saved.push(item);
        }
        saved
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coupon;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Coupon>(10);

        let save_task = tokio::spawn(async move {
            let coupon = Coupon::new("coupon_1", "promotion_1", "SAVE10");
            client.save(coupon).await
        });

        let (item, responder) = expect_save(&mut receiver).await.expect("Expected Save request");
        assert_eq!(item.code, "SAVE10");
        responder.send(Err(FrameworkError::Rejected("disk full".to_string()))).unwrap();

        let result = save_task.await.unwrap();
        assert_eq!(result, Err(FrameworkError::Rejected("disk full".to_string())));
    }
}
