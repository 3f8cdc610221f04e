use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during coupon store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CouponError {
    #[error("Coupon not found: {0}")]
    NotFound(String),
    #[error("Coupon rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CouponError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => CouponError::NotFound(id),
            FrameworkError::Rejected(reason) => CouponError::Rejected(reason),
            other => CouponError::ActorCommunicationError(other.to_string()),
        }
    }
}
