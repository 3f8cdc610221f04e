use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PromotionError {
    #[error("Promotion not found: {0}")]
    NotFound(String),
    #[error("Promotion rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PromotionError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => PromotionError::NotFound(id),
            FrameworkError::Rejected(reason) => PromotionError::Rejected(reason),
            other => PromotionError::ActorCommunicationError(other.to_string()),
        }
    }
}
