use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModifyError {
    /// Bad or missing operator input. The job never starts.
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Failed to save coupon {coupon_id}: {reason}")]
    Persistence { coupon_id: String, reason: String },
    /// A promotion or coupon store could not be reached.
    #[error("Lookup failed: {0}")]
    Lookup(String),
    #[error("Scheduler error: {0}")]
    Scheduler(String),
}
