//! Bulk modification of coupon usage limits for one promotion.
//!
//! The flow is one way:
//!
//! 1. [`RequestCollector::submit`] validates the operator's [`ModifierOptions`],
//!    resolves them into an [`UpdateRequest`](options::UpdateRequest) and loads
//!    the promotion's coupons.
//! 2. [`ChunkedUpdater`] splits the coupons into chunks and updates one chunk
//!    per [`ChunkedUpdater::step`], recording progress in a
//!    [`ProgressState`](progress::ProgressState).
//! 3. [`BatchScheduler::run`] drives the steps to completion, forwards
//!    [`ProgressEvent`]s and produces the final
//!    [`JobOutcome`](scheduler::JobOutcome).

pub mod chunk;
pub mod collector;
pub mod error;
pub mod options;
pub mod progress;
pub mod scheduler;
pub mod summary;
pub mod updater;

pub use collector::RequestCollector;
pub use options::{ModifierOptions, DEFAULT_CHUNK_SIZE};
pub use progress::ProgressEvent;
pub use scheduler::BatchScheduler;
pub use updater::{ChunkedUpdater, FailurePolicy};
