use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use super::error::ModifyError;
use super::progress::ProgressEvent;
use super::summary::finished_message;
use super::updater::ChunkedUpdater;

/// How a job ended.
#[derive(Debug, Clone, PartialEq)]
pub struct JobOutcome {
    pub success: bool,
    pub results: usize,
    /// Operator-facing summary, e.g. "60 coupons processed."
    pub message: String,
    /// Coupons whose save failed under the skip policy.
    pub failed_coupons: Vec<String>,
    /// Last coupon that was updated before the job stopped.
    pub last_processed: Option<String>,
    pub error: Option<ModifyError>,
    pub steps: usize,
}

/// Drives a [`ChunkedUpdater`] step by step until it is done.
///
/// Progress events go to the optional subscriber. Cancellation is checked
/// before every step, so a cancelled job stops between chunks.
#[derive(Default)]
pub struct BatchScheduler {
    progress: Option<mpsc::Sender<ProgressEvent>>,
}

impl BatchScheduler {
    pub fn with_progress(progress: mpsc::Sender<ProgressEvent>) -> Self {
        Self { progress: Some(progress) }
    }

    #[instrument(skip_all, fields(total = updater.total()))]
    pub async fn run(&self, mut updater: ChunkedUpdater, should_cancel: impl Fn() -> bool) -> JobOutcome {
        let mut state = updater.start();
        let mut steps = 0;
        let mut subscriber_open = self.progress.is_some();

        info!("Starting bulk modify job");

        let failure = loop {
            if should_cancel() {
                warn!(
                    processed = state.processed(),
                    last_message = state.message().unwrap_or("none"),
                    "Job cancelled"
                );
                break Some(ModifyError::Scheduler(format!(
                    "cancelled after {} of {} coupons",
                    state.processed(),
                    state.total()
                )));
            }

            let result = updater.step(&mut state).await;
            steps += 1;

            for event in state.drain_events() {
                debug!(coupon_id = %event.coupon_id, fraction = event.fraction, "{}", event.message);
                if subscriber_open {
                    subscriber_open = self.publish(event).await;
                }
            }

            match result {
                Ok(true) => break None,
                Ok(false) => info!(
                    step = steps,
                    processed = state.processed(),
                    fraction = state.fraction(),
                    remaining_chunks = updater.remaining_chunks(),
                    "Step complete"
                ),
                Err(e) => break Some(e),
            }
        };

        let success = failure.is_none();
        let message = finished_message(success, state.results(), state.failed().len());
        match &failure {
            None => info!(results = state.results(), steps, "{}", message),
            Some(e) => error!(error = %e, processed = state.processed(), "{}", message),
        }

        JobOutcome {
            success,
            results: state.results(),
            message,
            failed_coupons: state.failed().to_vec(),
            last_processed: state.last_processed().map(str::to_string),
            error: failure,
            steps,
        }
    }

    /// Returns false once the subscriber has gone away.
    async fn publish(&self, event: ProgressEvent) -> bool {
        let Some(progress) = &self.progress else {
            return false;
        };
        if progress.send(event).await.is_err() {
            warn!("Progress subscriber dropped, continuing without it");
            return false;
        }
        true
    }
}
