use std::collections::VecDeque;
use tracing::{debug, error, info, instrument, warn};
use crate::clients::CouponClient;
use crate::domain::Coupon;
use super::chunk::{chunk_count, chunk_plan};
use super::collector::PreparedJob;
use super::error::ModifyError;
use super::options::UpdateRequest;
use super::progress::ProgressState;

/// What to do when saving a single coupon fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Stop the job at the failing coupon.
    #[default]
    Abort,
    /// Log the failure, count the coupon as processed and keep going.
    Skip,
}

/// Applies an [`UpdateRequest`] to a list of coupons, one chunk per step.
pub struct ChunkedUpdater {
    coupon_client: CouponClient,
    request: UpdateRequest,
    policy: FailurePolicy,
    chunks: VecDeque<Vec<Coupon>>,
    total: usize,
    steps_taken: usize,
}

impl ChunkedUpdater {
    pub fn new(coupon_client: CouponClient, job: PreparedJob, policy: FailurePolicy) -> Self {
        let PreparedJob { request, coupons } = job;
        let total = coupons.len();
        let chunks: VecDeque<Vec<Coupon>> = chunk_plan(&coupons, request.chunk_size()).into();
        Self {
            coupon_client,
            request,
            policy,
            chunks,
            total,
            steps_taken: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Fresh state for a run of this updater.
    pub fn start(&self) -> ProgressState {
        info!(
            promotion_id = %self.request.promotion_id(),
            total = self.total,
            chunks = chunk_count(self.total, self.request.chunk_size()),
            "Bulk modify planned"
        );
        ProgressState::new(self.total)
    }

    /// Processes the next chunk and reports whether the job is done.
    ///
    /// Each coupon gets both limits from the request and is saved; progress is
    /// recorded after every coupon. With [`FailurePolicy::Abort`] a failed save
    /// returns [`ModifyError::Persistence`] and leaves that coupon unprocessed.
    #[instrument(skip(self, state), fields(promotion_id = %self.request.promotion_id(), chunk = self.steps_taken + 1))]
    pub async fn step(&mut self, state: &mut ProgressState) -> Result<bool, ModifyError> {
        let Some(chunk) = self.chunks.pop_front() else {
            state.close_chunk();
            return Ok(true);
        };
        self.steps_taken += 1;
        debug!(size = chunk.len(), "Processing chunk");

        for mut coupon in chunk {
            self.request.apply(&mut coupon);
            let coupon_id = coupon.id.clone();
            let message = format!(
                "Updating coupon: {} - Promotion ID: {}",
                coupon.code,
                self.request.promotion_id()
            );

            if let Err(e) = self.coupon_client.save_coupon(coupon).await {
                match self.policy {
                    FailurePolicy::Abort => {
                        error!(coupon_id = %coupon_id, error = %e, "Coupon save failed, aborting");
                        state.close_chunk();
                        return Err(ModifyError::Persistence {
                            coupon_id,
                            reason: e.to_string(),
                        });
                    }
                    FailurePolicy::Skip => {
                        warn!(coupon_id = %coupon_id, error = %e, "Coupon save failed, skipping");
                        state.record_failure(&coupon_id);
                    }
                }
            }

            state.record(&coupon_id, message);
        }

        state.close_chunk();
        debug!(processed = state.processed(), fraction = state.fraction(), "Chunk complete");
        Ok(state.is_finished())
    }
}
