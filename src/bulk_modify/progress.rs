/// One processed coupon, as reported to whoever watches the job.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    pub coupon_id: String,
    pub processed: usize,
    pub total: usize,
    pub fraction: f64,
    pub message: String,
}

/// Mutable job state, owned by whichever step is currently running.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    total: usize,
    processed: usize,
    last_processed: Option<String>,
    results: usize,
    failed: Vec<String>,
    message: Option<String>,
    pending: Vec<ProgressEvent>,
}

impl ProgressState {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
            last_processed: None,
            results: 0,
            failed: Vec::new(),
            message: None,
            pending: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn last_processed(&self) -> Option<&str> {
        self.last_processed.as_deref()
    }

    pub fn results(&self) -> usize {
        self.results
    }

    /// Coupons that were counted as processed although their save failed.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// processed / total. An empty job is complete from the start.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }

    pub fn is_finished(&self) -> bool {
        self.processed >= self.total
    }

    pub(crate) fn record(&mut self, coupon_id: &str, message: String) {
        self.processed += 1;
        self.last_processed = Some(coupon_id.to_string());
        self.message = Some(message.clone());
        let event = ProgressEvent {
            coupon_id: coupon_id.to_string(),
            processed: self.processed,
            total: self.total,
            fraction: self.fraction(),
            message,
        };
        self.pending.push(event);
    }

    pub(crate) fn record_failure(&mut self, coupon_id: &str) {
        self.failed.push(coupon_id.to_string());
    }

    pub(crate) fn close_chunk(&mut self) {
        self.results = self.processed;
    }

    /// Takes the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<ProgressEvent> {
        std::mem::take(&mut self.pending)
    }
}
