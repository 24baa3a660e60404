use std::time::Duration;

/// Send-path tuning: per-attempt timeout plus the retry budget and backoff
/// window used by [`send_with_retry`](crate::retry::send_with_retry).
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Total attempts, counting the first. Never less than 1.
    pub max_retries: u32,
    /// Backoff before the second attempt.
    pub base_delay: Duration,
    /// Ceiling for the computed backoff, before jitter.
    pub max_delay: Duration,
    /// How long one transport attempt may take.
    pub timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            timeout: Duration::from_secs(30),
        }
    }
}

impl DispatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay.max(Duration::from_millis(1));
        if self.max_delay < self.base_delay {
            self.max_delay = self.base_delay;
        }
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay.max(self.base_delay);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(Duration::from_millis(1));
        self
    }

    /// Backoff after failed attempt `attempt` (1-based): the base delay
    /// doubled per attempt, capped at `max_delay`, plus up to 10% additive
    /// jitter so simultaneous failures do not retry in lockstep.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = 2_u32
            .checked_pow(attempt.saturating_sub(1))
            .unwrap_or(u32::MAX);
        let base = self
            .base_delay
            .checked_mul(exp)
            .unwrap_or(self.max_delay)
            .min(self.max_delay);

        let jitter_ms = (base.as_millis() as f64 * 0.1 * rand::random::<f64>()) as u64;
        base + Duration::from_millis(jitter_ms)
    }
}
