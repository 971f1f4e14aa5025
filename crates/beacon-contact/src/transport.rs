//! Delivery of validated submissions.
//!
//! [`ContactTransport`] is the seam where a real network call belongs. The site
//! ships with [`SimulatedTransport`], which waits a fixed delay and always
//! succeeds.

use std::future::Future;
use std::time::Duration;

use crate::{ContactError, ContactSubmission};

/// Delay used by [`SimulatedTransport::default`].
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Sends a validated submission somewhere.
pub trait ContactTransport: Send + Sync {
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// Stand-in for a network call: sleeps for `delay`, then succeeds.
///
/// The wait is a cooperative `tokio` sleep, so the caller's runtime stays free
/// to do other work while it is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl ContactTransport for SimulatedTransport {
    async fn send(&self, _submission: &ContactSubmission) -> Result<(), ContactError> {
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            "simulating contact delivery"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_one_second() {
        assert_eq!(SimulatedTransport::default().delay(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_send_waits_then_succeeds() {
        let transport = SimulatedTransport::new(Duration::from_millis(250));
        let submission = ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };

        let start = tokio::time::Instant::now();
        transport.send(&submission).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
