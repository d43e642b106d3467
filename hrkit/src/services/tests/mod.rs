//! Service-specific tests
//!
//! One file per service, each with its own fixtures.


// Common test utilities for services
#[cfg(test)]
pub mod common {
    use std::time::Duration;
    use tokio::time::timeout;

    use shared::{NewActivity, Participant, Winner};

    /// Standard timeout for async operations in tests
    pub const TEST_TIMEOUT: Duration = Duration::from_secs(2);

    /// Helper to run async operations with timeout
    pub async fn with_timeout<T, F>(future: F) -> Result<T, tokio::time::error::Elapsed>
    where
        F: std::future::Future<Output = T>,
    {
        timeout(TEST_TIMEOUT, future).await
    }

    /// Lucky-draw record for a batch of named winners
    pub fn draw_activity(prize: &str, names: &[&str]) -> NewActivity {
        let winners: Vec<Winner> = names
            .iter()
            .map(|name| Winner::new(Participant::new(*name), prize, chrono::Utc::now()))
            .collect();
        crate::core::draw::draw_activity(prize, &winners)
    }
}
