//! Task timing

use std::time::{Duration, Instant};
use tracing::info;

/// Logs how long a task took when dropped
///
/// ```
/// use advent2024::core::Profile;
///
/// let _profile = Profile::start("parse");
/// // ... work ...
/// ```
#[must_use = "the task is timed until the guard is dropped"]
pub struct Profile {
    name: &'static str,
    start: Instant,
}

impl Profile {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Profile {
    fn drop(&mut self) {
        info!(
            "Process [{}] took {:.5} seconds",
            self.name,
            self.elapsed().as_secs_f64()
        );
    }
}
