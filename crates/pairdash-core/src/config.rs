use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Where the activity heatmap's link-out points
pub const PROFILE_URL: &str = "https://github.com/anthropics";

/// Backend configuration for both feeds. A `None` URL means that feed runs
/// permanently on fallback data; that is a supported steady state, not an
/// error.
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    pub stats_url: Option<String>,
    pub observations_url: Option<String>,
    pub poll_interval: Option<Duration>,
}

impl CoreConfig {
    /// Resolve from environment, with explicit values taking precedence.
    pub fn from_env(stats_url: Option<String>, observations_url: Option<String>) -> Self {
        Self {
            stats_url: stats_url.or_else(|| std::env::var("PAIRDASH_STATS_URL").ok()),
            observations_url: observations_url
                .or_else(|| std::env::var("PAIRDASH_OBSERVATIONS_URL").ok()),
            poll_interval: None,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL)
    }
}
