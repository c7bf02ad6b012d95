use crate::backend::StatsBackend;
use crate::fallback;
use crate::models::StatsSnapshot;

/// Holds the single current stats snapshot, preferring the live backend and
/// degrading to the embedded fallback.
///
/// Starts on the fallback snapshot. Every refresh either replaces the
/// snapshot wholesale (and marks the feed live) or leaves it untouched, so a
/// later live value always overrides an earlier one and the fallback never
/// reappears once live data has been adopted.
pub struct StatsFeed<B> {
    backend: Option<B>,
    snapshot: StatsSnapshot,
    live: bool,
}

impl<B: StatsBackend> StatsFeed<B> {
    pub fn new(backend: Option<B>) -> Self {
        Self {
            backend,
            snapshot: fallback::stats_snapshot(),
            live: false,
        }
    }

    /// One fetch-and-replace pass. Failures of any shape are logged and
    /// swallowed; an unreachable backend is a steady state, not an error.
    pub async fn refresh(&mut self) {
        let Some(backend) = &self.backend else {
            return;
        };
        match backend.fetch().await {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.live = true;
            }
            Err(err) => {
                tracing::warn!("stats fetch failed, keeping current snapshot: {err}");
            }
        }
    }

    pub fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    pub fn is_live(&self) -> bool {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted backend: pops one result per fetch, fails once exhausted
    struct ScriptedBackend {
        results: RefCell<VecDeque<Result<StatsSnapshot, BackendError>>>,
    }

    impl ScriptedBackend {
        fn new(results: Vec<Result<StatsSnapshot, BackendError>>) -> Self {
            Self {
                results: RefCell::new(results.into()),
            }
        }
    }

    impl StatsBackend for ScriptedBackend {
        async fn fetch(&self) -> Result<StatsSnapshot, BackendError> {
            self.results
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(BackendError::Status(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                )))
        }
    }

    fn live_snapshot(commits: u64) -> StatsSnapshot {
        StatsSnapshot {
            commits,
            ..fallback::stats_snapshot()
        }
    }

    #[tokio::test]
    async fn test_backend_that_never_answers_leaves_fallback() {
        let mut feed = StatsFeed::new(Some(ScriptedBackend::new(vec![])));
        for _ in 0..5 {
            feed.refresh().await;
        }
        assert_eq!(feed.snapshot(), &fallback::stats_snapshot());
        assert!(!feed.is_live());
    }

    #[tokio::test]
    async fn test_no_backend_configured_stays_on_fallback() {
        let mut feed: StatsFeed<ScriptedBackend> = StatsFeed::new(None);
        feed.refresh().await;
        assert_eq!(feed.snapshot(), &fallback::stats_snapshot());
        assert!(!feed.is_live());
    }

    #[tokio::test]
    async fn test_success_replaces_snapshot_and_goes_live() {
        let mut feed = StatsFeed::new(Some(ScriptedBackend::new(vec![Ok(live_snapshot(500))])));
        feed.refresh().await;
        assert_eq!(feed.snapshot().commits, 500);
        assert!(feed.is_live());
    }

    #[tokio::test]
    async fn test_later_success_overrides_earlier_one() {
        let mut feed = StatsFeed::new(Some(ScriptedBackend::new(vec![
            Ok(live_snapshot(500)),
            Ok(live_snapshot(512)),
        ])));
        feed.refresh().await;
        feed.refresh().await;
        assert_eq!(feed.snapshot().commits, 512);
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_last_live_snapshot() {
        let mut feed = StatsFeed::new(Some(ScriptedBackend::new(vec![Ok(live_snapshot(500))])));
        feed.refresh().await;
        feed.refresh().await; // script exhausted: this one fails
        assert_eq!(feed.snapshot().commits, 500);
        assert!(feed.is_live());
    }
}
