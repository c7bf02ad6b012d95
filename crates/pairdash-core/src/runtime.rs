use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::backend::{HttpObservationBackend, HttpStatsBackend};
use crate::config::CoreConfig;
use crate::events::ObservationEvent;
use crate::feed::{ObservationFeed, ObservationSubscription, StatsFeed};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Owns both feeds and the push-subscription task.
///
/// `start` performs the initial fetches, so the caller gets a runtime that
/// is already in its steady state: live where a backend answered, fallback
/// everywhere else. The subscription is spawned only when the initial
/// observations fetch actually reached the backend.
pub struct FeedRuntime {
    stats: StatsFeed<HttpStatsBackend>,
    observations: ObservationFeed<HttpObservationBackend>,
    poll_interval: Duration,
    event_rx: Option<mpsc::Receiver<ObservationEvent>>,
    subscription_handle: Option<JoinHandle<()>>,
}

impl FeedRuntime {
    pub async fn start(config: CoreConfig) -> Self {
        // Connect timeout only: a whole-request timeout would also cut the
        // long-lived subscription stream
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();

        let stats_backend = config
            .stats_url
            .clone()
            .map(|url| HttpStatsBackend::new(client.clone(), url));
        let observation_backend = config
            .observations_url
            .clone()
            .map(|url| HttpObservationBackend::new(client.clone(), url));

        let mut stats = StatsFeed::new(stats_backend);
        stats.refresh().await;

        let mut observations = ObservationFeed::new(observation_backend.clone());
        let backend_reached = observations.load().await;

        let mut event_rx = None;
        let mut subscription_handle = None;
        if backend_reached {
            if let Some(backend) = &observation_backend {
                let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
                let subscription = ObservationSubscription::new(backend);
                subscription_handle = Some(tokio::spawn(subscription.run(tx)));
                event_rx = Some(rx);
            }
        }

        Self {
            stats,
            observations,
            poll_interval: config.poll_interval(),
            event_rx,
            subscription_handle,
        }
    }

    pub fn stats(&self) -> &StatsFeed<HttpStatsBackend> {
        &self.stats
    }

    pub async fn refresh_stats(&mut self) {
        self.stats.refresh().await;
    }

    pub fn observations(&self) -> &ObservationFeed<HttpObservationBackend> {
        &self.observations
    }

    pub fn apply_observation_event(&mut self, event: ObservationEvent) {
        self.observations.apply(event);
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// The UI loop takes the receiving end once; `None` when no subscription
    /// was established or it was already taken.
    pub fn take_event_rx(&mut self) -> Option<mpsc::Receiver<ObservationEvent>> {
        self.event_rx.take()
    }

    /// Stop the subscription task. After this no further events are
    /// delivered and the event channel closes.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.subscription_handle.take() {
            handle.abort();
        }
    }
}

impl Drop for FeedRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Minimal HTTP fixture for the observations backend: answers the
    /// collection GET with a JSON body and the subscribe GET with one NDJSON
    /// event, then holds the stream open until the test ends.
    async fn serve_observations(listener: TcpListener, list_body: String, event_line: String) {
        let mut held_open: Vec<TcpStream> = Vec::new();
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            let mut byte = [0u8; 1];
            while !request.ends_with(b"\r\n\r\n") {
                match socket.read(&mut byte).await {
                    Ok(1) => request.push(byte[0]),
                    _ => break,
                }
            }
            let head = String::from_utf8_lossy(&request);
            if head.starts_with("GET /observations/subscribe") {
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/x-ndjson\r\n\r\n{}\n",
                    event_line
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.flush().await;
                // Body is connection-delimited; keep it open so the stream
                // stays live until the runtime shuts down
                held_open.push(socket);
            } else {
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{}",
                    list_body.len(),
                    list_body
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        }
    }

    fn local_config(base_url: String) -> CoreConfig {
        CoreConfig {
            stats_url: None,
            observations_url: Some(base_url),
            poll_interval: Some(Duration::from_secs(30)),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_backends_mean_fallback_and_no_subscription() {
        let mut runtime = FeedRuntime::start(CoreConfig {
            stats_url: None,
            observations_url: None,
            poll_interval: None,
        })
        .await;
        assert!(!runtime.stats().is_live());
        assert!(!runtime.observations().is_live());
        assert_eq!(
            runtime.observations().entries(),
            fallback::observations().as_slice()
        );
        assert!(runtime.take_event_rx().is_none());
    }

    #[tokio::test]
    async fn test_subscription_delivers_events_until_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let list = serde_json::to_string(&fallback::observations()[..2]).unwrap();
        let event_line = serde_json::to_string(&ObservationEvent::Delete {
            id: "fb-010".to_string(),
        })
        .unwrap();
        let server = tokio::spawn(serve_observations(listener, list, event_line));

        let mut runtime = FeedRuntime::start(local_config(base_url)).await;
        assert!(runtime.observations().is_live());
        assert_eq!(runtime.observations().entries().len(), 2);

        let mut event_rx = runtime.take_event_rx().expect("subscription established");
        let event = event_rx.recv().await.expect("one pushed event");
        runtime.apply_observation_event(event);
        assert_eq!(runtime.observations().entries().len(), 1);

        // After shutdown the sender side is gone and the channel closes
        runtime.shutdown();
        assert!(event_rx.recv().await.is_none());
        server.abort();
    }
}
