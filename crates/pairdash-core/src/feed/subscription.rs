use std::time::Duration;

use futures::StreamExt;
use tokio::sync::mpsc;

use crate::backend::{BackendError, HttpObservationBackend};
use crate::events::ObservationEvent;

const RECONNECT_DELAY: Duration = Duration::from_secs(2);

enum StreamEnd {
    /// The UI dropped its receiver; the subscription is over
    ReceiverDropped,
    /// The backend closed the connection; reconnect
    RemoteClosed,
}

/// Push subscription to the observations collection: a long-lived GET whose
/// body is newline-delimited JSON, one `ObservationEvent` per line.
///
/// Runs until the receiving side hangs up. Connection loss triggers a
/// reconnect after a short delay; malformed lines are skipped so one bad
/// record never kills the stream.
pub struct ObservationSubscription {
    client: reqwest::Client,
    url: String,
}

impl ObservationSubscription {
    pub fn new(backend: &HttpObservationBackend) -> Self {
        Self {
            client: backend.client(),
            url: backend.subscribe_url(),
        }
    }

    pub async fn run(self, event_tx: mpsc::Sender<ObservationEvent>) {
        loop {
            match self.read_stream(&event_tx).await {
                Ok(StreamEnd::ReceiverDropped) => return,
                Ok(StreamEnd::RemoteClosed) => {
                    tracing::debug!("observation stream closed by backend");
                }
                Err(err) => {
                    tracing::debug!("observation stream ended: {err}");
                }
            }
            if event_tx.is_closed() {
                return;
            }
            tokio::time::sleep(RECONNECT_DELAY).await;
        }
    }

    async fn read_stream(
        &self,
        event_tx: &mpsc::Sender<ObservationEvent>,
    ) -> Result<StreamEnd, BackendError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        let mut stream = response.bytes_stream();
        let mut buf: Vec<u8> = Vec::new();

        while let Some(chunk) = stream.next().await {
            buf.extend_from_slice(&chunk?);
            while let Some(end) = buf.iter().position(|&b| b == b'\n') {
                let raw: Vec<u8> = buf.drain(..=end).collect();
                let line = String::from_utf8_lossy(&raw[..end]);
                if let Some(event) = decode_line(&line) {
                    if event_tx.send(event).await.is_err() {
                        return Ok(StreamEnd::ReceiverDropped);
                    }
                }
            }
        }

        Ok(StreamEnd::RemoteClosed)
    }
}

/// One NDJSON line to one event. Blank lines and malformed records are
/// skipped so a single bad line never kills the stream.
fn decode_line(line: &str) -> Option<ObservationEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<ObservationEvent>(line) {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::debug!("skipping malformed observation event: {err} ({line})");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line_parses_all_ops() {
        let lines = [
            r#"{"op":"insert","observation":{"id":"x","date":"2025-12-20","body":"b","kind":"observation","created_at":"2025-12-20T10:00:00Z","updated_at":"2025-12-20T10:00:00Z"}}"#,
            r#"{"op":"update","observation":{"id":"x","date":"2025-12-20","body":"b2","kind":"milestone","created_at":"2025-12-20T10:00:00Z","updated_at":"2025-12-20T11:00:00Z"}}"#,
            r#"{"op":"delete","id":"x"}"#,
        ];
        assert!(matches!(
            decode_line(lines[0]),
            Some(ObservationEvent::Insert { .. })
        ));
        assert!(matches!(
            decode_line(lines[1]),
            Some(ObservationEvent::Update { .. })
        ));
        assert!(matches!(
            decode_line(lines[2]),
            Some(ObservationEvent::Delete { .. })
        ));
    }

    #[test]
    fn test_decode_line_skips_blank_and_malformed() {
        assert!(decode_line("").is_none());
        assert!(decode_line("   ").is_none());
        assert!(decode_line("not json").is_none());
        assert!(decode_line(r#"{"op":"truncate"}"#).is_none());
    }
}
