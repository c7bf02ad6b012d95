use crate::backend::ObservationBackend;
use crate::events::ObservationEvent;
use crate::fallback;
use crate::models::Observation;

/// Holds the ordered observation log, preferring the live backend and
/// degrading to the embedded fallback list.
pub struct ObservationFeed<B> {
    backend: Option<B>,
    entries: Vec<Observation>,
    live: bool,
}

impl<B: ObservationBackend> ObservationFeed<B> {
    pub fn new(backend: Option<B>) -> Self {
        Self {
            backend,
            entries: fallback::observations(),
            live: false,
        }
    }

    /// One full fetch of the collection. Returns whether the backend was
    /// reached at all, which gates the push subscription: a reachable
    /// backend with an empty collection still gets subscribed to, but the
    /// fallback list stays on display until it holds at least one record.
    pub async fn load(&mut self) -> bool {
        let Some(backend) = &self.backend else {
            return false;
        };
        match backend.fetch_all().await {
            Ok(records) if records.is_empty() => {
                tracing::debug!("observations backend returned empty set, keeping fallback list");
                true
            }
            Ok(records) => {
                self.entries = records;
                self.live = true;
                true
            }
            Err(err) => {
                tracing::warn!("observations fetch failed, keeping fallback list: {err}");
                false
            }
        }
    }

    /// Apply one push notification, in arrival order. Inserts are prepended
    /// without re-sorting: the backend is trusted to only push entries newer
    /// than anything already held, so an out-of-order backfill would land at
    /// the top of the list.
    pub fn apply(&mut self, event: ObservationEvent) {
        match event {
            ObservationEvent::Insert { observation } => {
                self.entries.insert(0, observation);
            }
            ObservationEvent::Update { observation } => {
                if let Some(slot) = self.entries.iter_mut().find(|e| e.id == observation.id) {
                    *slot = observation;
                }
            }
            ObservationEvent::Delete { id } => {
                self.entries.retain(|e| e.id != id);
            }
        }
    }

    pub fn entries(&self) -> &[Observation] {
        &self.entries
    }

    pub fn is_live(&self) -> bool {
        self.live
    }
}
