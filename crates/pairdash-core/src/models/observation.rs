use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Category of a log entry. The set is closed: backends sending anything
/// else fail to decode and the record is dropped with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationKind {
    Milestone,
    Observation,
}

/// One dated entry in the collaboration log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Stable identifier, unique within a displayed list
    pub id: String,
    /// Day granularity; display order is most-recent-first
    pub date: NaiveDate,
    pub body: String,
    pub kind: ObservationKind,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Observation {
    pub fn is_milestone(&self) -> bool {
        self.kind == ObservationKind::Milestone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_decodes_lowercase() {
        let json = r#"{
            "id": "obs-1",
            "date": "2025-11-02",
            "body": "Shipped the first cut of the heatmap",
            "kind": "milestone",
            "created_at": "2025-11-02T18:30:00Z",
            "updated_at": "2025-11-02T18:30:00Z"
        }"#;
        let obs: Observation = serde_json::from_str(json).unwrap();
        assert!(obs.is_milestone());
        assert!(!obs.pinned);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{
            "id": "obs-2",
            "date": "2025-11-03",
            "body": "???",
            "kind": "rant",
            "created_at": "2025-11-03T09:00:00Z",
            "updated_at": "2025-11-03T09:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Observation>(json).is_err());
    }
}
