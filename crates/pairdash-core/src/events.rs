use serde::{Deserialize, Serialize};

use crate::models::Observation;

/// Change notification for the observations collection, one per NDJSON line
/// on the subscription stream. Applied strictly in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ObservationEvent {
    Insert { observation: Observation },
    Update { observation: Observation },
    Delete { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_line_parses() {
        let line = r#"{"op":"insert","observation":{
            "id":"obs-42","date":"2025-12-20",
            "body":"Refactored the feed layer",
            "kind":"observation",
            "created_at":"2025-12-20T10:00:00Z",
            "updated_at":"2025-12-20T10:00:00Z"}}"#;
        match serde_json::from_str::<ObservationEvent>(line).unwrap() {
            ObservationEvent::Insert { observation } => assert_eq!(observation.id, "obs-42"),
            other => panic!("expected insert, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_line_parses() {
        let line = r#"{"op":"delete","id":"obs-42"}"#;
        assert_eq!(
            serde_json::from_str::<ObservationEvent>(line).unwrap(),
            ObservationEvent::Delete {
                id: "obs-42".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let line = r#"{"op":"truncate"}"#;
        assert!(serde_json::from_str::<ObservationEvent>(line).is_err());
    }
}
