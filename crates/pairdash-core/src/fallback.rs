//! Embedded fallback data.
//!
//! Fallback is the legitimate initial state of both feeds, not a placeholder:
//! the first frame renders it and live data replaces it whenever a backend
//! becomes reachable. Held behind constructor functions so tests and feeds
//! take it through the same seam as live data.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{
    LanguageShare, ModelShare, Observation, ObservationKind, StatsSnapshot, ToolCount,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All embedded dates are hand-written literals; invalid ones are a bug
    // in this file, not runtime input.
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Snapshot shown until the stats endpoint answers for the first time
pub fn stats_snapshot() -> StatsSnapshot {
    StatsSnapshot {
        commits: 412,
        lines_added: 128_450,
        lines_removed: 41_203,
        lines_total: 87_247,
        projects_shipped: 6,
        milestones: 14,
        first_commit: date(2025, 10, 13),
        last_activity: date(2025, 12, 19),
        tools: vec![
            tool("Read", 3_918),
            tool("Edit", 2_647),
            tool("Bash", 1_905),
            tool("Write", 842),
        ],
        languages: vec![
            language("TypeScript", 68.0),
            language("Python", 18.0),
            language("CSS", 9.0),
            language("MDX", 5.0),
        ],
        models: vec![
            model("Opus", 52.0),
            model("Sonnet", 41.0),
            model("Haiku", 7.0),
        ],
        synced_at: Utc.with_ymd_and_hms(2025, 12, 19, 21, 4, 0).unwrap(),
    }
}

/// Observation log shown until the observations backend answers with at
/// least one record. Embedded in display order: most recent first.
pub fn observations() -> Vec<Observation> {
    vec![
        milestone(
            "fb-010",
            date(2025, 12, 19),
            "Shipped the sixth project: search finally fast enough to leave on by default.",
            true,
        ),
        note(
            "fb-009",
            date(2025, 12, 14),
            "Pairing rhythm has settled: human writes the failing test, agent makes it pass, both argue about naming.",
        ),
        note(
            "fb-008",
            date(2025, 12, 7),
            "Agent caught a timezone bug in the streak counter before it reached review.",
        ),
        milestone(
            "fb-007",
            date(2025, 11, 28),
            "100k lines added across the collaboration.",
            false,
        ),
        note(
            "fb-006",
            date(2025, 11, 21),
            "Switched the review loop to diff-first prompts; rework rate dropped noticeably.",
        ),
        note(
            "fb-005",
            date(2025, 11, 12),
            "Longest uninterrupted session so far: four hours on the importer, zero context resets.",
        ),
        milestone(
            "fb-004",
            date(2025, 11, 2),
            "First production deploy with an agent-authored migration.",
            false,
        ),
        note(
            "fb-003",
            date(2025, 10, 27),
            "Started keeping this log after losing a good debugging story to scrollback.",
        ),
        note(
            "fb-002",
            date(2025, 10, 19),
            "Tool usage is already lopsided toward Read; the agent reads five files for every one it edits.",
        ),
        milestone("fb-001", date(2025, 10, 13), "First commit of the partnership.", false),
    ]
}

fn tool(name: &str, invocations: u64) -> ToolCount {
    ToolCount {
        name: name.to_string(),
        invocations,
    }
}

fn language(name: &str, percent: f64) -> LanguageShare {
    LanguageShare {
        name: name.to_string(),
        percent,
    }
}

fn model(name: &str, percent: f64) -> ModelShare {
    ModelShare {
        name: name.to_string(),
        percent,
    }
}

fn milestone(id: &str, date: NaiveDate, body: &str, pinned: bool) -> Observation {
    entry(id, date, body, ObservationKind::Milestone, pinned)
}

fn note(id: &str, date: NaiveDate, body: &str) -> Observation {
    entry(id, date, body, ObservationKind::Observation, false)
}

fn entry(id: &str, date: NaiveDate, body: &str, kind: ObservationKind, pinned: bool) -> Observation {
    let created_at = Utc
        .from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap());
    Observation {
        id: id.to_string(),
        date,
        body: body.to_string(),
        kind,
        pinned,
        created_at,
        updated_at: created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observations_are_newest_first() {
        let list = observations();
        assert!(!list.is_empty());
        for pair in list.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_observation_ids_are_unique() {
        let list = observations();
        let mut ids: Vec<&str> = list.iter().map(|o| o.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_snapshot_names_at_least_four_tools() {
        assert!(stats_snapshot().tools.len() >= 4);
    }
}
