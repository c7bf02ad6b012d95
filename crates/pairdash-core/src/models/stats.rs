use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Invocation counter for a single tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCount {
    pub name: String,
    pub invocations: u64,
}

/// Share of the codebase held by one language, as a percentage.
/// Shares are display-only and need not sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percent: f64,
}

/// Share of sessions run on one model, for the stacked usage bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelShare {
    pub name: String,
    pub percent: f64,
}

/// Aggregate collaboration metrics for the pairing session.
///
/// Exactly one snapshot is current at a time: the feed replaces it wholesale
/// on every successful fetch and never mutates it field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub commits: u64,
    pub lines_added: u64,
    pub lines_removed: u64,
    pub lines_total: u64,
    pub projects_shipped: u32,
    pub milestones: u32,
    pub first_commit: NaiveDate,
    pub last_activity: NaiveDate,
    /// Per-tool counters, kept in the order the backend sent them
    pub tools: Vec<ToolCount>,
    pub languages: Vec<LanguageShare>,
    pub models: Vec<ModelShare>,
    pub synced_at: DateTime<Utc>,
}

impl StatsSnapshot {
    /// Language shares sorted descending by percent, truncated to `n`.
    /// The truncation is display policy; the snapshot itself may hold more.
    pub fn top_languages(&self, n: usize) -> Vec<LanguageShare> {
        let mut shares = self.languages.clone();
        shares.sort_by(|a, b| {
            b.percent
                .partial_cmp(&a.percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        shares.truncate(n);
        shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    fn snapshot_with_languages(pairs: &[(&str, f64)]) -> StatsSnapshot {
        let mut snapshot = fallback::stats_snapshot();
        snapshot.languages = pairs
            .iter()
            .map(|(name, percent)| LanguageShare {
                name: name.to_string(),
                percent: *percent,
            })
            .collect();
        snapshot
    }

    #[test]
    fn test_top_languages_truncates_to_four() {
        let snapshot = snapshot_with_languages(&[
            ("TypeScript", 68.0),
            ("Python", 18.0),
            ("CSS", 9.0),
            ("MDX", 5.0),
            ("HTML", 3.0),
        ]);

        let top = snapshot.top_languages(4);
        let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["TypeScript", "Python", "CSS", "MDX"]);
    }

    #[test]
    fn test_top_languages_sorts_descending() {
        let snapshot =
            snapshot_with_languages(&[("CSS", 9.0), ("TypeScript", 68.0), ("Python", 18.0)]);

        let top = snapshot.top_languages(4);
        let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["TypeScript", "Python", "CSS"]);
    }

    #[test]
    fn test_wire_shape_round_trips() {
        let snapshot = fallback::stats_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: StatsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
