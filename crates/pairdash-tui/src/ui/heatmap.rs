//! Activity heatmap: a fixed 11-week window of daily event counts, colored
//! by five intensity tiers. The table is embedded, never fetched; the tier
//! boundaries are display policy, independent of the data's distribution.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pairdash_core::config::PROFILE_URL;

use crate::ui::theme;

pub const WEEKS: usize = 11;
pub const DAYS: usize = 7;

/// Daily counts, week-major, oldest week first; rows inside a week run
/// Monday through Sunday.
pub const ACTIVITY: [[u16; DAYS]; WEEKS] = [
    [0, 3, 7, 2, 0, 0, 1],
    [5, 12, 9, 14, 6, 0, 2],
    [18, 22, 11, 8, 19, 4, 0],
    [26, 31, 15, 24, 12, 7, 3],
    [9, 17, 28, 35, 21, 10, 5],
    [14, 42, 33, 19, 25, 8, 2],
    [30, 27, 46, 38, 16, 11, 6],
    [22, 35, 29, 44, 31, 13, 4],
    [40, 24, 37, 26, 48, 15, 9],
    [33, 51, 28, 36, 23, 18, 7],
    [45, 39, 55, 41, 34, 20, 12],
];

/// Bucket a raw count into one of five fixed tiers:
/// 0, 1-8, 9-20, 21-40, 41+.
pub fn intensity_tier(count: u16) -> usize {
    match count {
        0 => 0,
        1..=8 => 1,
        9..=20 => 2,
        21..=40 => 3,
        _ => 4,
    }
}

const DAY_LABELS: [&str; DAYS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// 7 rows of 11 two-char cells, day labels on the left, a link-out footer
pub fn render_heatmap(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(DAYS + 2);

    lines.push(Line::from(Span::styled(
        "activity — last 11 weeks",
        Style::default().fg(theme::TEXT_MUTED),
    )));

    for day in 0..DAYS {
        let mut spans: Vec<Span> = Vec::with_capacity(WEEKS + 1);
        spans.push(Span::styled(
            format!("{:>4} ", DAY_LABELS[day]),
            Style::default().fg(theme::TEXT_DIM),
        ));
        for week in ACTIVITY.iter() {
            let tier = intensity_tier(week[day]);
            spans.push(Span::styled(
                "■ ",
                Style::default().fg(theme::HEATMAP_TIERS[tier]),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::styled("     ↗ ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(PROFILE_URL, Style::default().fg(theme::TEXT_MUTED)),
    ]));

    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_exact() {
        assert_eq!(intensity_tier(0), 0);
        assert_eq!(intensity_tier(1), 1);
        assert_eq!(intensity_tier(8), 1);
        assert_eq!(intensity_tier(9), 2);
        assert_eq!(intensity_tier(20), 2);
        assert_eq!(intensity_tier(21), 3);
        assert_eq!(intensity_tier(40), 3);
        assert_eq!(intensity_tier(41), 4);
        assert_eq!(intensity_tier(u16::MAX), 4);
    }

    #[test]
    fn test_embedded_table_spans_all_tiers() {
        let mut seen = [false; 5];
        for week in ACTIVITY.iter() {
            for &count in week {
                seen[intensity_tier(count)] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
