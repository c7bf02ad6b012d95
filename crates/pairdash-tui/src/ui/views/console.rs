//! Left column of the dashboard: stat readout, tool counters, language
//! bars, and the stacked model-usage bar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pairdash_core::models::StatsSnapshot;

use crate::ui::format::format_count;
use crate::ui::{heatmap, theme, App};

/// How many language shares the console shows; the snapshot may hold more
const LANGUAGE_ROWS: usize = 4;

const BAR_WIDTH: usize = 16;
const MODEL_BAR_WIDTH: usize = 34;

pub fn render_console(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.feeds.stats().snapshot();
    let tool_rows = snapshot.tools.len() as u16;
    let language_rows = snapshot.top_languages(LANGUAGE_ROWS).len() as u16;

    let sections = Layout::vertical([
        Constraint::Length(8),                 // stat readout
        Constraint::Length(tool_rows + 2),     // tool usage
        Constraint::Length(language_rows + 2), // language bars
        Constraint::Length(4),                 // model bar + legend
        Constraint::Min(heatmap::DAYS as u16 + 2),
    ])
    .split(area);

    render_readout(f, app, snapshot, sections[0]);
    render_tools(f, snapshot, sections[1]);
    render_languages(f, snapshot, sections[2]);
    render_models(f, snapshot, sections[3]);
    heatmap::render_heatmap(f, sections[4]);
}

fn label(text: &str) -> Span<'_> {
    Span::styled(format!("{:<12}", text), Style::default().fg(theme::TEXT_MUTED))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(theme::TEXT_PRIMARY))
}

fn render_readout(f: &mut Frame, app: &App, snapshot: &StatsSnapshot, area: Rect) {
    let derived = app.derived();

    let lines = vec![
        Line::from(Span::styled(
            "$ pair --status",
            Style::default().fg(theme::ACCENT),
        )),
        Line::from(vec![label("commits"), value(format_count(snapshot.commits))]),
        Line::from(vec![
            label("lines"),
            Span::styled(
                format!("+{}", format_count(snapshot.lines_added)),
                Style::default().fg(theme::ADDED),
            ),
            Span::styled(" / ", Style::default().fg(theme::TEXT_DIM)),
            Span::styled(
                format!("-{}", format_count(snapshot.lines_removed)),
                Style::default().fg(theme::REMOVED),
            ),
            Span::styled(
                format!("  ({} net)", format_count(snapshot.lines_total)),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]),
        Line::from(vec![
            label("projects"),
            value(format!("{} shipped", snapshot.projects_shipped)),
        ]),
        Line::from(vec![
            label("milestones"),
            value(snapshot.milestones.to_string()),
        ]),
        Line::from(vec![
            label("elapsed"),
            value(format!(
                "{} months ({} days)",
                derived.months_elapsed, derived.days_elapsed
            )),
        ]),
        Line::from(vec![
            label("last sync"),
            Span::styled(
                snapshot.synced_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn render_tools(f: &mut Frame, snapshot: &StatsSnapshot, area: Rect) {
    let max = snapshot
        .tools
        .iter()
        .map(|t| t.invocations)
        .max()
        .unwrap_or(1)
        .max(1);

    let mut lines = vec![Line::from(Span::styled(
        "tool usage",
        Style::default().fg(theme::TEXT_MUTED),
    ))];
    for tool in &snapshot.tools {
        let filled = ((tool.invocations as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<7}", tool.name),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
            Span::styled("▇".repeat(filled.max(1)), Style::default().fg(theme::ACCENT)),
            Span::styled(
                format!(" {}", format_count(tool.invocations)),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_languages(f: &mut Frame, snapshot: &StatsSnapshot, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "languages",
        Style::default().fg(theme::TEXT_MUTED),
    ))];
    for (i, share) in snapshot.top_languages(LANGUAGE_ROWS).iter().enumerate() {
        let filled = ((share.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let color = theme::BAR_PALETTE[i % theme::BAR_PALETTE.len()];
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<11}", share.name),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
            Span::styled(
                format!("{:>3.0}% ", share.percent),
                Style::default().fg(theme::TEXT_MUTED),
            ),
            Span::styled("█".repeat(filled.min(BAR_WIDTH).max(1)), Style::default().fg(color)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_models(f: &mut Frame, snapshot: &StatsSnapshot, area: Rect) {
    let total: f64 = snapshot.models.iter().map(|m| m.percent).sum();
    let total = if total > 0.0 { total } else { 1.0 };

    // One stacked bar, segments proportional to each model's share
    let mut bar: Vec<Span> = vec![Span::raw("  ")];
    let mut legend: Vec<Span> = vec![Span::raw("  ")];
    for (i, model) in snapshot.models.iter().enumerate() {
        let width = ((model.percent / total) * MODEL_BAR_WIDTH as f64).round() as usize;
        let color = theme::BAR_PALETTE[i % theme::BAR_PALETTE.len()];
        bar.push(Span::styled("█".repeat(width.max(1)), Style::default().fg(color)));
        legend.push(Span::styled("■ ", Style::default().fg(color)));
        legend.push(Span::styled(
            format!("{} {:.0}%  ", model.name, model.percent),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            "models",
            Style::default().fg(theme::TEXT_MUTED),
        )),
        Line::from(bar),
        Line::from(legend),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
