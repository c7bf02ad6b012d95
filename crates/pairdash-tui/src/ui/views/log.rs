//! Right column: the observation log. One scrollable reverse-chronological
//! list, no pagination; milestones get a distinct marker and emphasis.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use pairdash_core::models::Observation;

use crate::ui::format::format_log_date;
use crate::ui::{theme, App};

pub fn render_log(f: &mut Frame, app: &App, area: Rect) {
    let entries = app.feeds.observations().entries();

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme::TEXT_DIM))
        .title(Span::styled(
            " log ",
            Style::default().fg(theme::TEXT_MUTED),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let wrap_width = inner.width.saturating_sub(11) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for entry in entries.iter().skip(app.scroll_offset) {
        lines.extend(entry_lines(entry, wrap_width.max(16)));
        if lines.len() > inner.height as usize {
            break;
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn entry_lines(entry: &Observation, wrap_width: usize) -> Vec<Line<'static>> {
    let (marker, marker_style, body_style) = if entry.is_milestone() {
        (
            "◆",
            Style::default().fg(theme::MILESTONE),
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "·",
            Style::default().fg(theme::TEXT_DIM),
            Style::default().fg(theme::TEXT_PRIMARY),
        )
    };

    let mut lines = Vec::new();
    for (i, row) in wrap_words(&entry.body, wrap_width).into_iter().enumerate() {
        if i == 0 {
            let mut spans = vec![
                Span::styled(
                    format!("{:>6} ", format_log_date(entry.date)),
                    Style::default().fg(theme::TEXT_MUTED),
                ),
                Span::styled(format!("{marker} "), marker_style),
            ];
            if entry.pinned {
                spans.push(Span::styled("✶ ", Style::default().fg(theme::BADGE_ACTIVE)));
            }
            spans.push(Span::styled(row, body_style));
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(9)),
                Span::styled(row, body_style),
            ]));
        }
    }
    lines
}

/// Greedy word wrap; words longer than the width get a row of their own
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
