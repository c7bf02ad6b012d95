use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::views::{render_console, render_log};
use crate::ui::App;

const CONSOLE_WIDTH: u16 = 48;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let bg = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(f.area());

    render_header(f, app, chunks[0]);

    let columns = Layout::horizontal([Constraint::Length(CONSOLE_WIDTH), Constraint::Min(24)])
        .split(chunks[1]);
    render_console(f, app, columns[0]);
    render_log(f, app, columns[1]);

    render_footer(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let badge = app.badge();
    let badge_color = if badge == "LIVE" {
        ui::theme::BADGE_LIVE
    } else {
        ui::theme::BADGE_ACTIVE
    };
    // Slow terminal-cursor blink driven by the UI tick
    let cursor = if app.frame() % 4 < 2 { "▊" } else { " " };

    let line = Line::from(vec![
        Span::styled(
            " pairdash ",
            Style::default()
                .fg(ui::theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "— pair programming console ",
            Style::default().fg(ui::theme::TEXT_MUTED),
        ),
        Span::styled(cursor, Style::default().fg(ui::theme::ACCENT)),
        Span::raw("  "),
        Span::styled(
            format!("● {badge}"),
            Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let text = if app.pending_quit {
        Span::styled(
            " ctrl+c again to quit",
            Style::default().fg(ui::theme::BADGE_ACTIVE),
        )
    } else {
        Span::styled(
            " q quit · j/k scroll · g/G top/bottom",
            Style::default().fg(ui::theme::TEXT_DIM),
        )
    };
    f.render_widget(Paragraph::new(Line::from(text)), area);
}
