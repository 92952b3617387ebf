//! Status bar rendering with keybindings and state indicators

use crate::interpreter::ExecutionStatus;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Status as presented: `Paused` when playback stopped mid-run
    pub status: ExecutionStatus,
    pub steps_taken: usize,
    pub current_line: usize,
    pub line_count: usize,
    pub interval_ms: u64,
}

fn status_color(status: ExecutionStatus) -> Color {
    match status {
        ExecutionStatus::Idle => DEFAULT_THEME.muted,
        ExecutionStatus::Running => DEFAULT_THEME.status_running,
        ExecutionStatus::Paused => DEFAULT_THEME.status_paused,
        ExecutionStatus::Complete => DEFAULT_THEME.status_complete,
        ExecutionStatus::Error => DEFAULT_THEME.error,
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let is_error = data.status == ExecutionStatus::Error;
    let step_text = format!(
        " Step {} · line {}/{} ",
        data.steps_taken, data.current_line, data.line_count
    );

    let left_spans = vec![
        Span::styled(
            format!(" {} ", data.status.as_str().to_uppercase()),
            Style::default()
                .bg(status_color(data.status))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.text),
        ),
        Span::styled(
            "│",
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.muted),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.text
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.text);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.muted);

    let play_label = format!(" play {}ms ", data.interval_ms);
    let right_spans = vec![
        Span::styled(" →/n ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" 1-9 ", key_style),
        Span::styled(" step N ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(play_label, desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
