//! Loop pane rendering
//!
//! Each tracker shows its controlling variable, a text progress bar toward the
//! bound, and the values observed so far.

use super::utils::{clamp_scroll, inner_height, pane_block};
use crate::interpreter::loops::LoopTracker;
use crate::memory::value::format_number;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

const BAR_WIDTH: usize = 20;

fn progress_bar(fraction: f64) -> String {
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn tracker_lines(tracker: &LoopTracker) -> Vec<Line<'static>> {
    let (state, state_style) = if tracker.is_active {
        ("active", Style::default().fg(DEFAULT_THEME.loop_active))
    } else {
        ("done", Style::default().fg(DEFAULT_THEME.muted))
    };

    let header = Line::from(vec![
        Span::styled(
            format!("{} ", tracker.controlling_variable),
            Style::default()
                .fg(DEFAULT_THEME.loop_variable)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} / {} ",
                format_number(tracker.current_value),
                format_number(tracker.bound_value)
            ),
            Style::default().fg(DEFAULT_THEME.loop_values),
        ),
        Span::styled(format!("({}, line {})", state, tracker.header_line), state_style),
    ]);

    let bar = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            progress_bar(tracker.progress()),
            Style::default().fg(DEFAULT_THEME.loop_bar),
        ),
    ]);

    let values = tracker
        .iteration_history
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(" → ");
    let history = Line::from(Span::styled(
        format!("  {}", values),
        Style::default().fg(DEFAULT_THEME.text),
    ));

    vec![header, bar, history]
}

/// Render the loops pane
pub fn render_loops_pane(
    frame: &mut Frame,
    area: Rect,
    loops: &[LoopTracker],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Loops ", is_focused);

    if loops.is_empty() {
        let paragraph = Paragraph::new("(no loops)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_lines: Vec<Line> = loops.iter().flat_map(tracker_lines).collect();
    let visible_height = inner_height(area.height);
    clamp_scroll(scroll_offset, all_lines.len(), visible_height);

    let items: Vec<ListItem> = all_lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_width() {
        assert_eq!(progress_bar(0.0), "░".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(1.0), "█".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(0.5).chars().filter(|&c| c == '█').count(), 10);
    }
}
