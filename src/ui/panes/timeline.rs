//! Timeline pane rendering

use super::utils::{clamp_scroll, inner_height, pane_block};
use crate::snapshot::{HistoryEntry, HistoryKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn kind_style(kind: HistoryKind) -> Style {
    let color = match kind {
        HistoryKind::Loop => DEFAULT_THEME.kind_loop,
        HistoryKind::Condition => DEFAULT_THEME.kind_condition,
        HistoryKind::Assignment => DEFAULT_THEME.kind_assignment,
        HistoryKind::Output => DEFAULT_THEME.kind_output,
        HistoryKind::Other => DEFAULT_THEME.muted,
    };
    Style::default().fg(color)
}

/// Render the execution history, newest at the bottom
pub fn render_timeline_pane(
    frame: &mut Frame,
    area: Rect,
    history: &[HistoryEntry],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Timeline ({}) ", history.len());
    let block = pane_block(&title, is_focused);

    if history.is_empty() {
        let paragraph = Paragraph::new("(nothing executed yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = inner_height(area.height);
    clamp_scroll(scroll_offset, history.len(), visible_height);

    let items: Vec<ListItem> = history
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4} ", entry.line),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Span::styled(format!("{:<10}", entry.kind.as_str()), kind_style(entry.kind)),
                Span::styled(entry.description.as_str(), Style::default().fg(DEFAULT_THEME.text)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
