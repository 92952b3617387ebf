//! Console output pane rendering

use super::utils::{clamp_scroll, inner_height, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the console output pane
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    output: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Console ", is_focused);

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = inner_height(area.height);
    clamp_scroll(scroll_offset, output.len(), visible_height);

    let items: Vec<ListItem> = output
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(DEFAULT_THEME.text)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
