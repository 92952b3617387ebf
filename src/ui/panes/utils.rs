//! Helpers shared by the pane renderers

use crate::memory::value::Value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border color
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.focus_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.pane_border)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page stays full.
///
/// `usize::MAX` is the conventional "stick to the bottom" request.
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

/// Rows available inside a bordered pane, at least 1
pub(crate) fn inner_height(height: u16) -> usize {
    height.saturating_sub(2).max(1) as usize
}

/// Foreground color for a value, by tag
pub(crate) fn value_style(value: &Value) -> Style {
    let color = match value {
        Value::Number(_) => DEFAULT_THEME.value_number,
        Value::Str(_) => DEFAULT_THEME.value_string,
        Value::Bool(_) | Value::Null | Value::Undefined => DEFAULT_THEME.value_keyword,
        Value::Structured(_) => DEFAULT_THEME.value_structured,
        Value::Symbolic(_) => DEFAULT_THEME.text,
        Value::Unresolved(_) => DEFAULT_THEME.muted,
    };
    Style::default().fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(&mut offset, 2, 4);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_value_colors_follow_the_tag() {
        assert_eq!(value_style(&Value::Number(1.0)).fg, Some(DEFAULT_THEME.value_number));
        assert_eq!(value_style(&Value::Str("a".into())).fg, Some(DEFAULT_THEME.value_string));
        assert_eq!(value_style(&Value::Null).fg, Some(DEFAULT_THEME.value_keyword));
        assert_eq!(
            value_style(&Value::Unresolved("x".into())).fg,
            Some(DEFAULT_THEME.muted)
        );
    }
}
