//! Variables pane rendering
//!
//! One row per binding in declaration order: name, value, and runtime tag.
//! Bindings written by the last step are marked and highlighted.

use super::utils::{clamp_scroll, inner_height, pane_block, value_style};
use crate::snapshot::VariableView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn variable_line(variable: &VariableView, content_width: usize) -> Line<'static> {
    let (marker, name_style) = if variable.changed {
        (
            "● ",
            Style::default()
                .fg(DEFAULT_THEME.changed)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(DEFAULT_THEME.text))
    };

    let type_str = variable.declared_type.as_str();
    let left = format!("{}{} = ", marker, variable.name);
    let left_width = left.chars().count();
    // Leave room for the tag on the right
    let room = content_width.saturating_sub(left_width + type_str.len() + 1);
    let mut value = variable.display.clone();
    if value.chars().count() > room && room > 1 {
        value = value.chars().take(room - 1).collect::<String>() + "…";
    }
    let padding = content_width.saturating_sub(left_width + value.chars().count() + type_str.len());

    let mut style = value_style(&variable.value);
    if variable.changed {
        style = style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(left, name_style),
        Span::styled(value, style),
        Span::raw(" ".repeat(padding)),
        Span::styled(type_str, Style::default().fg(DEFAULT_THEME.value_tag)),
    ])
}

/// Render the variables pane
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    variables: &[VariableView],
    call_stack: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Variables [{}] ", call_stack.join(" › "));
    let block = pane_block(&title, is_focused);

    if variables.is_empty() {
        let paragraph = Paragraph::new("(no variables)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let content_width = area.width.saturating_sub(2) as usize;
    let visible_height = inner_height(area.height);
    clamp_scroll(scroll_offset, variables.len(), visible_height);

    let items: Vec<ListItem> = variables
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|variable| ListItem::new(variable_line(variable, content_width)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::value::{Value, ValueKind};

    #[test]
    fn test_long_values_are_truncated() {
        let variable = VariableView {
            name: "s".to_string(),
            value: Value::Str("x".repeat(50)),
            declared_type: ValueKind::String,
            display: "x".repeat(50),
            changed: true,
        };
        let line = variable_line(&variable, 30);
        let width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
        assert_eq!(width, 30);
        assert!(line.spans[1].content.ends_with('…'));
    }
}
