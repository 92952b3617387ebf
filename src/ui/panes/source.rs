//! Source pane rendering with syntax highlighting
//!
//! This module renders the loaded snippet with basic highlighting and
//! execution indicators.
//!
//! # Features
//!
//! - Highlighting for keywords, literals, strings, and comments
//! - Current line highlight, replaced by an error highlight when the step failed
//! - A gutter marker on the line the next step will execute
//! - Scroll state that keeps the current line at a fixed visual row
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply
//! highlighting styles without requiring a lexer.

use super::utils::{inner_height, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Simple highlighting for snippet lines
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        // Line comments run to the end
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, next)| next == '/') {
            if !current_word.is_empty() {
                spans.push(word_span(std::mem::take(&mut current_word), false));
            }
            spans.push(Span::styled(
                &line[offset..],
                Style::default().fg(DEFAULT_THEME.muted),
            ));
            break;
        }

        if matches!(c, '"' | '\'' | '`') {
            if !current_word.is_empty() {
                spans.push(word_span(std::mem::take(&mut current_word), false));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != c {
                end += if chars[end].1 == '\\' { 2 } else { 1 };
            }
            let end = (end + 1).min(chars.len());
            let end_offset = chars.get(end).map_or(line.len(), |&(o, _)| o);
            spans.push(Span::styled(
                &line[offset..end_offset],
                Style::default().fg(DEFAULT_THEME.syntax_string),
            ));
            i = end;
            continue;
        }

        if !is_word_char(c) {
            if !current_word.is_empty() {
                spans.push(word_span(std::mem::take(&mut current_word), c == '('));
            }
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.syntax_bracket),
                _ => Style::default().fg(DEFAULT_THEME.text),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        spans.push(word_span(current_word, false));
    }

    Line::from(spans)
}

fn word_span(word: String, is_function: bool) -> Span<'static> {
    let style = get_keyword_style(&word, is_function);
    Span::styled(word, style)
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "let" | "const" | "var" | "function" | "async" | "return" | "if" | "else" | "while"
        | "for" | "do" | "of" | "in" | "break" | "continue" | "new" => Style::default()
            .fg(DEFAULT_THEME.syntax_keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" | "null" | "undefined" => Style::default().fg(DEFAULT_THEME.syntax_literal),
        "console" | "Math" => Style::default().fg(DEFAULT_THEME.syntax_builtin),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.syntax_literal)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.syntax_call),
        _ => Style::default().fg(DEFAULT_THEME.text),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Visual row the current line is pinned to, centered on first render
    pub target_line_row: Option<usize>,
}

/// Render the source pane
#[allow(clippy::too_many_arguments)]
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: usize,
    next_line: Option<usize>,
    is_error: bool,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let visible_height = inner_height(area.height);

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Follow the current line, or the next one before the first step
    let focus_line = if current_line > 0 {
        current_line
    } else {
        next_line.unwrap_or(0)
    };
    if focus_line > 0 && focus_line <= total_lines {
        scroll_state.offset = (focus_line - 1).saturating_sub(target_row);
        if total_lines > visible_height {
            scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let marker = if next_line == Some(line_num) { "›" } else { " " };
            let line_num_str = format!("{:4}{}", line_num, marker);

            let (num_style, content_base_style) = if is_current && is_error {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.current_line_number)
                        .add_modifier(Modifier::BOLD),
                    Style::default().bg(DEFAULT_THEME.highlight_bg),
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.muted), Style::default())
            };

            let mut content_line = highlight_source_code(line);
            if is_current && is_error {
                for span in &mut content_line.spans {
                    span.style = content_base_style;
                }
            } else if is_current {
                for span in &mut content_line.spans {
                    span.style = span.style.patch(content_base_style);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
