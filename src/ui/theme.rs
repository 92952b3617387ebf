//! Pane colors, named for what they mark

use ratatui::style::Color;

const TEXT: Color = Color::Rgb(205, 214, 244);
const OVERLAY: Color = Color::Rgb(108, 112, 134);
const SURFACE: Color = Color::Rgb(50, 50, 70);
const BLUE: Color = Color::Rgb(137, 180, 250);
const PEACH: Color = Color::Rgb(250, 179, 135);
const GREEN: Color = Color::Rgb(166, 227, 161);
const RED: Color = Color::Rgb(243, 139, 168);
const YELLOW: Color = Color::Rgb(249, 226, 175);
const TEAL: Color = Color::Rgb(148, 226, 213);
const PINK: Color = Color::Rgb(245, 194, 231);
const MAUVE: Color = Color::Rgb(203, 166, 247);

pub struct Theme {
    pub text: Color,
    /// Placeholders, line numbers, separators
    pub muted: Color,
    pub focus_border: Color,
    pub pane_border: Color,
    /// Status bar and current source line
    pub highlight_bg: Color,
    pub current_line_number: Color,
    pub error: Color,

    // Source pane
    pub syntax_keyword: Color,
    pub syntax_string: Color,
    pub syntax_literal: Color,
    pub syntax_builtin: Color,
    pub syntax_bracket: Color,
    pub syntax_call: Color,

    // Variables pane
    pub value_number: Color,
    pub value_string: Color,
    pub value_keyword: Color,
    pub value_structured: Color,
    pub value_tag: Color,
    /// Bindings written by the last step
    pub changed: Color,

    // Loops pane
    pub loop_variable: Color,
    pub loop_values: Color,
    pub loop_bar: Color,
    pub loop_active: Color,

    // Timeline kinds
    pub kind_loop: Color,
    pub kind_condition: Color,
    pub kind_assignment: Color,
    pub kind_output: Color,

    // Status badge
    pub status_running: Color,
    pub status_paused: Color,
    pub status_complete: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    text: TEXT,
    muted: OVERLAY,
    focus_border: YELLOW,
    pane_border: OVERLAY,
    highlight_bg: SURFACE,
    current_line_number: PEACH,
    error: RED,

    syntax_keyword: BLUE,
    syntax_string: PEACH,
    syntax_literal: PEACH,
    syntax_builtin: TEAL,
    syntax_bracket: BLUE,
    syntax_call: YELLOW,

    value_number: PEACH,
    value_string: GREEN,
    value_keyword: BLUE,
    value_structured: TEAL,
    value_tag: TEAL,
    changed: PINK,

    loop_variable: YELLOW,
    loop_values: PEACH,
    loop_bar: BLUE,
    loop_active: GREEN,

    kind_loop: BLUE,
    kind_condition: MAUVE,
    kind_assignment: PINK,
    kind_output: GREEN,

    status_running: PEACH,
    status_paused: BLUE,
    status_complete: GREEN,
};
