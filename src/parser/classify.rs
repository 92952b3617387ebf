//! Line classifier
//!
//! Each trimmed line is checked against a fixed, ordered list of predicates and
//! the first match decides its [`LineKind`]. Declarations are tested before
//! assignments because `let x = 1` also looks like an assignment. Classification
//! never fails: anything unrecognized is [`LineKind::Other`].

use super::line::{ClassifiedLine, LineKind};
use super::scan::{is_comment, is_ident_char, leading_identifier, matching_paren, strip_keyword};

/// Keywords that start a variable declaration
pub const DECLARATION_KEYWORDS: [&str; 3] = ["let", "const", "var"];

/// Keywords that start a loop header
pub const LOOP_KEYWORDS: [&str; 3] = ["for", "while", "do"];

/// `console` methods treated as output calls
pub const OUTPUT_METHODS: [&str; 4] = ["log", "warn", "error", "info"];

/// Classify every line of `source`, including blank and comment lines
pub fn classify_source(source: &str) -> Vec<ClassifiedLine> {
    source
        .split('\n')
        .enumerate()
        .map(|(index, raw)| classify_line(index + 1, raw))
        .collect()
}

/// Classify one raw (untrimmed) line
pub fn classify_line(line_number: usize, raw: &str) -> ClassifiedLine {
    let text = raw.trim();
    ClassifiedLine {
        line_number,
        kind: classify_text(text),
        text: text.to_string(),
        indent: raw.chars().take_while(|c| c.is_whitespace()).count(),
    }
}

/// Statement kind of a trimmed line
pub fn classify_text(text: &str) -> LineKind {
    if text.is_empty() || is_comment(text) {
        LineKind::Other
    } else if is_declaration(text) {
        LineKind::Declaration
    } else if is_assignment(text) {
        LineKind::Assignment
    } else if is_conditional(text) {
        LineKind::Conditional
    } else if is_loop(text) {
        LineKind::Loop
    } else if is_function_definition(text) {
        LineKind::FunctionDefinition
    } else if is_return(text) {
        LineKind::Return
    } else if output_arguments(text).is_some() {
        LineKind::Output
    } else if call_name(text).is_some() {
        LineKind::FunctionCall
    } else {
        LineKind::Other
    }
}

/// Split a declaration into its keyword and the text after it
pub fn declaration_keyword(text: &str) -> Option<(&'static str, &str)> {
    DECLARATION_KEYWORDS
        .iter()
        .find_map(|&keyword| strip_keyword(text, keyword).map(|rest| (keyword, rest)))
}

fn is_declaration(text: &str) -> bool {
    match declaration_keyword(text) {
        Some((_, rest)) => {
            rest.starts_with(char::is_whitespace)
                && rest.trim_start().starts_with(is_ident_char)
        }
        None => false,
    }
}

/// Split `name = expr` into the name and the right-hand side
pub fn assignment_parts(text: &str) -> Option<(&str, &str)> {
    let (name, rest) = leading_identifier(text)?;
    if DECLARATION_KEYWORDS.contains(&name) {
        return None;
    }
    let rhs = rest.trim_start().strip_prefix('=')?;
    if rhs.starts_with('=') || rhs.starts_with('>') {
        return None;
    }
    Some((name, rhs))
}

fn is_assignment(text: &str) -> bool {
    assignment_parts(text).is_some()
}

/// Text with any leading closing braces removed, so `} else {` reads as `else {`
pub fn strip_closing_braces(text: &str) -> &str {
    text.trim_start_matches(|c: char| c == '}' || c.is_whitespace())
}

fn is_conditional(text: &str) -> bool {
    let text = strip_closing_braces(text);
    strip_keyword(text, "if").is_some() || strip_keyword(text, "else").is_some()
}

fn is_loop(text: &str) -> bool {
    LOOP_KEYWORDS
        .iter()
        .any(|&keyword| strip_keyword(text, keyword).is_some())
}

/// Name of a `function name(...)` definition
pub fn function_name(text: &str) -> Option<&str> {
    let text = strip_keyword(text, "async")
        .map(str::trim_start)
        .unwrap_or(text);
    let rest = strip_keyword(text, "function")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    leading_identifier(rest.trim_start()).map(|(name, _)| name)
}

fn is_function_definition(text: &str) -> bool {
    function_name(text).is_some()
}

/// Expression after `return`, possibly empty
pub fn return_expression(text: &str) -> Option<&str> {
    let rest = strip_keyword(text, "return")?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with(';') {
        Some(rest)
    } else {
        None
    }
}

fn is_return(text: &str) -> bool {
    return_expression(text).is_some()
}

/// Argument text of the first `console.<method>(...)` call on the line
pub fn output_arguments(text: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find("console.") {
        let method_start = search_from + found + "console.".len();
        let after = &text[method_start..];
        for method in OUTPUT_METHODS {
            if let Some(rest) = after.strip_prefix(method) {
                if rest.starts_with('(') {
                    let open = method_start + method.len();
                    let close = matching_paren(text, open)
                        .or_else(|| text.rfind(')').filter(|&i| i > open))?;
                    return Some(&text[open + 1..close]);
                }
            }
        }
        search_from = method_start;
    }
    None
}

/// Name of the first `name(...)` call shape on the line
pub fn call_name(text: &str) -> Option<&str> {
    for (open, _) in text.match_indices('(') {
        let before = &text[..open];
        let start = before
            .char_indices()
            .rev()
            .take_while(|&(_, c)| is_ident_char(c))
            .last()
            .map(|(i, _)| i);
        if let Some(start) = start {
            if text[open..].contains(')') {
                return Some(&text[start..open]);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_before_assignment() {
        assert_eq!(classify_text("let x = 5;"), LineKind::Declaration);
        assert_eq!(classify_text("x = 5;"), LineKind::Assignment);
        assert_eq!(classify_text("letter = 5;"), LineKind::Assignment);
    }

    #[test]
    fn test_equality_is_not_assignment() {
        assert_eq!(classify_text("x == 5;"), LineKind::Other);
        assert_eq!(assignment_parts("total = a + b"), Some(("total", " a + b")));
    }

    #[test]
    fn test_output_arguments() {
        assert_eq!(output_arguments("console.log(x);"), Some("x"));
        assert_eq!(output_arguments(r#"console.warn("(", y)"#), Some(r#""(", y"#));
        assert_eq!(output_arguments("console.table(x)"), None);
    }

    #[test]
    fn test_call_name() {
        assert_eq!(call_name("doWork(1, 2);"), Some("doWork"));
        assert_eq!(call_name("(x)"), None);
        assert_eq!(call_name("foo("), None);
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name("function add(a, b) {"), Some("add"));
        assert_eq!(function_name("async function load() {"), Some("load"));
        assert_eq!(function_name("functional()"), None);
    }
}
