//! Text scanning helpers shared by the classifier and the evaluator
//!
//! Nothing here tokenizes a whole program. The helpers answer small questions
//! about a single line or fragment: does it start with a keyword, where is the
//! matching parenthesis, which characters sit at the top level (outside
//! quotes and brackets).

use std::str::CharIndices;

/// Characters allowed in identifiers
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Whole text is a bare identifier (or integer, which the evaluator catches earlier)
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_ident_char)
}

/// Split off a leading identifier, returning it and the remaining text
pub fn leading_identifier(text: &str) -> Option<(&str, &str)> {
    let end = text
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(text.len(), |(i, _)| i);
    if end == 0 {
        None
    } else {
        Some((&text[..end], &text[end..]))
    }
}

/// Strip `keyword` from the start of `text` when it is a whole word
pub fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    match rest.chars().next() {
        Some(c) if is_ident_char(c) => None,
        _ => Some(rest),
    }
}

/// Line comment or a line inside a block comment
pub fn is_comment(text: &str) -> bool {
    text.starts_with("//") || text.starts_with("/*") || text.starts_with('*')
}

/// Iterator over the top-level characters of a fragment.
///
/// Characters inside string literals and inside `()`, `[]`, `{}` groups are
/// skipped. The delimiters of an outermost group or literal are yielded so
/// callers can tell an operand ended there.
pub struct TopLevel<'a> {
    chars: CharIndices<'a>,
    depth: usize,
    quote: Option<char>,
    escaped: bool,
}

pub fn top_level(text: &str) -> TopLevel<'_> {
    TopLevel {
        chars: text.char_indices(),
        depth: 0,
        quote: None,
        escaped: false,
    }
}

impl Iterator for TopLevel<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<(usize, char)> {
        for (i, c) in self.chars.by_ref() {
            if let Some(quote) = self.quote {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == quote {
                    self.quote = None;
                    if self.depth == 0 {
                        return Some((i, c));
                    }
                }
                continue;
            }

            match c {
                '"' | '\'' | '`' => {
                    self.quote = Some(c);
                    if self.depth == 0 {
                        return Some((i, c));
                    }
                }
                '(' | '[' | '{' => {
                    self.depth += 1;
                    if self.depth == 1 {
                        return Some((i, c));
                    }
                }
                ')' | ']' | '}' => {
                    // Unbalanced closers stay at the top level
                    if self.depth == 0 {
                        return Some((i, c));
                    }
                    self.depth -= 1;
                    if self.depth == 0 {
                        return Some((i, c));
                    }
                }
                _ if self.depth == 0 => return Some((i, c)),
                _ => {}
            }
        }
        None
    }
}

/// Split on a top-level separator
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in top_level(text) {
        if c == separator {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Cut a statement at its first top-level `;` or `//` comment
pub fn cut_statement(text: &str) -> &str {
    let end = top_level(text)
        .find(|&(i, c)| c == ';' || (c == '/' && text[i..].starts_with("//")))
        .map_or(text.len(), |(i, _)| i);
    text[..end].trim_end()
}

/// Byte index of the `)` matching the `(` at `open`
pub fn matching_paren(text: &str, open: usize) -> Option<usize> {
    if !text[open..].starts_with('(') {
        return None;
    }
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (offset, c) in text[open..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Contents of the first parenthesized group at or after the start of `text`
pub fn first_paren_group(text: &str) -> Option<&str> {
    let open = text.find('(')?;
    let close = matching_paren(text, open)?;
    Some(&text[open + 1..close])
}
