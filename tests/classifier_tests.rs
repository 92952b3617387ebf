// Integration tests for line classification

use pretty_assertions::assert_eq;
use stepviz::parser::{classify_source, classify_text, LineKind};

fn kinds(source: &str) -> Vec<LineKind> {
    classify_source(source).into_iter().map(|line| line.kind).collect()
}

#[test]
fn test_classifies_every_kind() {
    let source = r#"
const limit = 3;
total = limit * 2;
if (total > 5) {
} else {
for (let i = 0; i < limit; i++) {
while (n < 10) {
function add(a, b) {
return a + b;
console.log("total", total);
add(1, 2);
i++;
"#;
    assert_eq!(
        kinds(source),
        vec![
            LineKind::Other,
            LineKind::Declaration,
            LineKind::Assignment,
            LineKind::Conditional,
            LineKind::Conditional,
            LineKind::Loop,
            LineKind::Loop,
            LineKind::FunctionDefinition,
            LineKind::Return,
            LineKind::Output,
            LineKind::FunctionCall,
            LineKind::Other,
            LineKind::Other,
        ]
    );
}

#[test]
fn test_line_numbers_and_indent() {
    let lines = classify_source("let a = 1;\n    a = 2;");
    assert_eq!(lines[0].line_number, 1);
    assert_eq!(lines[1].line_number, 2);
    assert_eq!(lines[1].indent, 4);
    assert_eq!(lines[1].text, "a = 2;");
}

#[test]
fn test_priority_order_on_ambiguous_lines() {
    // Declaration wins over the assignment it contains
    assert_eq!(classify_text("let x = add(1, 2);"), LineKind::Declaration);
    // Assignment wins over output
    assert_eq!(classify_text("x = console.log(1);"), LineKind::Assignment);
    // Return wins over output and call
    assert_eq!(classify_text("return console.log(x);"), LineKind::Return);
    // Output wins over call
    assert_eq!(classify_text("console.error(fail());"), LineKind::Output);
}

#[test]
fn test_keywords_need_a_word_boundary() {
    assert_eq!(classify_text("iffy();"), LineKind::FunctionCall);
    assert_eq!(classify_text("format(x);"), LineKind::FunctionCall);
    assert_eq!(classify_text("returned = 1;"), LineKind::Assignment);
    assert_eq!(classify_text("return;"), LineKind::Return);
    assert_eq!(classify_text("return"), LineKind::Return);
}

#[test]
fn test_comments_are_other() {
    assert_eq!(classify_text("// let x = 1;"), LineKind::Other);
    assert_eq!(classify_text("/* if (x) */"), LineKind::Other);
    assert_eq!(classify_text("* console.log(1)"), LineKind::Other);
}

#[test]
fn test_else_if_after_brace() {
    assert_eq!(classify_text("} else if (x === 1) {"), LineKind::Conditional);
    assert_eq!(classify_text("do {"), LineKind::Loop);
}

#[test]
fn test_executable_lines() {
    let lines = classify_source("let a = 1;\n\n// note\n}\n});\nfoo();");
    let executable: Vec<usize> = lines
        .iter()
        .filter(|line| line.is_executable())
        .map(|line| line.line_number)
        .collect();
    assert_eq!(executable, vec![1, 5, 6]);
}
