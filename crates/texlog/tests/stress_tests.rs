use std::sync::Arc;
use texlog::LogParser;
use texlog::scope::{PLACEHOLDER_MAX_CHARS, ScopeStack};

#[test]
fn test_deep_nesting() {
    let depth = 10_000;
    let mut input = String::new();
    for i in 0..depth {
        input.push_str(&format!("(./level{i}.tex\n"));
    }
    input.push_str("Overfull \\hbox (1.0pt too wide) in paragraph at lines 1--2\n");
    input.push_str(&")".repeat(depth));

    let diagnostics = LogParser::new().parse(&input);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].trace.len(), depth);
    assert_eq!(&*diagnostics[0].trace[0], "./level0.tex");
    assert_eq!(&*diagnostics[0].trace[depth - 1], format!("./level{}.tex", depth - 1));
}

#[test]
fn test_many_errors() {
    let count = 2_000;
    let mut input = String::from("(./main.tex\n");
    for i in 0..count {
        input.push_str(&format!("! LaTeX Error: Problem number {i}.\n\n\n\n"));
    }
    input.push(')');

    let diagnostics = LogParser::new().parse(&input);
    assert_eq!(diagnostics.len(), count);
    for (i, diagnostic) in diagnostics.iter().enumerate() {
        assert_eq!(diagnostic.message, vec![format!("! LaTeX Error: Problem number {i}.")]);
        assert_eq!(diagnostic.files(), vec!["./main.tex"]);
    }
}

#[test]
fn test_single_huge_line() {
    let line = "(a.tex)".repeat(50_000) + ")))";
    let mut stack = ScopeStack::new();
    stack.process_line(&line);
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.pushes(), 50_000);
    assert_eq!(stack.pops(), 50_000);
    assert_eq!(stack.ignored_pops(), 3);
}

#[test]
fn test_long_line_of_bare_parens() {
    let opens = 40_000;
    let input = format!(
        "{}\nOverfull \\hbox (1.0pt too wide) in paragraph at lines 1--2\nUnderfull \\hbox (badness 10000) in paragraph at lines 3--4",
        "(".repeat(opens)
    );

    let diagnostics = LogParser::new().parse(&input);
    assert_eq!(diagnostics.len(), 2);
    for diagnostic in &diagnostics {
        assert_eq!(diagnostic.trace.len(), opens);
        let first = &diagnostic.trace[0];
        assert!(first.chars().count() <= PLACEHOLDER_MAX_CHARS);
        assert!(diagnostic.trace.iter().all(|f| Arc::ptr_eq(f, first)));
    }
    assert!(Arc::ptr_eq(&diagnostics[0].trace[0], &diagnostics[1].trace[0]));
}
