use texlog::LogParser;
use texlog::ir::DiagnosticKind;

#[test]
fn test_wrapped_message_is_rejoined() {
    // TeX wraps log lines at 79 characters, even in the middle of a word.
    let input = [
        "(./main.tex",
        "! LaTeX Error: Something about a very long message that the engine wrapped a",
        "t the line limit, and it goes on.",
        "",
        "See the LaTeX manual or LaTeX Companion for explanation.",
        "Type  H <return>  for immediate help.",
        " ...                                              ",
        "                                                  ",
        "l.7 \\begin{document}",
        "",
        "",
        "",
        "(./next.tex",
    ]
    .join("\n");

    let diagnostics = LogParser::new().parse(&input);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        vec![
            "! LaTeX Error: Something about a very long message that the engine wrapped at the line limit, and it goes on.",
            "l.7 \\begin{document}",
        ]
    );
}

#[test]
fn test_wrapped_filename_keeps_depth() {
    // The file name is cut by the wrap; the label is imprecise but the depth is right.
    let input = "(./some/very/long/path/to/a/file/that/gets/wrapp\ned/here.tex\nOverfull \\hbox (1.5pt too wide) in paragraph at lines 1--2\n)\nUnderfull \\hbox (badness 10000) in paragraph at lines 3--4";

    let diagnostics = LogParser::new().parse(input);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics[0].files(),
        vec!["./some/very/long/path/to/a/file/that/gets/wrapp"]
    );
    assert!(diagnostics[1].trace.is_empty());
}

#[test]
fn test_brace_argument_on_next_line() {
    let input = include_str!("fixtures/missing_file.log");
    let diagnostics = LogParser::new().parse(input);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::Error);
    let message = &diagnostics[0].message;
    assert!(message.contains(&"l.3 \\usepackage{missing}^^M".to_string()));
    assert!(message.contains(
        &"Type X to quit or <RETURN> to proceed,or enter new name. (Default extension: sty)"
            .to_string()
    ));
}

#[test]
fn test_package_continuation_lines_keep_stack_balanced() {
    // `(babel)` continuation lines open and close a parenthesis each.
    let input = [
        "(./main.tex",
        "! Package babel Error: You haven't defined the language 'ngerman' yet.",
        "(babel)                Perhaps you misspelled it or your installation",
        "(babel)                is not complete.",
        "Overfull \\hbox (2.0pt too wide) in paragraph at lines 8--9",
    ]
    .join("\n");

    let diagnostics = LogParser::new().parse(&input);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[1].files(), vec!["./main.tex"]);
    assert_eq!(
        diagnostics[0].message[1],
        "(babel)                Perhaps you misspelled it or your installation"
    );
}
