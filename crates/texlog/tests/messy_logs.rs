use texlog::LogParser;
use texlog::ir::{DiagnosticKind, HboxSubtype};

const LATEXMK_NOISE: &str = include_str!("fixtures/latexmk_noise.txt");

#[test]
fn test_latexmk_noise() {
    let diagnostics = LogParser::new().parse(LATEXMK_NOISE);

    for diagnostic in &diagnostics {
        println!("{:?}", diagnostic);
    }

    // Latexmk's "(Info)", "run(s)" and the "(TeX Live 2022)" banner must not
    // leave entries behind on the stack.
    assert_eq!(diagnostics.len(), 2);

    let overfull = &diagnostics[0];
    assert_eq!(
        overfull.kind,
        DiagnosticKind::HboxWarning {
            subtype: HboxSubtype::Overfull
        }
    );
    assert_eq!(overfull.files(), vec!["./main.tex", "./chapter1.tex"]);

    let error = &diagnostics[1];
    assert_eq!(error.kind, DiagnosticKind::Error);
    assert_eq!(error.files(), vec!["./main.tex", "./chapter2.tex"]);
    assert_eq!(error.message[0], "! LaTeX Error: Environment foo undefined.");
    assert_eq!(error.message[1], "l.7 \\begin{foo}");
    assert!(!error.message.iter().any(|l| l.contains("LaTeX Companion")));
}

#[test]
fn test_latexmk_noise_is_balanced() {
    let mut last_depth = None;
    let mut max_depth = 0;
    LogParser::new().parse_with_echo(LATEXMK_NOISE, |depth, _| {
        max_depth = max_depth.max(depth);
        last_depth = Some(depth);
    });
    assert_eq!(last_depth, Some(0));
    assert_eq!(max_depth, 2);
}

#[test]
fn test_truncated_log() {
    // A run killed halfway through leaves files open and a cut-off error.
    let cut = LATEXMK_NOISE
        .lines()
        .take_while(|l| !l.starts_with("Type  H"))
        .collect::<Vec<_>>()
        .join("\n");
    let diagnostics = LogParser::new().parse(&cut);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics[1].message,
        vec![
            "! LaTeX Error: Environment foo undefined.",
            "See the LaTeX manual or LaTeX Companion for explanation."
        ]
    );
}

#[test]
fn test_log_starting_mid_stream() {
    let input = "ter2.tex\n)\n)\n! LaTeX Error: Late error.";
    let diagnostics = LogParser::new().parse(input);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].trace.is_empty());
}
