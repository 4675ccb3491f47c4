use crate::config::ParserConfig;
use crate::detect::Detector;
use crate::ir::Diagnostic;
use crate::scope::ScopeStack;

/// A complete log, split into lines. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Log<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Up to `len` lines starting at `start`; always includes `start` itself
    /// when it exists.
    pub fn window(&self, start: usize, len: usize) -> &[&'a str] {
        let end = start.saturating_add(len.max(1)).min(self.lines.len());
        &self.lines[start.min(end)..end]
    }
}

/// Extracts diagnostics from a TeX log in a single forward pass.
///
/// The parser only holds its configuration, so one instance can parse any
/// number of logs; nothing carries over between calls.
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParserConfig,
}

impl LogParser {
    /// Creates a parser with the default lookahead and tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a whole log.
    ///
    /// # Arguments
    ///
    /// * `input` - The full content of the log file.
    ///
    /// # Returns
    ///
    /// Every [`Diagnostic`] found, ordered by the line that triggered it.
    pub fn parse(&self, input: &str) -> Vec<Diagnostic> {
        self.parse_with_echo(input, |_, _| {})
    }

    /// Parses a whole log, handing each line to `echo` together with the
    /// number of files open after that line.
    ///
    /// `echo` only observes the pass; it cannot change the result.
    pub fn parse_with_echo<F>(&self, input: &str, mut echo: F) -> Vec<Diagnostic>
    where
        F: FnMut(usize, &str),
    {
        let source = Log::new(input);
        let mut stack = ScopeStack::new();
        let mut diagnostics = Vec::new();

        for (index, &line) in source.lines().iter().enumerate() {
            stack.process_line(line);

            for detector in Detector::ACTIVE {
                match detector.detect(&source, index, &self.config) {
                    Ok(Some(detection)) => {
                        let diagnostic = Diagnostic {
                            line: index,
                            message: detection.message,
                            trace: stack.snapshot(),
                            kind: detection.kind,
                        };
                        log::debug!(
                            "Line {}: {:?} in {:?}",
                            index,
                            diagnostic.kind,
                            diagnostic.file()
                        );
                        diagnostics.push(diagnostic);
                    }
                    Ok(None) => {}
                    Err(e) => log::warn!("{:?} detector failed on line {}: {}", detector, index, e),
                }
            }

            echo(stack.depth(), line);
        }

        log::debug!(
            "Parsed {} lines: {} diagnostics, {} files still open, {} unmatched closing parentheses",
            source.len(),
            diagnostics.len(),
            stack.depth(),
            stack.ignored_pops()
        );
        diagnostics
    }
}

/// Renders an echoed line with one `|   ` guide per open file.
pub fn indent_line(depth: usize, line: &str) -> String {
    let mut out = "|   ".repeat(depth);
    out.push_str(line);
    out
}
