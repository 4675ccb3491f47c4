use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParserConfig;
use crate::error::LogError;
use crate::extract::extract_message;
use crate::ir::{DiagnosticKind, HboxSubtype};
use crate::normalize::normalize;
use crate::parser::Log;

static PACKAGE_ERROR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"! Package ([^\s/]+) Error:").expect("package error pattern is valid")
});

/// `! LaTeX Error:`, `! pdfTeX Error:`, `! XeTeX Error:`, ...
static ENGINE_ERROR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"! [A-Za-z]*TeX Error:").expect("engine error pattern is valid"));

static HBOX_WARNING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Overfull|Underfull) \\hbox").expect("hbox warning pattern is valid")
});

/// A diagnostic found on one line, before the driver attaches its position
/// and file trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub kind: DiagnosticKind,
    pub message: Vec<String>,
}

/// The diagnostic categories the parser knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detector {
    PackageError,
    Error,
    HboxWarning,
    /// `LaTeX Warning:` and friends. There is no detection rule for these yet.
    PlainWarning,
}

impl Detector {
    /// Detectors the parser runs on every line, in this order.
    pub const ACTIVE: [Detector; 3] = [Self::PackageError, Self::Error, Self::HboxWarning];

    /// Looks for the start of a diagnostic on line `index` of `log`.
    ///
    /// Multi-line messages are read from a window of at most
    /// `config.lookahead_lines` lines starting at `index`; the window is only
    /// peeked at and never moves the caller's position.
    pub fn detect(
        self,
        log: &Log<'_>,
        index: usize,
        config: &ParserConfig,
    ) -> Result<Option<Detection>, LogError> {
        let Some(line) = log.line(index) else {
            return Ok(None);
        };
        let detection = match self {
            Self::PackageError => PACKAGE_ERROR.captures(line).map(|caps| {
                let message = read_message(log, index, config, config.package_error_blank_tolerance);
                Detection {
                    kind: DiagnosticKind::PackageError {
                        package_name: caps[1].to_string(),
                    },
                    message,
                }
            }),
            Self::Error => ENGINE_ERROR.is_match(line).then(|| Detection {
                kind: DiagnosticKind::Error,
                message: read_message(log, index, config, config.error_blank_tolerance),
            }),
            Self::HboxWarning => HBOX_WARNING.captures(line).and_then(|caps| {
                let subtype = HboxSubtype::from_keyword(&caps[1])?;
                Some(Detection {
                    kind: DiagnosticKind::HboxWarning { subtype },
                    message: vec![line.to_string()],
                })
            }),
            Self::PlainWarning => return Err(LogError::NotImplemented("plain warning")),
        };
        Ok(detection)
    }
}

fn read_message(log: &Log<'_>, index: usize, config: &ParserConfig, tolerance: usize) -> Vec<String> {
    let window = log.window(index, config.lookahead_lines);
    extract_message(&normalize(window), tolerance)
}
