use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::SCHEMA_VERSION;

/// A single problem reported by the engine, with the files open when it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Zero-based index of the log line that triggered the diagnostic.
    pub line: usize,
    pub message: Vec<String>,
    /// Files open at detection time, outermost first.
    pub trace: Vec<Arc<str>>,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum DiagnosticKind {
    Error,
    PackageError { package_name: String },
    HboxWarning { subtype: HboxSubtype },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HboxSubtype {
    Overfull,
    Underfull,
}

impl HboxSubtype {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Overfull" => Some(Self::Overfull),
            "Underfull" => Some(Self::Underfull),
            _ => None,
        }
    }
}

impl fmt::Display for HboxSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overfull => f.write_str("Overfull"),
            Self::Underfull => f.write_str("Underfull"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::Error | DiagnosticKind::PackageError { .. } => Severity::Error,
            DiagnosticKind::HboxWarning { .. } => Severity::Warning,
        }
    }

    /// Name of the package that raised the error, for package lookups.
    pub fn package_name(&self) -> Option<&str> {
        match &self.kind {
            DiagnosticKind::PackageError { package_name } => Some(package_name),
            _ => None,
        }
    }

    /// The innermost file open when the diagnostic was raised.
    pub fn file(&self) -> Option<&str> {
        self.trace.last().map(|f| &**f)
    }

    /// The trace as borrowed strings.
    pub fn files(&self) -> Vec<&str> {
        self.trace.iter().map(|f| &**f).collect()
    }
}

impl fmt::Display for Diagnostic {
    /// Plain multi-line rendering:
    ///
    /// ```text
    /// Package error (foo):
    ///     ! Package foo Error: bar
    ///   in ./main.tex > ./chapter.tex
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Error => writeln!(f, "Error:")?,
            DiagnosticKind::PackageError { package_name } => {
                writeln!(f, "Package error ({package_name}):")?
            }
            DiagnosticKind::HboxWarning { subtype } => writeln!(f, "{subtype} hbox warning:")?,
        }
        for line in &self.message {
            writeln!(f, "    {line}")?;
        }
        if self.trace.is_empty() {
            write!(f, "  in <no file>")
        } else {
            write!(f, "  in {}", self.trace.join(" > "))
        }
    }
}

/// Serializable envelope for a full parse, stamped with the schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            diagnostics,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}
