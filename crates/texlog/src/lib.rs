//! # texlog
//!
//! Diagnostic extraction from TeX engine log files (`*.log`).
//!
//! ## Overview
//!
//! This crate turns the unstructured, line-wrapped output of a TeX run into an
//! ordered list of [`Diagnostic`](ir::Diagnostic)s. Each diagnostic carries the
//! message lines and the stack of input files that were open when it was
//! raised. The parser handles:
//!
//! - **File stack tracking**: `(file.tex` opens a file, `)` closes it, and
//!   neither is guaranteed to be balanced
//! - **Line wrapping**: the engine wraps at a fixed width, splitting words and
//!   sentences over several lines
//! - **Interactive boilerplate**: the `Type  H <return>` help text is stripped
//!   from error messages
//! - **Multi-line messages**: bodies are cut at a run of blank lines whose
//!   allowed length depends on the kind of diagnostic
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐                 ┌────────────┐
//! │  log text    │ ──── parse() ─► │ LogParser  │ ──► Vec<Diagnostic>
//! └──────────────┘                 └─────┬──────┘
//!                                        │ per line
//!                     ┌──────────────────┼──────────────────┐
//!                     ▼                  ▼                  ▼
//!               ScopeStack          Detector::ACTIVE    echo callback
//!                                        │
//!                                        ▼ on a match
//!                          Log::window ─► normalize ─► extract_message
//! ```
//!
//! A single forward pass updates the [`ScopeStack`](scope::ScopeStack) for
//! every line and then offers the line to each active
//! [`Detector`](detect::Detector). A detector that fires peeks at a bounded
//! window of following lines, normalizes it and cuts the message out of it.
//! There is no "inside an error" state: the message is read eagerly at the
//! trigger line.
//!
//! ## Diagnostics
//!
//! [`DiagnosticKind`](ir::DiagnosticKind) distinguishes:
//!
//! - `Error` - `! LaTeX Error: ...` and the other engine errors
//! - `PackageError { package_name }` - `! Package foo Error: ...`
//! - `HboxWarning { subtype }` - `Overfull \hbox` / `Underfull \hbox`
//!
//! Plain `LaTeX Warning:` lines are not detected yet; asking the
//! [`Detector::PlainWarning`](detect::Detector::PlainWarning) detector returns
//! [`LogError::NotImplemented`](error::LogError::NotImplemented).
//!
//! ## Examples
//!
//! ```
//! use texlog::LogParser;
//! use texlog::ir::DiagnosticKind;
//!
//! let log = "(./main.tex\n! Package foo Error: Something broke.\n)";
//! let diagnostics = LogParser::new().parse(log);
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].package_name(), Some("foo"));
//! assert_eq!(diagnostics[0].files(), vec!["./main.tex".to_string()]);
//! assert!(matches!(diagnostics[0].kind, DiagnosticKind::PackageError { .. }));
//! ```
//!
//! ### Exporting to JSON
//!
//! ```no_run
//! use texlog::{LogParser, Report};
//! use std::fs;
//!
//! let log = fs::read_to_string("main.log")?;
//! let report = Report::new(LogParser::new().parse(&log));
//! fs::write("diagnostics.json", serde_json::to_string_pretty(&report)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
/// Diagnostic data model.
pub mod ir;
pub mod normalize;
/// Single-pass driver.
pub mod parser;
pub mod scope;


pub use config::ParserConfig;
pub use error::LogError;
pub use ir::{Diagnostic, DiagnosticKind, HboxSubtype, Report, Severity};
pub use parser::{LogParser, indent_line};

/// Schema version of the serialized [`Report`].
///
/// - MAJOR: Breaking changes to the diagnostic structure
/// - MINOR: New optional fields or diagnostic kinds
/// - PATCH: Bug fixes to parsing behavior
pub const SCHEMA_VERSION: &str = "1.0.0";
