use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LogError;

/// Maximum number of lines, trigger line included, read for one diagnostic body.
pub const DEFAULT_LOOKAHEAD_LINES: usize = 30;
/// Consecutive blank lines tolerated inside a generic error message.
pub const DEFAULT_ERROR_BLANK_TOLERANCE: usize = 2;
/// Consecutive blank lines tolerated inside a package error message.
pub const DEFAULT_PACKAGE_ERROR_BLANK_TOLERANCE: usize = 4;

/// Tunable limits of the message extraction heuristics.
///
/// Every field falls back to its default when missing from a config file, so
/// `{"lookahead_lines": 10}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub lookahead_lines: usize,
    pub error_blank_tolerance: usize,
    pub package_error_blank_tolerance: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            lookahead_lines: DEFAULT_LOOKAHEAD_LINES,
            error_blank_tolerance: DEFAULT_ERROR_BLANK_TOLERANCE,
            package_error_blank_tolerance: DEFAULT_PACKAGE_ERROR_BLANK_TOLERANCE,
        }
    }
}

impl ParserConfig {
    pub fn with_lookahead_lines(mut self, lines: usize) -> Self {
        self.lookahead_lines = lines;
        self
    }

    pub fn with_error_blank_tolerance(mut self, tolerance: usize) -> Self {
        self.error_blank_tolerance = tolerance;
        self
    }

    pub fn with_package_error_blank_tolerance(mut self, tolerance: usize) -> Self {
        self.package_error_blank_tolerance = tolerance;
        self
    }

    /// Loads a configuration from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, LogError> {
        let content = std::fs::read_to_string(path).map_err(|source| LogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| LogError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded parser config from {:?}: {:?}", path, config);
        Ok(config)
    }
}
