//! Resolved run configuration
//!
//! Built once from the command line and never mutated afterwards.

use std::fmt;
use std::path::PathBuf;

/// Extensions selected for inclusion, lower-cased and without leading dots.
///
/// An empty set matches every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    entries: Vec<String>,
}

impl ExtensionSet {
    /// Parse a comma-separated list such as `go,rs`. An empty string yields the
    /// match-all set.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }

        Self {
            entries: raw.split(',').map(str::to_lowercase).collect(),
        }
    }

    /// True when no extension was configured
    pub fn is_match_all(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Decide whether a file with `extension` (as computed by
    /// [`crate::core::paths::extension_of`], leading '.' included) is selected.
    pub fn matches(&self, extension: &str) -> bool {
        if self.is_match_all() {
            return true;
        }

        let extension = extension.to_lowercase();
        match extension.strip_prefix('.') {
            Some(bare) => self.entries.iter().any(|e| e == bare),
            None => false,
        }
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.as_slice().join(" "))
    }
}

/// Everything a single gather run needs
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the walk
    pub input_path: PathBuf,

    /// Destination file; `None` writes to stdout
    pub output: Option<PathBuf>,

    pub extensions: ExtensionSet,

    /// Emit per-file filter decisions on stderr
    pub debug: bool,
}
