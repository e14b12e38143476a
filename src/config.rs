//! Runtime configuration.
//! - `Invocation` is the parsed, immutable request: one file, or a pattern batch.
//! - `Config` carries the ambient switches (logging, dry-run).
//! - `LogLevel` represents verbosity with simple parsing helpers.
//!
//! smv reads no config file and no environment variables; everything here is
//! built from the command line.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage and exit successfully.
    Help,
    /// `smv <source> <target>`
    Single { source: PathBuf, target: PathBuf },
    /// `smv -r=<regex> <target_dir>`; the pattern is compiled later.
    Pattern {
        pattern: String,
        search_dir: PathBuf,
        target_dir: PathBuf,
    },
}

/// Program-defined verbosity levels for diagnostics on stderr.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Every move that happens
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Ambient settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file (appended to)
    pub log_file: Option<PathBuf>,
    /// Emit diagnostics as JSON lines
    pub json: bool,
    /// Resolve and confirm as usual but leave the filesystem alone
    pub dry_run: bool,
}
