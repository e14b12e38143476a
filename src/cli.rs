//! CLI definition and parsing.
//! Defines Args and turns them into an immutable `Invocation` plus a `Config`.
//!
//! Notes:
//! - Positional counts are checked here rather than by clap so a wrong count
//!   gets our own message followed by the usage text.
//! - No arguments at all means "show help", which exits successfully.
//! - --debug is a shorthand for --log-level debug.

use clap::{CommandFactory, Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, Invocation, LogLevel};
use crate::errors::SmvError;

const EXAMPLES: &str = "\
EXAMPLES:
RENAME A FILE:
  smv foo.txt bar.txt          filename is changed to bar.txt

MOVE A FILE (KEEP THE SAME NAME):
  smv foo.txt subdir/          moves foo.txt to subdir (subdir must exist)
  smv foo.txt subdir           same, trailing / is optional
  smv foo.txt subdir/bar.txt   moves foo to subdir and renames to bar.txt
  smv foo.txt ..               moves foo.txt up one directory

MOVE BY PATTERN:
  smv -r=.txt$ subdir/         any files ending in '.txt' go to subdir
  smv -r='[a-b]+\\.txt$' subdir a.txt, b.txt move to subdir; c.txt, a.xml do not

An existing destination file is never replaced without answering 'y' at the prompt.";

/// Safer mv: never silently overwrites, renames while moving, moves by pattern.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "smv",
    author,
    version,
    about = "Move or rename files without silently overwriting anything",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Move every non-directory entry whose name contains a match for REGEX into the target directory.
    #[arg(short = 'r', long = "regex", value_name = "REGEX", allow_hyphen_values = true)]
    pub regex: Option<String>,

    /// SOURCE TARGET, or just TARGET_DIR together with --regex.
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Directory searched by --regex (defaults to the current directory).
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Dry-run: resolve and confirm as usual, but do not move anything.
    #[arg(long, help = "Show what would be done, but do not move files")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append diagnostics to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Check the positional count for the chosen mode and build the request.
    pub fn invocation(&self) -> Result<Invocation, SmvError> {
        match (&self.regex, self.paths.as_slice()) {
            (Some(pattern), [target_dir]) => Ok(Invocation::Pattern {
                pattern: pattern.clone(),
                search_dir: self.dir.clone().unwrap_or_else(|| PathBuf::from(".")),
                target_dir: target_dir.clone(),
            }),
            (Some(_), _) => Err(SmvError::Usage(
                "incorrect number of arguments: --regex takes exactly one target directory".into(),
            )),
            (None, _) if self.dir.is_some() => Err(SmvError::Usage("--dir only applies together with --regex".into())),
            (None, []) => Ok(Invocation::Help),
            (None, [source, target]) => Ok(Invocation::Single {
                source: source.clone(),
                target: target.clone(),
            }),
            (None, _) => Err(SmvError::Usage(
                "incorrect number of arguments: expected a source and a target".into(),
            )),
        }
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > default.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }

    pub fn config(&self) -> Config {
        Config {
            log_level: self.effective_log_level(),
            log_file: self.log_file.clone(),
            json: self.json,
            dry_run: self.dry_run,
        }
    }
}

/// Full usage text, as printed for --help.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

pub fn parse() -> Args {
    Args::parse()
}
