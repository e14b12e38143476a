//! Typed error definitions for smv.
//! Every failure the tool can report has its own variant so callers and tests
//! can tell them apart without matching on strings, and so `main` can map each
//! class to a distinct exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SmvError>;

#[derive(Debug, Error)]
pub enum SmvError {
    #[error("{0}")]
    Usage(String),

    #[error("{} does not exist.", .0.display())]
    SourceNotFound(PathBuf),

    #[error("{} is a directory.", .0.display())]
    SourceIsDirectory(PathBuf),

    #[error("for regex use, target must be an existing directory: {}", .0.display())]
    TargetNotDirectory(PathBuf),

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("refusing to replace directory {} with a file", .0.display())]
    DestinationIsDirectory(PathBuf),

    #[error("Could not move {} to {}: {message}", .from.display(), .to.display())]
    Mutation {
        from: PathBuf,
        to: PathBuf,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("could not read user input: {0}")]
    Input(#[source] io::Error),

    #[error("could not list directory {}: {message}", .dir.display())]
    Listing { dir: PathBuf, message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl SmvError {
    /// Process exit code for this error class.
    pub fn code(&self) -> i32 {
        match self {
            SmvError::Io { .. } => 1,
            SmvError::Usage(_) => 2,
            SmvError::SourceNotFound(_) => 3,
            SmvError::SourceIsDirectory(_) => 4,
            SmvError::TargetNotDirectory(_) => 5,
            SmvError::InvalidPattern { .. } => 6,
            SmvError::DestinationIsDirectory(_) => 7,
            SmvError::Mutation { .. } => 8,
            SmvError::Input(_) => 9,
            SmvError::Listing { .. } => 10,
            SmvError::Interrupted => 130,
        }
    }

    /// Short machine-friendly kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SmvError::Usage(_) => "usage",
            SmvError::SourceNotFound(_) => "source_not_found",
            SmvError::SourceIsDirectory(_) => "source_is_directory",
            SmvError::TargetNotDirectory(_) => "target_not_directory",
            SmvError::InvalidPattern { .. } => "invalid_pattern",
            SmvError::DestinationIsDirectory(_) => "destination_is_directory",
            SmvError::Mutation { .. } => "mutation",
            SmvError::Input(_) => "input",
            SmvError::Listing { .. } => "listing",
            SmvError::Io { .. } => "io",
            SmvError::Interrupted => "interrupted",
        }
    }

    /// True for the errors raised before anything is touched on disk.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            SmvError::SourceNotFound(_)
                | SmvError::SourceIsDirectory(_)
                | SmvError::TargetNotDirectory(_)
                | SmvError::InvalidPattern { .. }
                | SmvError::DestinationIsDirectory(_)
        )
    }
}
