//! Core library for `smv`.
//!
//! Resolves what a move would do (final destination, what already sits there),
//! decides whether the user must confirm an overwrite, and carries the move
//! out. The binary is a thin shell around [`MoveSession`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod gate;
pub mod output;
pub mod shutdown;

pub use config::{Config, Invocation, LogLevel};
pub use errors::{Result, SmvError};
pub use fs_ops::{
    BatchReport, DryRunMutator, MoveSession, Mutator, Outcome, PatternSpec, PreExisting, RenameMutator,
    ResolvedMove, expand, plan, resolve,
};
pub use gate::{Action, Asker, OverwriteDecision, ScriptedAsker, StdinAsker, apply_answer, decide};
