//! Filesystem operations: classification, resolution, pattern expansion,
//! batch planning, the rename primitive and the move session.

mod atomic;
mod batch;
mod classify;
mod entry;
mod helpers;
mod pattern;
mod resolve;

pub use atomic::{DryRunMutator, Mutator, RenameMutator, try_atomic_move};
pub use batch::{BatchEntry, BatchPlan, BatchReport, Outcome, PlannedMove, ensure_target_dir, plan, plan_from};
pub use classify::{PreExisting, classify};
pub use entry::MoveSession;
pub use helpers::{describe_io_error, io_error_with_help, mutation_error};
pub use pattern::{PatternSpec, compile_pattern, expand};
pub use resolve::{ResolvedMove, absolutize_from, ensure_movable_source, resolve, resolve_from};
