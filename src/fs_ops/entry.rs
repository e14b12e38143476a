//! Move session: drives a resolved move through the confirmation gate and
//! the mutator, and runs the single-file and pattern entry points.
//!
//! Per move: resolve -> decide -> (ask at most once) -> rename | abort.
//! In pattern mode a file that fails to resolve is recorded and skipped,
//! while a failed rename or a broken input stream ends the whole run.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::errors::{Result, SmvError};
use crate::gate::{Action, Asker, OVERWRITE_QUESTION, OverwriteDecision, apply_answer, decide};
use crate::output as out;
use crate::shutdown;

use super::atomic::Mutator;
use super::batch::{BatchReport, Outcome, ensure_target_dir, plan};
use super::pattern::{PatternSpec, expand};
use super::resolve::{ResolvedMove, resolve};

pub struct MoveSession<'a> {
    asker: &'a mut dyn Asker,
    mutator: &'a mut dyn Mutator,
    dry_run: bool,
}

impl<'a> MoveSession<'a> {
    pub fn new(asker: &'a mut dyn Asker, mutator: &'a mut dyn Mutator) -> Self {
        Self {
            asker,
            mutator,
            dry_run: false,
        }
    }

    /// Report moves as "would move" instead of "DONE!". The mutator decides what actually happens.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rename or move a single file.
    pub fn move_one(&mut self, source: &Path, target: &Path) -> Result<Outcome> {
        let resolved = resolve(source, target)?;
        self.apply(&resolved)
    }

    /// Move every matching file of `spec.search_dir` into `target_dir`.
    /// The target is checked before the directory is even listed.
    pub fn move_matching(&mut self, spec: &PatternSpec, target_dir: &Path) -> Result<BatchReport> {
        ensure_target_dir(target_dir)?;

        let files = expand(&spec.regex, &spec.search_dir)?;
        let mut report = BatchReport::default();
        if files.is_empty() {
            info!(pattern = spec.raw(), dir = %spec.search_dir.display(), "no matching files");
            return Ok(report);
        }

        for planned in plan(files, &spec.search_dir, target_dir)? {
            if shutdown::is_requested() {
                warn!(done = report.entries.len(), "batch interrupted");
                return Err(SmvError::Interrupted);
            }

            out::print_user(&format!("File: {}", planned.file));
            let outcome = match planned.resolution {
                Ok(resolved) => match self.apply(&resolved) {
                    Ok(outcome) => outcome,
                    Err(e @ SmvError::DestinationIsDirectory(_)) => Outcome::Failed(e),
                    Err(e) => return Err(e),
                },
                Err(e) => Outcome::Failed(e),
            };
            if let Outcome::Failed(e) = &outcome {
                out::print_error(&e.to_string());
            }
            report.push(planned.file, outcome);
        }

        debug!(
            moved = report.moved(),
            aborted = report.aborted(),
            failed = report.failed(),
            "batch finished"
        );
        Ok(report)
    }

    /// Take one resolved move to its terminal state.
    pub fn apply(&mut self, resolved: &ResolvedMove) -> Result<Outcome> {
        // Paths are lexically normalized, so `smv a.txt .` lands here.
        if resolved.source == resolved.destination {
            out::print_info(&format!(
                "{} is already in place; nothing to do.",
                resolved.destination.display()
            ));
            debug!(path = %resolved.source.display(), "source and destination are the same path");
            return Ok(Outcome::Unchanged);
        }

        let decision = decide(resolved.existing);
        if decision == OverwriteDecision::Blocked {
            return Err(SmvError::DestinationIsDirectory(resolved.destination.clone()));
        }

        announce(resolved);

        let answer = if decision == OverwriteDecision::ConfirmRequired {
            // Stays on stdout, right above the prompt it explains.
            if resolved.into_directory {
                out::print_user(&format!(
                    "WARNING: a {} already exists in that directory...",
                    resolved.file_name()
                ));
            } else {
                out::print_user("WARNING: a file with that name already exists...");
            }
            self.asker.confirm(OVERWRITE_QUESTION).map_err(SmvError::Input)?
        } else {
            false
        };

        match apply_answer(decision, answer) {
            Action::Proceed => {
                self.mutator.rename(&resolved.source, &resolved.destination)?;
                if self.dry_run {
                    out::print_info(&format!(
                        "Dry-run: would move '{}' -> '{}'",
                        resolved.source.display(),
                        resolved.destination.display()
                    ));
                } else {
                    out::print_success("DONE!");
                }
                Ok(Outcome::Moved)
            }
            Action::Abort => {
                out::print_info("Move aborted...");
                info!(src = %resolved.source.display(), dest = %resolved.destination.display(), "overwrite declined");
                Ok(Outcome::Aborted)
            }
        }
    }
}

fn announce(resolved: &ResolvedMove) {
    if resolved.into_directory {
        let folder = resolved.destination.parent().unwrap_or(&resolved.destination);
        out::print_info(&format!(
            "Moving {} to folder {}...",
            resolved.file_name(),
            folder.display()
        ));
    } else {
        out::print_info(&format!("Renaming source to {}...", resolved.destination.display()));
    }
}
