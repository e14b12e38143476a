//! Application orchestrator.
//! Turns Args into an Invocation, initializes logging, installs the interrupt
//! handler, and runs the single-file or pattern move. Errors travel back to
//! `main`, which owns the exit code.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use smv::cli::{Args, usage};
use smv::fs_ops::{DryRunMutator, MoveSession, Mutator, Outcome, PatternSpec, RenameMutator, ensure_target_dir};
use smv::output as out;
use smv::{Invocation, SmvError, StdinAsker, shutdown};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let invocation = args.invocation()?;
    if invocation == Invocation::Help {
        out::print_user(&usage());
        return Ok(());
    }

    let cfg = args.config();

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            if shutdown::is_awaiting_input() {
                // Blocked on the prompt: nothing has been renamed for this file yet.
                out::print_warn("Interrupted at prompt; move aborted.");
                if let Ok(mut g) = guard_slot.lock() {
                    let _ = g.take();
                }
                std::process::exit(SmvError::Interrupted.code());
            }
            out::print_warn("Received interrupt; stopping after the current file...");
        })?;
    }

    debug!(?invocation, ?cfg, "Starting smv");

    let mut asker = StdinAsker;
    let mut rename = RenameMutator;
    let mut dry = DryRunMutator::default();
    let mutator: &mut dyn Mutator = if cfg.dry_run { &mut dry } else { &mut rename };
    let mut session = MoveSession::new(&mut asker, mutator).dry_run(cfg.dry_run);

    let result = match invocation {
        Invocation::Single { source, target } => session.move_one(&source, &target).map(|outcome| {
            info!(source = %source.display(), target = %target.display(), ?outcome, "Move finished");
        }),
        Invocation::Pattern {
            pattern,
            search_dir,
            target_dir,
        } => run_pattern(&mut session, &pattern, search_dir, &target_dir),
        Invocation::Help => Ok(()),
    };

    if let Err(e) = &result {
        debug!(code = e.code(), kind = e.kind(), error = %e, "smv failed");
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result.map_err(Into::into)
}

fn run_pattern(
    session: &mut MoveSession<'_>,
    pattern: &str,
    search_dir: PathBuf,
    target_dir: &Path,
) -> smv::Result<()> {
    // Both checks happen before the directory is listed.
    ensure_target_dir(target_dir)?;
    let spec = PatternSpec::new(pattern, search_dir)?;
    out::print_info(&format!("Running pattern match... {}", spec.raw()));

    let report = session.move_matching(&spec, target_dir)?;
    if report.is_no_match() {
        out::print_info("No files found in the search directory that match that regex.");
        return Ok(());
    }

    let mut summary = format!("{} moved, {} aborted, {} failed", report.moved(), report.aborted(), report.failed());
    if report.unchanged() > 0 {
        summary.push_str(&format!(", {} already in place", report.unchanged()));
    }
    out::print_info(&summary);
    for entry in &report.entries {
        if let Outcome::Failed(e) = &entry.outcome {
            info!(file = %entry.file, kind = e.kind(), error = %e, "file skipped");
        }
    }
    Ok(())
}
