//! Confirmation gate.
//! - `decide` maps what already sits at the destination to an overwrite decision.
//! - `apply_answer` turns a decision plus the user's yes/no into proceed/abort.
//! - `Asker` is the prompt collaborator; `StdinAsker` is the interactive one.
//!
//! Both policy functions are pure; only the asker does I/O.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::fs_ops::PreExisting;
use crate::shutdown;

pub const OVERWRITE_QUESTION: &str = "Do you wish to overwrite the destination file? (y|n) ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Nothing at the destination.
    None,
    /// An existing file would be replaced; ask first.
    ConfirmRequired,
    /// A directory sits at the destination; never attempted.
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Proceed,
    Abort,
}

pub fn decide(existing: PreExisting) -> OverwriteDecision {
    match existing {
        PreExisting::Absent => OverwriteDecision::None,
        PreExisting::ExistingFile => OverwriteDecision::ConfirmRequired,
        PreExisting::ExistingDirectory => OverwriteDecision::Blocked,
    }
}

pub fn apply_answer(decision: OverwriteDecision, answer: bool) -> Action {
    match (decision, answer) {
        (OverwriteDecision::None, _) => Action::Proceed,
        (OverwriteDecision::ConfirmRequired, true) => Action::Proceed,
        _ => Action::Abort,
    }
}

/// Anything that can put a yes/no question to the user.
pub trait Asker {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Exact `y` after trimming is the only affirmative answer.
#[inline]
pub fn is_affirmative(line: &str) -> bool {
    line.trim() == "y"
}

/// Prompts on stdout and reads one line from stdin. End of input counts as "no".
#[derive(Debug, Default)]
pub struct StdinAsker;

impl Asker for StdinAsker {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(question.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let _waiting = shutdown::AwaitingInput::enter();
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(is_affirmative(&line))
    }
}

/// Replays queued answers and records every question asked.
/// Running out of answers behaves like end of input: "no".
#[derive(Debug, Default)]
pub struct ScriptedAsker {
    answers: VecDeque<io::Result<bool>>,
    pub questions: Vec<String>,
}

impl ScriptedAsker {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().map(Ok).collect(),
            questions: Vec::new(),
        }
    }

    /// An asker whose next read fails with `kind`.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            answers: VecDeque::from([Err(io::Error::from(kind))]),
            questions: Vec::new(),
        }
    }
}

impl Asker for ScriptedAsker {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or(Ok(false))
    }
}
