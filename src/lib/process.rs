//! The seam between `kickoff` and the external executables it drives (compilers,
//! package managers, git...).
//!
//! Every [`Invocation`] carries the directory where it must be run, so the working
//! directory of the `kickoff` process itself is never changed.

use std::{
    fmt,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use crate::domain::ProcessFailure;

/// A fully resolved command line, ready to be executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs an [`Invocation`] to completion, blocking the caller until the child exits
pub trait CommandRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessFailure>;
}

/// The [`CommandRunner`] that really spawns processes on the host system.
///
/// The child output is captured: stdout goes to the trace log, and the tail of stderr is
/// attached to the failure when the child doesn't exit successfully
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

/// How many trailing stderr lines are kept on a [`ProcessFailure::Exit`]
const STDERR_TAIL_LINES: usize = 5;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessFailure> {
        log::debug!(
            "Executing command => {invocation:?} on {:?}",
            invocation.cwd.as_deref().unwrap_or(Path::new("."))
        );

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        let output = command.output().map_err(ProcessFailure::Spawn)?;
        log_output(invocation, &output);

        match output.status.code() {
            Some(0) => Ok(()),
            None => Err(ProcessFailure::Signal),
            Some(code) => Err(ProcessFailure::Exit {
                code,
                stderr: stderr_tail(&output.stderr),
            }),
        }
    }
}

fn log_output(invocation: &Invocation, output: &Output) {
    if !output.stdout.is_empty() {
        log::trace!(
            "[{}] stdout:\n{}",
            invocation.program,
            String::from_utf8_lossy(&output.stdout).trim_end()
        );
    }
    if !output.stderr.is_empty() {
        log::trace!(
            "[{}] stderr:\n{}",
            invocation.program,
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join(" | ")
}
