//! The error taxonomy of the project creation pipeline
//!
//! Every failure that the user may act upon is represented here as a typed value, so
//! the orchestration layers can wrap them on [`color_eyre::Report`]s with extra context
//! while callers (and tests) are still able to recover the concrete kind with
//! `Report::downcast_ref`.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Rejections of the user input. The user must correct the form before retrying
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("The project name must not be empty")]
    EmptyName,

    #[error("The project name is too long ({0} characters, the maximum is 255)")]
    NameTooLong(usize),

    #[error("The project name contains the character {0:?}. Only letters, digits, '_' and '-' are allowed")]
    InvalidChars(char),

    #[error("The parent path {0:?} does not exist or is not a directory")]
    PathNotFound(PathBuf),

    #[error("The project directory {0:?} already exists")]
    AlreadyExists(PathBuf),
}

/// Why a subprocess did not finish successfully
#[derive(Debug, Error)]
pub enum ProcessFailure {
    #[error("could not be started: {0}")]
    Spawn(#[source] io::Error),

    #[error("returned {code}{}", stderr_suffix(.stderr))]
    Exit { code: i32, stderr: String },

    #[error("was terminated by an external signal")]
    Signal,
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{tool} is not installed or not runnable (\"{probe}\" {failure})")]
    ToolchainMissing {
        tool: String,
        probe: String,
        #[source]
        failure: ProcessFailure,
    },

    #[error("{step} failed: \"{command}\" {failure}")]
    SubprocessFailed {
        step: String,
        command: String,
        #[source]
        failure: ProcessFailure,
    },

    #[error("{context} {path:?}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not launch the terminal emulator {terminal}")]
    TerminalLaunchFailed {
        terminal: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not access the configuration file {path:?}")]
    ConfigIoFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// The validation rejection behind this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ScaffoldError::Validation(kind) => Some(kind),
            _ => None,
        }
    }
}
