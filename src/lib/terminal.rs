//! Launches a terminal emulator on a freshly created project.
//!
//! The terminal starts on the project directory, announces and runs the suggested
//! command through `bash`, and then stays open on an interactive shell. The emulator
//! process is detached: `kickoff` neither waits for it nor tracks its lifetime.

use core::fmt;
use std::{
    path::Path,
    process::{Command, Stdio},
};

use clap::ValueEnum;

use crate::domain::ScaffoldError;

/// The terminal emulators that `kickoff` knows how to pre-fill with a command
#[derive(Debug, PartialEq, Eq, Copy, Clone, ValueEnum, Default)]
pub enum TerminalEmulator {
    #[default]
    Wezterm,
    GnomeTerminal,
    Konsole,
    Kitty,
    Alacritty,
    Xterm,
}

impl TerminalEmulator {
    /// The executable launched for this emulator
    pub fn program(&self) -> &'static str {
        match *self {
            TerminalEmulator::Wezterm => "wezterm",
            TerminalEmulator::GnomeTerminal => "gnome-terminal",
            TerminalEmulator::Konsole => "konsole",
            TerminalEmulator::Kitty => "kitty",
            TerminalEmulator::Alacritty => "alacritty",
            TerminalEmulator::Xterm => "xterm",
        }
    }

    /// The emulator specific flags that select the working directory and the program
    /// to execute. The returned arguments are followed by the shell invocation
    fn leading_args(&self, directory: &Path) -> Vec<String> {
        let dir = directory.to_string_lossy().into_owned();
        match *self {
            TerminalEmulator::Wezterm => vec![
                "start".into(),
                "--cwd".into(),
                dir,
                "--always-new-process".into(),
                "--".into(),
            ],
            TerminalEmulator::GnomeTerminal => {
                vec![format!("--working-directory={dir}"), "--".into()]
            }
            TerminalEmulator::Konsole => vec!["--workdir".into(), dir, "-e".into()],
            TerminalEmulator::Kitty => vec!["--directory".into(), dir],
            TerminalEmulator::Alacritty => {
                vec!["--working-directory".into(), dir, "-e".into()]
            }
            // xterm has no working directory flag; it inherits the one of the process
            TerminalEmulator::Xterm => vec!["-e".into()],
        }
    }
}

impl fmt::Display for TerminalEmulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Wraps `raw` on single quotes, so the shell takes it as one literal word
pub fn shell_quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', r"'\''"))
}

/// The script run by `bash` inside the terminal
pub fn shell_script(command: &str) -> String {
    format!(
        "echo {}; {command}; exec bash",
        shell_quote(&format!("Running: {command}"))
    )
}

/// Builds, without spawning it, the process that opens `emulator` on `directory`
/// running `command`
pub fn terminal_command(emulator: TerminalEmulator, directory: &Path, command: &str) -> Command {
    let mut process = Command::new(emulator.program());
    process
        .args(emulator.leading_args(directory))
        .arg("bash")
        .arg("-c")
        .arg(shell_script(command))
        .current_dir(directory)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    process
}

/// Spawns the terminal and returns as soon as it's started
pub fn open_terminal(
    emulator: TerminalEmulator,
    directory: &Path,
    command: &str,
) -> Result<(), ScaffoldError> {
    log::info!("Opening {emulator} on {directory:?} with: {command}");
    spawn_detached(
        terminal_command(emulator, directory, command),
        emulator.program(),
    )
}

fn spawn_detached(mut process: Command, terminal: &str) -> Result<(), ScaffoldError> {
    process
        .spawn()
        .map(|child| log::debug!("{terminal} started with pid {}", child.id()))
        .map_err(|source| ScaffoldError::TerminalLaunchFailed {
            terminal: terminal.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    fn args_of(command: &Command) -> Vec<&OsStr> {
        command.get_args().collect()
    }

    #[test]
    fn test_wezterm_command_line() {
        let dir = Path::new("/tmp/svc1");
        let command = terminal_command(TerminalEmulator::Wezterm, dir, "go run .");

        assert_eq!(command.get_program(), "wezterm");
        assert_eq!(command.get_current_dir(), Some(dir));
        assert_eq!(
            args_of(&command),
            vec![
                "start",
                "--cwd",
                "/tmp/svc1",
                "--always-new-process",
                "--",
                "bash",
                "-c",
                "echo 'Running: go run .'; go run .; exec bash",
            ]
        );
    }

    #[test]
    fn test_every_emulator_ends_with_the_shell_script() {
        let dir = Path::new("/tmp/cx");
        for emulator in TerminalEmulator::value_variants() {
            let command = terminal_command(*emulator, dir, "make");
            let args = args_of(&command);
            let tail = &args[args.len() - 3..];
            assert_eq!(tail[0], "bash");
            assert_eq!(tail[1], "-c");
            assert_eq!(tail[2], "echo 'Running: make'; make; exec bash");
        }
    }

    #[test]
    fn test_shell_quote_escapes_single_quotes() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote("plain"), "'plain'");
    }

    #[test]
    fn test_missing_emulator_is_reported() {
        let process = Command::new("kickoff-surely-missing-terminal");
        match spawn_detached(process, "kickoff-surely-missing-terminal") {
            Err(ScaffoldError::TerminalLaunchFailed { terminal, .. }) => {
                assert_eq!(terminal, "kickoff-surely-missing-terminal")
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}
