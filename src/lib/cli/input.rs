//! The command line interface of `kickoff`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Language;
use crate::terminal::TerminalEmulator;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use kickoff::cli::input::{CliArgs, Command};
/// use kickoff::domain::Language;
/// use kickoff::terminal::TerminalEmulator;
///
/// let parser = CliArgs::parse_from(["", "-v", "languages"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Languages);
///
/// let parser = CliArgs::parse_from(["", "new", "svc1", "--lang", "go", "--git"]);
/// match parser.command {
///     Command::New { name, lang, git, terminal, no_terminal, .. } => {
///         assert_eq!(name, "svc1");
///         assert_eq!(lang, Language::Go);
///         assert!(git);
///         assert!(!no_terminal);
///         assert_eq!(terminal, TerminalEmulator::Wezterm);
///     }
///     _ => panic!("expected the new command"),
/// }
/// ```
#[derive(Parser, Debug)]
#[command(name = "kickoff")]
#[command(author = "Zero Day Code")]
#[command(version)]
#[command(
    about = "kickoff scaffolds new projects and opens a terminal ready to run them",
    long_about = "kickoff creates the directory skeleton of a new project, writes its boilerplate, \
    runs the language toolchain to initialize it and launches a terminal on it"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "kickoff maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(
        long,
        global = true,
        help = "Use this file to persist the last parent path instead of ~/.config/kickoff_project_path"
    )]
    pub config: Option<PathBuf>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Creates a new project
    New {
        #[arg(help = "Name of the project. Only letters, digits, '_' and '-' are allowed")]
        name: String,
        #[arg(short, long, value_enum, help = "The language of the new project")]
        lang: Language,
        #[arg(
            short,
            long,
            help = "Directory where the project is created. Defaults to the last one used"
        )]
        parent: Option<PathBuf>,
        #[arg(long, help = "Initialize a git repository with an initial commit")]
        git: bool,
        #[arg(long, help = "Don't open a terminal on the new project")]
        no_terminal: bool,
        #[arg(long, value_enum, default_value_t = TerminalEmulator::Wezterm, help = "Which terminal emulator to open")]
        terminal: TerminalEmulator,
        #[arg(long, help = "Only show what would be created")]
        dry_run: bool,
        #[arg(long, requires = "dry_run", help = "Print the preview as JSON")]
        json: bool,
    },
    /// Shows the saved parent path, or saves a new one
    Path { dir: Option<PathBuf> },
    /// Lists the supported languages
    Languages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_command_defaults() {
        let args = CliArgs::parse_from(["", "new", "cx", "-l", "c++"]);
        assert_eq!(
            args.command,
            Command::New {
                name: String::from("cx"),
                lang: Language::CPlusPlus,
                parent: None,
                git: false,
                no_terminal: false,
                terminal: TerminalEmulator::Wezterm,
                dry_run: false,
                json: false,
            }
        );
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_global_flags_after_the_subcommand() {
        let args = CliArgs::parse_from(["", "path", "/tmp", "--config", "/tmp/cfg", "-v"]);
        assert_eq!(args.command, Command::Path { dir: Some(PathBuf::from("/tmp")) });
        assert_eq!(args.config, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(args.verbose, 1);
    }

    #[test]
    fn test_json_requires_dry_run() {
        let result = CliArgs::try_parse_from(["", "new", "x", "--lang", "go", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_choice() {
        let args = CliArgs::parse_from([
            "", "new", "x", "--lang", "rust", "--terminal", "gnome-terminal",
        ]);
        match args.command {
            Command::New { terminal, .. } => assert_eq!(terminal, TerminalEmulator::GnomeTerminal),
            other => panic!("Unexpected command: {other:?}"),
        }
    }
}
