pub mod cli;
pub mod config;
pub mod domain;
pub mod process;
pub mod scaffold;
pub mod session;
pub mod terminal;
pub mod toolchain;
pub mod utils;
pub mod validator;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};
    use std::sync::{mpsc, Arc};
    use std::time::Instant;

    use color_eyre::eyre::{eyre, Context};
    use color_eyre::Result;
    use serde::Serialize;

    use crate::utils::constants::error_messages;
    use crate::{
        cli::{
            input::{CliArgs, Command},
            output,
        },
        config::ConfigStore,
        domain::{Language, ProjectRequest, ScaffoldError, ValidationError},
        process::{CommandRunner, SystemRunner},
        scaffold::{self, git, ProjectPlan, StepReporter},
        session::Session,
        terminal::{self, TerminalEmulator},
        toolchain, utils, validator,
    };

    /// The knobs of a project creation that aren't part of the [`ProjectRequest`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CreationOptions {
        pub git: bool,
        pub open_terminal: bool,
        pub terminal: TerminalEmulator,
    }

    impl Default for CreationOptions {
        fn default() -> Self {
            Self {
                git: false,
                open_terminal: true,
                terminal: TerminalEmulator::default(),
            }
        }
    }

    /// Opens a terminal emulator on a directory, running a command on it
    pub type TerminalOpener<'a> =
        &'a (dyn Fn(TerminalEmulator, &Path, &str) -> Result<(), ScaffoldError> + Sync);

    /// What a successful creation leaves behind
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct CreatedProject {
        pub name: String,
        pub language: Language,
        pub project_dir: PathBuf,
        pub run_command: &'static str,
        /// Regular files below the project directory once every step finished
        pub files: usize,
    }

    /// Runs the tasks inputted in the CLI, spawning real processes
    pub fn run_kickoff(cli_args: &CliArgs) -> Result<()> {
        run_kickoff_with(cli_args, Arc::new(SystemRunner))
    }

    /// Same as [`run_kickoff`], but every external command goes through `runner`
    pub fn run_kickoff_with(cli_args: &CliArgs, runner: Arc<dyn CommandRunner>) -> Result<()> {
        let config = config_store(cli_args)?;

        match &cli_args.command {
            Command::New {
                name,
                lang,
                parent,
                git,
                no_terminal,
                terminal,
                dry_run,
                json,
            } => {
                let options = CreationOptions {
                    git: *git,
                    open_terminal: !no_terminal,
                    terminal: *terminal,
                };
                let mut session = Session::new(config);
                let request =
                    fill_session(&mut session, name, *lang, parent.as_deref(), !dry_run)?;

                if *dry_run {
                    let plan = ProjectPlan::new(&request, options.git);
                    return output::print_plan(&plan, *json)
                        .with_context(|| error_messages::FAILURE_SERIALIZING_PLAN);
                }

                create_in_background(&mut session, options, runner)
            }
            Command::Path { dir } => match dir {
                Some(dir) => save_parent_path(&config, dir),
                None => {
                    match config.load_last_path() {
                        Some(path) => println!("{}", path.display()),
                        None => println!("No parent path saved yet"),
                    }
                    Ok(())
                }
            },
            Command::Languages => {
                output::print_languages();
                Ok(())
            }
        }
    }

    /// The creation pipeline: validation, toolchain checks, materialization, the optional
    /// git repository and finally the terminal.
    ///
    /// The first failure is returned as is. Validation and toolchain failures happen
    /// before anything is written; later failures leave the partial project on disk.
    /// Failing to open the terminal is only logged
    pub fn create_project(
        request: &ProjectRequest,
        options: &CreationOptions,
        runner: &dyn CommandRunner,
        report: StepReporter<'_>,
    ) -> Result<CreatedProject> {
        create_project_with(request, options, runner, report, &terminal::open_terminal)
    }

    /// Same as [`create_project`], but the terminal is opened through `open_terminal`
    pub fn create_project_with(
        request: &ProjectRequest,
        options: &CreationOptions,
        runner: &dyn CommandRunner,
        report: StepReporter<'_>,
        open_terminal: TerminalOpener<'_>,
    ) -> Result<CreatedProject> {
        log::info!(
            "Creating the {} project {:?} on {:?}",
            request.language,
            request.project_name,
            request.parent_path
        );
        let profile = scaffold::profile_for(request.language);
        let project_dir = request.project_dir();

        report("Validating the project");
        validator::validate(&request.project_name, &request.parent_path)
            .map_err(ScaffoldError::from)?;

        report("Checking the toolchain");
        toolchain::check_toolchain(request.language, runner)?;
        if options.git {
            toolchain::check_probes(&[toolchain::GIT], runner)?;
        }

        profile.materialize(request, runner, report)?;

        if options.git {
            git::initialize_git_repository(request, runner, report)?;
        }

        let files = utils::fs::count_files(&project_dir);
        log::info!("Project created on {project_dir:?} ({files} files)");

        if options.open_terminal {
            report("Opening a terminal");
            if let Err(e) = open_terminal(options.terminal, &project_dir, profile.run_command) {
                log::warn!("{e}");
            }
        }

        Ok(CreatedProject {
            name: request.project_name.clone(),
            language: request.language,
            project_dir,
            run_command: profile.run_command,
            files,
        })
    }

    fn config_store(cli_args: &CliArgs) -> Result<ConfigStore> {
        match &cli_args.config {
            Some(path) => Ok(ConfigStore::new(path)),
            None => ConfigStore::at_default_location()
                .with_context(|| error_messages::FAILURE_LOADING_CONFIG_LOCATION),
        }
    }

    /// Feeds the command line inputs to the form, exactly as a user would do it.
    /// The given parent path is only persisted when `persist` is set
    fn fill_session(
        session: &mut Session,
        name: &str,
        language: Language,
        parent: Option<&Path>,
        persist: bool,
    ) -> Result<ProjectRequest> {
        let now = Instant::now();
        session.select_language(language);

        if let Some(parent) = parent {
            let parent = utils::fs::absolute_path(parent);
            if persist {
                session.choose_parent_path(&parent);
            } else {
                session.set_parent_path(&parent);
            }
        }
        if session.parent_path().is_none() {
            return Err(ScaffoldError::from(ValidationError::PathNotFound(PathBuf::new())))
                .with_context(|| error_messages::NO_PARENT_PATH);
        }

        session
            .edit_project_name(name, now)
            .map_err(ScaffoldError::from)?;
        Ok(session.request().map_err(ScaffoldError::from)?)
    }

    fn create_in_background(
        session: &mut Session,
        options: CreationOptions,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<()> {
        let spinner = output::spinner("Creating the project...");
        let step_spinner = spinner.clone();
        let (sender, receiver) = mpsc::channel();

        let handle = session.start_create(
            options,
            runner,
            move |step| step_spinner.set_message(step.to_string()),
            move |result| {
                // The receiver only goes away if the front end is already gone
                let _ = sender.send(result);
            },
            Instant::now(),
        )?;

        let result = receiver
            .recv()
            .with_context(|| error_messages::BACKGROUND_TASK_LOST)?;
        handle
            .join()
            .map_err(|_| eyre!(error_messages::BACKGROUND_TASK_LOST))?;

        let now = Instant::now();
        session.finish_create(&result, now);
        let status = session.status().visible(now).unwrap_or_default().to_string();

        match result {
            Ok(created) => {
                output::spinner_success(&spinner, &status);
                output::hint("project:", &created.project_dir.to_string_lossy());
                output::hint("run with:", created.run_command);
                Ok(())
            }
            Err(e) => {
                output::spinner_error(&spinner, &status);
                Err(e).with_context(|| error_messages::FAILURE_CREATING_PROJECT)
            }
        }
    }

    fn save_parent_path(config: &ConfigStore, dir: &Path) -> Result<()> {
        let dir = utils::fs::absolute_path(dir);
        if !dir.is_dir() {
            return Err(ScaffoldError::from(ValidationError::PathNotFound(dir)).into());
        }
        config.save_last_path(&dir)?;
        println!("{}", dir.display());
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use color_eyre::Result;
        use tempfile::tempdir;

        use crate::scaffold::silent;
        use crate::utils::test::RecordingRunner;

        use super::*;

        fn offline() -> CreationOptions {
            CreationOptions {
                open_terminal: false,
                ..Default::default()
            }
        }

        fn validation_kind(err: &color_eyre::Report) -> Option<&ValidationError> {
            err.downcast_ref::<ScaffoldError>()
                .and_then(ScaffoldError::as_validation)
        }

        #[test]
        fn test_existing_target_fails_before_any_work() -> Result<()> {
            let temp = tempdir()?;
            let existing = temp.path().join("demo");
            std::fs::create_dir(&existing)?;
            let runner = RecordingRunner::default();

            let request = ProjectRequest::new(temp.path(), "demo", Language::Go);
            let err = create_project(&request, &offline(), &runner, &silent).unwrap_err();

            assert_eq!(
                validation_kind(&err),
                Some(&ValidationError::AlreadyExists(existing.clone()))
            );
            assert!(runner.commands().is_empty());
            assert_eq!(std::fs::read_dir(&existing)?.count(), 0);
            Ok(())
        }

        #[test]
        fn test_missing_toolchain_creates_nothing() -> Result<()> {
            let temp = tempdir()?;
            let runner = RecordingRunner::failing_on("javac");

            let request = ProjectRequest::new(temp.path(), "jv", Language::Java);
            let err = create_project(&request, &offline(), &runner, &silent).unwrap_err();

            assert!(matches!(
                err.downcast_ref::<ScaffoldError>(),
                Some(ScaffoldError::ToolchainMissing { .. })
            ));
            assert!(!temp.path().join("jv").exists());
            Ok(())
        }

        #[test]
        fn test_git_is_probed_and_initialized_on_request() -> Result<()> {
            let temp = tempdir()?;
            let runner = RecordingRunner::default();
            let options = CreationOptions {
                git: true,
                ..offline()
            };

            let request = ProjectRequest::new(temp.path(), "cx", Language::CPlusPlus);
            let created = create_project(&request, &options, &runner, &silent)?;

            assert_eq!(
                runner.commands(),
                vec![
                    "g++ --version",
                    "git --version",
                    "git init",
                    "git add .",
                    "git commit -m Initial commit",
                ]
            );
            assert_eq!(created.files, 3);
            assert_eq!(created.run_command, "cd build && cmake .. && make");
            Ok(())
        }

        #[test]
        fn test_unlaunchable_terminal_does_not_fail_the_creation() -> Result<()> {
            let temp = tempdir()?;
            let runner = RecordingRunner::default();
            let options = CreationOptions {
                terminal: TerminalEmulator::Kitty,
                ..Default::default()
            };
            let launches = std::sync::Mutex::new(Vec::new());
            let missing_terminal = |emulator: TerminalEmulator,
                                    dir: &Path,
                                    command: &str|
             -> std::result::Result<(), ScaffoldError> {
                launches
                    .lock()
                    .unwrap()
                    .push((emulator, dir.to_path_buf(), command.to_string()));
                Err(ScaffoldError::TerminalLaunchFailed {
                    terminal: emulator.to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            };

            let request = ProjectRequest::new(temp.path(), "cx", Language::CPlusPlus);
            let created =
                create_project_with(&request, &options, &runner, &silent, &missing_terminal)?;

            assert_eq!(created.project_dir, temp.path().join("cx"));
            assert_eq!(
                launches.into_inner().unwrap(),
                vec![(
                    TerminalEmulator::Kitty,
                    temp.path().join("cx"),
                    String::from("cd build && cmake .. && make")
                )]
            );
            Ok(())
        }

        #[test]
        fn test_missing_git_stops_before_creating_files() -> Result<()> {
            let temp = tempdir()?;
            let runner = RecordingRunner::failing_on("git");
            let options = CreationOptions {
                git: true,
                ..offline()
            };

            let request = ProjectRequest::new(temp.path(), "cx", Language::CPlusPlus);
            assert!(create_project(&request, &options, &runner, &silent).is_err());
            assert!(!temp.path().join("cx").exists());
            Ok(())
        }
    }
}
