//! Materialization of new projects.
//!
//! Every supported [`Language`] is described by a static [`LanguageProfile`]: the
//! directories to create, the template files to write, the ordered setup commands
//! to run inside the new project and the command that the user will run afterwards.
//! [`profile_for`] is the only dispatch point, so the behaviour of each language lives
//! isolated on its own module.
//!
//! Materialization stops on the first failing step. What was already created is kept
//! on the filesystem, so the user must remove the project directory before retrying.

pub mod git;
pub mod plan;

mod cpp;
mod csharp;
mod go;
mod java;
mod javascript;
mod python;
mod rust;
mod typescript;

use std::{ffi::OsStr, path::Path};

use crate::domain::{Language, ProjectRequest, ScaffoldError};
use crate::process::{CommandRunner, Invocation};
use crate::toolchain::ToolProbe;
use crate::utils::{
    self,
    template::{TemplateFile, PROJECT_DIR_PLACEHOLDER, PROJECT_NAME_PLACEHOLDER},
};

pub use plan::ProjectPlan;

/// Receives a short, human readable description of every step as it starts
pub type StepReporter<'a> = &'a (dyn Fn(&str) + Sync);

/// A reporter that discards every message
pub fn silent(_: &str) {}

/// One external command run inside the new project directory while scaffolding it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupStep {
    pub description: &'static str,
    /// May contain the [`PROJECT_DIR_PLACEHOLDER`]
    pub program: &'static str,
    /// May contain both the [`PROJECT_NAME_PLACEHOLDER`] and the [`PROJECT_DIR_PLACEHOLDER`]
    pub args: &'static [&'static str],
}

impl SetupStep {
    pub const fn new(
        description: &'static str,
        program: &'static str,
        args: &'static [&'static str],
    ) -> Self {
        Self {
            description,
            program,
            args,
        }
    }

    /// The concrete command line of this step for the given request, rooted at the
    /// project directory
    pub fn invocation(&self, request: &ProjectRequest) -> Invocation {
        let project_dir = request.project_dir();
        let dir = project_dir.to_string_lossy();
        let expand = |raw: &str| {
            raw.replace(PROJECT_NAME_PLACEHOLDER, &request.project_name)
                .replace(PROJECT_DIR_PLACEHOLDER, &dir)
        };

        Invocation::new(expand(self.program), self.args.iter().map(|arg| expand(arg)))
            .in_dir(&project_dir)
    }
}

/// Everything `kickoff` knows about scaffolding a project for one [`Language`]
#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    /// Probes run before anything is created
    pub toolchain: &'static [ToolProbe],
    /// Directories created below the project root, besides the root itself
    pub directories: &'static [&'static str],
    pub files: &'static [TemplateFile],
    /// Run in order, after the files are written
    pub setup: &'static [SetupStep],
    /// What the user runs on the new project. Interpreted by `bash` on the launched terminal
    pub run_command: &'static str,
}

impl LanguageProfile {
    /// Creates the project root and the fixed directory skeleton of the language
    pub fn create_structure(&self, project_dir: &Path) -> Result<(), ScaffoldError> {
        utils::fs::create_directory(project_dir)?;
        for dir in self.directories {
            utils::fs::create_directory(&project_dir.join(dir))?;
        }
        Ok(())
    }

    pub fn write_files(&self, request: &ProjectRequest) -> Result<(), ScaffoldError> {
        let project_dir = request.project_dir();

        for file in self.files {
            let relative = Path::new(file.path);
            let dir = match relative.parent() {
                Some(parent) => project_dir.join(parent),
                None => project_dir.clone(),
            };
            let filename = relative
                .file_name()
                .and_then(OsStr::to_str)
                .unwrap_or(file.path);

            utils::fs::create_directory(&dir)?;
            utils::fs::create_file(
                &dir,
                filename,
                file.render(&request.project_name).as_bytes(),
            )?;
            log::debug!("Written {:?}", dir.join(filename));
        }
        Ok(())
    }

    pub fn run_setup_commands(
        &self,
        request: &ProjectRequest,
        runner: &dyn CommandRunner,
        report: StepReporter<'_>,
    ) -> Result<(), ScaffoldError> {
        run_steps(self.setup, request, runner, report)
    }

    /// Structure, then files, then setup commands. The first error aborts the remaining
    /// work and nothing is rolled back
    pub fn materialize(
        &self,
        request: &ProjectRequest,
        runner: &dyn CommandRunner,
        report: StepReporter<'_>,
    ) -> Result<(), ScaffoldError> {
        let project_dir = request.project_dir();

        report("Creating the project structure");
        log::info!(
            "Creating the {} project structure on {project_dir:?}...",
            self.language
        );
        self.create_structure(&project_dir)?;

        if !self.files.is_empty() {
            report("Writing the project files");
            log::info!("Writing {} template files...", self.files.len());
            self.write_files(request)?;
        }

        self.run_setup_commands(request, runner, report)
    }
}

/// Runs `steps` one after another on the project directory, stopping at the first failure
pub(crate) fn run_steps(
    steps: &[SetupStep],
    request: &ProjectRequest,
    runner: &dyn CommandRunner,
    report: StepReporter<'_>,
) -> Result<(), ScaffoldError> {
    for step in steps {
        let invocation = step.invocation(request);
        report(step.description);
        log::info!("{}...", step.description);

        runner
            .run(&invocation)
            .map_err(|failure| ScaffoldError::SubprocessFailed {
                step: step.description.to_string(),
                command: invocation.to_string(),
                failure,
            })?;
    }
    Ok(())
}

/// The static profile of `language`
pub fn profile_for(language: Language) -> &'static LanguageProfile {
    match language {
        Language::Python => &python::PROFILE,
        Language::Go => &go::PROFILE,
        Language::Rust => &rust::PROFILE,
        Language::JavaScript => &javascript::PROFILE,
        Language::TypeScript => &typescript::PROFILE,
        Language::CPlusPlus => &cpp::PROFILE,
        Language::CSharp => &csharp::PROFILE,
        Language::Java => &java::PROFILE,
    }
}
