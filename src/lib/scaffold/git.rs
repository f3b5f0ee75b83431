//! Optional version control for new projects: a fresh repository holding the scaffolded
//! files on an initial commit

use crate::domain::{ProjectRequest, ScaffoldError};
use crate::process::CommandRunner;

use super::{run_steps, SetupStep, StepReporter};

pub const STEPS: &[SetupStep] = &[
    SetupStep::new("Initializing the git repository", "git", &["init"]),
    SetupStep::new("Staging the project files", "git", &["add", "."]),
    SetupStep::new(
        "Creating the initial commit",
        "git",
        &["commit", "-m", "Initial commit"],
    ),
];

pub fn initialize_git_repository(
    request: &ProjectRequest,
    runner: &dyn CommandRunner,
    report: StepReporter<'_>,
) -> Result<(), ScaffoldError> {
    run_steps(STEPS, request, runner, report)
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use tempfile::tempdir;

    use crate::domain::Language;
    use crate::scaffold::silent;
    use crate::utils::test::RecordingRunner;

    use super::*;

    #[test]
    fn test_git_steps_run_on_the_project_directory() -> Result<()> {
        let temp = tempdir()?;
        let request = ProjectRequest::new(temp.path(), "repo", Language::Java);
        let runner = RecordingRunner::default();

        initialize_git_repository(&request, &runner, &silent)?;

        assert_eq!(
            runner.commands(),
            vec!["git init", "git add .", "git commit -m Initial commit"]
        );
        assert!(runner.all_run_in(&temp.path().join("repo")));
        Ok(())
    }

    #[test]
    fn test_commit_failure_is_a_subprocess_failure() -> Result<()> {
        let temp = tempdir()?;
        let request = ProjectRequest::new(temp.path(), "repo", Language::Java);
        let runner = RecordingRunner::failing_on_command("git commit");

        let err = initialize_git_repository(&request, &runner, &silent).unwrap_err();
        assert!(matches!(err, ScaffoldError::SubprocessFailed { .. }));
        Ok(())
    }
}
