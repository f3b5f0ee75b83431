//! Installation-presence gate: before anything is created, every external tool that
//! the chosen language needs is asked for its version. The first probe that can't be
//! started, or that exits with a failure, aborts the creation.

use serde::Serialize;

use crate::domain::{Language, ScaffoldError};
use crate::process::{CommandRunner, Invocation};
use crate::scaffold;

/// A version query used to detect whether a tool is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolProbe {
    /// The name reported to the user when the probe fails
    pub tool: &'static str,
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ToolProbe {
    pub const fn new(tool: &'static str, program: &'static str, args: &'static [&'static str]) -> Self {
        Self { tool, program, args }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.program, self.args.iter().copied())
    }
}

pub const GIT: ToolProbe = ToolProbe::new("git", "git", &["--version"]);

/// Runs the probes declared by the [`scaffold::LanguageProfile`] of `language`
pub fn check_toolchain(language: Language, runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    log::info!("Checking the {language} toolchain...");
    check_probes(scaffold::profile_for(language).toolchain, runner)
}

pub fn check_probes(probes: &[ToolProbe], runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    for probe in probes {
        let invocation = probe.invocation();
        runner
            .run(&invocation)
            .map_err(|failure| ScaffoldError::ToolchainMissing {
                tool: probe.tool.to_string(),
                probe: invocation.to_string(),
                failure,
            })?;
        log::debug!("{} is available", probe.tool);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::utils::test::RecordingRunner;

    use super::*;

    #[test]
    fn test_every_language_probes_something() {
        for language in Language::ALL {
            assert!(
                !scaffold::profile_for(language).toolchain.is_empty(),
                "{language} has no toolchain probes"
            );
        }
    }

    #[test]
    fn test_present_toolchain_passes() {
        let runner = RecordingRunner::default();
        assert!(check_toolchain(Language::Go, &runner).is_ok());
        assert_eq!(runner.commands(), vec!["go version"]);
    }

    #[test]
    fn test_missing_tool_is_reported_by_name() {
        let runner = RecordingRunner::failing_on("npm");
        let err = check_toolchain(Language::TypeScript, &runner).unwrap_err();

        match err {
            ScaffoldError::ToolchainMissing { tool, probe, .. } => {
                assert_eq!(tool, "npm");
                assert_eq!(probe, "npm --version");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
        // node is probed first, and nothing runs after the failing probe
        assert_eq!(runner.commands(), vec!["node --version", "npm --version"]);
    }

    #[test]
    fn test_python_and_csharp_are_checked() {
        let runner = RecordingRunner::default();
        check_toolchain(Language::Python, &runner).unwrap();
        check_toolchain(Language::CSharp, &runner).unwrap();
        assert_eq!(runner.commands(), vec!["python3 --version", "dotnet --version"]);
    }
}
