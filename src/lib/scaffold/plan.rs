//! A preview of what a project creation would do, computed without touching the filesystem

use std::{fmt, path::PathBuf};

use serde::Serialize;

use crate::domain::{Language, ProjectRequest};
use crate::toolchain;

use super::{git, profile_for};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPlan {
    pub name: String,
    pub language: Language,
    pub project_dir: PathBuf,
    pub toolchain: Vec<String>,
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub setup_commands: Vec<String>,
    pub run_command: String,
}

impl ProjectPlan {
    pub fn new(request: &ProjectRequest, git: bool) -> Self {
        let profile = profile_for(request.language);

        let mut probes = profile.toolchain.to_vec();
        let mut steps = profile.setup.to_vec();
        if git {
            probes.push(toolchain::GIT);
            steps.extend_from_slice(git::STEPS);
        }

        Self {
            name: request.project_name.clone(),
            language: request.language,
            project_dir: request.project_dir(),
            toolchain: probes
                .iter()
                .map(|probe| probe.invocation().to_string())
                .collect(),
            directories: profile.directories.iter().map(|d| d.to_string()).collect(),
            files: profile.files.iter().map(|f| f.path.to_string()).collect(),
            setup_commands: steps
                .iter()
                .map(|step| step.invocation(request).to_string())
                .collect(),
            run_command: profile.run_command.to_string(),
        }
    }
}

impl fmt::Display for ProjectPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project preview:")?;
        writeln!(f, "- Name: {}", self.name)?;
        writeln!(f, "- Language: {}", self.language)?;
        writeln!(f, "- Path: {}", self.project_dir.display())?;
        write_list(f, "Toolchain checks", &self.toolchain)?;
        write_list(f, "Directories", &self.directories)?;
        write_list(f, "Files", &self.files)?;
        write_list(f, "Setup commands", &self.setup_commands)?;
        write!(f, "- Run with: {}", self.run_command)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return writeln!(f, "- {title}: none");
    }
    writeln!(f, "- {title}:")?;
    for item in items {
        writeln!(f, "    {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_go_with_git() {
        let request = ProjectRequest::new("/projects", "svc1", Language::Go);
        let plan = ProjectPlan::new(&request, true);

        assert_eq!(plan.project_dir, PathBuf::from("/projects/svc1"));
        assert_eq!(plan.toolchain, vec!["go version", "git --version"]);
        assert_eq!(plan.files, vec!["main.go"]);
        assert_eq!(plan.setup_commands.first().map(String::as_str), Some("go mod init -- svc1"));
        assert_eq!(
            plan.setup_commands.last().map(String::as_str),
            Some("git commit -m Initial commit")
        );

        let text = plan.to_string();
        assert!(text.contains("- Name: svc1"));
        assert!(text.contains("- Directories: none"));
        assert!(text.ends_with("- Run with: go run ."));
    }

    #[test]
    fn test_plan_serializes_to_json() -> color_eyre::Result<()> {
        let request = ProjectRequest::new("/projects", "cx", Language::CPlusPlus);
        let json = serde_json::to_value(ProjectPlan::new(&request, false))?;

        assert_eq!(json["language"], "cpp");
        assert_eq!(json["setup_commands"], serde_json::json!([]));
        assert_eq!(json["files"][0], "CMakeLists.txt");
        Ok(())
    }
}
