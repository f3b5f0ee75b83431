use std::path::{Path, PathBuf};

use serde::Serialize;

use super::language::Language;

/// The three inputs of a project creation, captured from the front end at the moment the
/// user asks for the project to be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRequest {
    pub parent_path: PathBuf,
    pub project_name: String,
    pub language: Language,
}

impl ProjectRequest {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(
        parent_path: P,
        project_name: S,
        language: Language,
    ) -> Self {
        Self {
            parent_path: parent_path.into(),
            project_name: project_name.into(),
            language,
        }
    }

    /// The directory that will hold the new project: `<parent_path>/<project_name>`
    pub fn project_dir(&self) -> PathBuf {
        self.parent_path.join(&self.project_name)
    }

    pub fn parent_path(&self) -> &Path {
        &self.parent_path
    }
}
