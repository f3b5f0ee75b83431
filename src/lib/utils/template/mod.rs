pub mod resources;

use std::borrow::Cow;

/// The placeholder replaced by the project name on interpolated templates and on the
/// arguments of the setup commands
pub const PROJECT_NAME_PLACEHOLDER: &str = "<project_name>";
/// The placeholder replaced by the absolute path of the project directory on the
/// program and arguments of the setup commands
pub const PROJECT_DIR_PLACEHOLDER: &str = "<project_dir>";

/// A file written verbatim (or with the project name interpolated) into a new project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project root, always with `/` separators
    pub path: &'static str,
    pub content: &'static str,
    pub interpolated: bool,
}

impl TemplateFile {
    pub const fn verbatim(path: &'static str, content: &'static str) -> Self {
        Self {
            path,
            content,
            interpolated: false,
        }
    }

    pub const fn interpolated(path: &'static str, content: &'static str) -> Self {
        Self {
            path,
            content,
            interpolated: true,
        }
    }

    /// The final content of the file for a project called `project_name`
    pub fn render(&self, project_name: &str) -> Cow<'static, str> {
        if self.interpolated {
            Cow::Owned(self.content.replace(PROJECT_NAME_PLACEHOLDER, project_name))
        } else {
            Cow::Borrowed(self.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_interpolated_templates_are_rendered() {
        let manifest = TemplateFile::interpolated("CMakeLists.txt", resources::cpp::CMAKE_LISTS);
        let rendered = manifest.render("cx");
        assert!(rendered.contains("project(cx)"));
        assert!(!rendered.contains(PROJECT_NAME_PLACEHOLDER));
        // CMake's own variables are left alone
        assert!(rendered.contains("add_executable(${PROJECT_NAME} src/main.cpp)"));

        let verbatim = TemplateFile::verbatim("CMakeLists.txt", resources::cpp::CMAKE_LISTS);
        assert!(matches!(verbatim.render("cx"), Cow::Borrowed(_)));
        assert!(verbatim.render("cx").contains(PROJECT_NAME_PLACEHOLDER));
    }
}
