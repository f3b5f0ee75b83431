use crate::domain::Language;
use crate::toolchain::ToolProbe;
use crate::utils::template::{resources::cpp, TemplateFile};

use super::LanguageProfile;

pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::CPlusPlus,
    toolchain: &[ToolProbe::new("g++", "g++", &["--version"])],
    directories: &["src", "include", "build"],
    files: &[
        TemplateFile::interpolated("CMakeLists.txt", cpp::CMAKE_LISTS),
        TemplateFile::verbatim("src/main.cpp", cpp::MAIN),
        TemplateFile::verbatim(".gitignore", cpp::GITIGNORE),
    ],
    setup: &[],
    run_command: "cd build && cmake .. && make",
};
