use crate::domain::Language;
use crate::toolchain::ToolProbe;
use crate::utils::template::{resources::java, TemplateFile};

use super::LanguageProfile;

pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Java,
    toolchain: &[ToolProbe::new("Java Development Kit", "javac", &["-version"])],
    directories: &["src/main/java"],
    files: &[
        TemplateFile::verbatim("src/main/java/Main.java", java::MAIN),
        TemplateFile::verbatim(".gitignore", java::GITIGNORE),
    ],
    setup: &[],
    run_command: "javac src/main/java/Main.java && java -cp src/main/java Main",
};
