use crate::domain::Language;
use crate::toolchain::ToolProbe;
use crate::utils::template::{resources::rust, TemplateFile};

use super::{LanguageProfile, SetupStep};

// `cargo init` adopts the already written `src/main.rs` as the binary target. The name
// is glued to its flag, so names starting with `-` aren't read as options
pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Rust,
    toolchain: &[
        ToolProbe::new("Rust", "rustc", &["--version"]),
        ToolProbe::new("Cargo", "cargo", &["--version"]),
    ],
    directories: &["src"],
    files: &[
        TemplateFile::verbatim("src/main.rs", rust::MAIN),
        TemplateFile::verbatim(".gitignore", rust::GITIGNORE),
    ],
    setup: &[
        SetupStep::new(
            "Creating the Cargo package",
            "cargo",
            &["init", "--bin", "--name=<project_name>", "--vcs", "none"],
        ),
        SetupStep::new("Adding druid", "cargo", &["add", "druid"]),
    ],
    run_command: "cargo run",
};
