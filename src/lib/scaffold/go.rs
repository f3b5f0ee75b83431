use crate::domain::Language;
use crate::toolchain::ToolProbe;
use crate::utils::template::{resources::go, TemplateFile};

use super::{LanguageProfile, SetupStep};

// `--` ends the flags, so names starting with `-` reach `go mod init` as the module path
pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Go,
    toolchain: &[ToolProbe::new("Go", "go", &["version"])],
    directories: &[],
    files: &[TemplateFile::verbatim("main.go", go::MAIN)],
    setup: &[
        SetupStep::new(
            "Initializing the Go module",
            "go",
            &["mod", "init", "--", "<project_name>"],
        ),
        SetupStep::new("Fetching Fyne", "go", &["get", "fyne.io/fyne/v2"]),
        SetupStep::new("Tidying the Go module", "go", &["mod", "tidy"]),
    ],
    run_command: "go run .",
};
