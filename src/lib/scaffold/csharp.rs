use crate::domain::Language;
use crate::toolchain::ToolProbe;

use super::{LanguageProfile, SetupStep};

// Every file of a C# project comes from the SDK template
pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::CSharp,
    toolchain: &[ToolProbe::new(".NET SDK", "dotnet", &["--version"])],
    directories: &[],
    files: &[],
    setup: &[SetupStep::new(
        "Creating the .NET console project",
        "dotnet",
        &["new", "console", "-n", "<project_name>", "-o", "."],
    )],
    run_command: "dotnet run",
};
