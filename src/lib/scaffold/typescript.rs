use crate::domain::Language;
use crate::utils::template::{resources::typescript, TemplateFile};

use super::javascript::{NODE, NPM};
use super::{LanguageProfile, SetupStep};

pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::TypeScript,
    // The compiler is installed as a local dev dependency, so a global `tsc` isn't needed
    toolchain: &[NODE, NPM],
    directories: &["src"],
    files: &[
        TemplateFile::verbatim("src/index.ts", typescript::INDEX),
        TemplateFile::verbatim(".gitignore", typescript::GITIGNORE),
    ],
    setup: &[
        SetupStep::new("Initializing the npm package", "npm", &["init", "-y"]),
        SetupStep::new(
            "Installing the TypeScript development dependencies",
            "npm",
            &["install", "typescript", "@types/node", "--save-dev"],
        ),
        SetupStep::new(
            "Generating the TypeScript compiler configuration",
            "npx",
            &["tsc", "--init", "--rootDir", "src", "--outDir", "dist"],
        ),
    ],
    run_command: "npx tsc && node dist/index.js",
};
