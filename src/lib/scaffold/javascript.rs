use crate::domain::Language;
use crate::toolchain::ToolProbe;
use crate::utils::template::{resources::javascript, TemplateFile};

use super::{LanguageProfile, SetupStep};

pub(super) const NODE: ToolProbe = ToolProbe::new("Node.js", "node", &["--version"]);
pub(super) const NPM: ToolProbe = ToolProbe::new("npm", "npm", &["--version"]);

pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::JavaScript,
    toolchain: &[NODE, NPM],
    directories: &[],
    files: &[
        TemplateFile::verbatim("app.js", javascript::APP),
        TemplateFile::verbatim(".gitignore", javascript::GITIGNORE),
    ],
    setup: &[
        SetupStep::new("Initializing the npm package", "npm", &["init", "-y"]),
        SetupStep::new("Installing express", "npm", &["install", "express"]),
    ],
    run_command: "node app.js",
};
