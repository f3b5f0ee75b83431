use crate::domain::Language;
use crate::toolchain::ToolProbe;
use crate::utils::template::{resources::python, TemplateFile};

use super::{LanguageProfile, SetupStep};

const INTERPRETER: &str = if cfg!(target_os = "windows") {
    "python"
} else {
    "python3"
};

/// The interpreter of the virtual environment, called by its absolute path so the
/// environment never has to be activated
const VENV_PYTHON: &str = if cfg!(target_os = "windows") {
    "<project_dir>/venv/Scripts/python.exe"
} else {
    "<project_dir>/venv/bin/python"
};

pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Python,
    toolchain: &[ToolProbe::new("Python", INTERPRETER, &["--version"])],
    directories: &["src", "tests"],
    files: &[
        TemplateFile::verbatim("src/__init__.py", ""),
        TemplateFile::verbatim("src/main.py", python::MAIN),
        TemplateFile::verbatim("tests/__init__.py", ""),
        TemplateFile::verbatim("README.md", ""),
        TemplateFile::verbatim("requirements.txt", python::REQUIREMENTS),
        TemplateFile::verbatim(".gitignore", python::GITIGNORE),
    ],
    setup: &[
        SetupStep::new(
            "Creating the virtual environment",
            INTERPRETER,
            &["-m", "venv", "venv"],
        ),
        SetupStep::new(
            "Upgrading pip",
            VENV_PYTHON,
            &["-m", "pip", "install", "--upgrade", "pip"],
        ),
        SetupStep::new(
            "Installing the Python packages",
            VENV_PYTHON,
            &["-m", "pip", "install", "numpy", "PyQt5"],
        ),
    ],
    run_command: "source venv/bin/activate && python src/main.py",
};
