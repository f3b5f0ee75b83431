//! Constant value definitions to use across the whole program

pub const KICKOFF: &str = "kickoff";

/// Project names are limited to this many characters
pub const MAX_PROJECT_NAME_LEN: usize = 255;

/// The characters (besides ASCII letters and digits) that a project name may contain
pub const PROJECT_NAME_EXTRA_CHARS: &[char] = &['_', '-'];

/// The persisted last-used parent path lives on `~/<CONFIG_DIR>/<CONFIG_FILE_NAME>`
pub const CONFIG_DIR: &str = ".config";
pub const CONFIG_FILE_NAME: &str = "kickoff_project_path";

pub mod status {
    use std::time::Duration;

    /// How long a status message stays visible before the line clears itself
    pub const TTL: Duration = Duration::from_secs(2);
    /// Longer messages are truncated to `MAX_WIDTH - 3` characters plus an ellipsis
    pub const MAX_WIDTH: usize = 50;
    pub const ELLIPSIS: &str = "...";
}

pub mod debug_messages {
    pub const STALE_SAVED_PATH: &str =
        "Ignoring the saved parent path, since it is no longer a directory";
}

pub mod error_messages {
    pub const NO_PARENT_PATH: &str =
        "No parent path was given with --parent and there is no saved one yet";
    pub const FAILURE_CREATING_PROJECT: &str = "Failed to create the project";
    pub const FAILURE_LOADING_CONFIG_LOCATION: &str =
        "Could not determine where the kickoff configuration lives";
    pub const FAILURE_SERIALIZING_PLAN: &str = "Could not serialize the project preview";
    pub const BACKGROUND_TASK_LOST: &str =
        "The project creation task ended without reporting a result";
    pub const CREATION_ALREADY_RUNNING: &str = "A project is already being created";
}
