//! Checks the user input before anything is touched on the filesystem.
//!
//! A project name is accepted if and only if it matches `[A-Za-z0-9_-]{1,255}`. The
//! parent path must be an existing directory, and the project directory computed from
//! both must not exist yet.
//!
//! ```rust
//! use kickoff::domain::ValidationError;
//! use kickoff::validator::validate_project_name;
//!
//! assert!(validate_project_name("svc-1_api").is_ok());
//! assert_eq!(
//!     validate_project_name("my app"),
//!     Err(ValidationError::InvalidChars(' '))
//! );
//! assert_eq!(validate_project_name(""), Err(ValidationError::EmptyName));
//! ```

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::ValidationError;
use crate::utils::{
    constants::{MAX_PROJECT_NAME_LEN, PROJECT_NAME_EXTRA_CHARS},
    fs,
};

fn forbidden_char_matcher() -> &'static Regex {
    static MATCHER: OnceLock<Regex> = OnceLock::new();
    MATCHER.get_or_init(|| {
        Regex::new("[^A-Za-z0-9_-]").expect("the forbidden characters pattern is a valid regex")
    })
}

/// Whether `c` may appear on a project name
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || PROJECT_NAME_EXTRA_CHARS.contains(&c)
}

pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_PROJECT_NAME_LEN {
        return Err(ValidationError::NameTooLong(len));
    }

    match forbidden_char_matcher().find(name) {
        Some(found) => {
            let offending = found.as_str().chars().next().unwrap_or(' ');
            Err(ValidationError::InvalidChars(offending))
        }
        None => Ok(()),
    }
}

/// Full check of a creation request. It has no side effects, so it's safe to call it
/// as many times as the front end needs to (for example, on every keystroke)
pub fn validate(name: &str, parent_path: &Path) -> Result<(), ValidationError> {
    validate_project_name(name)?;

    if parent_path.as_os_str().is_empty() || !parent_path.is_dir() {
        return Err(ValidationError::PathNotFound(parent_path.to_path_buf()));
    }

    let project_dir = parent_path.join(name);
    if fs::entry_exists(&project_dir) {
        return Err(ValidationError::AlreadyExists(project_dir));
    }

    Ok(())
}

/// The as-you-type filter of the project name field: drops every character that
/// can't be part of a project name and caps the result at the maximum length
///
/// ```rust
/// use kickoff::validator::sanitize_project_name;
///
/// assert_eq!(sanitize_project_name("my app!"), "myapp");
/// assert_eq!(sanitize_project_name("ünïcode-ok"), "ncode-ok");
/// ```
pub fn sanitize_project_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| is_allowed_char(*c))
        .take(MAX_PROJECT_NAME_LEN)
        .collect()
}
