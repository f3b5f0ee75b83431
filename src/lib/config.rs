//! Persistence of the last parent directory chosen by the user.
//!
//! The whole configuration is a single plain-text file holding one path. There is
//! no schema, so nothing needs versioning or migration.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::domain::ScaffoldError;
use crate::utils::constants::{debug_messages, CONFIG_DIR, CONFIG_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The store at `~/.config/kickoff_project_path`
    pub fn at_default_location() -> Result<Self, ScaffoldError> {
        let home = dirs::home_dir().ok_or_else(|| ScaffoldError::ConfigIoFailed {
            path: PathBuf::from("~").join(CONFIG_DIR).join(CONFIG_FILE_NAME),
            source: io::Error::new(io::ErrorKind::NotFound, "no home directory found"),
        })?;
        Ok(Self::new(home.join(CONFIG_DIR).join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved parent path, if there's one and it still names a directory. A missing
    /// or unreadable file just means that there's no saved path
    pub fn load_last_path(&self) -> Option<PathBuf> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Could not read the saved parent path from {:?}: {e}", self.path);
                return None;
            }
        };

        let saved = content.trim();
        if saved.is_empty() {
            return None;
        }

        let path = PathBuf::from(saved);
        if !path.is_dir() {
            log::debug!("{}: {path:?}", debug_messages::STALE_SAVED_PATH);
            return None;
        }

        log::debug!("Loaded the saved parent path: {path:?}");
        Some(path)
    }

    pub fn save_last_path(&self, path: &Path) -> Result<(), ScaffoldError> {
        log::debug!("Saving the parent path {path:?} on {:?}", self.path);
        let to_config_error = |source| ScaffoldError::ConfigIoFailed {
            path: self.path.clone(),
            source,
        };

        if let Some(config_dir) = self.path.parent() {
            fs::create_dir_all(config_dir).map_err(to_config_error)?;
        }

        let content = path.to_string_lossy();
        fs::write(&self.path, content.trim()).map_err(to_config_error)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_means_no_saved_path() -> Result<()> {
        let temp = tempdir()?;
        let store = ConfigStore::new(temp.path().join("nested").join("kickoff_project_path"));
        assert_eq!(store.load_last_path(), None);
        Ok(())
    }

    #[test]
    fn test_save_creates_the_config_dir_and_round_trips() -> Result<()> {
        let temp = tempdir()?;
        let store = ConfigStore::new(temp.path().join(".config").join("kickoff_project_path"));

        store.save_last_path(temp.path())?;

        assert!(store.path().is_file());
        assert_eq!(store.load_last_path(), Some(temp.path().to_path_buf()));
        Ok(())
    }

    #[test]
    fn test_saved_content_is_trimmed_on_load() -> Result<()> {
        let temp = tempdir()?;
        let store = ConfigStore::new(temp.path().join("kickoff_project_path"));
        fs::write(store.path(), format!("  {}\n\n", temp.path().display()))?;

        assert_eq!(store.load_last_path(), Some(temp.path().to_path_buf()));
        Ok(())
    }

    #[test]
    fn test_stale_path_is_ignored() -> Result<()> {
        let temp = tempdir()?;
        let store = ConfigStore::new(temp.path().join("kickoff_project_path"));
        fs::write(store.path(), temp.path().join("gone").to_string_lossy().as_bytes())?;

        assert_eq!(store.load_last_path(), None);
        Ok(())
    }

    #[test]
    fn test_unwritable_location_is_a_config_error() -> Result<()> {
        let temp = tempdir()?;
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "a file, not a directory")?;
        let store = ConfigStore::new(blocker.join("kickoff_project_path"));

        let err = store.save_last_path(temp.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigIoFailed { .. }));
        Ok(())
    }
}
