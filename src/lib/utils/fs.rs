use std::{
    fs::{DirBuilder, File},
    io::Write,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::domain::ScaffoldError;

pub fn create_file(path: &Path, filename: &str, buff_write: &[u8]) -> Result<(), ScaffoldError> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .and_then(|mut file| file.write_all(buff_write))
        .map_err(|source| ScaffoldError::Io {
            context: "Could not write the file",
            path: file_path,
            source,
        })
}

pub fn create_directory(path_create: &Path) -> Result<(), ScaffoldError> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .map_err(|source| ScaffoldError::Io {
            context: "Could not create the directory",
            path: path_create.to_path_buf(),
            source,
        })
}

/// Resolves `path` against the current directory. Existing paths are also canonicalized,
/// so symlinks and `..` components don't end up persisted
pub fn absolute_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Whether anything (file, directory or even a dangling symlink) lives at `path`
pub fn entry_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Counts the regular files below `root`, descending into every subdirectory
pub fn count_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}
