//! Destination directory handling
//!
//! The destination is emptied once before any download starts. Removal keeps
//! going after a failed entry so that as much as possible gets cleared; all
//! failures are reported together afterwards.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::MultiError;

#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot expand user-specific home directory: {0}")]
    UserHomeUnsupported(String),

    #[error("home directory could not be determined")]
    NoHomeDir,

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to clear destination: {0}")]
    Clear(MultiError<DestinationError>),
}

/// Expand a leading `~` to the current user's home directory
pub fn expand_home(path: &str) -> Result<PathBuf, DestinationError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    if !rest.is_empty() && !rest.starts_with('/') && !rest.starts_with(std::path::MAIN_SEPARATOR)
    {
        return Err(DestinationError::UserHomeUnsupported(path.to_string()));
    }

    let home = dirs::home_dir().ok_or(DestinationError::NoHomeDir)?;
    let rest = rest.trim_start_matches(['/', std::path::MAIN_SEPARATOR]);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Make sure `path` exists as an empty directory.
///
/// A missing directory is created together with its parents. An existing
/// non-directory is rejected without touching it.
pub fn prepare(path: &Path) -> Result<(), DestinationError> {
    match fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|source| DestinationError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "Created destination directory");
            Ok(())
        }
        Err(source) => Err(DestinationError::Io {
            path: path.to_path_buf(),
            source,
        }),
        Ok(meta) if !meta.is_dir() => Err(DestinationError::NotADirectory(path.to_path_buf())),
        Ok(_) => clear(path),
    }
}

fn clear(dir: &Path) -> Result<(), DestinationError> {
    let entries = fs::read_dir(dir).map_err(|source| DestinationError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut errors = MultiError::new();
    let mut removed = 0usize;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                errors.push(DestinationError::Io {
                    path: dir.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        let path = entry.path();
        match remove_entry(&entry) {
            Ok(()) => {
                debug!(path = %path.display(), "Removed entry");
                removed += 1;
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "Failed to remove entry");
                errors.push(DestinationError::Io { path, source });
            }
        }
    }

    info!(path = %dir.display(), removed, failed = errors.len(), "Cleared destination");

    errors.into_result().map_err(DestinationError::Clear)
}

// Symlinks are unlinked, never followed.
fn remove_entry(entry: &fs::DirEntry) -> io::Result<()> {
    let path = entry.path();
    if entry.file_type()?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
