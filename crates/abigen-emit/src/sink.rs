//! Writing an [`ArtifactPair`] to disk.
//!
//! Both artifacts are staged as temporary files beside their destinations
//! and only moved into place once both have been written completely.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::ArtifactPair;

/// Errors raised while writing artifacts. Any of them aborts the whole pair.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("declarations and assertions would both be written to {}", .0.display())]
    SamePath(PathBuf),

    #[error("failed to create {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to persist {}: {source}", .path.display())]
    Persist { path: PathBuf, source: io::Error },
}

impl ArtifactPair {
    /// Write declarations and assertions to their destinations.
    ///
    /// On error no destination receives partial content. If the second
    /// rename fails, the first destination is removed again.
    pub fn write_to(&self, declarations: &Path, assertions: &Path) -> Result<(), SinkError> {
        if resolve(declarations)? == resolve(assertions)? {
            return Err(SinkError::SamePath(declarations.to_path_buf()));
        }

        let staged_declarations = stage(declarations, &self.declarations)?;
        let staged_assertions = stage(assertions, &self.assertions)?;

        persist(staged_declarations, declarations)?;
        if let Err(err) = persist(staged_assertions, assertions) {
            if let Err(cleanup) = std::fs::remove_file(declarations) {
                tracing::warn!(
                    path = %declarations.display(),
                    "failed to remove declarations after aborted write: {cleanup}"
                );
            }
            return Err(err);
        }

        tracing::info!(
            path = %declarations.display(),
            bytes = self.declarations.len(),
            "wrote declarations"
        );
        tracing::info!(
            path = %assertions.display(),
            bytes = self.assertions.len(),
            "wrote assertions"
        );
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Destination with its directory canonicalized, so aliases of one file
/// compare equal.
fn resolve(path: &Path) -> Result<PathBuf, SinkError> {
    let dir = std::fs::canonicalize(parent_dir(path)).map_err(|source| SinkError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match path.file_name() {
        Some(name) => dir.join(name),
        None => dir,
    })
}

fn stage(path: &Path, contents: &str) -> Result<NamedTempFile, SinkError> {
    let mut file = NamedTempFile::new_in(parent_dir(path)).map_err(|source| SinkError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| SinkError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(file)
}

fn persist(file: NamedTempFile, path: &Path) -> Result<(), SinkError> {
    file.persist(path).map_err(|err| SinkError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}
