//! Rename planning and execution

use std::path::{Path, PathBuf};

use bibflow_bibtex::BibEntry;
use serde::Serialize;
use tracing::{debug, info};

use super::suggest_filename_for_entry;
use crate::error::{BibflowError, Result};

/// A proposed rename of one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameCandidate {
    pub original_path: PathBuf,
    /// New file name, keeping the original extension
    pub suggested_name: String,
    /// Whether the rename should be applied
    pub selected: bool,
}

impl RenameCandidate {
    /// Plan a rename of `path` from an entry's metadata.
    ///
    /// The candidate starts selected unless the file already has the
    /// suggested name.
    pub fn from_entry(path: impl Into<PathBuf>, entry: &BibEntry) -> Self {
        let original_path = path.into();
        let extension = original_path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suggested_name = suggest_filename_for_entry(entry, &extension);
        let selected = original_path
            .file_name()
            .map_or(true, |name| name.to_string_lossy() != suggested_name);
        Self {
            original_path,
            suggested_name,
            selected,
        }
    }

    /// Where the file would go, before collision handling
    pub fn target_path(&self) -> PathBuf {
        self.original_path.with_file_name(&self.suggested_name)
    }
}

/// First path derived from `path` for which `exists` is false, trying
/// `name.ext`, then `name (1).ext`, `name (2).ext`, ...
pub fn unique_path_with(path: &Path, exists: impl Fn(&Path) -> bool) -> PathBuf {
    if !exists(path) {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path.extension().map(|e| e.to_string_lossy().into_owned());

    (1u32..)
        .map(|n| {
            let name = match &extension {
                Some(ext) => format!("{stem} ({n}).{ext}"),
                None => format!("{stem} ({n})"),
            };
            path.with_file_name(name)
        })
        .find(|candidate| !exists(candidate))
        .unwrap_or_else(|| path.to_path_buf())
}

/// [`unique_path_with`] against the file system
pub fn unique_path(path: &Path) -> PathBuf {
    unique_path_with(path, Path::exists)
}

/// Apply a selected candidate without overwriting anything.
///
/// Returns the file's path afterwards: the original when the candidate is
/// unselected or already named as suggested.
pub fn apply_rename(candidate: &RenameCandidate) -> Result<PathBuf> {
    let original = &candidate.original_path;
    if !candidate.selected {
        return Ok(original.clone());
    }
    if original.file_name().is_none() {
        return Err(BibflowError::InvalidPath(original.clone()));
    }

    let target = candidate.target_path();
    if &target == original {
        return Ok(target);
    }
    let destination = unique_path_with(&target, |p| p != original.as_path() && p.exists());
    if &destination == original {
        return Ok(destination);
    }

    debug!(from = %original.display(), to = %destination.display(), "renaming");
    std::fs::rename(original, &destination).map_err(|e| BibflowError::io(original, e))?;
    info!(to = %destination.display(), "renamed file");
    Ok(destination)
}
