//! Source tree discovery
//!
//! Depth-first walk collecting every regular file under the source root.
//! Extension filtering happens later in the pipeline, not here.

use crate::error::OrchestratorError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect all regular files under `dir`, depth first.
///
/// Fails when `dir` is not a directory. Entries the walker cannot read
/// are logged and skipped; they never abort the walk.
pub fn walk_source_tree(dir: &Path) -> Result<Vec<PathBuf>, OrchestratorError> {
    if !dir.is_dir() {
        return Err(OrchestratorError::SourceRootNotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                tracing::warn!(
                    target: "scriptc::walker",
                    "skipping unreadable entry: {err}"
                );
            }
        }
    }
    tracing::debug!(
        target: "scriptc::walker",
        root = %dir.display(),
        count = files.len(),
        "source walk complete"
    );
    Ok(files)
}
