//! Project manifest loading
//!
//! A `scriptc.json` file holds the invocation options for a project.
//! Relative directories in the manifest resolve against the manifest's
//! own location, so a project compiles the same from any working
//! directory.

use scriptc_config::CompileOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conventional manifest file name.
pub const MANIFEST_FILE_NAME: &str = "scriptc.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read manifest '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse manifest '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("manifest '{}' has an empty output_directory", .0.display())]
    EmptyOutputDirectory(PathBuf),
}

/// Load invocation options from a manifest file.
///
/// Relative `source_directory` and `output_directory` values are joined
/// onto the manifest's parent directory; absolute values pass through.
pub fn load_manifest(path: &Path) -> Result<CompileOptions, ManifestError> {
    if !path.is_file() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut options: CompileOptions =
        serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if options.output_directory.as_os_str().is_empty() {
        return Err(ManifestError::EmptyOutputDirectory(path.to_path_buf()));
    }

    if let Some(base) = path.parent() {
        options.source_directory = resolve_against(base, &options.source_directory);
        options.output_directory = resolve_against(base, &options.output_directory);
    }
    tracing::debug!(
        target: "scriptc::api",
        manifest = %path.display(),
        source = %options.source_directory.display(),
        output = %options.output_directory.display(),
        "manifest loaded"
    );
    Ok(options)
}

fn resolve_against(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}
