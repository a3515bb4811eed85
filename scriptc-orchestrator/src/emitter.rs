//! Compiled unit emission
//!
//! Maps fully-qualified unit names onto the output directory tree and
//! writes the bytecode. Each dot in the name becomes a path separator.

use crate::compiler::CompiledUnit;
use crate::error::EmitError;
use scriptc_config::UNIT_FILE_EXTENSION;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes compiled units beneath a fixed output directory.
#[derive(Debug, Clone)]
pub struct UnitEmitter {
    output_dir: PathBuf,
}

impl UnitEmitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Location a unit with this fully-qualified name lands at.
    pub fn unit_path(&self, name: &str) -> PathBuf {
        let mut path = self.output_dir.clone();
        for segment in name.split('.') {
            path.push(segment);
        }
        path.set_extension(UNIT_FILE_EXTENSION);
        path
    }

    /// Write one unit, creating intermediate directories as needed.
    pub fn write_unit(&self, unit: &CompiledUnit) -> Result<PathBuf, EmitError> {
        let path = self.unit_path(&unit.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| EmitError::DirCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &unit.bytecode).map_err(|source| EmitError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            target: "scriptc::emitter",
            unit = %unit.name,
            path = %path.display(),
            bytes = unit.bytecode.len(),
            "unit written"
        );
        Ok(path)
    }
}
