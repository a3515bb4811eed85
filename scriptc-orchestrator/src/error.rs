//! Error types for the orchestrator

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run before any file is processed.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("source root is not a directory: {}", .0.display())]
    SourceRootNotADirectory(PathBuf),

    #[error("cannot create output directory '{}': {source}", .path.display())]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported character encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for compiled unit emission.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("cannot create directory '{}': {source}", .path.display())]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed for '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
