//! Scriptc API - host-facing execution surface
//!
//! One call compiles a whole source tree: validate the invocation
//! options, build the per-run compiler configuration, then hand off to
//! the orchestrator. Hosts supply the compiler backend, the type
//! resolver and the diagnostic sink; this crate owns the glue.

use thiserror::Error;

pub mod logging;
pub mod manifest;

pub use logging::{LogConfig, LogFormat};
pub use manifest::{load_manifest, ManifestError, MANIFEST_FILE_NAME};

// Re-export the vocabulary hosts need to call `execute`.
pub use scriptc_config::{
    CompileOptions, CompilerConfig, TypeHandle, DEFAULT_SOURCE_DIRECTORY,
    DEFAULT_SOURCE_EXTENSION, LANGUAGE_VERSIONS, UNIT_FILE_EXTENSION,
};
pub use scriptc_orchestrator::{
    map_options, validate_encoding, CompileError, CompileUnit, CompiledUnit, Diagnostic,
    DiagnosticSink, FileOutcome, FileStatus, MapResolver, MemorySink, Orchestrator,
    OrchestratorError, RunSummary, ScriptCompiler, Severity, TracingSink, TypeResolver,
};

/// Fatal failures surfaced to the host.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Compile every recognized source file under the configured tree.
///
/// Fatal setup problems come back as `Err`; per-file compile failures do
/// not. Inspect the returned summary (or the sink) to decide whether the
/// build should fail.
pub fn execute(
    options: &CompileOptions,
    compiler: &dyn ScriptCompiler,
    resolver: &dyn TypeResolver,
    sink: &dyn DiagnosticSink,
) -> Result<RunSummary, ApiError> {
    validate_encoding(&options.character_encoding)?;

    std::fs::create_dir_all(&options.output_directory).map_err(|source| {
        OrchestratorError::OutputDirCreate {
            path: options.output_directory.clone(),
            source,
        }
    })?;

    let config = map_options(options, resolver, sink);
    let orchestrator = Orchestrator::new(
        config,
        compiler,
        sink,
        &options.source_directory,
        &options.output_directory,
    )
    .with_source_extension(&options.source_extension);

    let summary = orchestrator.run()?;
    tracing::info!(
        target: "scriptc::api",
        compiled = summary.compiled(),
        failed = summary.failed(),
        skipped = summary.skipped(),
        units = summary.units_written(),
        "execute finished"
    );
    Ok(summary)
}

/// Load a manifest and compile the project it describes.
pub fn execute_manifest(
    manifest_path: &std::path::Path,
    compiler: &dyn ScriptCompiler,
    resolver: &dyn TypeResolver,
    sink: &dyn DiagnosticSink,
) -> Result<RunSummary, ApiError> {
    let options = load_manifest(manifest_path)?;
    execute(&options, compiler, resolver, sink)
}
