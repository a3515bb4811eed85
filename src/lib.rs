//! Scriptc - build-tool integration for script compilation
//!
//! Scriptc discovers script sources under a directory tree, hands each
//! file to a host-supplied compiler backend, and writes the compiled
//! units into an output tree under names derived from file locations.
//!
//! # Architecture
//!
//! ```text
//! scriptc-config/       - Invocation options and compiler configuration
//! scriptc-orchestrator/ - Discovery, naming, per-file pipeline, emission
//! scriptc-api/          - Host-facing execute surface, manifest, logging
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use scriptc::{execute, CompileOptions, MemorySink};
//!
//! let options = CompileOptions::new("src/script", "target/units");
//! let sink = MemorySink::new();
//! let summary = execute(&options, &my_compiler, &my_resolver, &sink)?;
//! println!("compiled {} files", summary.compiled());
//! ```

pub use scriptc_api as api;
pub use scriptc_config as config;
pub use scriptc_orchestrator as orchestrator;

// Re-export the everyday surface at the crate root.
pub use scriptc_api::{
    execute, execute_manifest, load_manifest, ApiError, CompileError, CompileOptions, CompileUnit,
    CompiledUnit, CompilerConfig, Diagnostic, DiagnosticSink, FileOutcome, FileStatus, LogConfig,
    LogFormat, ManifestError, MapResolver, MemorySink, RunSummary, ScriptCompiler, Severity,
    TracingSink, TypeHandle, TypeResolver, MANIFEST_FILE_NAME, UNIT_FILE_EXTENSION,
};
