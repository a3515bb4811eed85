//! Scriptc Orchestrator - source discovery and per-file compile pipeline
//!
//! Walks a source tree, derives a fully-qualified target name for every
//! recognized script file, hands the text to a compiler backend, and
//! writes the resulting units under the output directory. One file's
//! failure never stops the others.

pub mod compiler;
pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod naming;
pub mod options;
pub mod pipeline;
pub mod resolver;
pub mod walker;

pub use compiler::{CompileError, CompileUnit, CompiledUnit, ScriptCompiler};
pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, Severity, TracingSink};
pub use emitter::UnitEmitter;
pub use error::{EmitError, OrchestratorError};
pub use options::map_options;
pub use pipeline::{FileOutcome, FileStatus, RunSummary};
pub use resolver::{MapResolver, TypeResolver};
pub use walker::walk_source_tree;

use scriptc_config::CompilerConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Check the requested character encoding is one this toolchain reads.
///
/// Source files are decoded as UTF-8; any other request fails the run
/// before a single file is opened.
pub fn validate_encoding(name: &str) -> Result<(), OrchestratorError> {
    match name.to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => Ok(()),
        _ => Err(OrchestratorError::UnsupportedEncoding(name.to_string())),
    }
}

/// Drives the compile pipeline over one source tree.
pub struct Orchestrator<'a> {
    config: CompilerConfig,
    compiler: &'a dyn ScriptCompiler,
    sink: &'a dyn DiagnosticSink,
    source_root: PathBuf,
    emitter: UnitEmitter,
    source_extension: String,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        config: CompilerConfig,
        compiler: &'a dyn ScriptCompiler,
        sink: &'a dyn DiagnosticSink,
        source_root: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            compiler,
            sink,
            source_root: source_root.into(),
            emitter: UnitEmitter::new(output_dir),
            source_extension: scriptc_config::DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }

    /// Override the extension recognized on source files.
    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }

    /// Walk the source tree and run the pipeline over every file.
    pub fn run(&self) -> Result<RunSummary, OrchestratorError> {
        let files = walk_source_tree(&self.source_root)?;
        let mut summary = RunSummary::new();
        for path in files {
            let status = self.process_file(&path);
            summary.push(FileOutcome::new(path, status));
        }
        tracing::info!(
            target: "scriptc::orchestrator",
            compiled = summary.compiled(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            units = summary.units_written(),
            "run complete"
        );
        Ok(summary)
    }

    /// Take one file through filter, read, derive, compile and emit.
    fn process_file(&self, path: &Path) -> FileStatus {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let stem = match self.recognized_stem(&file_name) {
            Some(stem) => stem,
            None => {
                tracing::debug!(
                    target: "scriptc::orchestrator",
                    path = %path.display(),
                    "skipping unrecognized file"
                );
                return FileStatus::SkippedUnrecognized;
            }
        };

        let source = match self.read_source(path) {
            Some(source) => source,
            None => return FileStatus::SkippedUnreadable,
        };

        let identifier = naming::sanitize_identifier(&stem);
        let namespace = path
            .parent()
            .map(|dir| naming::derive_namespace(&self.source_root, dir))
            .unwrap_or_default();
        let unit = CompileUnit {
            path: path.to_path_buf(),
            source,
            target: naming::qualified_name(&namespace, &identifier),
            first_line: 1,
        };
        tracing::info!(
            target: "scriptc::orchestrator",
            "compile {} to {}",
            unit.path.display(),
            unit.target
        );

        let units = match self.compiler.compile(
            &unit.source,
            &unit.display_name(),
            unit.first_line,
            &unit.target,
            &self.config,
        ) {
            Ok(units) => units,
            Err(err) => {
                self.sink.report(Diagnostic::error(err.message));
                return FileStatus::Failed;
            }
        };

        let units_emitted = units.len();
        let mut units_written = 0;
        for unit in &units {
            match self.emitter.write_unit(unit) {
                Ok(_) => units_written += 1,
                Err(err) => self.sink.report(Diagnostic::error(err.to_string())),
            }
        }
        FileStatus::Compiled {
            units_emitted,
            units_written,
        }
    }

    /// File name stem when the configured extension matches, else `None`.
    fn recognized_stem(&self, file_name: &str) -> Option<String> {
        let suffix = format!(".{}", self.source_extension);
        match file_name.strip_suffix(&suffix) {
            Some(stem) if !stem.is_empty() => Some(stem.to_string()),
            _ => None,
        }
    }

    fn read_source(&self, path: &Path) -> Option<String> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.sink.report(Diagnostic::error(format!(
                    "cannot open file '{}': {err}",
                    path.display()
                )));
                return None;
            }
        };
        match String::from_utf8(bytes) {
            Ok(source) => Some(source),
            Err(err) => {
                self.sink.report(Diagnostic::error(format!(
                    "cannot decode file '{}': {err}",
                    path.display()
                )));
                None
            }
        }
    }
}
