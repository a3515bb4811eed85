//! Compiler collaborator seam
//!
//! The orchestrator never links against a real compiler. Hosts hand in
//! anything implementing `ScriptCompiler`; one source text goes in, zero
//! or more named compiled units come out.

use scriptc_config::CompilerConfig;
use std::path::PathBuf;
use thiserror::Error;

/// One source file staged for compilation.
///
/// Built per discovered file, consumed by the compile call, and dropped
/// once its units are written. Never retained across files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileUnit {
    pub path: PathBuf,
    pub source: String,
    pub target: String,
    pub first_line: u32,
}

impl CompileUnit {
    /// Display name used in diagnostics, the file name portion of the
    /// path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// One named unit of compiled output.
///
/// A single source file may produce several units. The first carries the
/// requested target name; the compiler chooses the names of the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledUnit {
    pub name: String,
    pub bytecode: Vec<u8>,
}

impl CompiledUnit {
    pub fn new(name: impl Into<String>, bytecode: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytecode,
        }
    }
}

/// Failure reported by a compiler backend for one source file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
}

impl CompileError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A script-to-bytecode compiler backend.
pub trait ScriptCompiler {
    /// Compile one source text into named units.
    ///
    /// `name` is the original file name for diagnostics, `first_line` the
    /// line number of the first source line (1-based), `target` the
    /// fully-qualified name the primary unit must carry.
    fn compile(
        &self,
        source: &str,
        name: &str,
        first_line: u32,
        target: &str,
        config: &CompilerConfig,
    ) -> Result<Vec<CompiledUnit>, CompileError>;
}

impl<F> ScriptCompiler for F
where
    F: Fn(&str, &str, u32, &str, &CompilerConfig) -> Result<Vec<CompiledUnit>, CompileError>,
{
    fn compile(
        &self,
        source: &str,
        name: &str,
        first_line: u32,
        target: &str,
        config: &CompilerConfig,
    ) -> Result<Vec<CompiledUnit>, CompileError> {
        self(source, name, first_line, target, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_implements_compiler() {
        let compiler = |source: &str,
                        _name: &str,
                        _first_line: u32,
                        target: &str,
                        _config: &CompilerConfig| {
            Ok(vec![CompiledUnit::new(target, source.as_bytes().to_vec())])
        };

        let config = CompilerConfig::default();
        let units = compiler
            .compile("var x = 1;", "Main.scr", 1, "Main", &config)
            .unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].name, "Main");
        assert_eq!(units[0].bytecode, b"var x = 1;");
    }

    #[test]
    fn test_compile_error_displays_message() {
        let err = CompileError::new("syntax error at line 3");
        assert_eq!(err.to_string(), "syntax error at line 3");
    }

    #[test]
    fn test_compile_unit_display_name() {
        let unit = CompileUnit {
            path: PathBuf::from("/work/src/util/Helper.scr"),
            source: String::new(),
            target: "util.Helper".to_string(),
            first_line: 1,
        };
        assert_eq!(unit.display_name(), "Helper.scr");
    }
}
