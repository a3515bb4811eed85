//! Scriptc Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all scriptc
//! crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File extension carried by every compiled bytecode unit.
pub const UNIT_FILE_EXTENSION: &str = "sbc";

/// Extension recognized on script source files unless overridden.
pub const DEFAULT_SOURCE_EXTENSION: &str = "scr";

/// Conventional source subfolder, relative to the project root.
pub const DEFAULT_SOURCE_DIRECTORY: &str = "src/script";

/// Language versions the toolchain knows about.
///
/// Published for documentation purposes only; unrecognized values are the
/// compiler's concern and nothing here validates against this list.
pub const LANGUAGE_VERSIONS: &[i32] = &[100, 110, 120, 130, 140, 150, 160, 170];

/// Flat invocation option set for one compile run.
///
/// This is the shape a host build tool hands over, either constructed
/// directly or deserialized from a `scriptc.json` project manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Directory under which script sources are discovered recursively
    #[serde(default = "default_source_directory")]
    pub source_directory: PathBuf,
    /// Directory the compiled units are written beneath
    pub output_directory: PathBuf,
    /// Character encoding used to read source files
    #[serde(default = "default_character_encoding")]
    pub character_encoding: String,
    /// Language version to compile with, if set
    #[serde(default)]
    pub language_version: Option<i32>,
    /// Optimization level in the documented range -1..=9, if set
    #[serde(default)]
    pub optimization_level: Option<i32>,
    /// Suppress retaining source text in the compiled units
    #[serde(default)]
    pub nosource: bool,
    /// Generate debug information
    #[serde(default = "default_true")]
    pub debug: bool,
    /// Generate instruction observation counters
    #[serde(default = "default_true")]
    pub observe_instruction_count: bool,
    /// Fully-qualified name of the class providing the main method
    #[serde(default)]
    pub main_method_class: Option<String>,
    /// Fully-qualified name of the superclass the units extend
    #[serde(default)]
    pub superclass: Option<String>,
    /// Fully-qualified names of the interfaces the units implement
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Extension recognized on source files
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
}

impl CompileOptions {
    /// Create options with the given directories and defaults everywhere
    /// else.
    pub fn new(source_directory: impl Into<PathBuf>, output_directory: impl Into<PathBuf>) -> Self {
        Self {
            source_directory: source_directory.into(),
            output_directory: output_directory.into(),
            character_encoding: default_character_encoding(),
            language_version: None,
            optimization_level: None,
            nosource: false,
            debug: true,
            observe_instruction_count: true,
            main_method_class: None,
            superclass: None,
            interfaces: Vec::new(),
            source_extension: default_source_extension(),
        }
    }
}

fn default_source_directory() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIRECTORY)
}

fn default_character_encoding() -> String {
    "UTF-8".to_string()
}

fn default_source_extension() -> String {
    DEFAULT_SOURCE_EXTENSION.to_string()
}

fn default_true() -> bool {
    true
}

/// A resolved type reference produced by the host's type resolution
/// facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHandle {
    /// Fully-qualified type name
    pub name: String,
}

impl TypeHandle {
    /// Create a handle for a resolved type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Compiler configuration built once per run by the option mapper.
///
/// Immutable after construction; shared read-only by every compile call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Language version, applied verbatim when set
    pub language_version: Option<i32>,
    /// Optimization level, applied verbatim when set
    pub optimization_level: Option<i32>,
    /// Retain source text in compiled units
    pub retain_source: bool,
    /// Emit debug information
    pub generate_debug_info: bool,
    /// Emit instruction observation counters
    pub observe_instruction_count: bool,
    /// Entry point class name, passed through unresolved
    pub main_entry_type: Option<String>,
    /// Resolved superclass handle
    pub super_type: Option<TypeHandle>,
    /// Resolved interface handles, in declaration order
    pub implemented_types: Vec<TypeHandle>,
}
