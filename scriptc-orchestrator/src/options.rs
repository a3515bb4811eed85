//! Invocation option mapping
//!
//! Builds the immutable per-run `CompilerConfig` from the host's flat
//! `CompileOptions`. Values are copied verbatim with no cross-field
//! validation; out-of-range values are the compiler backend's concern.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::resolver::TypeResolver;
use scriptc_config::{CompileOptions, CompilerConfig};

/// Map invocation options onto a compiler configuration.
///
/// Superclass and interface names go through `resolver`; a name that does
/// not resolve is reported to `sink` as an error and dropped, it never
/// aborts the mapping. Resolved interfaces keep their declaration order.
pub fn map_options(
    options: &CompileOptions,
    resolver: &dyn TypeResolver,
    sink: &dyn DiagnosticSink,
) -> CompilerConfig {
    let mut config = CompilerConfig {
        language_version: options.language_version,
        optimization_level: options.optimization_level,
        retain_source: !options.nosource,
        generate_debug_info: options.debug,
        observe_instruction_count: options.observe_instruction_count,
        main_entry_type: options.main_method_class.clone(),
        super_type: None,
        implemented_types: Vec::new(),
    };

    if let Some(name) = &options.superclass {
        match resolver.resolve(name) {
            Some(handle) => config.super_type = Some(handle),
            None => sink.report(Diagnostic::error(format!(
                "superclass type not found: {name}"
            ))),
        }
    }

    for name in &options.interfaces {
        match resolver.resolve(name) {
            Some(handle) => config.implemented_types.push(handle),
            None => sink.report(Diagnostic::error(format!(
                "interface type not found: {name}"
            ))),
        }
    }

    config
}
