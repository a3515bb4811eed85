//! Target identifier derivation
//!
//! Converts filename stems into legal type identifiers and directory
//! locations into dotted namespaces.

use std::path::Path;

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Make a filename stem legal as a bare type identifier.
///
/// Every character that cannot continue an identifier is replaced with
/// `_`. When the stem does not begin with an identifier start character,
/// one `_` is prepended; the result is then one character longer than the
/// input. Callers never pass empty stems - they come from filenames with a
/// known extension already stripped.
pub fn sanitize_identifier(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len() + 1);
    if let Some(first) = stem.chars().next() {
        if !is_identifier_start(first) {
            out.push('_');
        }
    }
    for c in stem.chars() {
        out.push(if is_identifier_part(c) { c } else { '_' });
    }
    out
}

/// Dotted namespace for the directory holding a source file.
///
/// The relative path between `root` and `file_dir` becomes the namespace,
/// one component per path segment. A `file_dir` outside `root` yields an
/// empty namespace.
pub fn derive_namespace(root: &Path, file_dir: &Path) -> String {
    let relative = match file_dir.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) => return String::new(),
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join(".")
}

/// Join a namespace and an identifier into a fully-qualified target name.
///
/// Two consecutive dots in the joined name collapse to one. This is
/// literal text normalization applied once, not path traversal
/// resolution.
pub fn qualified_name(namespace: &str, identifier: &str) -> String {
    let joined = if namespace.is_empty() {
        identifier.to_string()
    } else {
        format!("{namespace}.{identifier}")
    };
    joined.replace("..", ".")
}
