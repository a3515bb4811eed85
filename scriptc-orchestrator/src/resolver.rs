//! Type reference resolution
//!
//! Superclass and interface names in the invocation options are plain
//! strings. The host decides what they mean by supplying a `TypeResolver`.

use scriptc_config::TypeHandle;
use std::collections::HashMap;

/// Resolves a type name to a handle, or reports it unknown with `None`.
pub trait TypeResolver {
    fn resolve(&self, name: &str) -> Option<TypeHandle>;
}

impl<F> TypeResolver for F
where
    F: Fn(&str) -> Option<TypeHandle>,
{
    fn resolve(&self, name: &str) -> Option<TypeHandle> {
        self(name)
    }
}

/// Resolver backed by a fixed name table.
#[derive(Debug, Default)]
pub struct MapResolver {
    known: HashMap<String, TypeHandle>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a known type under its name.
    pub fn insert(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.known.insert(name.clone(), TypeHandle::new(name));
        self
    }
}

impl TypeResolver for MapResolver {
    fn resolve(&self, name: &str) -> Option<TypeHandle> {
        self.known.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_resolver_known_and_unknown() {
        let mut resolver = MapResolver::new();
        resolver.insert("lang.Object");

        assert_eq!(
            resolver.resolve("lang.Object"),
            Some(TypeHandle::new("lang.Object"))
        );
        assert_eq!(resolver.resolve("lang.Missing"), None);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str| {
            if name == "Runnable" {
                Some(TypeHandle::new("Runnable"))
            } else {
                None
            }
        };
        assert!(resolver.resolve("Runnable").is_some());
        assert!(resolver.resolve("Other").is_none());
    }
}
