//! Type registry and hierarchy queries

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::descriptor::TypeHandle;

/// Registry of type descriptors, indexed by name
///
/// The inspector never consults it; hosts use it to look descriptors up by
/// name before handing them to an inspector.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: FxHashMap<String, TypeHandle>,
}

impl TypeRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its own name, returning any it replaced
    pub fn register(&mut self, handle: TypeHandle) -> Option<TypeHandle> {
        self.types.insert(handle.name().to_string(), handle)
    }

    /// Get a descriptor by name
    pub fn get(&self, name: &str) -> Option<&TypeHandle> {
        self.types.get(name)
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate over registered descriptors (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &TypeHandle> {
        self.types.values()
    }

    /// Get number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Check if `sub` is `sup` or inherits from it.
///
/// Follows superclasses and implemented interfaces transitively.
pub fn is_subtype_of(sub: &TypeHandle, sup: &TypeHandle) -> bool {
    if Arc::ptr_eq(sub, sup) {
        return true;
    }

    if let Some(parent) = sub.superclass() {
        if is_subtype_of(parent, sup) {
            return true;
        }
    }

    sub.interfaces().iter().any(|iface| is_subtype_of(iface, sup))
}

/// Get the superclass chain of a type.
///
/// The first element is the type itself, the last is the root ancestor.
pub fn type_hierarchy(handle: &TypeHandle) -> Vec<TypeHandle> {
    let mut hierarchy = vec![Arc::clone(handle)];
    let mut current = handle.superclass();

    while let Some(parent) = current {
        hierarchy.push(Arc::clone(parent));
        current = parent.superclass();
    }

    hierarchy
}
