//! Declared types of fields and parameters

use std::fmt;
use std::sync::Arc;

use crate::descriptor::TypeHandle;

/// A declared type, as written on a field or constructor parameter.
///
/// Primitives accept only their own runtime kind. `Str`, `Any` and `Type`
/// are reference types; `Any` is the root every non-null value conforms to.
#[derive(Clone)]
pub enum TypeRef {
    /// Boolean primitive
    Bool,
    /// 32-bit integer primitive
    Int,
    /// 64-bit integer primitive
    Long,
    /// Double-precision float primitive
    Double,
    /// String reference type
    Str,
    /// Root reference type
    Any,
    /// A class or interface described by the host
    Type(TypeHandle),
}

impl TypeRef {
    /// Whether values of this type are references (and so may be null)
    pub fn is_reference(&self) -> bool {
        matches!(self, TypeRef::Str | TypeRef::Any | TypeRef::Type(_))
    }

    /// Whether this is a primitive type
    pub fn is_primitive(&self) -> bool {
        !self.is_reference()
    }

    /// Display name of the type
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Bool => "bool",
            TypeRef::Int => "int",
            TypeRef::Long => "long",
            TypeRef::Double => "double",
            TypeRef::Str => "String",
            TypeRef::Any => "Object",
            TypeRef::Type(handle) => handle.name(),
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeRef::Type(a), TypeRef::Type(b)) => Arc::ptr_eq(a, b),
            (TypeRef::Bool, TypeRef::Bool)
            | (TypeRef::Int, TypeRef::Int)
            | (TypeRef::Long, TypeRef::Long)
            | (TypeRef::Double, TypeRef::Double)
            | (TypeRef::Str, TypeRef::Str)
            | (TypeRef::Any, TypeRef::Any) => true,
            _ => false,
        }
    }
}

impl Eq for TypeRef {}

impl From<TypeHandle> for TypeRef {
    fn from(handle: TypeHandle) -> Self {
        TypeRef::Type(handle)
    }
}

impl From<&TypeHandle> for TypeRef {
    fn from(handle: &TypeHandle) -> Self {
        TypeRef::Type(Arc::clone(handle))
    }
}

// Descriptors can reference each other; print names only.
impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
