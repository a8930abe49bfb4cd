//! Type descriptors
//!
//! A `TypeDescriptor` is the metadata table for one class or interface:
//! its declared fields, methods and constructors, its superclass and the
//! interfaces it implements directly. Descriptors are built once by the
//! host (usually behind a lazy static) and are immutable afterwards.
//!
//! ```ignore
//! let point = TypeDescriptor::class("Point")
//!     .field(FieldDescriptor::new("x", TypeRef::Int))
//!     .field(FieldDescriptor::new("y", TypeRef::Int))
//!     .constructor(ConstructorDescriptor::new([TypeRef::Int, TypeRef::Int], |args| {
//!         Ok(Box::new(Point { x: arg(args, 0)?, y: arg(args, 1)? }))
//!     }))
//!     .build();
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{HostError, HostResult};
use crate::types::TypeRef;
use crate::value::Value;

/// Shared handle to a type descriptor. Identity is pointer identity.
pub type TypeHandle = Arc<TypeDescriptor>;

/// Host body of a constructor: builds the new object's state from its arguments
pub type ConstructorFn =
    Arc<dyn Fn(&[Value]) -> HostResult<Box<dyn Any + Send + Sync>> + Send + Sync>;

// ============================================================================
// Markers and modifiers
// ============================================================================

/// Identity of a marker (annotation) type.
///
/// Any `'static` Rust type can serve as a marker; only its identity is
/// compared, it carries no payload.
#[derive(Clone, Copy)]
pub struct Marker {
    id: TypeId,
    name: &'static str,
}

impl Marker {
    /// Marker identified by the Rust type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Type name of the marker, for diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)
    }
}

/// Member accessibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Accessible everywhere
    #[default]
    Public,
    /// Accessible to subtypes
    Protected,
    /// Accessible within the declaring package
    Package,
    /// Accessible only to the declaring type
    Private,
}

impl Visibility {
    /// Check if this is `Public`
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Package => "package-private",
            Visibility::Private => "private",
        };
        f.write_str(s)
    }
}

/// How a constructor is being invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Ordinary caller: only public constructors may run
    Public,
    /// Privileged construction: any visibility may run
    Privileged,
}

/// Kind of a described type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Concrete class
    Class,
    /// Interface (capability contract)
    Interface,
}

// ============================================================================
// Members
// ============================================================================

/// A declared field
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    ty: TypeRef,
    visibility: Visibility,
    is_static: bool,
    markers: Vec<Marker>,
}

impl FieldDescriptor {
    /// Public instance field with no markers
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            ty,
            visibility: Visibility::Public,
            is_static: false,
            markers: Vec::new(),
        }
    }

    /// Attach a marker
    pub fn marked(mut self, marker: Marker) -> Self {
        if !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    /// Set visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark as a static field
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Declared visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the field is static
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Markers attached to the field
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Check if `marker` is attached to the field
    pub fn is_marker_present(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }
}

/// A declared method. Only its signature is described; it is never invoked.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    name: String,
    parameters: Vec<TypeRef>,
    return_type: Option<TypeRef>,
    visibility: Visibility,
    is_static: bool,
}

impl MethodDescriptor {
    /// Public instance method with no parameters and no return value
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parameters: Vec::new(),
            return_type: None,
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    /// Append a parameter
    pub fn param(mut self, ty: TypeRef) -> Self {
        self.parameters.push(ty);
        self
    }

    /// Set the return type
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Set visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark as a static method
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter types
    pub fn parameters(&self) -> &[TypeRef] {
        &self.parameters
    }

    /// Declared return type, `None` for no value
    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }

    /// Declared visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the method is static
    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

/// A declared constructor: parameter list, visibility and host body
#[derive(Clone)]
pub struct ConstructorDescriptor {
    parameters: Vec<TypeRef>,
    visibility: Visibility,
    body: ConstructorFn,
}

impl ConstructorDescriptor {
    /// Public constructor with the given parameter types
    pub fn new<P, F>(parameters: P, body: F) -> Self
    where
        P: IntoIterator<Item = TypeRef>,
        F: Fn(&[Value]) -> HostResult<Box<dyn Any + Send + Sync>> + Send + Sync + 'static,
    {
        Self {
            parameters: parameters.into_iter().collect(),
            visibility: Visibility::Public,
            body: Arc::new(body),
        }
    }

    /// Set visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Shorthand for `with_visibility(Visibility::Private)`
    pub fn private(self) -> Self {
        self.with_visibility(Visibility::Private)
    }

    /// Declared parameter types, in order
    pub fn parameters(&self) -> &[TypeRef] {
        &self.parameters
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Declared visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Run the constructor body.
    ///
    /// `Access::Public` refuses non-public constructors. A panicking body is
    /// reported as `HostError::Panic`. Arguments are passed through as given;
    /// checking them against the parameter list is the caller's job.
    pub fn invoke(
        &self,
        type_name: &str,
        args: &[Value],
        access: Access,
    ) -> HostResult<Box<dyn Any + Send + Sync>> {
        if access == Access::Public && !self.visibility.is_public() {
            return Err(HostError::IllegalAccess {
                type_name: type_name.to_string(),
                visibility: self.visibility,
            });
        }

        match panic::catch_unwind(AssertUnwindSafe(|| (self.body)(args))) {
            Ok(result) => result,
            Err(payload) => Err(HostError::Panic(panic_message(payload.as_ref()))),
        }
    }
}

impl fmt::Debug for ConstructorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("parameters", &self.parameters)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

// ============================================================================
// TypeDescriptor
// ============================================================================

/// Metadata table for a single class or interface
pub struct TypeDescriptor {
    name: String,
    kind: TypeKind,
    superclass: Option<TypeHandle>,
    interfaces: Vec<TypeHandle>,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodDescriptor>,
    constructors: Vec<ConstructorDescriptor>,
}

impl TypeDescriptor {
    /// Start describing a class
    pub fn class(name: &str) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, TypeKind::Class)
    }

    /// Start describing an interface
    pub fn interface(name: &str) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, TypeKind::Interface)
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class or interface
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Check if this describes an interface
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Direct superclass, if any
    pub fn superclass(&self) -> Option<&TypeHandle> {
        self.superclass.as_ref()
    }

    /// Interfaces implemented directly (for an interface: extended directly)
    pub fn interfaces(&self) -> &[TypeHandle] {
        &self.interfaces
    }

    /// Fields declared on this type, in declaration order
    pub fn declared_fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Methods declared on this type, in declaration order
    pub fn declared_methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Constructors declared on this type, in declaration order
    pub fn declared_constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    /// Look up a declared field by name
    pub fn declared_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if a method with this name is declared on the type
    pub fn has_declared_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("superclass", &self.superclass.as_ref().map(|s| s.name()))
            .field(
                "interfaces",
                &self.interfaces.iter().map(|i| i.name()).collect::<Vec<_>>(),
            )
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .field("constructors", &self.constructors)
            .finish()
    }
}

/// Builder for `TypeDescriptor`
pub struct TypeDescriptorBuilder {
    name: String,
    kind: TypeKind,
    superclass: Option<TypeHandle>,
    interfaces: Vec<TypeHandle>,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodDescriptor>,
    constructors: Vec<ConstructorDescriptor>,
}

impl TypeDescriptorBuilder {
    fn new(name: &str, kind: TypeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Set the superclass
    pub fn extends(mut self, superclass: &TypeHandle) -> Self {
        self.superclass = Some(Arc::clone(superclass));
        self
    }

    /// Add a directly implemented interface
    pub fn implements(mut self, interface: &TypeHandle) -> Self {
        self.interfaces.push(Arc::clone(interface));
        self
    }

    /// Declare a field
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare a method
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Declare a constructor
    pub fn constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Finish the descriptor
    pub fn build(self) -> TypeHandle {
        Arc::new(TypeDescriptor {
            name: self.name,
            kind: self.kind,
            superclass: self.superclass,
            interfaces: self.interfaces,
            fields: self.fields,
            methods: self.methods,
            constructors: self.constructors,
        })
    }
}
