//! typescope SDK - host-side type model
//!
//! Rust has no runtime reflection, so a host describes its types with
//! explicit metadata tables. This crate provides those tables and the
//! runtime values that flow through them:
//!
//! - [`TypeDescriptor`]: declared fields, methods, constructors, superclass
//!   and directly implemented interfaces of one type
//! - [`Marker`]: tag identity attached to fields
//! - [`Value`] / [`Instance`]: runtime values carrying their runtime type
//! - [`TypeRegistry`]: name lookup and hierarchy queries
//!
//! The inspector in the `typescope` crate only reads these tables.

#![warn(missing_docs)]

pub mod convert;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod types;
pub mod value;

pub use convert::{arg, FromValue, Reflect};
pub use descriptor::{
    Access, ConstructorDescriptor, ConstructorFn, FieldDescriptor, Marker, MethodDescriptor,
    TypeDescriptor, TypeDescriptorBuilder, TypeHandle, TypeKind, Visibility,
};
pub use error::{HostError, HostResult};
pub use registry::{is_subtype_of, type_hierarchy, TypeRegistry};
pub use types::TypeRef;
pub use value::{Instance, Value};
