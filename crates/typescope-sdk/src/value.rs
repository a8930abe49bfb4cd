//! Runtime values passed as constructor arguments
//!
//! A `Value` carries its own runtime type, which is what constructor
//! matching inspects. Objects are `Instance`s: a type handle plus opaque,
//! shared host state.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::descriptor::TypeHandle;
use crate::types::TypeRef;

/// A runtime argument value
#[derive(Clone)]
pub enum Value {
    /// The null reference; has no runtime type
    Null,
    /// Boolean
    Bool(bool),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Long(i64),
    /// Double-precision float
    Double(f64),
    /// String
    Str(String),
    /// Object built from a type descriptor
    Object(Instance),
}

impl Value {
    /// Runtime type of the value, `None` for null
    pub fn runtime_type(&self) -> Option<TypeRef> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(TypeRef::Bool),
            Value::Int(_) => Some(TypeRef::Int),
            Value::Long(_) => Some(TypeRef::Long),
            Value::Double(_) => Some(TypeRef::Double),
            Value::Str(_) => Some(TypeRef::Str),
            Value::Object(instance) => Some(TypeRef::Type(Arc::clone(instance.type_handle()))),
        }
    }

    /// Name of the runtime type, for diagnostics
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Double(_) => "double",
            Value::Str(_) => "String",
            Value::Object(instance) => instance.type_handle().name(),
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract i32 value
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract i64 value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract f64 value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow string contents
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the instance of an object value
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Object(instance) => Some(instance),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Value::Null"),
            Value::Bool(b) => write!(f, "Value::Bool({})", b),
            Value::Int(i) => write!(f, "Value::Int({})", i),
            Value::Long(i) => write!(f, "Value::Long({})", i),
            Value::Double(d) => write!(f, "Value::Double({})", d),
            Value::Str(s) => write!(f, "Value::Str({:?})", s),
            Value::Object(instance) => write!(f, "Value::Object({:?})", instance),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Long(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Object(instance)
    }
}

/// An object produced by a constructor
///
/// Cloning shares the underlying state.
#[derive(Clone)]
pub struct Instance {
    type_handle: TypeHandle,
    state: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wrap host state as an instance of `type_handle`
    pub fn new(type_handle: TypeHandle, state: Box<dyn Any + Send + Sync>) -> Self {
        Self {
            type_handle,
            state: Arc::from(state),
        }
    }

    /// Runtime type of this instance
    pub fn type_handle(&self) -> &TypeHandle {
        &self.type_handle
    }

    /// Check whether the host state is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.state.is::<T>()
    }

    /// Borrow the host state as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.state.downcast_ref::<T>()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance<{}>", self.type_handle.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor;

    #[test]
    fn test_null() {
        let v = Value::Null;
        assert!(v.is_null());
        assert!(v.runtime_type().is_none());
        assert_eq!(v.type_name(), "null");
        assert!(v.as_i32().is_none());
    }

    #[test]
    fn test_primitive_runtime_types() {
        assert_eq!(Value::from(true).runtime_type(), Some(TypeRef::Bool));
        assert_eq!(Value::from(3).runtime_type(), Some(TypeRef::Int));
        assert_eq!(Value::from(3i64).runtime_type(), Some(TypeRef::Long));
        assert_eq!(Value::from(1.5).runtime_type(), Some(TypeRef::Double));
        assert_eq!(Value::from("a").runtime_type(), Some(TypeRef::Str));
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Value::Int(42).as_i32(), Some(42));
        assert_eq!(Value::Long(-7).as_i64(), Some(-7));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert!(Value::Int(1).as_f64().is_none());
    }

    #[test]
    fn test_instance_runtime_type() {
        let point = TypeDescriptor::class("Point").build();
        let instance = Instance::new(point.clone(), Box::new((3i32, 4i32)));

        assert!(instance.is::<(i32, i32)>());
        assert_eq!(instance.downcast_ref::<(i32, i32)>(), Some(&(3, 4)));
        assert!(instance.downcast_ref::<String>().is_none());

        let value = Value::from(instance);
        assert_eq!(value.type_name(), "Point");
        assert_eq!(value.runtime_type(), Some(TypeRef::from(point)));
    }

    #[test]
    fn test_debug_format() {
        let s = format!("{:?}", Value::Int(42));
        assert!(s.contains("42"));
    }
}
