//! Conversions between runtime values and Rust types.
//!
//! Constructor bodies pull their arguments out with `arg`, and Rust types
//! publish their descriptor through `Reflect`.
//!
//! # Example
//!
//! ```ignore
//! use once_cell::sync::Lazy;
//! use typescope_sdk::{arg, ConstructorDescriptor, Reflect, TypeDescriptor, TypeHandle, TypeRef};
//!
//! struct Point { x: i32, y: i32 }
//!
//! static POINT: Lazy<TypeHandle> = Lazy::new(|| {
//!     TypeDescriptor::class("Point")
//!         .constructor(ConstructorDescriptor::new([TypeRef::Int, TypeRef::Int], |args| {
//!             Ok(Box::new(Point { x: arg(args, 0)?, y: arg(args, 1)? }))
//!         }))
//!         .build()
//! });
//!
//! impl Reflect for Point {
//!     fn type_descriptor() -> TypeHandle { POINT.clone() }
//! }
//! ```

use std::any::Any;

use crate::descriptor::TypeHandle;
use crate::error::{HostError, HostResult};
use crate::value::{Instance, Value};

/// Extract a Rust value from a runtime value
pub trait FromValue: Sized {
    /// Convert, failing with `HostError::TypeMismatch` on the wrong kind
    fn from_value(value: &Value) -> HostResult<Self>;
}

fn mismatch(expected: &str, value: &Value) -> HostError {
    HostError::TypeMismatch {
        expected: expected.to_string(),
        got: value.type_name().to_string(),
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> HostResult<Self> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> HostResult<Self> {
        value.as_i32().ok_or_else(|| mismatch("int", value))
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> HostResult<Self> {
        value.as_i64().ok_or_else(|| mismatch("long", value))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> HostResult<Self> {
        value.as_f64().ok_or_else(|| mismatch("double", value))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> HostResult<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("String", value))
    }
}

impl FromValue for Instance {
    fn from_value(value: &Value) -> HostResult<Self> {
        value
            .as_instance()
            .cloned()
            .ok_or_else(|| mismatch("Object", value))
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> HostResult<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

/// Extract positional argument `index` as a `T`
pub fn arg<T: FromValue>(args: &[Value], index: usize) -> HostResult<T> {
    let value = args.get(index).ok_or_else(|| {
        HostError::ArgumentError(format!(
            "missing argument {} (got {} arguments)",
            index,
            args.len()
        ))
    })?;
    T::from_value(value)
}

/// A Rust type with a published type descriptor.
///
/// The descriptor's constructors must produce state of type `Self`.
pub trait Reflect: Any + Send + Sync + Sized {
    /// Descriptor of this type
    fn type_descriptor() -> TypeHandle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(i32::from_value(&Value::Int(3)), Ok(3));
        assert_eq!(i64::from_value(&Value::Long(9)), Ok(9));
        assert_eq!(bool::from_value(&Value::Bool(true)), Ok(true));
        assert_eq!(String::from_value(&Value::from("x")), Ok("x".to_string()));
    }

    #[test]
    fn test_mismatch() {
        let err = i32::from_value(&Value::from("a")).unwrap_err();
        assert_eq!(
            err,
            HostError::TypeMismatch {
                expected: "int".to_string(),
                got: "String".to_string(),
            }
        );
    }

    #[test]
    fn test_optional_accepts_null() {
        assert_eq!(Option::<String>::from_value(&Value::Null), Ok(None));
        assert_eq!(Option::<i32>::from_value(&Value::Int(1)), Ok(Some(1)));
    }

    #[test]
    fn test_arg_out_of_range() {
        let args = [Value::Int(1)];
        assert_eq!(arg::<i32>(&args, 0), Ok(1));
        assert!(matches!(
            arg::<i32>(&args, 1),
            Err(HostError::ArgumentError(_))
        ));
    }
}
