//! typescope - runtime type introspection
//!
//! Given a type descriptor from `typescope-sdk`, the [`TypeInspector`]:
//!
//! - finds the declared fields that carry a marker
//!   ([`TypeInspector::annotated_fields`]),
//! - lists the unique method names the type declares or receives from the
//!   interfaces it implements directly
//!   ([`TypeInspector::declared_method_names`]),
//! - resolves a constructor for a list of runtime arguments and builds a new
//!   instance with it, private constructors included
//!   ([`TypeInspector::create_instance`], [`TypeInspector::create`]).
//!
//! ## Usage
//!
//! ```ignore
//! use typescope::{create_instance, get_all_declared_methods};
//! use typescope_sdk::Value;
//!
//! let point = create_instance(&POINT, &[Value::Int(3), Value::Int(4)])?;
//! let names = get_all_declared_methods(&WORKER);
//! ```
//!
//! The inspector is stateless: calls may run concurrently from any thread.

#![warn(missing_docs)]

pub mod assignability;
pub mod config;
pub mod error;
pub mod inspector;

pub use config::{Ambiguity, ConfigError, InspectorConfig, NullArguments};
pub use error::{InspectError, InspectResult};
pub use inspector::{create_instance, get_all_declared_methods, get_annotated_fields, TypeInspector};

pub use typescope_sdk as sdk;
