//! The type inspector
//!
//! Three independent, stateless queries over a `TypeDescriptor`:
//!
//! | Operation                   | Result                                         |
//! |-----------------------------|------------------------------------------------|
//! | `annotated_fields`          | names of declared fields carrying a marker     |
//! | `declared_method_names`     | declared + directly-implemented method names   |
//! | `create_instance` / `create`| new instance via the first matching constructor|
//!
//! Nothing is cached; every call reads the descriptor afresh.

use std::any::{type_name, Any};
use std::collections::HashSet;

use tracing::{debug, trace};
use typescope_sdk::{
    Access, ConstructorDescriptor, HostError, Instance, Marker, Reflect, TypeDescriptor,
    TypeHandle, Value,
};

use crate::assignability::accepts_all;
use crate::config::{Ambiguity, InspectorConfig};
use crate::error::{InspectError, InspectResult};

/// Runtime type inspector
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeInspector {
    config: InspectorConfig,
}

impl TypeInspector {
    /// Inspector with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspector with an explicit configuration
    pub fn with_config(config: InspectorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Names of fields declared directly on `ty` that carry `marker`.
    ///
    /// Inherited fields are not considered.
    pub fn annotated_fields(&self, ty: &TypeDescriptor, marker: &Marker) -> HashSet<String> {
        ty.declared_fields()
            .iter()
            .filter(|field| field.is_marker_present(marker))
            .map(|field| field.name().to_string())
            .collect()
    }

    /// Names of methods declared on `ty` and on each interface it implements
    /// directly. Overloads collapse to one name.
    pub fn declared_method_names(&self, ty: &TypeDescriptor) -> HashSet<String> {
        let own = ty.declared_methods().iter();
        let inherited = ty
            .interfaces()
            .iter()
            .flat_map(|iface| iface.declared_methods().iter());

        own.chain(inherited)
            .map(|method| method.name().to_string())
            .collect()
    }

    /// Find the constructor of `ty` that accepts `args`.
    ///
    /// Constructors are tried in declaration order and the first compatible
    /// one wins, unless ambiguity is configured to be rejected.
    pub fn resolve_constructor<'a>(
        &self,
        ty: &'a TypeDescriptor,
        args: &[Value],
    ) -> InspectResult<&'a ConstructorDescriptor> {
        let mut candidates = ty
            .declared_constructors()
            .iter()
            .enumerate()
            .filter(|(index, ctor)| {
                let ok = accepts_all(ctor.parameters(), args, self.config.null_arguments);
                if !ok {
                    trace!(
                        type_name = ty.name(),
                        index = *index,
                        arity = ctor.arity(),
                        "constructor rejected"
                    );
                }
                ok
            });

        let Some((index, selected)) = candidates.next() else {
            debug!(
                type_name = ty.name(),
                arguments = args.len(),
                "no matching constructor"
            );
            return Err(no_match(ty, args));
        };

        if self.config.ambiguity == Ambiguity::Reject {
            let others = candidates.count();
            if others > 0 {
                return Err(InspectError::AmbiguousConstructor {
                    type_name: ty.name().to_string(),
                    candidates: others + 1,
                });
            }
        }

        debug!(
            type_name = ty.name(),
            index,
            visibility = %selected.visibility(),
            "constructor selected"
        );
        Ok(selected)
    }

    /// Build a new instance of `ty` from `args`.
    ///
    /// Non-public constructors are eligible unless the config forbids them.
    pub fn create_instance(&self, ty: &TypeHandle, args: &[Value]) -> InspectResult<Instance> {
        let state = self.construct(ty, args)?;
        Ok(Instance::new(ty.clone(), state))
    }

    /// Build a new `T` from `args` through its published descriptor
    pub fn create<T: Reflect>(&self, args: &[Value]) -> InspectResult<T> {
        let ty = T::type_descriptor();
        let state = self.construct(&ty, args)?;

        match state.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(InspectError::construction_failed(
                ty.name(),
                HostError::TypeMismatch {
                    expected: type_name::<T>().to_string(),
                    got: format!("state of {}", ty.name()),
                },
            )),
        }
    }

    fn construct(
        &self,
        ty: &TypeDescriptor,
        args: &[Value],
    ) -> InspectResult<Box<dyn Any + Send + Sync>> {
        let ctor = self.resolve_constructor(ty, args)?;
        let access = if self.config.allow_non_public {
            Access::Privileged
        } else {
            Access::Public
        };

        ctor.invoke(ty.name(), args, access)
            .map_err(|source| InspectError::construction_failed(ty.name(), source))
    }
}

fn no_match(ty: &TypeDescriptor, args: &[Value]) -> InspectError {
    InspectError::NoMatchingConstructor {
        type_name: ty.name().to_string(),
        arguments: args.iter().map(|a| a.type_name().to_string()).collect(),
    }
}

// ============================================================================
// Free functions (default configuration)
// ============================================================================

/// Names of fields declared directly on `ty` that carry `marker`
pub fn get_annotated_fields(ty: &TypeDescriptor, marker: &Marker) -> HashSet<String> {
    TypeInspector::new().annotated_fields(ty, marker)
}

/// Names of methods declared on `ty` or on the interfaces it implements directly
pub fn get_all_declared_methods(ty: &TypeDescriptor) -> HashSet<String> {
    TypeInspector::new().declared_method_names(ty)
}

/// Build a new instance of `ty` from `args`
pub fn create_instance(ty: &TypeHandle, args: &[Value]) -> InspectResult<Instance> {
    TypeInspector::new().create_instance(ty, args)
}
