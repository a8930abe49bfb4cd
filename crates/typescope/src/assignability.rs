//! Argument-to-parameter compatibility
//!
//! A parameter accepts an argument when the argument's runtime type is the
//! parameter type or a subtype / implementer of it. There is no widening
//! and no coercion:
//! - primitive ~> same primitive only
//! - any non-null value ~> Object
//! - String ~> String
//! - T ~> T, any supertype of T, any interface T implements
//! - null ~> reference parameters, depending on `NullArguments`

use typescope_sdk::{is_subtype_of, TypeRef, Value};

use crate::config::NullArguments;

/// Check if a parameter declared as `param` accepts `arg`
pub fn accepts(param: &TypeRef, arg: &Value, nulls: NullArguments) -> bool {
    let Some(arg_type) = arg.runtime_type() else {
        return match nulls {
            NullArguments::MatchReference => param.is_reference(),
            NullArguments::Reject => false,
        };
    };

    is_assignable(&arg_type, param)
}

/// Check if values of runtime type `source` may be passed as `target`
pub fn is_assignable(source: &TypeRef, target: &TypeRef) -> bool {
    match (source, target) {
        (_, TypeRef::Any) => true,
        (TypeRef::Type(sub), TypeRef::Type(sup)) => is_subtype_of(sub, sup),
        _ => source == target,
    }
}

/// Check a whole argument list against a parameter list.
///
/// The lengths must agree; then every parameter must accept its argument.
pub fn accepts_all(params: &[TypeRef], args: &[Value], nulls: NullArguments) -> bool {
    params.len() == args.len()
        && params
            .iter()
            .zip(args)
            .all(|(param, arg)| accepts(param, arg, nulls))
}
