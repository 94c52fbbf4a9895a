//! Classification predicates over type descriptors.
//!
//! All functions are pure. [`is_optional_type`] is defined through
//! [`is_union_type`], [`get_union_members`] and [`is_none_type`], so any union
//! that admits the null type counts as optional, not only the two-member
//! `T | None` form.
//!
//! # Examples
//!
//! ```
//! use uigen_introspector::type_util::{is_optional_type, is_union_of_builtins};
//! use uigen_introspector::{ScalarType, TypeDesc};
//!
//! let s = TypeDesc::Scalar(ScalarType::Str);
//! let i = TypeDesc::Scalar(ScalarType::Int);
//!
//! assert!(is_optional_type(&TypeDesc::optional(s.clone())));
//! assert!(!is_optional_type(&s));
//!
//! let either = TypeDesc::union([s, i]).unwrap();
//! assert!(!is_optional_type(&either));
//! assert!(is_union_of_builtins(&either));
//! ```

use crate::types::TypeDesc;
use uigen_core::{Error, Result};

/// Returns `true` if the type is a union.
#[must_use]
pub const fn is_union_type(ty: &TypeDesc) -> bool {
    matches!(ty, TypeDesc::Union(_))
}

/// Returns all types a union can hold, in declaration order.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `ty` is not a union.
pub fn get_union_members(ty: &TypeDesc) -> Result<&[TypeDesc]> {
    match ty {
        TypeDesc::Union(members) => Ok(members),
        other => Err(Error::InvalidArgument(format!(
            "expected a union type, got '{other}'"
        ))),
    }
}

/// Returns `true` if the type is the null type.
#[must_use]
pub const fn is_none_type(ty: &TypeDesc) -> bool {
    matches!(ty, TypeDesc::None)
}

/// Returns `true` if the type is a union that admits the null type.
#[must_use]
pub fn is_optional_type(ty: &TypeDesc) -> bool {
    if !is_union_type(ty) {
        return false;
    }
    get_union_members(ty).is_ok_and(|members| members.iter().any(is_none_type))
}

/// Returns `true` for the null type, `str`, `int`, `float` and `bool`.
#[must_use]
pub const fn is_builtin_type(ty: &TypeDesc) -> bool {
    match ty {
        TypeDesc::None => true,
        TypeDesc::Scalar(scalar) => scalar.is_builtin(),
        _ => false,
    }
}

/// Returns `true` if the type is a union made only of builtin types.
#[must_use]
pub fn is_union_of_builtins(ty: &TypeDesc) -> bool {
    if !is_union_type(ty) {
        return false;
    }
    get_union_members(ty).is_ok_and(|members| members.iter().all(is_builtin_type))
}

/// Returns `true` if the type is an enumeration.
///
/// Total over all descriptors: anything that is not an enum yields `false`.
#[must_use]
pub const fn is_enum_type(ty: &TypeDesc) -> bool {
    matches!(ty, TypeDesc::Enum(_))
}

/// Returns `true` if the type is a list.
#[must_use]
pub const fn is_list_type(ty: &TypeDesc) -> bool {
    matches!(ty, TypeDesc::List(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnumDesc, ScalarType};

    fn scalar(s: ScalarType) -> TypeDesc {
        TypeDesc::Scalar(s)
    }

    // ========================================================================
    // Union Tests
    // ========================================================================

    #[test]
    fn test_is_union_type() {
        assert!(is_union_type(&TypeDesc::optional(scalar(ScalarType::Str))));
        assert!(!is_union_type(&scalar(ScalarType::Str)));
        assert!(!is_union_type(&TypeDesc::None));
    }

    #[test]
    fn test_get_union_members_order() {
        let ty = TypeDesc::union([scalar(ScalarType::Int), TypeDesc::None, scalar(ScalarType::Str)])
            .unwrap();
        let members = get_union_members(&ty).unwrap();
        assert_eq!(
            members,
            &[scalar(ScalarType::Int), TypeDesc::None, scalar(ScalarType::Str)]
        );
    }

    #[test]
    fn test_get_union_members_rejects_non_union() {
        let err = get_union_members(&scalar(ScalarType::Float)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("float"));
    }

    // ========================================================================
    // Optional Tests
    // ========================================================================

    #[test]
    fn test_is_optional_type_binary() {
        assert!(is_optional_type(&TypeDesc::optional(scalar(ScalarType::Str))));
    }

    #[test]
    fn test_is_optional_type_plain() {
        assert!(!is_optional_type(&scalar(ScalarType::Str)));
        assert!(!is_optional_type(&TypeDesc::None));
    }

    #[test]
    fn test_is_optional_type_union_without_none() {
        let ty = TypeDesc::union([scalar(ScalarType::Str), scalar(ScalarType::Int)]).unwrap();
        assert!(!is_optional_type(&ty));
    }

    #[test]
    fn test_is_optional_type_wide_union_with_none() {
        let ty = TypeDesc::Union(vec![
            scalar(ScalarType::Str),
            scalar(ScalarType::Int),
            TypeDesc::None,
        ]);
        assert!(is_optional_type(&ty));
    }

    #[test]
    fn test_is_optional_type_none_first() {
        let ty = TypeDesc::Union(vec![TypeDesc::None, scalar(ScalarType::DateTime)]);
        assert!(is_optional_type(&ty));
    }

    // ========================================================================
    // Builtin Tests
    // ========================================================================

    #[test]
    fn test_is_builtin_type() {
        assert!(is_builtin_type(&TypeDesc::None));
        assert!(is_builtin_type(&scalar(ScalarType::Str)));
        assert!(is_builtin_type(&scalar(ScalarType::Int)));
        assert!(is_builtin_type(&scalar(ScalarType::Float)));
        assert!(is_builtin_type(&scalar(ScalarType::Bool)));
        assert!(!is_builtin_type(&scalar(ScalarType::Decimal)));
        assert!(!is_builtin_type(&scalar(ScalarType::DateTime)));
        assert!(!is_builtin_type(&TypeDesc::Class("User".to_string())));
    }

    #[test]
    fn test_is_union_of_builtins() {
        let builtins = TypeDesc::union([scalar(ScalarType::Str), TypeDesc::None]).unwrap();
        assert!(is_union_of_builtins(&builtins));

        let mixed = TypeDesc::union([scalar(ScalarType::Str), scalar(ScalarType::DateTime)]).unwrap();
        assert!(!is_union_of_builtins(&mixed));

        assert!(!is_union_of_builtins(&scalar(ScalarType::Str)));
    }

    // ========================================================================
    // Enum and List Tests
    // ========================================================================

    #[test]
    fn test_is_enum_type() {
        let state = TypeDesc::Enum(EnumDesc::new("MessageState", ["new", "send"]));
        assert!(is_enum_type(&state));
        assert!(!is_enum_type(&scalar(ScalarType::Str)));
        assert!(!is_enum_type(&TypeDesc::Any));
        assert!(!is_enum_type(&TypeDesc::Class("MessageState".to_string())));
    }

    #[test]
    fn test_is_list_type() {
        assert!(is_list_type(&TypeDesc::list(scalar(ScalarType::Str))));
        assert!(!is_list_type(&scalar(ScalarType::Str)));
    }
}
