//! Attribute type registry.
//!
//! A fixed lookup table from scalar value types to the [`AttrType`] tags of
//! the data model. Supporting a new kind of attribute takes one row here
//! and one `AttrType` variant.

use crate::types::{ScalarType, TypeDesc};
use uigen_core::AttrType;

/// Registered scalar types and the attribute type each resolves to.
pub const ATTR_TYPE_REGISTRY: &[(ScalarType, AttrType)] = &[
    (ScalarType::Str, AttrType::String),
    (ScalarType::Int, AttrType::Integer),
    (ScalarType::Float, AttrType::Decimal),
    (ScalarType::Decimal, AttrType::Decimal),
    (ScalarType::DateTime, AttrType::DateTime),
];

/// Resolves a scalar type to its attribute type.
#[must_use]
pub fn resolve_scalar(scalar: ScalarType) -> Option<AttrType> {
    ATTR_TYPE_REGISTRY
        .iter()
        .find(|(registered, _)| *registered == scalar)
        .map(|(_, attr_type)| *attr_type)
}

/// Resolves a type descriptor to an attribute type.
///
/// Only registered scalars resolve. Everything else (`bool`, dates,
/// durations, enums, lists, nested classes, unions) yields `None`; this is
/// a lookup miss, not an error.
///
/// # Examples
///
/// ```
/// use uigen_core::AttrType;
/// use uigen_introspector::registry::resolve_attr_type;
/// use uigen_introspector::{ScalarType, TypeDesc};
///
/// assert_eq!(
///     resolve_attr_type(&TypeDesc::Scalar(ScalarType::Float)),
///     Some(AttrType::Decimal)
/// );
/// assert_eq!(resolve_attr_type(&TypeDesc::Class("User".into())), None);
/// ```
#[must_use]
pub fn resolve_attr_type(ty: &TypeDesc) -> Option<AttrType> {
    match ty {
        TypeDesc::Scalar(scalar) => resolve_scalar(*scalar),
        _ => None,
    }
}
