//! Class-to-model transform.
//!
//! Walks a class's fields in declaration order, unwraps `T | None` into an
//! optional attribute, resolves the remaining type through the attribute
//! type registry and appends an [`Attr`] per resolvable field. Fields whose
//! type does not resolve (nested classes, lists, enums, `bool`, durations)
//! are left out of the model without failing the transform.
//!
//! # Examples
//!
//! ```
//! use uigen_core::AttrType;
//! use uigen_introspector::{ClassDescriptor, ScalarType, TypeDesc, class_to_model};
//!
//! let class = ClassDescriptor::builder("Message")
//!     .field("phone", TypeDesc::Scalar(ScalarType::Str))
//!     .field("user", TypeDesc::optional(TypeDesc::Scalar(ScalarType::Str)))
//!     .field("author", TypeDesc::Class("User".into()))
//!     .build()
//!     .unwrap();
//!
//! let model = class_to_model(&class, None).unwrap();
//! assert_eq!(model.name, "Message");
//! assert_eq!(model.attr_names().collect::<Vec<_>>(), ["phone", "user"]);
//! assert!(model.attrs[1].optional);
//! assert_eq!(model.attrs[1].attr_type, AttrType::String);
//! ```

use crate::reflect::Introspect;
use crate::registry::resolve_attr_type;
use crate::type_util::{get_union_members, is_none_type, is_optional_type};
use crate::types::{ClassDescriptor, FieldDescriptor, TypeDesc};
use tracing::{debug, info};
use uigen_core::{Attr, Error, Model, Result};

/// Returns the non-null member of a binary optional union.
///
/// Only the `T | None` form is supported. Wider unions are ambiguous and
/// rejected rather than reduced to an arbitrary member.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `ty` is not a union, if the union
/// does not have exactly two members, or if neither member is the null
/// type.
///
/// # Examples
///
/// ```
/// use uigen_introspector::{ScalarType, TypeDesc, unwrap_optional};
///
/// let s = TypeDesc::Scalar(ScalarType::Str);
/// assert_eq!(unwrap_optional(&TypeDesc::optional(s.clone())).unwrap(), &s);
///
/// let wide = TypeDesc::Union(vec![
///     s,
///     TypeDesc::Scalar(ScalarType::Int),
///     TypeDesc::None,
/// ]);
/// assert!(unwrap_optional(&wide).unwrap_err().is_invalid_argument());
/// ```
pub fn unwrap_optional(ty: &TypeDesc) -> Result<&TypeDesc> {
    let members = get_union_members(ty)?;
    if members.len() != 2 {
        return Err(Error::InvalidArgument(format!(
            "cannot unwrap '{ty}': optional unwrapping needs exactly 2 union members, got {}",
            members.len()
        )));
    }

    let mut rest = members.iter().filter(|member| !is_none_type(member));
    match (rest.next(), rest.next()) {
        (Some(inner), None) => Ok(inner),
        _ => Err(Error::InvalidArgument(format!(
            "cannot unwrap '{ty}': union has no null member"
        ))),
    }
}

/// Converts one field into an attribute.
///
/// Returns `Ok(None)` when the field's type does not resolve to an
/// attribute type.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the field is optional but its
/// union is wider than `T | None`.
pub fn attr_from_field(field: &FieldDescriptor) -> Result<Option<Attr>> {
    let optional = is_optional_type(&field.ty);
    let ty = if optional {
        unwrap_optional(&field.ty).map_err(|e| match e {
            Error::InvalidArgument(reason) => {
                Error::InvalidArgument(format!("field '{}': {reason}", field.name))
            }
            other => other,
        })?
    } else {
        &field.ty
    };

    Ok(resolve_attr_type(ty).map(|attr_type| Attr::new(&field.name, attr_type).optional(optional)))
}

/// Builds a [`Model`] from a class descriptor.
///
/// The model is named `name_override` when given and non-empty, otherwise
/// after the class. Attribute order is field declaration order.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an optional field whose union has
/// more than one non-null member, and [`Error::DuplicateAttribute`] if two
/// fields map to the same attribute name.
pub fn class_to_model(class: &ClassDescriptor, name_override: Option<&str>) -> Result<Model> {
    let name = name_override.filter(|n| !n.is_empty()).unwrap_or(&class.name);
    let mut model = Model::new(name);

    for field in &class.fields {
        match attr_from_field(field)? {
            Some(attr) => model.try_push_attr(attr)?,
            None => debug!(
                class = %class.name,
                field = %field.name,
                ty = %field.ty,
                "skipping field with unregistered type"
            ),
        }
    }

    info!(
        model = %model.name,
        attrs = model.attrs.len(),
        skipped = class.fields.len() - model.attrs.len(),
        "built model"
    );
    Ok(model)
}

/// Builds a [`Model`] from a Rust type implementing [`Introspect`].
///
/// # Errors
///
/// See [`ClassDescriptor::new`] and [`class_to_model`].
pub fn class_to_model_of<T: Introspect>(name_override: Option<&str>) -> Result<Model> {
    class_to_model(&T::class_descriptor()?, name_override)
}
