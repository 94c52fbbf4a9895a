//! Type descriptors for Rust types.
//!
//! [`Reflect`] maps a Rust type to the [`TypeDesc`] it would be declared as
//! (`Option<T>` becomes `T | None`, `Vec<T>` becomes `List[T]`, and so on).
//! [`Introspect`] describes a struct's fields so that
//! [`class_to_model_of`](crate::class_to_model_of) can run on it directly.
//! The [`introspect!`](crate::introspect) macro writes the `Introspect` impl.
//!
//! # Examples
//!
//! ```
//! use uigen_introspector::{Introspect, introspect};
//!
//! #[allow(dead_code)]
//! struct Invoice {
//!     number: String,
//!     total: f64,
//!     paid_at: Option<chrono::NaiveDateTime>,
//! }
//!
//! introspect!(Invoice { number: String, total: f64, paid_at: Option<chrono::NaiveDateTime> });
//!
//! let class = Invoice::class_descriptor().unwrap();
//! assert_eq!(class.name, "Invoice");
//! assert_eq!(class.fields[2].ty.to_string(), "datetime | None");
//! ```

use crate::types::{ClassDescriptor, FieldDescriptor, ScalarType, TypeDesc};
use uigen_core::Result;

/// A Rust type with a known type descriptor.
pub trait Reflect {
    /// Returns the descriptor of this type.
    fn type_desc() -> TypeDesc;
}

/// A struct whose fields can be enumerated in declaration order.
pub trait Introspect {
    /// Class name.
    const NAME: &'static str;

    /// Fields in declaration order.
    fn fields() -> Vec<FieldDescriptor>;

    /// Returns the validated class descriptor.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a field name is empty or repeated.
    fn class_descriptor() -> Result<ClassDescriptor> {
        ClassDescriptor::new(Self::NAME, Self::fields())
    }
}

macro_rules! reflect_scalar {
    ($scalar:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::Scalar($scalar)
                }
            }
        )+
    };
}

reflect_scalar!(ScalarType::Str => String, &str, char, Box<str>);
reflect_scalar!(ScalarType::Int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
reflect_scalar!(ScalarType::Float => f32, f64);
reflect_scalar!(ScalarType::Bool => bool);
reflect_scalar!(ScalarType::DateTime => chrono::NaiveDateTime);
reflect_scalar!(ScalarType::Date => chrono::NaiveDate);
reflect_scalar!(ScalarType::TimeDelta => chrono::TimeDelta);

impl<Tz: chrono::TimeZone> Reflect for chrono::DateTime<Tz> {
    fn type_desc() -> TypeDesc {
        TypeDesc::Scalar(ScalarType::DateTime)
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::optional(T::type_desc())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::list(T::type_desc())
    }
}

impl Reflect for serde_json::Value {
    fn type_desc() -> TypeDesc {
        TypeDesc::Any
    }
}

/// Implements [`Introspect`] for a struct from its field list.
///
/// The struct also gets a [`Reflect`] impl describing it as a class
/// reference, so introspected structs can be used as field types of other
/// introspected structs.
///
/// ```
/// use uigen_introspector::{Introspect, TypeDesc, introspect};
///
/// #[allow(dead_code)]
/// struct User { login: String }
/// #[allow(dead_code)]
/// struct Post { title: String, author: User }
///
/// introspect!(User { login: String });
/// introspect!(Post { title: String, author: User });
///
/// let fields = Post::fields();
/// assert_eq!(fields[1].ty, TypeDesc::Class("User".to_string()));
/// ```
#[macro_export]
macro_rules! introspect {
    ($name:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        impl $crate::Introspect for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $(
                        $crate::FieldDescriptor::new(
                            stringify!($field),
                            <$ty as $crate::Reflect>::type_desc(),
                        )
                    ),*
                ]
            }
        }

        impl $crate::Reflect for $name {
            fn type_desc() -> $crate::TypeDesc {
                $crate::TypeDesc::Class(stringify!($name).to_string())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: ScalarType) -> TypeDesc {
        TypeDesc::Scalar(s)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(String::type_desc(), scalar(ScalarType::Str));
        assert_eq!(<&str>::type_desc(), scalar(ScalarType::Str));
        assert_eq!(u64::type_desc(), scalar(ScalarType::Int));
        assert_eq!(i8::type_desc(), scalar(ScalarType::Int));
        assert_eq!(f32::type_desc(), scalar(ScalarType::Float));
        assert_eq!(bool::type_desc(), scalar(ScalarType::Bool));
    }

    #[test]
    fn test_chrono_types() {
        assert_eq!(chrono::NaiveDateTime::type_desc(), scalar(ScalarType::DateTime));
        assert_eq!(
            chrono::DateTime::<chrono::Utc>::type_desc(),
            scalar(ScalarType::DateTime)
        );
        assert_eq!(chrono::NaiveDate::type_desc(), scalar(ScalarType::Date));
        assert_eq!(chrono::TimeDelta::type_desc(), scalar(ScalarType::TimeDelta));
    }

    #[test]
    fn test_option_becomes_union_with_none() {
        assert_eq!(
            Option::<String>::type_desc(),
            TypeDesc::Union(vec![scalar(ScalarType::Str), TypeDesc::None])
        );
    }

    #[test]
    fn test_nested_option_collapses() {
        assert_eq!(
            Option::<Option<i32>>::type_desc(),
            Option::<i32>::type_desc()
        );
    }

    #[test]
    fn test_vec_becomes_list() {
        assert_eq!(
            Vec::<Option<bool>>::type_desc(),
            TypeDesc::list(TypeDesc::optional(scalar(ScalarType::Bool)))
        );
    }

    #[test]
    fn test_json_value_is_any() {
        assert_eq!(serde_json::Value::type_desc(), TypeDesc::Any);
    }

    #[allow(dead_code)]
    struct Address {
        city: String,
    }

    #[allow(dead_code)]
    struct Customer {
        name: String,
        age: Option<u8>,
        address: Address,
        tags: Vec<String>,
    }

    crate::introspect!(Address { city: String });
    crate::introspect!(Customer {
        name: String,
        age: Option<u8>,
        address: Address,
        tags: Vec<String>,
    });

    #[test]
    fn test_introspect_macro() {
        let class = Customer::class_descriptor().unwrap();
        assert_eq!(class.name, "Customer");

        let names: Vec<_> = class.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "address", "tags"]);
        assert_eq!(class.fields[2].ty, TypeDesc::Class("Address".to_string()));
        assert_eq!(
            class.fields[3].ty,
            TypeDesc::list(scalar(ScalarType::Str))
        );
    }

    #[test]
    fn test_introspected_struct_reflects_as_class() {
        assert_eq!(
            Option::<Vec<Address>>::type_desc(),
            TypeDesc::optional(TypeDesc::list(TypeDesc::Class("Address".to_string())))
        );
    }
}
