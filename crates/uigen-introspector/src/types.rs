//! Type descriptors for introspected classes.
//!
//! A [`TypeDesc`] describes the declared type of one field the way the
//! source data definition states it: a scalar, the null type, a union of
//! alternatives, an enumeration, a list, or a reference to another class.
//! A [`ClassDescriptor`] lists a class's fields in declaration order.
//!
//! # Examples
//!
//! ```
//! use uigen_introspector::{ClassDescriptor, ScalarType, TypeDesc};
//!
//! let class = ClassDescriptor::builder("Message")
//!     .field("phone", TypeDesc::Scalar(ScalarType::Str))
//!     .field("user", TypeDesc::optional(TypeDesc::Scalar(ScalarType::Str)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(class.fields.len(), 2);
//! assert_eq!(class.fields[1].ty.to_string(), "str | None");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uigen_core::{Error, Result};

/// Scalar value types a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    /// Text
    Str,
    /// Integer
    Int,
    /// Floating point number
    Float,
    /// Boolean
    Bool,
    /// Fixed point decimal
    Decimal,
    /// Timestamp
    DateTime,
    /// Calendar date
    Date,
    /// Duration
    TimeDelta,
}

impl ScalarType {
    /// Returns `true` for the builtin primitives `str`, `int`, `float` and
    /// `bool`.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Str | Self::Int | Self::Float | Self::Bool)
    }

    /// Name used in type expressions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Decimal => "Decimal",
            Self::DateTime => "datetime",
            Self::Date => "date",
            Self::TimeDelta => "timedelta",
        }
    }
}

/// An enumeration type with named variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumDesc {
    /// Enum name
    pub name: String,
    /// Variant values in declaration order
    pub variants: Vec<String>,
}

impl EnumDesc {
    /// Creates an enum descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeDesc {
    /// The null type
    None,
    /// Unconstrained type
    Any,
    /// A scalar value type
    Scalar(ScalarType),
    /// A sum of alternative types
    Union(Vec<TypeDesc>),
    /// An enumeration
    Enum(EnumDesc),
    /// A homogeneous list
    List(Box<TypeDesc>),
    /// A reference to another (composite) class by name
    Class(String),
}

impl TypeDesc {
    /// Builds a union from its members.
    ///
    /// Nested unions are flattened, repeated members are dropped keeping the
    /// first occurrence, and a single remaining member is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `members` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_introspector::{ScalarType, TypeDesc};
    ///
    /// let s = TypeDesc::Scalar(ScalarType::Str);
    /// let i = TypeDesc::Scalar(ScalarType::Int);
    ///
    /// let inner = TypeDesc::union([s.clone(), i.clone()]).unwrap();
    /// let outer = TypeDesc::union([inner, s.clone(), TypeDesc::None]).unwrap();
    /// assert_eq!(outer, TypeDesc::Union(vec![s.clone(), i, TypeDesc::None]));
    ///
    /// assert_eq!(TypeDesc::union([s.clone(), s.clone()]).unwrap(), s);
    /// ```
    pub fn union(members: impl IntoIterator<Item = Self>) -> Result<Self> {
        let mut flat = normalize_members(members);
        match flat.len() {
            0 => Err(Error::InvalidArgument(
                "a union needs at least one member".to_string(),
            )),
            1 => Ok(flat.remove(0)),
            _ => Ok(Self::Union(flat)),
        }
    }

    /// Builds `ty | None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_introspector::{ScalarType, TypeDesc};
    ///
    /// let ty = TypeDesc::optional(TypeDesc::Scalar(ScalarType::Int));
    /// assert_eq!(ty.to_string(), "int | None");
    ///
    /// // Already optional types are left as they are.
    /// assert_eq!(TypeDesc::optional(ty.clone()), ty);
    /// ```
    #[must_use]
    pub fn optional(ty: Self) -> Self {
        let mut flat = normalize_members([ty, Self::None]);
        if flat.len() == 1 {
            flat.remove(0)
        } else {
            Self::Union(flat)
        }
    }

    /// Builds `List[item]`.
    #[must_use]
    pub fn list(item: Self) -> Self {
        Self::List(Box::new(item))
    }
}

fn normalize_members(members: impl IntoIterator<Item = TypeDesc>) -> Vec<TypeDesc> {
    fn push(out: &mut Vec<TypeDesc>, ty: TypeDesc) {
        match ty {
            TypeDesc::Union(inner) => {
                for member in inner {
                    push(out, member);
                }
            }
            other => {
                if !out.contains(&other) {
                    out.push(other);
                }
            }
        }
    }

    let mut out = Vec::new();
    for member in members {
        push(&mut out, member);
    }
    out
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Any => f.write_str("Any"),
            Self::Scalar(scalar) => f.write_str(scalar.name()),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Self::Enum(desc) => f.write_str(&desc.name),
            Self::List(item) => write!(f, "List[{item}]"),
            Self::Class(name) => f.write_str(name),
        }
    }
}

/// One declared field of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Declared type
    pub ty: TypeDesc,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A class and its declared fields, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Class name
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    /// Creates a validated class descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the class name is empty, a field
    /// name is not an identifier (a letter or `_` followed by letters, digits
    /// or `_`), or a field name repeats.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::ValidationError {
                field: "class".to_string(),
                reason: "class name must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(Error::ValidationError {
                    field: format!("{name}.<field>"),
                    reason: "field name must not be empty".to_string(),
                });
            }
            if !is_identifier(&field.name) {
                return Err(Error::ValidationError {
                    field: format!("{name}.{}", field.name),
                    reason: "field name must be an identifier".to_string(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(Error::ValidationError {
                    field: format!("{name}.{}", field.name),
                    reason: "field is declared more than once".to_string(),
                });
            }
        }

        Ok(Self { name, fields })
    }

    /// Starts building a descriptor for class `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ClassDescriptorBuilder {
        ClassDescriptorBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Field names end up as property names in generated code.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Builder for [`ClassDescriptor`].
#[derive(Debug)]
pub struct ClassDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl ClassDescriptorBuilder {
    /// Appends a field with an explicit type descriptor.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: TypeDesc) -> Self {
        self.fields.push(FieldDescriptor::new(name, ty));
        self
    }

    /// Appends a field typed after the Rust type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_introspector::ClassDescriptor;
    ///
    /// let class = ClassDescriptor::builder("Counter")
    ///     .field_of::<u32>("hits")
    ///     .field_of::<Option<String>>("label")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(class.fields[0].ty.to_string(), "int");
    /// assert_eq!(class.fields[1].ty.to_string(), "str | None");
    /// ```
    #[must_use]
    pub fn field_of<T: crate::Reflect>(self, name: impl Into<String>) -> Self {
        self.field(name, T::type_desc())
    }

    /// Builds the descriptor.
    ///
    /// # Errors
    ///
    /// See [`ClassDescriptor::new`].
    pub fn build(self) -> Result<ClassDescriptor> {
        ClassDescriptor::new(self.name, self.fields)
    }
}
