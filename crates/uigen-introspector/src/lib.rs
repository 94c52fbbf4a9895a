//! Type introspection and the class-to-model transform.
//!
//! Field types are described with [`TypeDesc`] values. They come from three
//! places:
//!
//! - Rust types, through the [`Reflect`] and [`Introspect`] traits
//! - Type expressions such as `Optional[str]`, through [`parse_type_expr`]
//! - TOML schema documents, through [`SchemaDocument`]
//!
//! [`class_to_model`] turns a [`ClassDescriptor`] into a
//! [`Model`](uigen_core::Model), resolving field types through the
//! [`registry`] and classifying them with the predicates in [`type_util`].
//!
//! # Examples
//!
//! ```
//! use uigen_introspector::{SchemaDocument, class_to_model};
//!
//! let doc = SchemaDocument::from_toml_str(r#"
//!     [[classes]]
//!     name = "Message"
//!     fields = [
//!         { name = "phone", type = "str" },
//!         { name = "planed_at", type = "datetime" },
//!         { name = "user", type = "Optional[str]" },
//!     ]
//! "#).unwrap();
//!
//! let class = doc.class_descriptor("Message").unwrap();
//! let model = class_to_model(&class, None).unwrap();
//! assert_eq!(model.attrs.len(), 3);
//! assert!(model.attrs[2].optional);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod document;
mod expr;
mod reflect;
mod transform;
mod types;

pub mod registry;
pub mod type_util;

pub use document::{ClassDecl, EnumDecl, FieldDecl, SchemaDocument, SectionDecl};
pub use expr::{TypeScope, parse_type_expr};
pub use reflect::{Introspect, Reflect};
pub use transform::{attr_from_field, class_to_model, class_to_model_of, unwrap_optional};
pub use types::{
    ClassDescriptor, ClassDescriptorBuilder, EnumDesc, FieldDescriptor, ScalarType, TypeDesc,
};
