//! Language-agnostic data model description.
//!
//! A [`Model`] is a named, ordered collection of [`Attr`]s. Each attribute
//! carries a semantic [`AttrType`] tag, an optionality flag and a list of
//! [`Constraint`]s. These are plain value objects: they are built fresh for
//! every generation run and compared structurally.
//!
//! The serialized form keeps attribute order and names the type tag `type`:
//!
//! ```
//! use uigen_core::{Attr, AttrType, Model};
//!
//! let mut model = Model::new("Message");
//! model.push_attr(Attr::new("phone", AttrType::String));
//! model.push_attr(Attr::new("user", AttrType::String).optional(true));
//!
//! let json = serde_json::to_value(&model).unwrap();
//! assert_eq!(json["attrs"][0]["name"], "phone");
//! assert_eq!(json["attrs"][1]["type"], "string");
//! assert_eq!(json["attrs"][1]["optional"], true);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Semantic category of an attribute value.
///
/// The set is closed. Supporting a new kind of value means adding a variant
/// here and one entry in the attribute type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrType {
    /// Text
    String,
    /// Whole number
    Integer,
    /// Floating or fixed point number
    Decimal,
    /// Point in time
    #[serde(rename = "datetime")]
    DateTime,
}

impl AttrType {
    /// All attribute types, in declaration order.
    pub const ALL: [Self; 4] = [Self::String, Self::Integer, Self::Decimal, Self::DateTime];

    /// Returns the stable tag name of this type.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::AttrType;
    ///
    /// assert_eq!(AttrType::String.name(), "string");
    /// assert_eq!(AttrType::DateTime.name(), "datetime");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::DateTime => "datetime",
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttrType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown attribute type: '{s}'")))
    }
}

/// Constraint attached to an attribute or a model.
///
/// Carries no payload yet; it exists so that limits such as maximum length
/// or numeric range can be added without changing [`Attr`] or [`Model`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Constraint {}

impl Constraint {
    /// Creates an empty constraint.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

/// A single named, typed field of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    /// Attribute name, unique within its model
    pub name: String,
    /// Semantic type tag
    #[serde(rename = "type")]
    pub attr_type: AttrType,
    /// Constraints in declaration order
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Whether the value may be absent
    pub optional: bool,
}

impl Attr {
    /// Creates a required attribute without constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, attr_type: AttrType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            constraints: Vec::new(),
            optional: false,
        }
    }

    /// Sets the optionality flag.
    #[must_use]
    pub const fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Appends a constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// Structural description of one data entity.
///
/// Attribute order is the declaration order of the source fields.
///
/// Attribute names are meant to be unique. [`Model::push_attr`] does not
/// check this; [`Model::try_push_attr`] and [`Model::validate`] do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model name
    pub name: String,
    /// Attributes in declaration order
    #[serde(default)]
    pub attrs: Vec<Attr>,
    /// Model-level constraints
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Appends an attribute without checking name uniqueness.
    pub fn push_attr(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    /// Appends an attribute, rejecting a name that is already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAttribute`] if an attribute with the same
    /// name exists; the model is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::{Attr, AttrType, Model};
    ///
    /// let mut model = Model::new("Invoice");
    /// model.try_push_attr(Attr::new("total", AttrType::Decimal)).unwrap();
    ///
    /// let err = model
    ///     .try_push_attr(Attr::new("total", AttrType::Integer))
    ///     .unwrap_err();
    /// assert!(err.is_duplicate_attribute());
    /// assert_eq!(model.attrs.len(), 1);
    /// ```
    pub fn try_push_attr(&mut self, attr: Attr) -> Result<()> {
        if self.attr(&attr.name).is_some() {
            return Err(Error::DuplicateAttribute {
                model: self.name.clone(),
                attr: attr.name,
            });
        }
        self.attrs.push(attr);
        Ok(())
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.name == name)
    }

    /// Iterates over attribute names in order.
    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|a| a.name.as_str())
    }

    /// Checks that attribute names are unique.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAttribute`] naming the first repeated
    /// attribute.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.attrs.len());
        for attr in &self.attrs {
            if !seen.insert(attr.name.as_str()) {
                return Err(Error::DuplicateAttribute {
                    model: self.name.clone(),
                    attr: attr.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the editable shape of this model, used by create and edit
    /// forms.
    #[must_use]
    pub fn form(&self) -> ModelForm {
        ModelForm {
            attrs: self.attrs.clone(),
            constraints: self.constraints.clone(),
        }
    }
}

/// The fields a create or edit form collects for a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelForm {
    /// Form fields in display order
    #[serde(default)]
    pub attrs: Vec<Attr>,
    /// Form-level constraints
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_model() -> Model {
        let mut model = Model::new("Message");
        model.push_attr(Attr::new("phone", AttrType::String));
        model.push_attr(Attr::new("planed_at", AttrType::DateTime));
        model.push_attr(Attr::new("user", AttrType::String).optional(true));
        model
    }

    // ========================================================================
    // AttrType Tests
    // ========================================================================

    #[test]
    fn test_attr_type_names() {
        let names: Vec<_> = AttrType::ALL.iter().map(AttrType::name).collect();
        assert_eq!(names, vec!["string", "integer", "decimal", "datetime"]);
    }

    #[test]
    fn test_attr_type_from_str() {
        assert_eq!("decimal".parse::<AttrType>().unwrap(), AttrType::Decimal);
        assert!("boolean".parse::<AttrType>().is_err());
    }

    #[test]
    fn test_attr_type_serde_matches_name() {
        for attr_type in AttrType::ALL {
            let json = serde_json::to_value(attr_type).unwrap();
            assert_eq!(json, attr_type.name());
        }
    }

    // ========================================================================
    // Model Tests
    // ========================================================================

    #[test]
    fn test_push_attr_keeps_order() {
        let model = message_model();
        let names: Vec<_> = model.attr_names().collect();
        assert_eq!(names, vec!["phone", "planed_at", "user"]);
    }

    #[test]
    fn test_push_attr_is_unchecked() {
        let mut model = message_model();
        model.push_attr(Attr::new("phone", AttrType::Integer));
        assert_eq!(model.attrs.len(), 4);
        assert!(model.validate().unwrap_err().is_duplicate_attribute());
    }

    #[test]
    fn test_try_push_attr_rejects_duplicate() {
        let mut model = message_model();
        let err = model
            .try_push_attr(Attr::new("user", AttrType::String))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateAttribute { ref model, ref attr } if model == "Message" && attr == "user"
        ));
        assert_eq!(model.attrs.len(), 3);
    }

    #[test]
    fn test_validate_accepts_unique_names() {
        assert!(message_model().validate().is_ok());
        assert!(Model::new("Empty").validate().is_ok());
    }

    #[test]
    fn test_attr_lookup() {
        let model = message_model();
        assert_eq!(model.attr("planed_at").unwrap().attr_type, AttrType::DateTime);
        assert!(model.attr("missing").is_none());
    }

    #[test]
    fn test_form_copies_attrs() {
        let model = message_model();
        let form = model.form();
        assert_eq!(form.attrs, model.attrs);
        assert!(form.constraints.is_empty());
    }

    #[test]
    fn test_model_json_shape() {
        let json = serde_json::to_value(message_model()).unwrap();
        assert_eq!(json["name"], "Message");
        assert_eq!(json["attrs"][1]["type"], "datetime");
        assert_eq!(json["attrs"][1]["optional"], false);
        assert_eq!(json["attrs"][2]["optional"], true);
        assert_eq!(json["attrs"][0]["constraints"], serde_json::json!([]));
    }

    #[test]
    fn test_model_deserializes_with_defaults() {
        let model: Model = serde_json::from_str(
            r#"{"name": "Tag", "attrs": [{"name": "label", "type": "string", "optional": false}]}"#,
        )
        .unwrap();
        assert_eq!(model.attrs[0], Attr::new("label", AttrType::String));
        assert!(model.constraints.is_empty());
    }

    #[test]
    fn test_attr_with_constraint() {
        let attr = Attr::new("code", AttrType::String).with_constraint(Constraint::new());
        assert_eq!(attr.constraints.len(), 1);
    }
}
