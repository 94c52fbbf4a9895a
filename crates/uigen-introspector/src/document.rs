//! Schema documents.
//!
//! A schema document is a TOML file declaring enums, classes with typed
//! fields, the sections to generate and, optionally, the generator
//! configuration:
//!
//! ```toml
//! [generator]
//! app_name = "outbox"
//!
//! [enums.MessageState]
//! variants = ["new", "send"]
//!
//! [[classes]]
//! name = "Message"
//! fields = [
//!     { name = "phone", type = "str" },
//!     { name = "state", type = "MessageState" },
//!     { name = "user", type = "Optional[str]" },
//! ]
//!
//! [[sections]]
//! model = "Message"
//! name = "messages"
//! views = ["list", "view"]
//! ```

use crate::expr::{TypeScope, parse_type_expr};
use crate::transform::class_to_model;
use crate::types::{ClassDescriptor, EnumDesc, FieldDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;
use uigen_core::{
    Error, GeneratorConfig, Model, ModelSection, Result, Section, SectionItem, View,
};

/// Parsed schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    /// Generator configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Enum declarations by name
    #[serde(default)]
    pub enums: BTreeMap<String, EnumDecl>,
    /// Class declarations in document order
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    /// Sections in display order
    #[serde(default)]
    pub sections: Vec<SectionDecl>,
}

/// Enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDecl {
    /// Variant values in declaration order
    pub variants: Vec<String>,
}

/// Class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDecl {
    /// Class name
    pub name: String,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// Field declaration with its type written as a type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    /// Field name
    pub name: String,
    /// Type expression, e.g. `Optional[str]`
    #[serde(rename = "type")]
    pub ty: String,
}

/// Section declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDecl {
    /// Class the section is bound to
    pub model: Option<String>,
    /// Section name; defaults to the model name for model sections
    pub name: Option<String>,
    /// Heading; defaults to the title-cased name when absent
    pub title: Option<String>,
    /// Views; defaults to all five
    pub views: Option<Vec<View>>,
    /// Name given to the generated model instead of the class name
    pub model_name: Option<String>,
}

impl SchemaDocument {
    /// Parses a schema document from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML or does
    /// not have the document shape.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("invalid schema document: {e}"),
        })
    }

    /// Loads a schema document from a file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`Error::ConfigError`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let doc = Self::from_toml_str(&text)?;
        debug!(
            "Loaded schema {} ({} classes, {} sections)",
            path.display(),
            doc.classes.len(),
            doc.sections.len()
        );
        Ok(doc)
    }

    /// Returns the enums declared by this document.
    #[must_use]
    pub fn scope(&self) -> TypeScope {
        self.enums.iter().fold(TypeScope::new(), |scope, (name, decl)| {
            scope.with_enum(EnumDesc::new(name, decl.variants.iter().cloned()))
        })
    }

    /// Resolves every class declaration into a class descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeExpression`] for a malformed field type and
    /// [`Error::ValidationError`] for empty or repeated names.
    pub fn class_descriptors(&self) -> Result<Vec<ClassDescriptor>> {
        let scope = self.scope();
        self.classes
            .iter()
            .map(|class| class_descriptor(class, &scope))
            .collect()
    }

    /// Resolves the class declaration named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if no such class is declared, or
    /// any error of [`SchemaDocument::class_descriptors`].
    pub fn class_descriptor(&self, name: &str) -> Result<ClassDescriptor> {
        let class = self.find_class(name)?;
        class_descriptor(class, &self.scope())
    }

    /// Transforms every class into a model, in document order.
    ///
    /// # Errors
    ///
    /// See [`SchemaDocument::class_descriptors`] and
    /// [`class_to_model`](crate::class_to_model).
    pub fn models(&self) -> Result<Vec<Model>> {
        self.class_descriptors()?
            .iter()
            .map(|class| class_to_model(class, None))
            .collect()
    }

    /// Builds the section list handed to the generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if a section references an
    /// undeclared class, or a plain section has no name. Class resolution
    /// and transform errors propagate.
    pub fn sections(&self) -> Result<Vec<SectionItem>> {
        let scope = self.scope();
        self.sections
            .iter()
            .enumerate()
            .map(|(index, decl)| {
                let views = decl.views.clone().unwrap_or_else(|| View::crud().to_vec());
                let title = decl.title.as_deref();

                if let Some(model) = &decl.model {
                    let class = class_descriptor(self.find_class(model)?, &scope)?;
                    let model = class_to_model(&class, decl.model_name.as_deref())?;
                    let section = ModelSection::new(model, decl.name.as_deref(), title);
                    return Ok(section.with_views(views).into());
                }

                let name = decl
                    .name
                    .as_deref()
                    .filter(|n| !n.trim().is_empty())
                    .ok_or_else(|| Error::ValidationError {
                        field: format!("sections[{index}]"),
                        reason: "a section without a model needs a name".to_string(),
                    })?;
                Ok(Section::new(name, title).with_views(views).into())
            })
            .collect()
    }

    fn find_class(&self, name: &str) -> Result<&ClassDecl> {
        self.classes
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::ValidationError {
                field: "model".to_string(),
                reason: format!("no class named '{name}' is declared"),
            })
    }
}

fn class_descriptor(class: &ClassDecl, scope: &TypeScope) -> Result<ClassDescriptor> {
    let fields = class
        .fields
        .iter()
        .map(|field| Ok(FieldDescriptor::new(&field.name, parse_type_expr(&field.ty, scope)?)))
        .collect::<Result<Vec<_>>>()?;
    ClassDescriptor::new(&class.name, fields)
}
