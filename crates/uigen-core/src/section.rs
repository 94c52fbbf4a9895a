//! UI sections and the views they offer.
//!
//! A [`Section`] is a titled group of [`View`]s. A [`ModelSection`] ties a
//! section to a [`Model`]; the generator receives both kinds mixed in one
//! ordered list of [`SectionItem`]s.
//!
//! # Examples
//!
//! ```
//! use uigen_core::{Model, ModelSection, Section, SectionItem, View};
//!
//! let dashboard = Section::new("dashboard", None);
//! let messages = ModelSection::new(Model::new("Message"), None, Some("Messages"))
//!     .with_views(View::crud());
//!
//! let items: Vec<SectionItem> = vec![dashboard.into(), messages.into()];
//! assert_eq!(items[0].section().title, "Dashboard");
//! assert_eq!(items[1].section().name, "Message");
//! assert!(items[1].model().is_some());
//! ```

use crate::naming::title_case;
use crate::{Error, Model, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A standard UI affordance offered for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Paged list of records
    #[serde(rename = "list")]
    ListModels,
    /// Read-only detail page
    #[serde(rename = "view")]
    ViewModel,
    /// Creation form
    #[serde(rename = "create")]
    CreateModel,
    /// Edit form
    #[serde(rename = "edit")]
    EditModel,
    /// Delete confirmation
    #[serde(rename = "delete")]
    DeleteModel,
}

impl View {
    /// Returns all five views in their canonical order.
    #[must_use]
    pub const fn crud() -> [Self; 5] {
        [
            Self::ListModels,
            Self::ViewModel,
            Self::CreateModel,
            Self::EditModel,
            Self::DeleteModel,
        ]
    }

    /// Short identifier used in routes and file names.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::View;
    ///
    /// assert_eq!(View::ListModels.slug(), "list");
    /// assert_eq!(View::DeleteModel.slug(), "delete");
    /// ```
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::ListModels => "list",
            Self::ViewModel => "view",
            Self::CreateModel => "create",
            Self::EditModel => "edit",
            Self::DeleteModel => "delete",
        }
    }

    /// Whether the view operates on a single existing record.
    #[must_use]
    pub const fn needs_record(&self) -> bool {
        matches!(self, Self::ViewModel | Self::EditModel | Self::DeleteModel)
    }

    /// Whether the view renders an input form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(self, Self::CreateModel | Self::EditModel)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::crud()
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown view: '{s}' (expected: list, view, create, edit, delete)"
                ))
            })
    }
}

/// A named, titled group of views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier, used for routes and file names
    pub name: String,
    /// Human readable heading
    pub title: String,
    /// Views in display order
    #[serde(default)]
    pub views: Vec<View>,
}

impl Section {
    /// Creates a section without views.
    ///
    /// A missing `title` defaults to the title-cased `name`. An explicit
    /// title is kept as given, even when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::Section;
    ///
    /// let section = Section::new("invoice_list", None);
    /// assert_eq!(section.title, "Invoice_List");
    ///
    /// let section = Section::new("invoice_list", Some("Invoices"));
    /// assert_eq!(section.title, "Invoices");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, title: Option<&str>) -> Self {
        let name = name.into();
        let title = title.map_or_else(|| title_case(&name), str::to_string);
        Self {
            name,
            title,
            views: Vec::new(),
        }
    }

    /// Replaces the view list.
    #[must_use]
    pub fn with_views(mut self, views: impl IntoIterator<Item = View>) -> Self {
        self.views = views.into_iter().collect();
        self
    }

    /// Whether this section offers the given view.
    #[must_use]
    pub fn has_view(&self, view: View) -> bool {
        self.views.contains(&view)
    }
}

/// A section bound to a model.
///
/// Dereferences to its [`Section`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSection {
    /// Section data
    #[serde(flatten)]
    pub section: Section,
    /// The model the views operate on
    pub model: Model,
}

impl ModelSection {
    /// Creates a section for `model`.
    ///
    /// A missing or empty `name` defaults to the model name; the title then
    /// defaults from the name as for [`Section::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::{Model, ModelSection};
    ///
    /// let section = ModelSection::new(Model::new("Message"), None, None);
    /// assert_eq!(section.name, "Message");
    /// assert_eq!(section.title, "Message");
    /// ```
    #[must_use]
    pub fn new(model: Model, name: Option<&str>, title: Option<&str>) -> Self {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => model.name.clone(),
        };
        Self {
            section: Section::new(name, title),
            model,
        }
    }

    /// Replaces the view list.
    #[must_use]
    pub fn with_views(mut self, views: impl IntoIterator<Item = View>) -> Self {
        self.section = self.section.with_views(views);
        self
    }
}

impl Deref for ModelSection {
    type Target = Section;

    fn deref(&self) -> &Section {
        &self.section
    }
}

/// One entry of the section list handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionItem {
    /// Section bound to a model
    Model(ModelSection),
    /// Section without a model
    Plain(Section),
}

impl SectionItem {
    /// Returns the section data.
    #[must_use]
    pub const fn section(&self) -> &Section {
        match self {
            Self::Plain(section) => section,
            Self::Model(ms) => &ms.section,
        }
    }

    /// Returns the bound model, if any.
    #[must_use]
    pub const fn model(&self) -> Option<&Model> {
        match self {
            Self::Plain(_) => None,
            Self::Model(ms) => Some(&ms.model),
        }
    }
}

impl From<Section> for SectionItem {
    fn from(section: Section) -> Self {
        Self::Plain(section)
    }
}

impl From<ModelSection> for SectionItem {
    fn from(section: ModelSection) -> Self {
        Self::Model(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attr, AttrType};

    // ========================================================================
    // View Tests
    // ========================================================================

    #[test]
    fn test_view_slugs_roundtrip_through_from_str() {
        for view in View::crud() {
            assert_eq!(view.slug().parse::<View>().unwrap(), view);
        }
    }

    #[test]
    fn test_view_from_str_is_case_insensitive() {
        assert_eq!("LIST".parse::<View>().unwrap(), View::ListModels);
        assert_eq!(" edit ".parse::<View>().unwrap(), View::EditModel);
    }

    #[test]
    fn test_view_from_str_unknown() {
        let err = "archive".parse::<View>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_view_serde_uses_slug() {
        let json = serde_json::to_value(View::CreateModel).unwrap();
        assert_eq!(json, "create");
        let view: View = serde_json::from_str("\"delete\"").unwrap();
        assert_eq!(view, View::DeleteModel);
    }

    #[test]
    fn test_view_classification() {
        assert!(!View::ListModels.needs_record());
        assert!(View::EditModel.needs_record());
        assert!(View::CreateModel.is_form());
        assert!(!View::DeleteModel.is_form());
    }

    // ========================================================================
    // Section Tests
    // ========================================================================

    #[test]
    fn test_section_default_title() {
        let section = Section::new("invoice_list", None);
        assert_eq!(section.name, "invoice_list");
        assert_eq!(section.title, "Invoice_List");
        assert!(section.views.is_empty());
    }

    #[test]
    fn test_section_explicit_empty_title_is_kept() {
        let section = Section::new("reports", Some(""));
        assert_eq!(section.title, "");
    }

    #[test]
    fn test_section_with_views() {
        let section = Section::new("reports", None).with_views([View::ListModels]);
        assert!(section.has_view(View::ListModels));
        assert!(!section.has_view(View::EditModel));
    }

    // ========================================================================
    // ModelSection Tests
    // ========================================================================

    #[test]
    fn test_model_section_name_defaults_to_model() {
        let section = ModelSection::new(Model::new("Message"), None, None);
        assert_eq!(section.name, "Message");
        assert_eq!(section.title, "Message");
    }

    #[test]
    fn test_model_section_explicit_name() {
        let section = ModelSection::new(Model::new("Message"), Some("sms_outbox"), None);
        assert_eq!(section.name, "sms_outbox");
        assert_eq!(section.title, "Sms_Outbox");
        assert_eq!(section.model.name, "Message");
    }

    #[test]
    fn test_model_section_serializes_flat() {
        let mut model = Model::new("Tag");
        model.push_attr(Attr::new("label", AttrType::String));
        let section = ModelSection::new(model, None, None).with_views([View::ListModels]);

        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["name"], "Tag");
        assert_eq!(json["views"], serde_json::json!(["list"]));
        assert_eq!(json["model"]["attrs"][0]["name"], "label");
    }

    #[test]
    fn test_section_item_accessors() {
        let plain: SectionItem = Section::new("home", None).into();
        assert!(plain.model().is_none());
        assert_eq!(plain.section().title, "Home");

        let bound: SectionItem = ModelSection::new(Model::new("Tag"), None, None).into();
        assert_eq!(bound.model().unwrap().name, "Tag");
    }
}
