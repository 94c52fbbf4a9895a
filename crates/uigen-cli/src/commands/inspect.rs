//! Inspect command implementation.
//!
//! Shows the models a schema document produces and the sections built
//! from them, without writing anything.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;
use uigen_core::cli::{ExitCode, OutputFormat};
use uigen_core::{Model, SectionItem, View};
use uigen_introspector::{SchemaDocument, class_to_model};

/// One section as seen by the generator.
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    /// Section name
    pub name: String,
    /// Display title
    pub title: String,
    /// Model name, for model sections
    pub model: Option<String>,
    /// Offered views
    pub views: Vec<View>,
}

impl From<&SectionItem> for SectionSummary {
    fn from(item: &SectionItem) -> Self {
        let section = item.section();
        Self {
            name: section.name.clone(),
            title: section.title.clone(),
            model: item.model().map(|m| m.name.clone()),
            views: section.views.clone(),
        }
    }
}

/// Result of inspecting a schema document.
#[derive(Debug, Serialize)]
pub struct Inspection {
    /// Schema document path
    pub schema: String,
    /// Transformed models
    pub models: Vec<Model>,
    /// Sections, omitted when a single class is inspected
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionSummary>,
}

/// Loads `schema` and transforms its classes.
///
/// With `class`, only that class is transformed and sections are left out.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, the class is not
/// declared, or a transform fails.
pub fn inspect_schema(schema: &Path, class: Option<&str>) -> Result<Inspection> {
    let document = SchemaDocument::load(schema)
        .with_context(|| format!("failed to load schema '{}'", schema.display()))?;

    let (models, sections) = match class {
        Some(name) => {
            let descriptor = document
                .class_descriptor(name)
                .with_context(|| format!("cannot inspect class '{name}'"))?;
            (vec![class_to_model(&descriptor, None)?], Vec::new())
        }
        None => {
            let models = document.models().context("failed to transform classes")?;
            let sections = document.sections().context("invalid sections")?;
            (models, sections.iter().map(SectionSummary::from).collect())
        }
    };

    Ok(Inspection {
        schema: schema.display().to_string(),
        models,
        sections,
    })
}

/// Runs the inspect command.
///
/// # Errors
///
/// See [`inspect_schema`]; also fails if the result cannot be formatted.
pub fn run(schema: &Path, class: Option<&str>, output_format: OutputFormat) -> Result<ExitCode> {
    info!("Inspecting schema {}", schema.display());

    let inspection = inspect_schema(schema, class)?;
    println!("{}", crate::formatters::format_output(&inspection, output_format)?);

    Ok(ExitCode::SUCCESS)
}
