//! Generate command implementation.
//!
//! Loads a schema document, applies command-line overrides to its
//! `[generator]` table and writes the frontend project.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use uigen_codegen::{FileKind, FrontLayout, GenerationReport, SourceGenerator};
use uigen_core::GeneratorConfig;
use uigen_core::cli::{ExitCode, OutputFormat};
use uigen_introspector::SchemaDocument;

/// Command-line values that take precedence over the schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Destination root
    pub dest: Option<PathBuf>,
    /// Empty the destination first
    pub clear: bool,
    /// Custom skeleton directory
    pub skeleton: Option<PathBuf>,
    /// Application name
    pub app_name: Option<String>,
}

impl Overrides {
    /// Applies the overrides to `config`.
    ///
    /// `clear` only ever switches clearing on; a document that asks for
    /// clearing keeps it.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(dest) = &self.dest {
            config.dest.clone_from(dest);
        }
        if self.clear {
            config.clear_dest = true;
        }
        if let Some(skeleton) = &self.skeleton {
            config.skeleton_dir = Some(skeleton.clone());
        }
        if let Some(name) = &self.app_name {
            config.app_name.clone_from(name);
        }
    }
}

/// Result of a generation run.
#[derive(Debug, Serialize)]
pub struct GenerationSummary {
    /// Schema document the project was generated from
    pub schema: String,
    /// Destination root
    pub dest: String,
    /// Whether the destination was emptied first
    pub cleared: bool,
    /// Number of sections generated
    pub sections: usize,
    /// Files rendered from templates
    pub rendered: usize,
    /// Files copied verbatim
    pub copied: usize,
    /// Total bytes written
    pub bytes: usize,
    /// Written paths, relative to the destination
    pub files: Vec<String>,
}

impl GenerationSummary {
    fn new(schema: &Path, sections: usize, report: &GenerationReport) -> Self {
        Self {
            schema: schema.display().to_string(),
            dest: report.root.display().to_string(),
            cleared: report.cleared,
            sections,
            rendered: report.count(FileKind::Rendered),
            copied: report.count(FileKind::Copied),
            bytes: report.total_bytes(),
            files: report
                .files()
                .map(|f| f.path().display().to_string())
                .collect(),
        }
    }
}

/// Loads `schema` and generates its project.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or transformed, or
/// if generation fails. The underlying [`uigen_core::Error`] stays in the
/// error chain.
pub fn generate_project(schema: &Path, overrides: &Overrides) -> Result<GenerationSummary> {
    let document = SchemaDocument::load(schema)
        .with_context(|| format!("failed to load schema '{}'", schema.display()))?;

    let mut config = document.generator.clone();
    overrides.apply(&mut config);

    let sections = document
        .sections()
        .with_context(|| format!("invalid sections in '{}'", schema.display()))?;

    let mut generator =
        SourceGenerator::from_config(&config).context("failed to set up the generator")?;
    let report = generator
        .run(&mut FrontLayout::new(), &sections)
        .with_context(|| format!("failed to generate into '{}'", config.dest.display()))?;

    Ok(GenerationSummary::new(schema, sections.len(), &report))
}

/// Runs the generate command.
///
/// # Errors
///
/// See [`generate_project`]; also fails if the summary cannot be
/// formatted.
pub fn run(schema: &Path, overrides: &Overrides, output_format: OutputFormat) -> Result<ExitCode> {
    info!("Generating from schema {}", schema.display());

    let summary = generate_project(schema, overrides)?;
    println!("{}", crate::formatters::format_output(&summary, output_format)?);

    info!(
        "Wrote {} files for {} sections to {}",
        summary.files.len(),
        summary.sections,
        summary.dest
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SCHEMA: &str = r#"
[generator]
app_name = "outbox"

[[classes]]
name = "Message"
fields = [
    { name = "id", type = "Optional[int]" },
    { name = "phone", type = "str" },
]

[[sections]]
model = "Message"
name = "messages"
views = ["list", "edit"]
"#;

    fn write_schema(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("schema.toml");
        fs::write(&path, text).unwrap();
        path
    }

    // ========================================================================
    // Overrides Tests
    // ========================================================================

    #[test]
    fn test_overrides_replace_document_values() {
        let mut config = GeneratorConfig::default();
        let overrides = Overrides {
            dest: Some(PathBuf::from("web")),
            clear: true,
            skeleton: Some(PathBuf::from("skel")),
            app_name: Some("outbox".to_string()),
        };
        overrides.apply(&mut config);

        assert_eq!(config.dest, PathBuf::from("web"));
        assert!(config.clear_dest);
        assert_eq!(config.skeleton_dir, Some(PathBuf::from("skel")));
        assert_eq!(config.app_name, "outbox");
    }

    #[test]
    fn test_empty_overrides_keep_document_values() {
        let mut config = GeneratorConfig::builder().dest("out").clear_dest(true).build();
        let before = config.clone();
        Overrides::default().apply(&mut config);
        assert_eq!(config, before);
    }

    // ========================================================================
    // generate_project Tests
    // ========================================================================

    #[test]
    fn test_generate_project() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(dir.path(), SCHEMA);
        let dest = dir.path().join("web");
        let overrides = Overrides {
            dest: Some(dest.clone()),
            ..Overrides::default()
        };

        let summary = generate_project(&schema, &overrides).unwrap();

        assert_eq!(summary.sections, 1);
        assert!(!summary.cleared);
        assert_eq!(summary.rendered + summary.copied, summary.files.len());
        assert!(summary.files.contains(&"src/views/messages/MessageEdit.vue".to_string()));
        assert!(dest.join("src/models/Message.ts").is_file());
        assert!(fs::read_to_string(dest.join("package.json")).unwrap().contains("\"outbox\""));
    }

    #[test]
    fn test_generate_missing_schema_keeps_io_error() {
        let dir = TempDir::new().unwrap();
        let err = generate_project(&dir.path().join("missing.toml"), &Overrides::default())
            .unwrap_err();

        let source = err.downcast_ref::<uigen_core::Error>().unwrap();
        assert!(source.is_io_error());
        assert!(format!("{err:#}").contains("missing.toml"));
    }

    #[test]
    fn test_generate_unknown_model_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(dir.path(), "[[sections]]\nmodel = \"Ghost\"\n");
        let overrides = Overrides {
            dest: Some(dir.path().join("web")),
            ..Overrides::default()
        };

        let err = generate_project(&schema, &overrides).unwrap_err();
        let source = err.downcast_ref::<uigen_core::Error>().unwrap();
        assert!(source.is_validation_error());
        assert!(!dir.path().join("web").exists());
    }
}
