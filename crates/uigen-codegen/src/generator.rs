//! Source generator.
//!
//! Copies skeleton files and renders templates into a destination root.
//! Each template sees its per-call context layered over the generator's
//! base context (see [`RenderContext::layered`]).
//!
//! # Examples
//!
//! ```
//! use uigen_codegen::{EmbeddedSkeleton, FrontLayout, SourceGenerator};
//! use uigen_core::{Attr, AttrType, Model, ModelSection, SectionItem};
//!
//! let dir = tempfile::tempdir().unwrap();
//!
//! let mut model = Model::new("Message");
//! model.push_attr(Attr::new("phone", AttrType::String));
//! let sections = vec![SectionItem::from(ModelSection::new(model, Some("messages"), None))];
//!
//! let mut generator = SourceGenerator::new(dir.path(), Box::new(EmbeddedSkeleton::new())).unwrap();
//! let report = generator.run(&mut FrontLayout::new(), &sections).unwrap();
//!
//! assert!(dir.path().join("package.json").is_file());
//! assert!(dir.path().join("src/models/Message.ts").is_file());
//! assert!(report.file_count() > 10);
//! ```

use crate::context::RenderContext;
use crate::fs::{clear_tree, ensure_dir};
use crate::layout::{ProjectLayout, SkeletonEntry};
use crate::report::{FileKind, GeneratedFile, GenerationReport};
use crate::skeleton::{DirectorySkeleton, EmbeddedSkeleton, SkeletonSource};
use crate::template_engine::TemplateEngine;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use uigen_core::{DEFAULT_APP_NAME, Error, GeneratorConfig, Result, SectionItem};

/// Writes skeleton and template output below a destination root.
#[derive(Debug)]
pub struct SourceGenerator {
    base_path: PathBuf,
    clear_dest: bool,
    source: Box<dyn SkeletonSource>,
    engine: TemplateEngine<'static>,
    base_context: RenderContext,
    report: GenerationReport,
}

impl SourceGenerator {
    /// Creates a generator writing below `base_path`.
    ///
    /// The base context starts with `app_name` set to
    /// [`DEFAULT_APP_NAME`].
    ///
    /// # Errors
    ///
    /// Returns an error if a template of `source` cannot be read or does
    /// not compile.
    pub fn new(base_path: impl Into<PathBuf>, source: Box<dyn SkeletonSource>) -> Result<Self> {
        let base_path = base_path.into();
        let engine = TemplateEngine::from_source(source.as_ref())?;
        Ok(Self {
            report: GenerationReport::new(&base_path),
            base_path,
            clear_dest: false,
            source,
            engine,
            base_context: RenderContext::new().with("app_name", DEFAULT_APP_NAME),
        })
    }

    /// Creates a generator from a configuration.
    ///
    /// Uses the configured skeleton directory, or the embedded skeleton if
    /// none is set. The configured context becomes the base context, with
    /// `app_name` taken from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid or
    /// the skeleton directory does not exist.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let source: Box<dyn SkeletonSource> = match &config.skeleton_dir {
            Some(dir) => Box::new(DirectorySkeleton::new(dir)?),
            None => Box::new(EmbeddedSkeleton::new()),
        };
        let base = RenderContext::from(config.base_context.clone())
            .with("app_name", config.app_name.clone());

        Ok(Self::new(&config.dest, source)?
            .with_clear_dest(config.clear_dest)
            .with_base_context(&base))
    }

    /// Empties the destination before generating, keeping its root.
    #[must_use]
    pub const fn with_clear_dest(mut self, clear_dest: bool) -> Self {
        self.clear_dest = clear_dest;
        self
    }

    /// Layers `context` over the current base context.
    #[must_use]
    pub fn with_base_context(mut self, context: &RenderContext) -> Self {
        self.base_context = RenderContext::layered(Some(context), &self.base_context);
        self
    }

    /// Destination root.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Context every template sees.
    #[must_use]
    pub const fn base_context(&self) -> &RenderContext {
        &self.base_context
    }

    /// Files written so far in the current run.
    #[must_use]
    pub const fn report(&self) -> &GenerationReport {
        &self.report
    }

    /// Resolves `dest` below the root and creates its parent directories.
    ///
    /// Creating directories that already exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `dest` is absolute or leaves
    /// the root, or an I/O error if a directory cannot be created.
    pub fn ensure_path(&self, dest: impl AsRef<Path>) -> Result<PathBuf> {
        let dest = dest.as_ref();
        let inside = !dest.as_os_str().is_empty()
            && dest
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !inside {
            return Err(Error::InvalidArgument(format!(
                "destination must be a relative path inside the output root: '{}'",
                dest.display()
            )));
        }

        let path = self.base_path.join(dest);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(path)
    }

    /// Copies static skeleton file `source` to `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] if the skeleton has no such file,
    /// or an I/O error if it cannot be written.
    pub fn copy_file(&mut self, source: &str, dest: impl AsRef<Path>) -> Result<()> {
        let content = self.source.static_file(source)?;
        let path = self.ensure_path(&dest)?;
        std::fs::write(&path, &content)?;

        debug!("Copied {source} -> {}", path.display());
        self.report
            .add_file(GeneratedFile::new(dest.as_ref(), FileKind::Copied, content.len()));
        Ok(())
    }

    /// Renders template `source` into `dest`.
    ///
    /// The template sees `context` layered over the base context, or the
    /// base context alone when `context` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] for an unknown template,
    /// [`Error::RenderError`] if rendering fails, or an I/O error if the
    /// output cannot be written.
    pub fn render_template(
        &mut self,
        source: &str,
        dest: impl AsRef<Path>,
        context: Option<&RenderContext>,
    ) -> Result<()> {
        let merged = RenderContext::layered(context, &self.base_context);
        let content = self.engine.render(source, &merged)?;
        let path = self.ensure_path(&dest)?;
        std::fs::write(&path, &content)?;

        debug!("Rendered {source} -> {}", path.display());
        self.report
            .add_file(GeneratedFile::new(dest.as_ref(), FileKind::Rendered, content.len()));
        Ok(())
    }

    /// Produces every skeleton entry in order.
    ///
    /// # Errors
    ///
    /// See [`SourceGenerator::copy_file`] and
    /// [`SourceGenerator::render_template`].
    pub fn generate_skeleton(&mut self, entries: &[SkeletonEntry]) -> Result<()> {
        for entry in entries {
            match entry {
                SkeletonEntry::Copy { source, dest } => self.copy_file(source, dest)?,
                SkeletonEntry::Render { source, dest } => self.render_template(source, dest, None)?,
            }
        }
        Ok(())
    }

    /// Empties the destination root, keeping the root itself.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if an entry cannot be removed.
    pub fn clear(&mut self) -> Result<()> {
        clear_tree(&self.base_path, false)?;
        self.report.cleared = true;
        Ok(())
    }

    /// Generates a project.
    ///
    /// Lets `layout` read the sections, clears the destination if
    /// configured, writes the layout's skeleton and then lets the layout
    /// emit its section files.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step; files written before it
    /// stay on disk.
    pub fn run(
        &mut self,
        layout: &mut dyn ProjectLayout,
        sections: &[SectionItem],
    ) -> Result<GenerationReport> {
        self.report = GenerationReport::new(&self.base_path);
        info!(
            "Generating {} sections into {}",
            sections.len(),
            self.base_path.display()
        );

        layout.read(sections)?;
        if self.clear_dest {
            self.clear()?;
        }
        self.generate_skeleton(&layout.skeleton())?;
        layout.emit(self)?;

        let report = std::mem::replace(&mut self.report, GenerationReport::new(&self.base_path));
        info!(
            "Generated {} files ({} bytes) into {}",
            report.file_count(),
            report.total_bytes(),
            self.base_path.display()
        );
        Ok(report)
    }
}
