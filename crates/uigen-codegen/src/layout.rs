//! Project layouts.
//!
//! A layout decides what a generated project looks like: which skeleton
//! files it starts from and which files it derives from the sections.

use crate::generator::SourceGenerator;
use uigen_core::{Result, SectionItem};

/// One skeleton file to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonEntry {
    /// Copy a static skeleton file verbatim
    Copy {
        /// Skeleton name
        source: String,
        /// Destination, relative to the output root
        dest: String,
    },
    /// Render a skeleton template with the base context
    Render {
        /// Template name
        source: String,
        /// Destination, relative to the output root
        dest: String,
    },
}

impl SkeletonEntry {
    /// Copies `source` to the same relative path.
    #[must_use]
    pub fn copy(source: &str) -> Self {
        Self::Copy {
            source: source.to_string(),
            dest: source.to_string(),
        }
    }

    /// Renders `source` into `dest`.
    #[must_use]
    pub fn render(source: &str, dest: &str) -> Self {
        Self::Render {
            source: source.to_string(),
            dest: dest.to_string(),
        }
    }

    /// Destination path, relative to the output root.
    #[must_use]
    pub fn dest(&self) -> &str {
        match self {
            Self::Copy { dest, .. } | Self::Render { dest, .. } => dest,
        }
    }
}

/// Shape of a generated project.
///
/// [`SourceGenerator::run`] calls [`read`](ProjectLayout::read) with the
/// sections, then writes the [`skeleton`](ProjectLayout::skeleton), then
/// hands itself to [`emit`](ProjectLayout::emit).
pub trait ProjectLayout {
    /// Static and templated files every project of this layout contains.
    fn skeleton(&self) -> Vec<SkeletonEntry>;

    /// Collects what the layout needs from the sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the sections cannot be laid out.
    fn read(&mut self, sections: &[SectionItem]) -> Result<()>;

    /// Writes the section-derived files.
    ///
    /// # Errors
    ///
    /// Returns any error raised while rendering or writing files.
    fn emit(&self, generator: &mut SourceGenerator) -> Result<()>;
}
