//! Frontend project generation.
//!
//! Turns a list of sections into a runnable frontend project: skeleton
//! files are copied or rendered, then a [`ProjectLayout`] emits the files
//! derived from each section's model and views.
//!
//! # Architecture
//!
//! - [`SkeletonSource`]: where skeleton files and templates come from
//!   ([`EmbeddedSkeleton`], [`DirectorySkeleton`])
//! - [`TemplateEngine`](template_engine::TemplateEngine): Handlebars in
//!   strict mode with naming helpers
//! - [`SourceGenerator`]: copies, renders and writes below a destination
//!   root, recording a [`GenerationReport`]
//! - [`FrontLayout`]: the Vue 3 + Vite project layout
//!
//! # Examples
//!
//! ```
//! use uigen_codegen::{FrontLayout, SourceGenerator};
//! use uigen_core::{GeneratorConfig, Section, SectionItem};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = GeneratorConfig::builder().app_name("demo").dest(dir.path()).build();
//!
//! let sections = vec![SectionItem::from(Section::new("home", None))];
//! let mut generator = SourceGenerator::from_config(&config).unwrap();
//! generator.run(&mut FrontLayout::new(), &sections).unwrap();
//!
//! let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
//! assert!(index.contains("<title>demo</title>"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod context;
mod front;
mod fs;
mod generator;
mod layout;
mod report;
mod skeleton;

pub mod template_engine;
pub mod typescript;

pub use context::RenderContext;
pub use front::{ApiModule, DEFAULT_API_BASE, FrontLayout, NavEntry, RouteEntry};
pub use fs::{clear_tree, ensure_dir};
pub use generator::SourceGenerator;
pub use layout::{ProjectLayout, SkeletonEntry};
pub use report::{FileKind, GeneratedFile, GenerationReport};
pub use skeleton::{DirectorySkeleton, EmbeddedSkeleton, SkeletonSource, TEMPLATE_EXTENSION};
