//! Core types and errors for model-driven UI scaffold generation.
//!
//! This crate provides the value types shared by every other crate in the
//! workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The data model schema (`Model`, `Attr`, `AttrType`, `Constraint`)
//! - UI grouping types (`Section`, `ModelSection`, `View`)
//! - Error hierarchy shared by introspection, transform and generation
//! - Generator configuration and CLI support types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod model;
mod section;

pub mod cli;
pub mod naming;

pub use config::{DEFAULT_APP_NAME, GeneratorConfig, GeneratorConfigBuilder};
pub use error::{Error, Result};
pub use model::{Attr, AttrType, Constraint, Model, ModelForm};
pub use section::{ModelSection, Section, SectionItem, View};
