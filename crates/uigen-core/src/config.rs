//! Generator configuration.
//!
//! The base rendering context that every template sees is part of the
//! configuration and is passed explicitly to the generator; nothing is kept
//! in process-wide state.
//!
//! # Examples
//!
//! ```
//! use uigen_core::GeneratorConfig;
//! use serde_json::json;
//!
//! let config = GeneratorConfig::builder()
//!     .dest("out/frontend")
//!     .clear_dest(true)
//!     .context("api_base", json!("/api"))
//!     .build();
//!
//! assert!(config.clear_dest);
//! assert_eq!(config.base_context["api_base"], "/api");
//! assert!(config.validate().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Default application name used in generated `package.json` and titles.
pub const DEFAULT_APP_NAME: &str = "uigen-app";

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the generated application.
    ///
    /// Default: `uigen-app`
    pub app_name: String,

    /// Destination root for generated files.
    ///
    /// Default: `./frontend`
    pub dest: PathBuf,

    /// Empty the destination before generating.
    ///
    /// The destination directory itself is kept.
    /// Default: false
    pub clear_dest: bool,

    /// Directory holding a custom skeleton.
    ///
    /// If `None`, the built-in skeleton is used.
    /// Default: None
    pub skeleton_dir: Option<PathBuf>,

    /// Values available to every template.
    ///
    /// Per-call context keys shadow keys of the same name here.
    #[serde(rename = "context")]
    pub base_context: Map<String, Value>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            dest: PathBuf::from("frontend"),
            clear_dest: false,
            skeleton_dir: None,
            base_context: Map::new(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML or has
    /// unknown keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_toml_str(r#"
    ///     app_name = "outbox"
    ///     clear_dest = true
    ///
    ///     [context]
    ///     api_base = "/api/v1"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.app_name, "outbox");
    /// assert_eq!(config.base_context["api_base"], "/api/v1");
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("invalid generator configuration: {e}"),
        })
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`Error::ConfigError`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded generator config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - The application name is empty
    /// - The destination path is empty
    /// - The skeleton directory path is empty
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "app_name must not be empty".to_string(),
            });
        }

        if self.dest.as_os_str().is_empty() {
            return Err(Error::ConfigError {
                message: "destination path must not be empty".to_string(),
            });
        }

        if let Some(dir) = &self.skeleton_dir
            && dir.as_os_str().is_empty()
        {
            return Err(Error::ConfigError {
                message: "skeleton directory path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Sets the application name.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_name = name.into();
        self
    }

    /// Sets the destination root.
    #[must_use]
    pub fn dest(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dest = path.into();
        self
    }

    /// Enables or disables clearing the destination first.
    #[must_use]
    pub const fn clear_dest(mut self, clear: bool) -> Self {
        self.config.clear_dest = clear;
        self
    }

    /// Uses a skeleton directory instead of the built-in skeleton.
    #[must_use]
    pub fn skeleton_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.skeleton_dir = Some(path.into());
        self
    }

    /// Adds one base context value.
    #[must_use]
    pub fn context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.base_context.insert(key.into(), value);
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
