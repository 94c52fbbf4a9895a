//! Skeleton sources.
//!
//! A skeleton source supplies the files a generated project starts from:
//! static files copied verbatim and Handlebars templates (names ending in
//! `.hbs`). Names are relative, `/`-separated paths.
//!
//! Two sources are provided: [`EmbeddedSkeleton`], compiled into the
//! binary, and [`DirectorySkeleton`], read from a directory at run time.
//!
//! # Examples
//!
//! ```
//! use uigen_codegen::{EmbeddedSkeleton, SkeletonSource};
//!
//! let skeleton = EmbeddedSkeleton::new();
//! assert!(skeleton.static_file("vite.config.ts").is_ok());
//! assert!(skeleton.template_names().contains(&"templates/model.ts.hbs".to_string()));
//!
//! let err = skeleton.template("missing.hbs").unwrap_err();
//! assert!(err.is_template_not_found());
//! ```

use std::fmt::Debug;
use std::path::{Component, Path, PathBuf};
use uigen_core::{Error, Result};
use walkdir::WalkDir;

/// File extension that marks a template.
pub const TEMPLATE_EXTENSION: &str = ".hbs";

/// Provider of skeleton files and templates.
pub trait SkeletonSource: Debug + Send + Sync {
    /// Returns the text of template `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] if there is no such template.
    fn template(&self, name: &str) -> Result<String>;

    /// Returns the bytes of static file `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] if there is no such file.
    fn static_file(&self, name: &str) -> Result<Vec<u8>>;

    /// Lists every template name, sorted.
    fn template_names(&self) -> Vec<String>;
}

const EMBEDDED_FILES: &[(&str, &str)] = &[
    ("vite.config.ts", include_str!("../skeleton/vite.config.ts")),
    ("index.html.hbs", include_str!("../skeleton/index.html.hbs")),
    ("tsconfig.json", include_str!("../skeleton/tsconfig.json")),
    ("package.json.hbs", include_str!("../skeleton/package.json.hbs")),
    ("public/favicon.svg", include_str!("../skeleton/public/favicon.svg")),
    ("src/App.vue.hbs", include_str!("../skeleton/src/App.vue.hbs")),
    ("src/main.ts", include_str!("../skeleton/src/main.ts")),
    ("src/env.d.ts", include_str!("../skeleton/src/env.d.ts")),
    ("src/assets/logo.svg", include_str!("../skeleton/src/assets/logo.svg")),
    (
        "src/components/HelloWorld.vue",
        include_str!("../skeleton/src/components/HelloWorld.vue"),
    ),
    ("templates/model.ts.hbs", include_str!("../skeleton/templates/model.ts.hbs")),
    ("templates/api.ts.hbs", include_str!("../skeleton/templates/api.ts.hbs")),
    ("templates/list.vue.hbs", include_str!("../skeleton/templates/list.vue.hbs")),
    ("templates/view.vue.hbs", include_str!("../skeleton/templates/view.vue.hbs")),
    ("templates/form.vue.hbs", include_str!("../skeleton/templates/form.vue.hbs")),
    ("templates/delete.vue.hbs", include_str!("../skeleton/templates/delete.vue.hbs")),
    ("templates/page.vue.hbs", include_str!("../skeleton/templates/page.vue.hbs")),
    ("templates/router.ts.hbs", include_str!("../skeleton/templates/router.ts.hbs")),
];

/// The built-in Vue 3 + Vite skeleton.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSkeleton;

impl EmbeddedSkeleton {
    /// Creates the embedded skeleton.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn lookup(name: &str) -> Result<&'static str> {
        EMBEDDED_FILES
            .iter()
            .find(|(path, _)| *path == name)
            .map(|(_, content)| *content)
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
            })
    }
}

impl SkeletonSource for EmbeddedSkeleton {
    fn template(&self, name: &str) -> Result<String> {
        Self::lookup(name).map(str::to_string)
    }

    fn static_file(&self, name: &str) -> Result<Vec<u8>> {
        Self::lookup(name).map(|content| content.as_bytes().to_vec())
    }

    fn template_names(&self) -> Vec<String> {
        let mut names: Vec<_> = EMBEDDED_FILES
            .iter()
            .map(|(path, _)| *path)
            .filter(|path| path.ends_with(TEMPLATE_EXTENSION))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }
}

/// A skeleton read from a directory.
///
/// Names must stay inside the directory: absolute paths and `..`
/// components are rejected.
#[derive(Debug, Clone)]
pub struct DirectorySkeleton {
    root: PathBuf,
}

impl DirectorySkeleton {
    /// Opens a skeleton directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `root` is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::ConfigError {
                message: format!("skeleton directory not found: {}", root.display()),
            });
        }
        Ok(Self { root })
    }

    /// Returns the skeleton root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let relative = Path::new(name);
        let is_safe = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !is_safe {
            return Err(Error::InvalidArgument(format!(
                "skeleton name must be a relative path inside the skeleton: '{name}'"
            )));
        }

        let path = self.root.join(relative);
        if path.is_file() {
            Ok(path)
        } else {
            Err(Error::TemplateNotFound {
                name: name.to_string(),
            })
        }
    }
}

impl SkeletonSource for DirectorySkeleton {
    fn template(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.resolve(name)?)?)
    }

    fn static_file(&self, name: &str) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.resolve(name)?)?)
    }

    fn template_names(&self) -> Vec<String> {
        let mut names: Vec<_> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(&self.root).ok()?;
                let name = relative.to_string_lossy().replace('\\', "/");
                name.ends_with(TEMPLATE_EXTENSION).then_some(name)
            })
            .collect();
        names.sort();
        names
    }
}
