//! Template engine for code generation using Handlebars.
//!
//! Wraps Handlebars in strict mode with HTML escaping turned off, since the
//! output is source code, and registers the naming and type helpers the
//! skeleton templates use:
//!
//! | Helper | Example | Output |
//! |--------|---------|--------|
//! | `pascal_case` | `{{pascal_case "short_message"}}` | `ShortMessage` |
//! | `camel_case` | `{{camel_case "ShortMessage"}}` | `shortMessage` |
//! | `snake_case` | `{{snake_case "ShortMessage"}}` | `short_message` |
//! | `kebab_case` | `{{kebab_case "ShortMessage"}}` | `short-message` |
//! | `label` | `{{label "planed_at"}}` | `Planed At` |
//! | `ts_type` | `{{ts_type "decimal"}}` | `number` |
//! | `input_type` | `{{input_type "datetime"}}` | `datetime-local` |
//! | `json` | `{{json title}}` | `"Messages"` |
//!
//! # Examples
//!
//! ```
//! use uigen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new();
//! engine
//!     .register_template_string("greeting", "export const {{camel_case name}} = 1")
//!     .unwrap();
//!
//! let out = engine.render("greeting", &json!({"name": "planed_at"})).unwrap();
//! assert_eq!(out, "export const planedAt = 1");
//! ```

use crate::skeleton::SkeletonSource;
use handlebars::Handlebars;
use serde::Serialize;
use uigen_core::{Error, Result};

mod helpers {
    use crate::typescript;
    use handlebars::handlebars_helper;
    use uigen_core::AttrType;

    handlebars_helper!(pascal_case: |name: str| typescript::to_pascal_case(name));
    handlebars_helper!(camel_case: |name: str| typescript::to_camel_case(name));
    handlebars_helper!(snake_case: |name: str| typescript::to_snake_case(name));
    handlebars_helper!(kebab_case: |name: str| typescript::to_kebab_case(name));
    handlebars_helper!(label: |name: str| typescript::to_label(name));
    handlebars_helper!(ts_type: |name: str| {
        name.parse::<AttrType>().map_or("unknown", typescript::ts_type)
    });
    handlebars_helper!(input_type: |name: str| {
        name.parse::<AttrType>().map_or("text", typescript::input_type)
    });
    handlebars_helper!(json: |value: Json| serde_json::to_string(value).unwrap_or_default());
}

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a template engine with helpers but no templates.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        // Generated files are source code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_helper("pascal_case", Box::new(helpers::pascal_case));
        handlebars.register_helper("camel_case", Box::new(helpers::camel_case));
        handlebars.register_helper("snake_case", Box::new(helpers::snake_case));
        handlebars.register_helper("kebab_case", Box::new(helpers::kebab_case));
        handlebars.register_helper("label", Box::new(helpers::label));
        handlebars.register_helper("ts_type", Box::new(helpers::ts_type));
        handlebars.register_helper("input_type", Box::new(helpers::input_type));
        handlebars.register_helper("json", Box::new(helpers::json));

        Self { handlebars }
    }

    /// Creates an engine with every template of `source` registered under
    /// its skeleton name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderError`] if a template does not compile, or
    /// any error the source raises while reading it.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_codegen::EmbeddedSkeleton;
    /// use uigen_codegen::template_engine::TemplateEngine;
    ///
    /// let engine = TemplateEngine::from_source(&EmbeddedSkeleton::new()).unwrap();
    /// assert!(engine.has_template("templates/router.ts.hbs"));
    /// ```
    pub fn from_source(source: &dyn SkeletonSource) -> Result<Self> {
        let mut engine = Self::new();
        for name in source.template_names() {
            let template = source.template(&name)?;
            engine.register_template_string(&name, &template)?;
        }
        tracing::debug!(
            "Registered {} skeleton templates",
            engine.handlebars.get_templates().len()
        );
        Ok(engine)
    }

    /// Registers a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderError`] if the template does not compile.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::RenderError {
                template: name.to_string(),
                message: format!("failed to compile template: {e}"),
            })
    }

    /// Returns `true` if a template named `name` is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered ([`Error::TemplateNotFound`])
    /// - The context lacks a variable the template uses, or a helper
    ///   fails ([`Error::RenderError`])
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        if !self.has_template(template_name) {
            return Err(Error::TemplateNotFound {
                name: template_name.to_string(),
            });
        }

        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::RenderError {
                template: template_name.to_string(),
                message: e.to_string(),
            })
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::EmbeddedSkeleton;
    use serde_json::json;

    fn engine_with(name: &str, template: &str) -> TemplateEngine<'static> {
        let mut engine = TemplateEngine::new();
        engine.register_template_string(name, template).unwrap();
        engine
    }

    // ========================================================================
    // Template Engine Creation Tests
    // ========================================================================

    #[test]
    fn test_default_trait() {
        let engine = TemplateEngine::default();
        assert!(!engine.has_template("anything"));
    }

    #[test]
    fn test_from_embedded_source() {
        let skeleton = EmbeddedSkeleton::new();
        let engine = TemplateEngine::from_source(&skeleton).unwrap();
        for name in skeleton.template_names() {
            assert!(engine.has_template(&name), "{name} not registered");
        }
    }

    #[test]
    fn test_invalid_template_is_render_error() {
        let mut engine = TemplateEngine::new();
        let err = engine
            .register_template_string("broken", "{{#each items}}")
            .unwrap_err();
        assert!(err.is_render_error());
    }

    // ========================================================================
    // Rendering Tests
    // ========================================================================

    #[test]
    fn test_no_html_escaping() {
        let engine = engine_with("t", "{{code}}");
        let out = engine.render("t", &json!({"code": "a < b && c > 'd'"})).unwrap();
        assert_eq!(out, "a < b && c > 'd'");
    }

    #[test]
    fn test_strict_mode_missing_variable() {
        let engine = engine_with("t", "{{missing}}");
        let err = engine.render("t", &json!({})).unwrap_err();
        assert!(err.is_render_error());
        assert!(err.to_string().contains("'t'"));
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new();
        let err = engine.render("nope", &json!({})).unwrap_err();
        assert!(err.is_template_not_found());
    }

    // ========================================================================
    // Helper Tests
    // ========================================================================

    #[test]
    fn test_case_helpers() {
        let engine = engine_with(
            "t",
            "{{pascal_case n}} {{camel_case n}} {{snake_case n}} {{kebab_case n}} {{label n}}",
        );
        let out = engine.render("t", &json!({"n": "external_id"})).unwrap();
        assert_eq!(out, "ExternalId externalId external_id external-id External Id");
    }

    #[test]
    fn test_type_helpers() {
        let engine = engine_with("t", "{{ts_type t}}/{{input_type t}}");
        let render = |t: &str| engine.render("t", &json!({ "t": t })).unwrap();
        assert_eq!(render("string"), "string/text");
        assert_eq!(render("integer"), "number/number");
        assert_eq!(render("datetime"), "string/datetime-local");
        assert_eq!(render("boolean"), "unknown/text");
    }

    #[test]
    fn test_json_helper_quotes_strings() {
        let engine = engine_with("t", "{{json title}}");
        let out = engine.render("t", &json!({"title": "It's \"new\""})).unwrap();
        assert_eq!(out, r#""It's \"new\"""#);
    }
}
