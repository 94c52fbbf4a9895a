//! Vue 3 + Vite frontend layout.
//!
//! Per model section the layout emits:
//!
//! - `src/models/<Model>.ts`: TypeScript interface and field metadata
//! - `src/api/<model>.ts`: REST client for the section's resource
//! - `src/views/<section>/<Model><View>.vue`: one component per view
//!
//! Plain sections get a page component under `src/views/`. All sections
//! are wired into `src/router.ts`, which also exports the navigation
//! shown by `App.vue`.

use crate::context::RenderContext;
use crate::generator::SourceGenerator;
use crate::layout::{ProjectLayout, SkeletonEntry};
use crate::typescript::{to_camel_case, to_kebab_case, to_pascal_case};
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use tracing::{debug, warn};
use uigen_core::{Error, Model, Result, Section, SectionItem, View};

/// API base path used when the base context does not set `api_base`.
pub const DEFAULT_API_BASE: &str = "/api";

const FRONT_SKELETON: &[(&str, Option<&str>)] = &[
    ("vite.config.ts", None),
    ("public/favicon.svg", None),
    ("index.html.hbs", Some("index.html")),
    ("tsconfig.json", None),
    ("package.json.hbs", Some("package.json")),
    ("src/components/HelloWorld.vue", None),
    ("src/env.d.ts", None),
    ("src/App.vue.hbs", Some("src/App.vue")),
    ("src/main.ts", None),
    ("src/assets/logo.svg", None),
];

/// REST client module for one model section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiModule {
    /// Module name, camelCase
    pub module: String,
    /// Model the client reads and writes
    pub model: String,
    /// Resource path segment below the API base
    pub resource: String,
}

/// One router entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// URL path
    pub path: String,
    /// Route name, unique across the router
    pub name: String,
    /// Component import path, relative to `src/`
    pub component: String,
    /// Whether route params are passed as component props
    pub props: bool,
}

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Route name
    pub name: String,
    /// Link text
    pub title: String,
}

/// Vue 3 + Vite project layout.
#[derive(Debug, Clone, Default)]
pub struct FrontLayout {
    sections: Vec<SectionItem>,
    /// API client modules, one per model section
    pub api: Vec<ApiModule>,
    /// Distinct models, in first-seen order
    pub models: Vec<Model>,
    /// Router entries
    pub routes: Vec<RouteEntry>,
    /// Navigation links, one per section
    pub navigation: Vec<NavEntry>,
}

impl FrontLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.sections.clear();
        self.api.clear();
        self.models.clear();
        self.routes.clear();
        self.navigation.clear();
    }

    fn read_model_section(&mut self, section: &Section, model: &Model) -> Result<()> {
        let prefix = to_kebab_case(&section.name);
        let type_name = to_pascal_case(&model.name);

        match self.models.iter().find(|m| m.name == model.name) {
            Some(known) if known != model => {
                return Err(Error::ValidationError {
                    field: format!("sections.{}", section.name),
                    reason: format!(
                        "model '{}' is used by several sections with different attributes",
                        model.name
                    ),
                });
            }
            Some(_) => {}
            None => self.models.push(model.clone()),
        }

        self.api.push(ApiModule {
            module: to_camel_case(&section.name),
            model: type_name.clone(),
            resource: prefix.clone(),
        });

        for view in &section.views {
            let path = match view {
                View::ListModels => format!("/{prefix}"),
                View::ViewModel => format!("/{prefix}/:id"),
                View::CreateModel => format!("/{prefix}/new"),
                View::EditModel => format!("/{prefix}/:id/edit"),
                View::DeleteModel => format!("/{prefix}/:id/delete"),
            };
            self.routes.push(RouteEntry {
                path,
                name: format!("{prefix}-{}", view.slug()),
                component: format!("./{}", view_file(&prefix, &type_name, *view)),
                props: view.needs_record(),
            });
        }

        match section.views.first() {
            Some(first) => self.navigation.push(NavEntry {
                name: format!("{prefix}-{}", first.slug()),
                title: section.title.clone(),
            }),
            None => warn!(
                "Section '{}' has no views; only its model and API client are generated",
                section.name
            ),
        }
        Ok(())
    }

    fn read_plain_section(&mut self, section: &Section) {
        let prefix = to_kebab_case(&section.name);
        self.routes.push(RouteEntry {
            path: format!("/{prefix}"),
            name: prefix.clone(),
            component: format!("./{}", page_file(&section.name)),
            props: false,
        });
        self.navigation.push(NavEntry {
            name: prefix,
            title: section.title.clone(),
        });
    }

    fn check_unique_routes(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.routes.len());
        for route in &self.routes {
            if !seen.insert(route.name.as_str()) {
                return Err(Error::ValidationError {
                    field: "sections".to_string(),
                    reason: format!("two sections map to the same route '{}'", route.name),
                });
            }
        }
        Ok(())
    }

    fn emit_model_section(
        &self,
        generator: &mut SourceGenerator,
        section: &Section,
        model: &Model,
        api_base: &str,
    ) -> Result<()> {
        let prefix = to_kebab_case(&section.name);
        let module = to_camel_case(&section.name);
        let type_name = to_pascal_case(&model.name);
        let key = model
            .attr("id")
            .or_else(|| model.attrs.first())
            .map_or("id", |attr| attr.name.as_str());

        let mut context = RenderContext::new()
            .with("type_name", type_name.clone())
            .with("api_module", module.clone())
            .with("route_prefix", prefix.clone())
            .with("key", key)
            .with(
                "views",
                json!({
                    "list": section.has_view(View::ListModels),
                    "view": section.has_view(View::ViewModel),
                    "create": section.has_view(View::CreateModel),
                    "edit": section.has_view(View::EditModel),
                    "delete": section.has_view(View::DeleteModel),
                }),
            )
            .with("is_edit", false);
        context.insert_serialize("section", section)?;
        context.insert_serialize("model", model)?;
        context.insert_serialize("form", &model.form())?;

        generator.render_template(
            "templates/model.ts.hbs",
            format!("src/models/{type_name}.ts"),
            Some(&context),
        )?;

        let api_context = context
            .clone()
            .with("api_base", api_base)
            .with("resource", prefix.clone());
        generator.render_template(
            "templates/api.ts.hbs",
            format!("src/api/{module}.ts"),
            Some(&api_context),
        )?;

        for view in &section.views {
            let template = match view {
                View::ListModels => "templates/list.vue.hbs",
                View::ViewModel => "templates/view.vue.hbs",
                View::CreateModel | View::EditModel => "templates/form.vue.hbs",
                View::DeleteModel => "templates/delete.vue.hbs",
            };
            let view_context = context
                .clone()
                .with("view", view.slug())
                .with("is_edit", *view == View::EditModel);
            generator.render_template(
                template,
                format!("src/{}", view_file(&prefix, &type_name, *view)),
                Some(&view_context),
            )?;
        }

        debug!(
            "Emitted section '{}' for model {} ({} views)",
            section.name,
            model.name,
            section.views.len()
        );
        Ok(())
    }
}

fn view_file(prefix: &str, type_name: &str, view: View) -> String {
    let suffix = to_pascal_case(view.slug());
    format!("views/{prefix}/{type_name}{suffix}.vue")
}

fn page_file(section_name: &str) -> String {
    format!("views/{}Page.vue", to_pascal_case(section_name))
}

impl ProjectLayout for FrontLayout {
    fn skeleton(&self) -> Vec<SkeletonEntry> {
        FRONT_SKELETON
            .iter()
            .map(|(source, rendered)| match rendered {
                Some(dest) => SkeletonEntry::render(source, dest),
                None => SkeletonEntry::copy(source),
            })
            .collect()
    }

    fn read(&mut self, sections: &[SectionItem]) -> Result<()> {
        self.reset();
        for item in sections {
            match item {
                SectionItem::Model(section) => self.read_model_section(section, &section.model)?,
                SectionItem::Plain(section) => self.read_plain_section(section),
            }
        }
        self.check_unique_routes()?;
        self.sections = sections.to_vec();

        debug!(
            "Read {} sections: {} models, {} routes",
            sections.len(),
            self.models.len(),
            self.routes.len()
        );
        Ok(())
    }

    fn emit(&self, generator: &mut SourceGenerator) -> Result<()> {
        let api_base = generator
            .base_context()
            .get("api_base")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        for item in &self.sections {
            match item {
                SectionItem::Model(section) => {
                    self.emit_model_section(generator, section, &section.model, &api_base)?;
                }
                SectionItem::Plain(section) => {
                    let mut context = RenderContext::new();
                    context.insert_serialize("section", section)?;
                    generator.render_template(
                        "templates/page.vue.hbs",
                        format!("src/{}", page_file(&section.name)),
                        Some(&context),
                    )?;
                }
            }
        }

        let home = self
            .navigation
            .first()
            .map(|nav| nav.name.clone())
            .unwrap_or_default();
        let mut context = RenderContext::new().with("home", home);
        context.insert_serialize("routes", &self.routes)?;
        context.insert_serialize("navigation", &self.navigation)?;
        generator.render_template("templates/router.ts.hbs", "src/router.ts", Some(&context))
    }
}
