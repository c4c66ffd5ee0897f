//! Template engine abstraction.
//!
//! The template pre-pass runs before tag scanning: it substitutes values from
//! a data context into the raw text and must leave no template syntax
//! behind. [`MiniJinjaEngine`] is the default implementation.

use minijinja::{Environment, UndefinedBehavior, Value};

use crate::error::RenderError;

/// A template engine that expands text against a data context.
///
/// Implementations must fail (rather than substitute an empty value) when
/// the template references something the data does not provide, so that a
/// half-expanded template never reaches the scanner.
pub trait TemplateEngine: Send + Sync {
    /// Renders a template string with the given data.
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError>;
}

/// MiniJinja-based template engine.
///
/// Supports Jinja2 syntax: field access (`{{ name }}`), nested access
/// (`{{ user.name }}`), loops (`{% for x in items %}`), conditionals and
/// filters. Undefined values are errors and trailing newlines are kept.
///
/// # Example
///
/// ```rust
/// use tagtint_render::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("#red[{{ name }}]", &json!({ "name": "World" }))
///     .unwrap();
/// assert_eq!(output, "#red[World]");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use this to register custom filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }
}
