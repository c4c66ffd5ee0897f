//! Configurable renderer.
//!
//! [`Renderer`] ties the pipeline together:
//!
//! ```text
//! raw text -> template pass (if a context is set) -> Scanner::scan -> Theme::produce
//! ```
//!
//! Configuration is fluent: every `with_*` call consumes the renderer and
//! returns it.

use std::io::Write;

use serde::Serialize;
use tagtint_scanner::{Scanner, Token};
use tracing::debug;

use super::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::RenderError;
use crate::output::OutputMode;
use crate::theme::Theme;

/// Renders tag markup, optionally after a template pass.
///
/// # Example
///
/// ```rust
/// use tagtint_render::{OutputMode, Renderer};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: String }
///
/// let renderer = Renderer::new()
///     .with_tag_marker('@')
///     .with_delimiters('<', '>')
///     .with_output(OutputMode::Text);
///
/// let out = renderer
///     .render_with("@bold<{{ name }}> uses #hashtags", &User { name: "ada".into() })
///     .unwrap();
/// assert_eq!(out, "ada uses #hashtags");
/// ```
pub struct Renderer {
    scanner: Scanner,
    theme: Theme,
    engine: Box<dyn TemplateEngine>,
    /// Data context applied to every `render` call.
    context: Option<serde_json::Value>,
    output_mode: OutputMode,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a renderer with the default scanner, theme and MiniJinja engine.
    pub fn new() -> Self {
        Self {
            scanner: Scanner::new(),
            theme: Theme::new(),
            engine: Box::new(MiniJinjaEngine::new()),
            context: None,
            output_mode: OutputMode::Auto,
        }
    }

    /// Sets the character that introduces a tag.
    pub fn with_tag_marker(mut self, marker: char) -> Self {
        self.scanner = self.scanner.with_tag_marker(marker);
        self
    }

    /// Sets the characters that open and close a tag body.
    pub fn with_delimiters(mut self, start: char, end: char) -> Self {
        self.scanner = self.scanner.with_delimiters(start, end);
        self
    }

    /// Replaces the whole scanner configuration.
    pub fn with_scanner(mut self, scanner: Scanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Replaces the theme. The current output mode is applied to it.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = self.output_mode.apply(theme);
        self
    }

    /// Sets the output mode.
    pub fn with_output(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self.theme = mode.apply(self.theme);
        self
    }

    /// Replaces the template engine.
    pub fn with_engine(mut self, engine: impl TemplateEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Attaches a data context; every later [`render`](Self::render) runs
    /// the template pass with it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Serialization`] if `data` cannot be serialized.
    pub fn with_context<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self, RenderError> {
        self.context = Some(serde_json::to_value(data)?);
        Ok(self)
    }

    /// Removes the data context.
    pub fn without_context(mut self) -> Self {
        self.context = None;
        self
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Scans `text` into tokens, running the template pass first when a
    /// context is attached.
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>, RenderError> {
        match &self.context {
            Some(context) => self.expand_and_scan(text, context),
            None => Ok(self.scanner.scan(text)?),
        }
    }

    /// Like [`tokens`](Self::tokens), with a one-off data context.
    pub fn tokens_with<T: Serialize + ?Sized>(
        &self,
        text: &str,
        data: &T,
    ) -> Result<Vec<Token>, RenderError> {
        let context = serde_json::to_value(data)?;
        self.expand_and_scan(text, &context)
    }

    /// Renders `text` to a styled string.
    ///
    /// # Errors
    ///
    /// Fails on malformed markup, or on a template error when a context is
    /// attached. Nothing is rendered in either case.
    pub fn render(&self, text: &str) -> Result<String, RenderError> {
        let tokens = self.tokens(text)?;
        Ok(self.theme.produce(&tokens))
    }

    /// Renders `text` after expanding it as a template against `data`.
    pub fn render_with<T: Serialize + ?Sized>(
        &self,
        text: &str,
        data: &T,
    ) -> Result<String, RenderError> {
        let tokens = self.tokens_with(text, data)?;
        Ok(self.theme.produce(&tokens))
    }

    /// Renders `text` and writes it to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, text: &str) -> Result<(), RenderError> {
        let rendered = self.render(text)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Renders `text` and prints it to stdout.
    pub fn print(&self, text: &str) -> Result<(), RenderError> {
        let rendered = self.render(text)?;
        write_stdout(&rendered, false)
    }

    /// Renders `text` and prints it to stdout followed by a newline.
    pub fn println(&self, text: &str) -> Result<(), RenderError> {
        let rendered = self.render(text)?;
        write_stdout(&rendered, true)
    }

    /// Renders `text` against `data` and prints it to stdout.
    pub fn printf<T: Serialize + ?Sized>(&self, text: &str, data: &T) -> Result<(), RenderError> {
        let rendered = self.render_with(text, data)?;
        write_stdout(&rendered, false)
    }

    /// Renders `text` against `data` and prints it followed by a newline.
    pub fn printfln<T: Serialize + ?Sized>(&self, text: &str, data: &T) -> Result<(), RenderError> {
        let rendered = self.render_with(text, data)?;
        write_stdout(&rendered, true)
    }

    fn expand_and_scan(
        &self,
        text: &str,
        context: &serde_json::Value,
    ) -> Result<Vec<Token>, RenderError> {
        let expanded = self.engine.render_template(text, context)?;
        debug!(
            input_len = text.len(),
            expanded_len = expanded.len(),
            "template expanded"
        );
        Ok(self.scanner.scan(&expanded)?)
    }
}

fn write_stdout(rendered: &str, newline: bool) -> Result<(), RenderError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(rendered.as_bytes())?;
    if newline {
        lock.write_all(b"\n")?;
    }
    lock.flush()?;
    Ok(())
}
