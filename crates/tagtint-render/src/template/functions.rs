//! Convenience functions using a default [`Renderer`].
//!
//! These cover the common case: default `#`/`[`/`]` syntax, default theme and
//! automatic color detection. Build a [`Renderer`] for anything else.

use serde::Serialize;

use super::renderer::Renderer;
use crate::error::RenderError;

/// Renders markup to a styled string.
///
/// ```rust
/// let out = tagtint_render::sprint("plain text").unwrap();
/// assert_eq!(out, "plain text");
/// ```
pub fn sprint(text: &str) -> Result<String, RenderError> {
    Renderer::new().render(text)
}

/// Expands `text` as a template against `data`, then renders the markup.
pub fn sprintf<T: Serialize + ?Sized>(text: &str, data: &T) -> Result<String, RenderError> {
    Renderer::new().render_with(text, data)
}

/// Renders markup and prints it to stdout.
pub fn print(text: &str) -> Result<(), RenderError> {
    Renderer::new().print(text)
}

/// Renders markup and prints it to stdout with a trailing newline.
pub fn println(text: &str) -> Result<(), RenderError> {
    Renderer::new().println(text)
}

/// Expands and renders `text`, then prints it to stdout.
pub fn printf<T: Serialize + ?Sized>(text: &str, data: &T) -> Result<(), RenderError> {
    Renderer::new().printf(text, data)
}

/// Expands and renders `text`, then prints it with a trailing newline.
pub fn printfln<T: Serialize + ?Sized>(text: &str, data: &T) -> Result<(), RenderError> {
    Renderer::new().printfln(text, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    // Output depends on console's global color switch.
    fn with_colors<R>(enabled: bool, f: impl FnOnce() -> R) -> R {
        let before = console::colors_enabled();
        console::set_colors_enabled(enabled);
        let result = f();
        console::set_colors_enabled(before);
        result
    }

    #[test]
    #[serial]
    fn test_sprint_without_colors() {
        let out = with_colors(false, || sprint("A #red[B #bold[C]] D")).unwrap();
        assert_eq!(out, "A B C D");
    }

    #[test]
    #[serial]
    fn test_sprint_with_colors() {
        let out = with_colors(true, || sprint("#red[x]")).unwrap();
        assert_eq!(out, "\x1b[31mx\x1b[0m");
    }

    #[test]
    #[serial]
    fn test_sprintf() {
        let data = json!({ "from_template": "Hello from template" });
        let out = with_colors(false, || {
            sprintf("#(green,italic)[{{ from_template }} in italic]", &data)
        })
        .unwrap();
        assert_eq!(out, "Hello from template in italic");
    }

    #[test]
    fn test_sprint_error() {
        assert!(matches!(sprint("oops]"), Err(RenderError::Parse(_))));
    }
}
