//! # tagtint-render - Styled Terminal Output from Inline Tags
//!
//! `tagtint-render` turns text annotated with `#tag[...]` markup into styled
//! terminal output. Markup is scanned by `tagtint-scanner`; this crate adds
//! the terminal backend ([`Theme`]), an optional template pass
//! ([`TemplateEngine`]) and the configurable [`Renderer`].
//!
//! ## Quick Start
//!
//! ```rust
//! use tagtint_render::{OutputMode, Renderer};
//!
//! let renderer = Renderer::new().with_output(OutputMode::Term);
//! let out = renderer.render("#red[error]: #bold[disk full]").unwrap();
//! assert_eq!(out, "\x1b[31merror\x1b[0m: \x1b[1mdisk full\x1b[0m");
//! ```
//!
//! ## Templates
//!
//! ```rust
//! use tagtint_render::{OutputMode, Renderer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Report { items: Vec<String> }
//!
//! let renderer = Renderer::new().with_output(OutputMode::Text);
//! let out = renderer
//!     .render_with(
//!         "{% for item in items %}#(yellow,bold)[{{ item }}] {% endfor %}",
//!         &Report { items: vec!["a".into(), "b".into()] },
//!     )
//!     .unwrap();
//! assert_eq!(out, "a b ");
//! ```
//!
//! ## Format Arguments
//!
//! [`styled!`] formats its arguments with `format!` before rendering. The
//! substituted values are scanned as markup too.
//!
//! ```rust
//! let count = 3;
//! let out = tagtint_render::styled!("#green[{} passed]", count).unwrap();
//! assert!(out.contains("3 passed"));
//! ```

mod error;
mod output;
pub mod template;
mod theme;

pub use error::RenderError;
pub use output::OutputMode;
pub use template::{
    print, printf, printfln, println, sprint, sprintf, MiniJinjaEngine, Renderer, TemplateEngine,
};
pub use theme::Theme;

pub use tagtint_scanner::{Color, ParseError, Scanner, Style, Token, Typography};

/// Formats the arguments like `format!`, then renders the result with
/// [`sprint`].
#[macro_export]
macro_rules! styled {
    ($($arg:tt)*) => {
        $crate::sprint(&::std::format!($($arg)*))
    };
}
