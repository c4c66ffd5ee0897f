//! Two-pass rendering: template expansion, then tag scanning.
//!
//! **Pass 1 - MiniJinja** (only when a data context is given): variable
//! substitution, loops, filters.
//! ```text
//! Template: #red[{{ name }}] has {{ count }} items
//! After:    #red[widget] has 42 items
//! ```
//!
//! **Pass 2 - Scanner + Theme**: tags become tokens, tokens become ANSI
//! codes (or plain text).
//! ```text
//! Input:  #red[widget] has 42 items
//! Output: \x1b[31mwidget\x1b[0m has 42 items
//! ```
//!
//! The template pass sees the markup as plain text, so values substituted
//! into it may themselves contain markup.

mod engine;
mod functions;
mod renderer;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use functions::{print, printf, printfln, println, sprint, sprintf};
pub use renderer::Renderer;
