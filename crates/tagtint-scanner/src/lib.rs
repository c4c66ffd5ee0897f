//! Inline tag scanner for terminal styling markup.
//!
//! This crate turns text annotated with `#tag[...]` markup into an ordered
//! list of [`Token`]s, each pairing a run of text with the [`Style`] in
//! effect over it. Rendering the tokens to ANSI codes is left to a backend
//! (see the `tagtint-render` crate).
//!
//! # Example
//!
//! ```rust
//! use tagtint_scanner::{Color, Scanner, Style, Token, Typography};
//!
//! let tokens = Scanner::new().scan("A #red[B #bold[C]] D").unwrap();
//!
//! let red = Style::new().color(Color::Red);
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::plain("A "),
//!         Token::styled("B ", red.clone()),
//!         Token::styled("C", red.typography(Typography::Bold)),
//!         Token::plain(" D"),
//!     ]
//! );
//! ```
//!
//! # Markup Syntax
//!
//! ```text
//! MARKER TAGLIST START BODY END
//! TAGLIST := NAME | NAME (',' NAME)* | '(' NAME (',' NAME)* ')'
//! NAME    := [A-Za-z0-9_]+
//! ```
//!
//! The marker and delimiters default to `#`, `[` and `]` and can be changed
//! with [`Scanner::with_tag_marker`] and [`Scanner::with_delimiters`].
//!
//! Recognized names are the colors `black`, `red`, `green`, `yellow`,
//! `blue`, `magenta`, `cyan`, `white` and the typography flags `bold` and
//! `italic`. Other names are accepted and ignored.
//!
//! Nested tags inherit the enclosing style: flags accumulate and an inner
//! color replaces an outer one.

mod error;
mod scanner;
mod style;

pub use error::{ParseError, Result};
pub use scanner::{Scanner, Token};
pub use style::{lookup_tag, Color, Style, TagName, Typography};
