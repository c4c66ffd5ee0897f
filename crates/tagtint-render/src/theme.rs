//! Terminal backend: maps scanned tokens to ANSI-styled strings.
//!
//! [`Theme`] owns the mapping from the tag vocabulary ([`Color`],
//! [`Typography`]) to `console` styles. Tokens without a style pass through
//! verbatim.
//!
//! ```rust
//! use tagtint_render::Theme;
//! use tagtint_scanner::{Color, Style, Token};
//!
//! let theme = Theme::new().styling(true);
//! let out = theme.produce(&[
//!     Token::plain("status: "),
//!     Token::styled("ok", Style::new().color(Color::Green)),
//! ]);
//! assert_eq!(out, "status: \x1b[32mok\x1b[0m");
//! ```
//!
//! Colors can be remapped, e.g. to a 256-color palette entry:
//!
//! ```rust
//! use tagtint_render::Theme;
//! use tagtint_scanner::Color;
//!
//! let theme = Theme::new().with_color(Color::Blue, console::Color::Color256(33));
//! assert_eq!(theme.backend_color(Color::Blue), console::Color::Color256(33));
//! ```

use std::collections::HashMap;

use tagtint_scanner::{Color, Style, Token, Typography};

/// Maps styles to terminal escape codes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    palette: HashMap<Color, console::Color>,
    /// `None` lets `console` decide from the terminal.
    force_styling: Option<bool>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaps a color slot to a different terminal color.
    pub fn with_color(mut self, color: Color, target: console::Color) -> Self {
        self.palette.insert(color, target);
        self
    }

    /// Forces escape codes on (`true`) or off (`false`) regardless of the
    /// terminal.
    pub fn styling(mut self, enabled: bool) -> Self {
        self.force_styling = Some(enabled);
        self
    }

    /// Lets `console` decide whether to emit escape codes.
    pub fn auto_styling(mut self) -> Self {
        self.force_styling = None;
        self
    }

    pub fn forced_styling(&self) -> Option<bool> {
        self.force_styling
    }

    /// The terminal color used for a color slot.
    pub fn backend_color(&self, color: Color) -> console::Color {
        if let Some(target) = self.palette.get(&color) {
            return *target;
        }
        match color {
            Color::Black => console::Color::Black,
            Color::Red => console::Color::Red,
            Color::Green => console::Color::Green,
            Color::Yellow => console::Color::Yellow,
            Color::Blue => console::Color::Blue,
            Color::Magenta => console::Color::Magenta,
            Color::Cyan => console::Color::Cyan,
            Color::White => console::Color::White,
        }
    }

    /// Builds the `console` style for a scanned style.
    pub fn console_style(&self, style: &Style) -> console::Style {
        let mut out = console::Style::new();
        if let Some(color) = style.get_color() {
            out = out.fg(self.backend_color(color));
        }
        for typography in style.typographies() {
            out = match typography {
                Typography::Bold => out.bold(),
                Typography::Italic => out.italic(),
            };
        }
        if let Some(force) = self.force_styling {
            out = out.force_styling(force);
        }
        out
    }

    /// Renders one token.
    pub fn convert(&self, token: &Token) -> String {
        match &token.style {
            None => token.text.clone(),
            Some(style) => self.console_style(style).apply_to(&token.text).to_string(),
        }
    }

    /// Renders tokens in order and concatenates them.
    pub fn produce(&self, tokens: &[Token]) -> String {
        tokens.iter().map(|token| self.convert(token)).collect()
    }
}
