//! Style model: colors, typography flags and the tag-name vocabulary.
//!
//! A [`Style`] is an optional [`Color`] plus a set of [`Typography`] flags.
//! Styles are built with consuming builder calls and propagate to nested tag
//! scopes by cloning:
//!
//! ```rust
//! use tagtint_scanner::{Color, Style, Typography};
//!
//! let outer = Style::new().color(Color::Red);
//! let inner = outer.clone().typography(Typography::Bold);
//!
//! assert_eq!(outer.typographies().count(), 0);
//! assert!(inner.has_typography(Typography::Bold));
//! assert_eq!(inner.get_color(), Some(Color::Red));
//! ```

use std::collections::BTreeSet;
use std::fmt;

/// One of the eight basic terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every color, in ANSI order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Looks up a color by its tag name (`"red"`, `"cyan"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match lookup_tag(name)? {
            TagName::Color(color) => Some(color),
            TagName::Typography(_) => None,
        }
    }

    /// The tag name for this color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typographic emphasis flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Typography {
    Bold,
    Italic,
}

impl Typography {
    /// Every typography flag.
    pub const ALL: [Typography; 2] = [Typography::Bold, Typography::Italic];

    /// Looks up a typography flag by its tag name (`"bold"`, `"italic"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match lookup_tag(name)? {
            TagName::Typography(t) => Some(t),
            TagName::Color(_) => None,
        }
    }

    /// The tag name for this flag.
    pub fn name(self) -> &'static str {
        match self {
            Typography::Bold => "bold",
            Typography::Italic => "italic",
        }
    }
}

impl fmt::Display for Typography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a recognized tag name does to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagName {
    /// Replaces the style's color.
    Color(Color),
    /// Adds a flag to the style's typography set.
    Typography(Typography),
}

/// The fixed tag vocabulary.
static VOCABULARY: [(&str, TagName); 10] = [
    ("black", TagName::Color(Color::Black)),
    ("red", TagName::Color(Color::Red)),
    ("green", TagName::Color(Color::Green)),
    ("yellow", TagName::Color(Color::Yellow)),
    ("blue", TagName::Color(Color::Blue)),
    ("magenta", TagName::Color(Color::Magenta)),
    ("cyan", TagName::Color(Color::Cyan)),
    ("white", TagName::Color(Color::White)),
    ("bold", TagName::Typography(Typography::Bold)),
    ("italic", TagName::Typography(Typography::Italic)),
];

/// Resolves a tag name against the vocabulary.
///
/// Names are case-sensitive. Returns `None` for anything outside the
/// vocabulary; callers treat that as a no-op rather than an error.
pub fn lookup_tag(name: &str) -> Option<TagName> {
    VOCABULARY
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, tag)| *tag)
}

/// Resolved styling for a run of text.
///
/// Two styles are equal when their colors are equal (both absent counts as
/// equal) and their typography flags are equal as sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    color: Option<Color>,
    typographies: BTreeSet<Typography>,
}

impl Style {
    /// Creates a style with no color and no typography.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color, replacing any previous one.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Adds a typography flag. Adding a flag twice has no further effect.
    pub fn typography(mut self, typography: Typography) -> Self {
        self.typographies.insert(typography);
        self
    }

    /// Applies one tag name in place.
    ///
    /// Typography names add their flag, color names replace the color.
    /// Returns `false` (leaving the style untouched) for unknown names.
    pub fn apply_tag(&mut self, name: &str) -> bool {
        match lookup_tag(name) {
            Some(TagName::Color(color)) => {
                self.color = Some(color);
                true
            }
            Some(TagName::Typography(t)) => {
                self.typographies.insert(t);
                true
            }
            None => false,
        }
    }

    /// Applies tag names in order. See [`apply_tag`](Self::apply_tag).
    pub fn with_tags<'a, I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            self.apply_tag(name);
        }
        self
    }

    /// The selected color, if any.
    pub fn get_color(&self) -> Option<Color> {
        self.color
    }

    /// The typography flags, in a stable order.
    pub fn typographies(&self) -> impl Iterator<Item = Typography> + '_ {
        self.typographies.iter().copied()
    }

    pub fn has_typography(&self, typography: Typography) -> bool {
        self.typographies.contains(&typography)
    }

    /// True when neither a color nor any typography is set.
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.typographies.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in self
            .color
            .map(Color::name)
            .into_iter()
            .chain(self.typographies.iter().map(|t| t.name()))
        {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_covers_every_variant() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
        for t in Typography::ALL {
            assert_eq!(Typography::from_name(t.name()), Some(t));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup_tag("Red"), None);
        assert_eq!(lookup_tag("BOLD"), None);
    }

    #[test]
    fn from_name_rejects_other_kind() {
        assert_eq!(Color::from_name("bold"), None);
        assert_eq!(Typography::from_name("red"), None);
    }

    #[test]
    fn typography_is_a_set() {
        let style = Style::new()
            .typography(Typography::Bold)
            .typography(Typography::Bold);
        assert_eq!(style.typographies().count(), 1);
    }

    #[test]
    fn equality_ignores_flag_order() {
        let a = Style::new()
            .typography(Typography::Italic)
            .typography(Typography::Bold);
        let b = Style::new()
            .typography(Typography::Bold)
            .typography(Typography::Italic);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_compares_color() {
        assert_ne!(Style::new().color(Color::Red), Style::new());
        assert_ne!(
            Style::new().color(Color::Red),
            Style::new().color(Color::Blue)
        );
        assert_eq!(Style::new(), Style::new());
    }

    #[test]
    fn last_color_wins() {
        let style = Style::new().with_tags(["red", "bold", "blue"]);
        assert_eq!(style.get_color(), Some(Color::Blue));
        assert!(style.has_typography(Typography::Bold));
    }

    #[test]
    fn unknown_tag_is_noop() {
        let mut style = Style::new().color(Color::Green);
        assert!(!style.apply_tag("sparkly"));
        assert_eq!(style, Style::new().color(Color::Green));
    }

    #[test]
    fn clone_does_not_alias_typographies() {
        let parent = Style::new().color(Color::Red);
        let mut child = parent.clone();
        child.apply_tag("italic");

        assert!(!parent.has_typography(Typography::Italic));
        assert!(child.has_typography(Typography::Italic));
        assert_eq!(child.get_color(), Some(Color::Red));
    }

    #[test]
    fn plain_style() {
        assert!(Style::new().is_plain());
        assert!(!Style::new().typography(Typography::Bold).is_plain());
    }

    #[test]
    fn display_lists_tag_names() {
        let style = Style::new()
            .typography(Typography::Italic)
            .color(Color::Cyan)
            .typography(Typography::Bold);
        assert_eq!(style.to_string(), "cyan,bold,italic");
        assert_eq!(Style::new().to_string(), "");
    }
}
