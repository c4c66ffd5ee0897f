//! Single-pass scanner for `#tag[...]` markup.

use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::style::Style;

/// A run of text and the style in effect over it.
///
/// `style` is `None` for text outside every tag. A tag whose names are all
/// unknown still yields `Some` with a plain style, so the two cases stay
/// distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub style: Option<Style>,
}

impl Token {
    /// A token outside any tag.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// A token inside a tag.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

/// Scanner configuration: the tag marker and the delimiter pair.
///
/// Defaults to `#`, `[` and `]`. When characters coincide, the marker is
/// checked first, then the start delimiter, then the end delimiter.
///
/// ```rust
/// use tagtint_scanner::{Color, Scanner, Style, Token};
///
/// let scanner = Scanner::new().with_tag_marker('@').with_delimiters('<', '>');
/// let tokens = scanner.scan("@red<#literal[text]>").unwrap();
///
/// assert_eq!(
///     tokens.last(),
///     Some(&Token::styled("#literal[text]", Style::new().color(Color::Red)))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner {
    tag_marker: char,
    start: char,
    end: char,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            tag_marker: '#',
            start: '[',
            end: ']',
        }
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character that introduces a tag.
    pub fn with_tag_marker(mut self, marker: char) -> Self {
        self.tag_marker = marker;
        self
    }

    /// Sets the characters that open and close a tag body.
    pub fn with_delimiters(mut self, start: char, end: char) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn tag_marker(&self) -> char {
        self.tag_marker
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    /// Splits `text` into styled tokens.
    ///
    /// Each opened tag clones the style of the enclosing scope and applies
    /// its names in order: typography flags accumulate, the last color wins,
    /// unknown names are ignored.
    ///
    /// Hitting a tag marker always flushes the pending text, so a tag at the
    /// very start of a body (or right after another tag) produces an
    /// empty-text token.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for a malformed tag list, a closing
    /// delimiter with nothing open, a marker never followed by a start
    /// delimiter, or tags left open at the end. No tokens are returned on
    /// failure.
    pub fn scan(&self, text: &str) -> Result<Vec<Token>> {
        let result = self.scan_inner(text);
        match &result {
            Ok(tokens) => trace!(count = tokens.len(), "scanned tokens"),
            Err(err) => debug!(error = %err, "scan failed"),
        }
        result
    }

    fn scan_inner(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        // stack[d - 1] is the style at depth d; depth 0 has none.
        let mut stack: Vec<Style> = Vec::new();
        let mut pending_text = String::new();
        let mut pending_tags = String::new();
        let mut collecting = false;
        let mut tag_position = 0;

        for (position, ch) in text.chars().enumerate() {
            if ch == self.tag_marker {
                push_token(
                    &mut tokens,
                    std::mem::take(&mut pending_text),
                    stack.last(),
                );
                if !collecting {
                    tag_position = position;
                }
                collecting = true;
            } else if ch == self.start {
                if !collecting {
                    tag_position = position;
                }
                let names =
                    split_tag_list(&pending_tags).ok_or_else(|| ParseError::InvalidTagList {
                        tags: pending_tags.clone(),
                        position: tag_position,
                    })?;

                let mut style = stack.last().cloned().unwrap_or_default();
                for name in names {
                    if !style.apply_tag(name) {
                        trace!(name, "ignoring unknown tag name");
                    }
                }
                stack.push(style);
                pending_tags.clear();
                collecting = false;
            } else if ch == self.end {
                if collecting {
                    return Err(ParseError::UnterminatedTag {
                        tags: pending_tags,
                        position: tag_position,
                    });
                }
                if stack.is_empty() {
                    return Err(ParseError::UnmatchedClose { position });
                }
                if !pending_text.is_empty() {
                    push_token(
                        &mut tokens,
                        std::mem::take(&mut pending_text),
                        stack.last(),
                    );
                }
                stack.pop();
            } else if collecting {
                pending_tags.push(ch);
            } else {
                pending_text.push(ch);
            }
        }

        if collecting {
            return Err(ParseError::UnterminatedTag {
                tags: pending_tags,
                position: tag_position,
            });
        }
        if !stack.is_empty() {
            return Err(ParseError::Unbalanced { depth: stack.len() });
        }
        if !pending_text.is_empty() {
            push_token(&mut tokens, pending_text, None);
        }

        Ok(tokens)
    }
}

fn push_token(tokens: &mut Vec<Token>, text: String, style: Option<&Style>) {
    trace!(text = %text, style = ?style, "token");
    tokens.push(Token {
        text,
        style: style.cloned(),
    });
}

/// Splits a tag list into names.
///
/// Accepts `name`, `a,b` and `(a,b)`. Names are ASCII letters, digits and
/// underscores. Returns `None` for anything else, including an empty list.
fn split_tag_list(raw: &str) -> Option<Vec<&str>> {
    let inner = match raw.strip_prefix('(') {
        Some(rest) => rest.strip_suffix(')')?,
        None => raw,
    };

    let names: Vec<&str> = inner.split(',').collect();
    if names.iter().all(|name| is_tag_name(name)) {
        Some(names)
    } else {
        None
    }
}

fn is_tag_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
