//! Error types for tag scanning.

use thiserror::Error;

/// Malformed markup found while scanning.
///
/// Positions are char offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text between a tag marker and the start delimiter is not a
    /// name or a parenthesized, comma-separated list of names.
    #[error("invalid tag list '{tags}' at position {position}")]
    InvalidTagList { tags: String, position: usize },

    /// An end delimiter with no open tag to close.
    #[error("unmatched closing delimiter at position {position}")]
    UnmatchedClose { position: usize },

    /// A tag marker whose name list was never followed by a start delimiter.
    #[error("tag '{tags}' at position {position} is not followed by a start delimiter")]
    UnterminatedTag { tags: String, position: usize },

    /// Input ended with tags still open.
    #[error("{depth} tag(s) left open at end of input")]
    Unbalanced { depth: usize },
}

/// Result type for scanning.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_construct() {
        let err = ParseError::InvalidTagList {
            tags: "(red".into(),
            position: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("(red"));
        assert!(msg.contains('6'));

        let err = ParseError::Unbalanced { depth: 2 };
        assert!(err.to_string().contains("2 tag(s)"));
    }
}
