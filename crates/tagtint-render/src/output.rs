//! Output mode selection.

use crate::theme::Theme;

/// Controls whether rendered output carries ANSI escape codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Style when the terminal supports it (as reported by `console`).
    #[default]
    Auto,
    /// Always emit escape codes.
    Term,
    /// Never emit escape codes; markup is still stripped.
    Text,
}

impl OutputMode {
    /// Whether this mode produces styled output right now.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }

    /// Adjusts a theme for this mode. `Auto` leaves the theme untouched.
    pub fn apply(&self, theme: Theme) -> Theme {
        match self {
            OutputMode::Auto => theme,
            OutputMode::Term => theme.styling(true),
            OutputMode::Text => theme.styling(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_apply_forces_styling() {
        assert_eq!(
            OutputMode::Term.apply(Theme::new()).forced_styling(),
            Some(true)
        );
        assert_eq!(
            OutputMode::Text.apply(Theme::new()).forced_styling(),
            Some(false)
        );
        assert_eq!(OutputMode::Auto.apply(Theme::new()).forced_styling(), None);
    }

    #[test]
    #[serial]
    fn test_auto_follows_console() {
        let before = console::colors_enabled();

        console::set_colors_enabled(false);
        assert!(!OutputMode::Auto.should_use_color());
        console::set_colors_enabled(true);
        assert!(OutputMode::Auto.should_use_color());

        console::set_colors_enabled(before);
    }

    #[test]
    fn test_explicit_modes() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
    }
}
