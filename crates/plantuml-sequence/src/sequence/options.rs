//! Diagram configuration fixed at construction time

use crate::core::TrimMode;

/// Arrow style used when neither a message nor a scope overrides it
pub const DEFAULT_ARROW_STYLE: &str = "->";

/// Options applied when a diagram is opened
///
/// # Example
/// ```
/// use plantuml_sequence::DiagramOptions;
///
/// let options = DiagramOptions::default()
///     .with_title("Login")
///     .with_hide_footboxes(true);
/// assert_eq!(options.title.as_deref(), Some("Login"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DiagramOptions {
    /// `title` directive emitted after `@startuml`
    pub title: Option<String>,
    /// Emit `hide footbox`
    pub hide_footboxes: bool,
    /// Emit `hide unlinked`
    pub hide_unlinked: bool,
    /// Emit `!pragma teoz true` to select the teoz rendering engine
    pub teoz_rendering: bool,
    /// Initial default arrow style
    pub arrow_style: String,
    /// Whitespace trimming applied to each emitted line
    pub trim: TrimMode,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            title: None,
            hide_footboxes: false,
            hide_unlinked: false,
            teoz_rendering: false,
            arrow_style: DEFAULT_ARROW_STYLE.to_string(),
            trim: TrimMode::default(),
        }
    }
}

impl DiagramOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_hide_footboxes(mut self, hide: bool) -> Self {
        self.hide_footboxes = hide;
        self
    }

    pub fn with_hide_unlinked(mut self, hide: bool) -> Self {
        self.hide_unlinked = hide;
        self
    }

    pub fn with_teoz_rendering(mut self, teoz: bool) -> Self {
        self.teoz_rendering = teoz;
        self
    }

    pub fn with_arrow_style(mut self, style: impl Into<String>) -> Self {
        self.arrow_style = style.into();
        self
    }

    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }

    /// Directives written right after `@startuml`, in emission order
    pub(crate) fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.teoz_rendering {
            lines.push("!pragma teoz true".to_string());
        }
        if self.hide_footboxes {
            lines.push("hide footbox".to_string());
        }
        if self.hide_unlinked {
            lines.push("hide unlinked".to_string());
        }
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            lines.push(format!("title {}", crate::core::escape_newlines(title)));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DiagramOptions::default();
        assert_eq!(options.arrow_style, "->");
        assert_eq!(options.trim, TrimMode::Trailing);
        assert!(options.header_lines().is_empty());
    }

    #[test]
    fn test_header_order() {
        let options = DiagramOptions::new()
            .with_title("Flow")
            .with_hide_unlinked(true)
            .with_hide_footboxes(true)
            .with_teoz_rendering(true);
        assert_eq!(
            options.header_lines(),
            vec!["!pragma teoz true", "hide footbox", "hide unlinked", "title Flow"]
        );
    }

    #[test]
    fn test_title_escaped() {
        let options = DiagramOptions::new().with_title("Two\nlines");
        assert_eq!(options.header_lines(), vec!["title Two\\nlines"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let options: DiagramOptions =
            serde_json::from_str(r#"{"title": "From config", "trim": "both"}"#).unwrap();
        assert_eq!(options.title.as_deref(), Some("From config"));
        assert_eq!(options.trim, TrimMode::Both);
        assert_eq!(options.arrow_style, "->");
    }
}
