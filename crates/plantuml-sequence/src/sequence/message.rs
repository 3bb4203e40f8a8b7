//! Messages and note styling

use crate::core::{escape_newlines, format_color, MessageNotePosition, NoteShape};

use super::participant::ParticipantRef;

/// Shape and color shared by every kind of note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStyle {
    pub shape: NoteShape,
    pub background_color: Option<String>,
}

impl NoteStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(mut self, shape: NoteShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub(crate) fn keyword(&self) -> &'static str {
        self.shape.keyword()
    }

    pub(crate) fn color_suffix(&self) -> String {
        format_color(self.background_color.as_deref())
    }
}

/// A note attached to the message right before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNote {
    pub text: String,
    pub position: MessageNotePosition,
    pub style: NoteStyle,
}

impl MessageNote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: MessageNotePosition::default(),
            style: NoteStyle::default(),
        }
    }

    pub fn position(mut self, position: MessageNotePosition) -> Self {
        self.position = position;
        self
    }

    pub fn shape(mut self, shape: NoteShape) -> Self {
        self.style.shape = shape;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// `note right #color: text`
    pub(crate) fn to_line(&self) -> String {
        format!(
            "{} {}{}: {}",
            self.style.keyword(),
            self.position.keyword(),
            self.style.color_suffix(),
            escape_newlines(&self.text)
        )
    }
}

/// A message between two participants
///
/// Either end may be [`ParticipantRef::Edge`] for arrows entering or leaving
/// the diagram.
///
/// # Example
/// ```
/// use plantuml_sequence::{Message, MessageNote};
///
/// let message = Message::new("Alice", "Bob")
///     .text("Authentication Response")
///     .arrow("-->")
///     .note(MessageNote::new("cached"));
/// assert_eq!(message.arrow.as_deref(), Some("-->"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<'a> {
    pub from: ParticipantRef<'a>,
    pub to: ParticipantRef<'a>,
    pub text: Option<String>,
    /// Overrides the diagram's current arrow style
    pub arrow: Option<String>,
    pub note: Option<MessageNote>,
}

impl<'a> Message<'a> {
    pub fn new(from: impl Into<ParticipantRef<'a>>, to: impl Into<ParticipantRef<'a>>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: None,
            arrow: None,
            note: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn arrow(mut self, arrow: impl Into<String>) -> Self {
        self.arrow = Some(arrow.into());
        self
    }

    pub fn note(mut self, note: MessageNote) -> Self {
        self.note = Some(note);
        self
    }

    /// Lines for this message, given the arrow style in effect
    pub(crate) fn to_lines(&self, default_arrow: &str) -> Vec<String> {
        let arrow = self
            .arrow
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(default_arrow);
        let from = self.from.resolve();
        let to = self.to.resolve();
        let mut line = [from.as_str(), arrow, to.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            line.push_str(": ");
            line.push_str(&escape_newlines(text));
        }

        let mut lines = vec![line];
        if let Some(note) = self.note.as_ref().filter(|n| !n.text.is_empty()) {
            lines.push(note.to_line());
        }
        lines
    }
}
