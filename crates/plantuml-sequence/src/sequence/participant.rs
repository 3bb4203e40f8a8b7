//! Participants and references to them
//!
//! A [`Participant`] is created once by a declaration and never changes. Later
//! calls refer to it through a [`ParticipantRef`], which may also be a bare
//! name or the diagram edge.

use std::fmt;

use crate::core::{alias_from_title, escape_newlines, format_color, maybe_quote, ParticipantShape};

/// A declared participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    title: String,
    shape: ParticipantShape,
    alias: String,
    background_color: Option<String>,
}

impl Participant {
    /// Create a participant whose alias is derived from its title
    ///
    /// Newlines in the title are escaped first; the alias keeps only the
    /// alphanumeric characters of the escaped title.
    pub fn new(title: &str, shape: ParticipantShape) -> Self {
        let title = escape_newlines(title);
        Self {
            alias: alias_from_title(&title),
            title,
            shape,
            background_color: None,
        }
    }

    /// Replace the derived alias; an empty alias keeps the derived one
    pub fn with_alias(mut self, alias: &str) -> Self {
        if !alias.is_empty() {
            self.alias = alias.to_string();
        }
        self
    }

    pub fn with_background_color(mut self, color: &str) -> Self {
        if !color.is_empty() {
            self.background_color = Some(color.to_string());
        }
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn shape(&self) -> ParticipantShape {
        self.shape
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }
}

/// Declaration line, e.g. `actor "Web user" as User #Khaki`
impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.shape, maybe_quote(&self.title))?;
        if self.alias != self.title {
            write!(f, " as {}", self.alias)?;
        }
        f.write_str(&format_color(self.background_color()))
    }
}

/// Something a message, note or lifeline can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRef<'a> {
    /// A participant returned by a declaration; resolves to its alias
    Declared(&'a Participant),
    /// An undeclared name; quoted unless alphanumeric, empty means the edge
    Name(&'a str),
    /// The diagram edge, for incoming and outgoing arrows
    Edge,
}

impl ParticipantRef<'_> {
    /// Textual form used in emitted lines
    pub fn resolve(&self) -> String {
        match self {
            ParticipantRef::Declared(participant) => participant.alias.clone(),
            ParticipantRef::Name("") | ParticipantRef::Edge => String::new(),
            ParticipantRef::Name(name) => maybe_quote(name),
        }
    }
}

impl<'a> From<&'a Participant> for ParticipantRef<'a> {
    fn from(participant: &'a Participant) -> Self {
        ParticipantRef::Declared(participant)
    }
}

impl<'a> From<&'a str> for ParticipantRef<'a> {
    fn from(name: &'a str) -> Self {
        if name.is_empty() {
            ParticipantRef::Edge
        } else {
            ParticipantRef::Name(name)
        }
    }
}

impl<'a> From<&'a String> for ParticipantRef<'a> {
    fn from(name: &'a String) -> Self {
        ParticipantRef::from(name.as_str())
    }
}

impl<'a, T> From<Option<T>> for ParticipantRef<'a>
where
    T: Into<ParticipantRef<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ParticipantRef::Edge, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_defaults_to_title() {
        let alice = Participant::new("Alice", ParticipantShape::Participant);
        assert_eq!(alice.alias(), "Alice");
        assert_eq!(alice.to_string(), "participant Alice");
    }

    #[test]
    fn test_alias_filters_non_alphanumeric() {
        let user = Participant::new("Web user", ParticipantShape::Actor);
        assert_eq!(user.alias(), "Webuser");
        assert_eq!(user.to_string(), "actor \"Web user\" as Webuser");
    }

    #[test]
    fn test_explicit_alias_and_color() {
        let long = Participant::new("I have a really\nlong name", ParticipantShape::Participant)
            .with_alias("L")
            .with_background_color("99FF99");
        assert_eq!(long.title(), "I have a really\\nlong name");
        assert_eq!(
            long.to_string(),
            "participant \"I have a really\\nlong name\" as L #99FF99"
        );
    }

    #[test]
    fn test_empty_alias_keeps_derived() {
        let bob = Participant::new("Bob", ParticipantShape::Queue).with_alias("");
        assert_eq!(bob.alias(), "Bob");
        assert_eq!(bob.background_color(), None);
    }

    #[test]
    fn test_reference_resolution() {
        let alice = Participant::new("Alice Liddell", ParticipantShape::Participant);
        assert_eq!(ParticipantRef::from(&alice).resolve(), "AliceLiddell");
        assert_eq!(ParticipantRef::from("Bob").resolve(), "Bob");
        assert_eq!(ParticipantRef::from("Bob Ross").resolve(), "\"Bob Ross\"");
        assert_eq!(ParticipantRef::from("").resolve(), "");
        assert_eq!(ParticipantRef::from(None::<&str>).resolve(), "");
        assert_eq!(ParticipantRef::from(Some("Bob")).resolve(), "Bob");
    }

    #[test]
    fn test_empty_name_is_edge() {
        assert_eq!(ParticipantRef::Name("").resolve(), ParticipantRef::Edge.resolve());
        let lines = crate::sequence::Message::new(ParticipantRef::Name(""), "B")
            .text("x")
            .to_lines("->");
        assert_eq!(lines, vec!["-> B: x"]);
    }
}
