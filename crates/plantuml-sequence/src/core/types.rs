//! Core type definitions for sequence diagram markup
//!
//! Closed enumerations for participant shapes, note shapes, note positions and
//! group kinds. Each one knows the markup keyword it emits and can be parsed
//! from its lower-case name.

use std::fmt;
use std::str::FromStr;

use super::error::SequenceError;

/// Participant shapes supported by PlantUML sequence diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ParticipantShape {
    /// Plain box: `participant`
    #[default]
    Participant,
    /// Stick figure: `actor`
    Actor,
    /// `boundary`
    Boundary,
    /// `control`
    Control,
    /// `entity`
    Entity,
    /// Cylinder: `database`
    Database,
    /// Stacked boxes: `collections`
    Collections,
    /// `queue`
    Queue,
}

impl ParticipantShape {
    /// Markup keyword that declares a participant of this shape
    pub fn keyword(&self) -> &'static str {
        match self {
            ParticipantShape::Participant => "participant",
            ParticipantShape::Actor => "actor",
            ParticipantShape::Boundary => "boundary",
            ParticipantShape::Control => "control",
            ParticipantShape::Entity => "entity",
            ParticipantShape::Database => "database",
            ParticipantShape::Collections => "collections",
            ParticipantShape::Queue => "queue",
        }
    }

    /// All shapes, in declaration order
    pub fn all() -> &'static [ParticipantShape] {
        &[
            ParticipantShape::Participant,
            ParticipantShape::Actor,
            ParticipantShape::Boundary,
            ParticipantShape::Control,
            ParticipantShape::Entity,
            ParticipantShape::Database,
            ParticipantShape::Collections,
            ParticipantShape::Queue,
        ]
    }
}

impl fmt::Display for ParticipantShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ParticipantShape {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        ParticipantShape::all()
            .iter()
            .copied()
            .find(|shape| shape.keyword() == lowered)
            .ok_or_else(|| SequenceError::invalid_enumeration("participant shape", s))
    }
}

/// Note shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NoteShape {
    /// Folded-corner note: `note`
    #[default]
    Default,
    /// Rectangle: `rnote`
    Rectangle,
    /// Hexagon: `hnote`
    Hexagon,
}

impl NoteShape {
    /// Markup keyword that opens a note of this shape
    pub fn keyword(&self) -> &'static str {
        match self {
            NoteShape::Default => "note",
            NoteShape::Rectangle => "rnote",
            NoteShape::Hexagon => "hnote",
        }
    }
}

impl fmt::Display for NoteShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteShape::Default => write!(f, "default"),
            NoteShape::Rectangle => write!(f, "rectangle"),
            NoteShape::Hexagon => write!(f, "hexagon"),
        }
    }
}

impl FromStr for NoteShape {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(NoteShape::Default),
            "rectangle" => Ok(NoteShape::Rectangle),
            "hexagon" => Ok(NoteShape::Hexagon),
            _ => Err(SequenceError::invalid_enumeration("note shape", s)),
        }
    }
}

/// Placement of a note relative to participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NotePosition {
    /// Spans every referenced participant
    #[default]
    Over,
    /// Left of a single participant
    Left,
    /// Right of a single participant
    Right,
}

impl NotePosition {
    /// Markup keyword for this position
    pub fn keyword(&self) -> &'static str {
        match self {
            NotePosition::Over => "over",
            NotePosition::Left => "left of",
            NotePosition::Right => "right of",
        }
    }

    /// Whether the position accepts more than one participant
    pub fn allows_multiple(&self) -> bool {
        matches!(self, NotePosition::Over)
    }
}

impl fmt::Display for NotePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotePosition::Over => write!(f, "over"),
            NotePosition::Left => write!(f, "left"),
            NotePosition::Right => write!(f, "right"),
        }
    }
}

impl FromStr for NotePosition {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "over" => Ok(NotePosition::Over),
            "left" => Ok(NotePosition::Left),
            "right" => Ok(NotePosition::Right),
            _ => Err(SequenceError::invalid_enumeration("note position", s)),
        }
    }
}

/// Placement of a note attached to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MessageNotePosition {
    Left,
    #[default]
    Right,
}

impl MessageNotePosition {
    pub fn keyword(&self) -> &'static str {
        match self {
            MessageNotePosition::Left => "left",
            MessageNotePosition::Right => "right",
        }
    }
}

impl fmt::Display for MessageNotePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for MessageNotePosition {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(MessageNotePosition::Left),
            "right" => Ok(MessageNotePosition::Right),
            _ => Err(SequenceError::invalid_enumeration("message note position", s)),
        }
    }
}

/// Kinds of message groups (`alt`, `loop`, ...)
///
/// `else` is not a group of its own; it separates branches inside an `alt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum GroupKind {
    Alt,
    Opt,
    Loop,
    Par,
    Break,
    Critical,
    Group,
}

impl GroupKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            GroupKind::Alt => "alt",
            GroupKind::Opt => "opt",
            GroupKind::Loop => "loop",
            GroupKind::Par => "par",
            GroupKind::Break => "break",
            GroupKind::Critical => "critical",
            GroupKind::Group => "group",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for GroupKind {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alt" => Ok(GroupKind::Alt),
            "opt" => Ok(GroupKind::Opt),
            "loop" => Ok(GroupKind::Loop),
            "par" => Ok(GroupKind::Par),
            "break" => Ok(GroupKind::Break),
            "critical" => Ok(GroupKind::Critical),
            "group" => Ok(GroupKind::Group),
            _ => Err(SequenceError::invalid_enumeration("group kind", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_shape_keywords() {
        assert_eq!(ParticipantShape::Collections.keyword(), "collections");
        assert_eq!(ParticipantShape::default().to_string(), "participant");
        assert_eq!(ParticipantShape::all().len(), 8);
    }

    #[test]
    fn test_participant_shape_parsing() {
        assert_eq!(
            "Database".parse::<ParticipantShape>().unwrap(),
            ParticipantShape::Database
        );
        assert!("cloud".parse::<ParticipantShape>().is_err());
    }

    #[test]
    fn test_note_shape_keywords() {
        assert_eq!(NoteShape::Default.keyword(), "note");
        assert_eq!(NoteShape::Rectangle.keyword(), "rnote");
        assert_eq!(NoteShape::Hexagon.keyword(), "hnote");
    }

    #[test]
    fn test_note_shape_invalid() {
        let err = "circle".parse::<NoteShape>().unwrap_err();
        assert!(matches!(
            err,
            SequenceError::InvalidEnumeration { kind: "note shape", .. }
        ));
        assert!(err.to_string().contains("circle"));
    }

    #[test]
    fn test_note_position_keywords() {
        assert_eq!(NotePosition::Over.keyword(), "over");
        assert_eq!(NotePosition::Left.keyword(), "left of");
        assert_eq!(NotePosition::Right.keyword(), "right of");
        assert!(NotePosition::Over.allows_multiple());
        assert!(!NotePosition::Left.allows_multiple());
        assert_eq!("RIGHT".parse::<NotePosition>().unwrap(), NotePosition::Right);
        assert!("above".parse::<NotePosition>().is_err());
    }

    #[test]
    fn test_message_note_position() {
        assert_eq!(MessageNotePosition::default(), MessageNotePosition::Right);
        assert!("over".parse::<MessageNotePosition>().is_err());
    }

    #[test]
    fn test_group_kind_parsing() {
        assert_eq!("loop".parse::<GroupKind>().unwrap(), GroupKind::Loop);
        assert_eq!(GroupKind::Critical.to_string(), "critical");
        assert!("else".parse::<GroupKind>().is_err());
    }
}
