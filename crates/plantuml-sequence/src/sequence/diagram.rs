//! The sequence diagram builder
//!
//! [`Diagram`] owns the line writer, the participant registry and the current
//! arrow style. Every operation validates its arguments first and only then
//! writes, so a failed call leaves the output untouched.

use std::collections::HashMap;
use std::io::Write;

use tracing::{debug, warn};

use super::message::{Message, NoteStyle};
use super::options::DiagramOptions;
use super::participant::{Participant, ParticipantRef};
use super::scope::{Scope, ScopeExit};
use crate::core::{
    escape_newlines, format_color, GroupKind, LineWriter, NotePosition, ParticipantShape, Result,
    SequenceError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Pending,
    Open,
    Closed,
}

/// Stateful builder writing PlantUML sequence diagram markup
///
/// An open diagram writes `@enduml` when dropped, so returning early with `?`
/// still produces a closed document. Use [`Diagram::finish`] to observe the
/// result of that final write.
///
/// # Example
/// ```
/// use plantuml_sequence::{Diagram, DiagramOptions};
///
/// let mut out = Vec::new();
/// let mut diagram = Diagram::open(&mut out, DiagramOptions::default())?;
/// let alice = diagram.declare_participant("Alice", None, None)?;
/// let bob = diagram.declare_participant("Bob", None, None)?;
/// diagram.message(&alice, &bob, "Hi")?;
/// diagram.finish()?;
///
/// assert_eq!(
///     String::from_utf8(out)?,
///     "@startuml\nparticipant Alice\nparticipant Bob\nAlice -> Bob: Hi\n@enduml\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Diagram<W: Write> {
    writer: LineWriter<W>,
    participants: HashMap<String, Participant>,
    arrow_style: String,
    options: DiagramOptions,
    lifecycle: Lifecycle,
}

impl<W: Write> Diagram<W> {
    /// Create a builder with default options; nothing is written yet
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, DiagramOptions::default())
    }

    pub fn with_options(sink: W, options: DiagramOptions) -> Self {
        Self {
            writer: LineWriter::with_trim(sink, options.trim),
            participants: HashMap::new(),
            arrow_style: options.arrow_style.clone(),
            options,
            lifecycle: Lifecycle::Pending,
        }
    }

    /// Create a builder and immediately write the diagram header
    pub fn open(sink: W, options: DiagramOptions) -> Result<Self> {
        let mut diagram = Self::with_options(sink, options);
        diagram.begin()?;
        Ok(diagram)
    }

    /// Write `@startuml` followed by the configured header directives
    pub fn begin(&mut self) -> Result<&mut Self> {
        if self.lifecycle != Lifecycle::Pending {
            return Err(SequenceError::invalid_configuration(
                "Diagram has already been opened",
            ));
        }
        let mut lines = vec!["@startuml".to_string()];
        lines.extend(self.options.header_lines());
        self.writer.write_lines(&lines)?;
        self.lifecycle = Lifecycle::Open;
        debug!(header_lines = lines.len(), "Diagram opened");
        Ok(self)
    }

    /// Write `@enduml`; the diagram must be open
    pub fn close(&mut self) -> Result<&mut Self> {
        if self.lifecycle != Lifecycle::Open {
            return Err(SequenceError::invalid_configuration(
                "Only an open diagram can be closed",
            ));
        }
        // Marked closed first so a failed write is not retried on drop
        self.lifecycle = Lifecycle::Closed;
        self.writer.write_line("@enduml")?;
        debug!(participants = self.participants.len(), "Diagram closed");
        Ok(self)
    }

    /// Close the diagram and consume the builder
    pub fn finish(mut self) -> Result<()> {
        self.close()?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.lifecycle == Lifecycle::Open
    }

    pub fn options(&self) -> &DiagramOptions {
        &self.options
    }

    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    /// Write a raw line through the line writer
    pub fn write_line(&mut self, line: &str) -> Result<&mut Self> {
        self.ensure_writable()?;
        self.writer.write_line(line)?;
        Ok(self)
    }

    pub fn blank_line(&mut self) -> Result<&mut Self> {
        self.write_line("")
    }

    // Participants

    /// Declare a participant of any shape
    ///
    /// The alias defaults to the alphanumeric characters of the title. Fails
    /// with [`SequenceError::DuplicateParticipant`] if the alias is taken, and
    /// with [`SequenceError::InvalidConfiguration`] if the title has no
    /// alphanumeric characters and no alias is given.
    pub fn declare(
        &mut self,
        shape: ParticipantShape,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.ensure_writable()?;
        let participant = Participant::new(title, shape)
            .with_alias(alias.unwrap_or_default())
            .with_background_color(color.unwrap_or_default());

        if participant.alias().is_empty() {
            debug!(title, "Rejected participant without alias");
            return Err(SequenceError::invalid_configuration(format!(
                "Cannot derive an alias from title '{}', pass one explicitly",
                participant.title()
            )));
        }
        if self.participants.contains_key(participant.alias()) {
            debug!(alias = participant.alias(), "Rejected duplicate participant");
            return Err(SequenceError::duplicate_participant(participant.alias()));
        }

        self.writer.write_line(&participant.to_string())?;
        debug!(alias = participant.alias(), shape = %shape, "Participant declared");
        self.participants
            .insert(participant.alias().to_string(), participant.clone());
        Ok(participant)
    }

    pub fn declare_participant(
        &mut self,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.declare(ParticipantShape::Participant, title, alias, color)
    }

    pub fn declare_actor(
        &mut self,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.declare(ParticipantShape::Actor, title, alias, color)
    }

    pub fn declare_boundary(
        &mut self,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.declare(ParticipantShape::Boundary, title, alias, color)
    }

    pub fn declare_control(
        &mut self,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.declare(ParticipantShape::Control, title, alias, color)
    }

    pub fn declare_entity(
        &mut self,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.declare(ParticipantShape::Entity, title, alias, color)
    }

    pub fn declare_database(
        &mut self,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.declare(ParticipantShape::Database, title, alias, color)
    }

    pub fn declare_collections(
        &mut self,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.declare(ParticipantShape::Collections, title, alias, color)
    }

    pub fn declare_queue(
        &mut self,
        title: &str,
        alias: Option<&str>,
        color: Option<&str>,
    ) -> Result<Participant> {
        self.declare(ParticipantShape::Queue, title, alias, color)
    }

    /// Look up a declared participant by alias
    pub fn participant(&self, alias: &str) -> Option<&Participant> {
        self.participants.get(alias)
    }

    /// All declared participants, in no particular order
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    // Messages

    /// Send `text` from one participant to another using the current arrow style
    ///
    /// An empty `text` writes the arrow without a label.
    pub fn message<'p>(
        &mut self,
        from: impl Into<ParticipantRef<'p>>,
        to: impl Into<ParticipantRef<'p>>,
        text: &str,
    ) -> Result<&mut Self> {
        self.send(Message::new(from, to).text(text))
    }

    /// Write a fully specified message, followed by its note if any
    pub fn send(&mut self, message: Message<'_>) -> Result<&mut Self> {
        self.ensure_writable()?;
        let lines = message.to_lines(&self.arrow_style);
        self.writer.write_lines(&lines)?;
        Ok(self)
    }

    /// Arrow style used by messages without an explicit arrow
    pub fn arrow_style(&self) -> &str {
        &self.arrow_style
    }

    pub fn set_arrow_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.arrow_style = style.into();
        self
    }

    /// Use `style` as the default arrow until the returned scope ends
    ///
    /// Arrow styles follow PlantUML: `-->` dotted, `->>` thin head, `->x` lost
    /// message, `-[#red]>` colored, `<->` bidirectional.
    pub fn override_arrow_style(&mut self, style: impl Into<String>) -> Scope<'_, W> {
        let previous = std::mem::replace(&mut self.arrow_style, style.into());
        debug!(previous = %previous, current = %self.arrow_style, "Arrow style overridden");
        Scope::new(self, ScopeExit::RestoreArrowStyle(previous))
    }

    // Numbering and paging

    /// `autonumber [start [increment]]`
    ///
    /// An increment without a start cannot be expressed and is rejected.
    pub fn autonumber(&mut self, start: Option<u32>, increment: Option<u32>) -> Result<&mut Self> {
        let line = match (start, increment) {
            (None, None) => "autonumber".to_string(),
            (Some(start), None) => format!("autonumber {}", start),
            (Some(start), Some(increment)) => format!("autonumber {} {}", start, increment),
            (None, Some(_)) => {
                debug!("Rejected autonumber increment without start");
                return Err(SequenceError::invalid_configuration(
                    "Cannot set autonumber increment without start",
                ));
            }
        };
        self.write_line(&line)
    }

    pub fn autonumber_stop(&mut self) -> Result<&mut Self> {
        self.write_line("autonumber stop")
    }

    /// Resume numbering, optionally with a new increment
    pub fn autonumber_resume(&mut self, increment: Option<u32>) -> Result<&mut Self> {
        match increment {
            Some(increment) => self.write_line(&format!("autonumber resume {}", increment)),
            None => self.write_line("autonumber resume"),
        }
    }

    /// Start a new page, optionally titled
    pub fn newpage(&mut self, title: Option<&str>) -> Result<&mut Self> {
        self.write_line(&with_text("newpage ", title))
    }

    // Lifelines

    pub fn activate_lifeline<'p>(
        &mut self,
        participant: impl Into<ParticipantRef<'p>>,
        color: Option<&str>,
    ) -> Result<&mut Self> {
        let line = format!(
            "activate {}{}",
            participant.into().resolve(),
            format_color(color)
        );
        self.write_line(&line)
    }

    pub fn deactivate_lifeline<'p>(
        &mut self,
        participant: impl Into<ParticipantRef<'p>>,
    ) -> Result<&mut Self> {
        self.write_line(&format!("deactivate {}", participant.into().resolve()))
    }

    pub fn destroy_lifeline<'p>(
        &mut self,
        participant: impl Into<ParticipantRef<'p>>,
    ) -> Result<&mut Self> {
        self.write_line(&format!("destroy {}", participant.into().resolve()))
    }

    /// Activate a lifeline until the returned scope ends
    ///
    /// On exit the lifeline is destroyed if `destroy` is set, deactivated
    /// otherwise.
    pub fn active_lifeline<'p>(
        &mut self,
        participant: impl Into<ParticipantRef<'p>>,
        color: Option<&str>,
        destroy: bool,
    ) -> Result<Scope<'_, W>> {
        let participant = participant.into().resolve();
        self.write_line(&format!("activate {}{}", participant, format_color(color)))?;
        Ok(Scope::new(
            self,
            ScopeExit::EndLifeline {
                participant,
                destroy,
            },
        ))
    }

    // Separators

    /// `...` or `...text...`
    pub fn delay(&mut self, text: Option<&str>) -> Result<&mut Self> {
        let line = match text.filter(|t| !t.is_empty()) {
            Some(text) => format!("...{}...", escape_newlines(text)),
            None => "...".to_string(),
        };
        self.write_line(&line)
    }

    /// `|||` or `||pixels||`
    pub fn space(&mut self, pixels: Option<u32>) -> Result<&mut Self> {
        match pixels {
            Some(pixels) => self.write_line(&format!("||{}||", pixels)),
            None => self.write_line("|||"),
        }
    }

    /// `==` or `== text ==`
    pub fn divider(&mut self, text: Option<&str>) -> Result<&mut Self> {
        let line = match text.filter(|t| !t.is_empty()) {
            Some(text) => format!("== {} ==", escape_newlines(text)),
            None => "==".to_string(),
        };
        self.write_line(&line)
    }

    // Boxes and groups

    /// Draw a box around the participants declared inside the scope
    pub fn participants_box(
        &mut self,
        title: Option<&str>,
        color: Option<&str>,
    ) -> Result<Scope<'_, W>> {
        let title = match title.filter(|t| !t.is_empty()) {
            Some(title) => format!(" \"{}\"", escape_newlines(title)),
            None => String::new(),
        };
        self.write_line(&format!("box{}{}", title, format_color(color)))?;
        Ok(Scope::new(self, ScopeExit::EndBox))
    }

    /// Open an `alt`/`opt`/`loop`/... group, closed with `end`
    pub fn group(&mut self, kind: GroupKind, label: Option<&str>) -> Result<Scope<'_, W>> {
        let line = with_text(&format!("{} ", kind), label);
        self.write_line(&line)?;
        debug!(kind = %kind, "Group opened");
        Ok(Scope::new(self, ScopeExit::EndGroup))
    }

    /// Start the next branch of an `alt` group
    pub fn else_branch(&mut self, label: Option<&str>) -> Result<&mut Self> {
        self.write_line(&with_text("else ", label))
    }

    /// Indent every line written until the returned scope ends
    pub fn indented(&mut self, width: usize) -> Scope<'_, W> {
        let depth = self.writer.push_indent(width);
        Scope::new(self, ScopeExit::Dedent(depth))
    }

    // Notes

    /// Place a note over, left of or right of participants
    ///
    /// `left`/`right` accept exactly one participant; `over` accepts any
    /// non-empty set.
    pub fn participant_note<'p, I>(
        &mut self,
        participants: I,
        text: &str,
        position: NotePosition,
        style: NoteStyle,
    ) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<ParticipantRef<'p>>,
    {
        let refs: Vec<String> = participants
            .into_iter()
            .map(|p| p.into().resolve())
            .collect();

        if refs.is_empty() {
            return Err(SequenceError::invalid_configuration(
                "A note needs at least one participant",
            ));
        }
        if refs.len() > 1 && !position.allows_multiple() {
            debug!(position = %position, count = refs.len(), "Rejected note position");
            return Err(SequenceError::invalid_configuration(format!(
                "Cannot add a note {} multiple participants",
                position.keyword()
            )));
        }

        let line = format!(
            "{} {} {}{}: {}",
            style.keyword(),
            position.keyword(),
            refs.join(", "),
            style.color_suffix(),
            escape_newlines(text)
        );
        self.write_line(&line)
    }

    /// Place a note spanning every participant
    pub fn note_across(&mut self, text: &str, style: NoteStyle) -> Result<&mut Self> {
        let line = format!(
            "{} across{}: {}",
            style.keyword(),
            style.color_suffix(),
            escape_newlines(text)
        );
        self.write_line(&line)
    }

    /// Nothing may follow `@enduml`
    fn ensure_writable(&self) -> Result<()> {
        if self.lifecycle == Lifecycle::Closed {
            debug!("Rejected write after @enduml");
            return Err(SequenceError::invalid_configuration(
                "Diagram is already closed",
            ));
        }
        Ok(())
    }

    pub(crate) fn exit_scope(&mut self, exit: ScopeExit) -> Result<()> {
        match exit {
            ScopeExit::EndBox => {
                self.write_line("end box")?;
            }
            ScopeExit::EndGroup => {
                self.write_line("end")?;
            }
            ScopeExit::RestoreArrowStyle(previous) => {
                debug!(restored = %previous, "Arrow style restored");
                self.arrow_style = previous;
            }
            ScopeExit::EndLifeline {
                participant,
                destroy,
            } => {
                let keyword = if destroy { "destroy" } else { "deactivate" };
                self.write_line(&format!("{} {}", keyword, participant))?;
            }
            ScopeExit::Dedent(depth) => self.writer.restore_indent(depth),
        }
        Ok(())
    }
}

impl<W: Write> Drop for Diagram<W> {
    fn drop(&mut self) {
        if self.lifecycle == Lifecycle::Open {
            if let Err(error) = self.close() {
                warn!(%error, "Failed to write @enduml");
            }
        }
    }
}

/// `prefix + escaped text`, or the trimmed prefix alone when there is no text
fn with_text(prefix: &str, text: Option<&str>) -> String {
    match text.filter(|t| !t.is_empty()) {
        Some(text) => format!("{}{}", prefix, escape_newlines(text)),
        None => prefix.trim_end().to_string(),
    }
}
