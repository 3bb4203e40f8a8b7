//! plantuml-sequence - Build PlantUML sequence diagrams from Rust
//!
//! A builder that writes sequence diagram markup line by line to any
//! [`std::io::Write`] sink. Participants are registered once and referenced
//! by alias; boxes, groups, lifelines and arrow-style overrides are scope
//! guards that always write their closing line.
//!
//! # Quick Start
//!
//! ```rust
//! use plantuml_sequence::prelude::*;
//!
//! let mut out = Vec::new();
//! let mut diagram = Diagram::open(&mut out, DiagramOptions::default().with_title("Login"))?;
//!
//! let user = diagram.declare_actor("User", None, None)?;
//! let api = diagram.declare_control("Auth API", Some("api"), None)?;
//!
//! diagram.message(&user, &api, "POST /login")?;
//! {
//!     let mut active = diagram.active_lifeline(&api, None, false)?;
//!     let mut dotted = active.override_arrow_style("-->");
//!     dotted.message(&api, &user, "200 OK")?;
//! }
//! diagram.participant_note([&user, &api], "session established", NotePosition::Over, NoteStyle::new())?;
//! diagram.finish()?;
//!
//! let markup = String::from_utf8(out)?;
//! assert_eq!(markup, "\
//! @startuml
//! title Login
//! actor User
//! control \"Auth API\" as api
//! User -> api: POST /login
//! activate api
//! api --> User: 200 OK
//! deactivate api
//! note over User, api: session established
//! @enduml
//! ");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Errors
//!
//! Every operation validates before writing. Duplicate aliases, an
//! autonumber increment without a start, and `left`/`right` notes over
//! several participants are rejected with [`SequenceError`] and leave the
//! output untouched.

pub mod core;
pub mod sequence;

pub use crate::core::{
    GroupKind, LineWriter, MessageNotePosition, NoteShape, NotePosition, ParticipantShape, Result,
    SequenceError, TrimMode,
};
pub use crate::sequence::{
    Diagram, DiagramOptions, Message, MessageNote, NoteStyle, Participant, ParticipantRef, Scope,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        GroupKind, MessageNotePosition, NoteShape, NotePosition, ParticipantShape, SequenceError,
        TrimMode,
    };
    pub use crate::sequence::{
        Diagram, DiagramOptions, Message, MessageNote, NoteStyle, Participant, ParticipantRef,
        Scope,
    };
}

/// Build a complete diagram into a `String`
///
/// Opens a diagram over an in-memory buffer, runs `build`, and closes it.
/// The first error raised by `build` is returned instead of the markup.
///
/// # Example
/// ```rust
/// use plantuml_sequence::render_to_string;
///
/// let markup = render_to_string(Default::default(), |d| {
///     d.message("Alice", "Bob", "Hi")?;
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(markup, "@startuml\nAlice -> Bob: Hi\n@enduml\n");
/// ```
pub fn render_to_string<F>(options: DiagramOptions, build: F) -> Result<String>
where
    F: FnOnce(&mut Diagram<&mut Vec<u8>>) -> Result<()>,
{
    let mut buffer = Vec::new();
    {
        let mut diagram = Diagram::open(&mut buffer, options)?;
        build(&mut diagram)?;
        diagram.finish()?;
    }
    String::from_utf8(buffer).map_err(|e| {
        SequenceError::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
