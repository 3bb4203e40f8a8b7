//! Sequence diagram builder
//!
//! Emits PlantUML sequence diagram markup:
//! ```text
//! @startuml
//! participant Alice
//! participant Bob
//! Alice -> Bob: Hi
//! @enduml
//! ```

mod diagram;
mod message;
mod options;
mod participant;
mod scope;

pub use diagram::Diagram;
pub use message::{Message, MessageNote, NoteStyle};
pub use options::{DiagramOptions, DEFAULT_ARROW_STYLE};
pub use participant::{Participant, ParticipantRef};
pub use scope::Scope;
