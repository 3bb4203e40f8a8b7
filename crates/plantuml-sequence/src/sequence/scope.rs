//! Guards for scoped constructs
//!
//! Boxes, groups, lifelines, arrow-style overrides and indentation all return
//! a [`Scope`]. The guard derefs to the diagram, so the body of the construct
//! is written through it, and its exit action runs exactly once: on
//! [`Scope::close`], or on drop when the body returns early or panics.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use tracing::warn;

use super::diagram::Diagram;
use crate::core::Result;

/// What a scope does when it ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScopeExit {
    /// `end box`
    EndBox,
    /// `end` after a group
    EndGroup,
    /// Put back the arrow style that was active on entry
    RestoreArrowStyle(String),
    /// `destroy <participant>` or `deactivate <participant>`
    EndLifeline { participant: String, destroy: bool },
    /// Return the writer to the indentation depth recorded on entry
    Dedent(usize),
}

/// Guard for a scoped construct, see the module documentation
///
/// # Example
/// ```
/// use plantuml_sequence::{Diagram, DiagramOptions};
///
/// let mut out = Vec::new();
/// let mut diagram = Diagram::open(&mut out, DiagramOptions::default())?;
/// {
///     let mut internal = diagram.participants_box(Some("Internal"), Some("LightBlue"))?;
///     internal.declare_participant("Bob", None, None)?;
/// }
/// diagram.finish()?;
///
/// let text = String::from_utf8(out)?;
/// assert!(text.contains("box \"Internal\" #LightBlue\nparticipant Bob\nend box\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use = "a scope ends as soon as it is dropped"]
pub struct Scope<'d, W: Write> {
    diagram: &'d mut Diagram<W>,
    exit: Option<ScopeExit>,
}

impl<'d, W: Write> Scope<'d, W> {
    pub(crate) fn new(diagram: &'d mut Diagram<W>, exit: ScopeExit) -> Self {
        Self {
            diagram,
            exit: Some(exit),
        }
    }

    /// End the scope now and report whether the closing line was written
    pub fn close(mut self) -> Result<()> {
        self.run_exit()
    }

    fn run_exit(&mut self) -> Result<()> {
        match self.exit.take() {
            Some(exit) => self.diagram.exit_scope(exit),
            None => Ok(()),
        }
    }
}

impl<'d, W: Write> Deref for Scope<'d, W> {
    type Target = Diagram<W>;

    fn deref(&self) -> &Self::Target {
        self.diagram
    }
}

impl<'d, W: Write> DerefMut for Scope<'d, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.diagram
    }
}

impl<'d, W: Write> Drop for Scope<'d, W> {
    fn drop(&mut self) {
        if let Err(error) = self.run_exit() {
            warn!(%error, "Failed to close scope");
        }
    }
}
