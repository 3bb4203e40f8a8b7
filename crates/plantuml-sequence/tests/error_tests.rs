//! Tests for error reporting

use plantuml_sequence::prelude::*;
use plantuml_sequence::SequenceError;
use std::io::{self, Write};

#[test]
fn test_duplicate_participant_message() {
    let mut diagram = Diagram::new(Vec::new());
    diagram.declare_participant("Web server", None, None).unwrap();
    let err = diagram.declare_entity("Web-server", None, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Participant with alias 'Webserver' already exists"
    );
}

#[test]
fn test_explicit_alias_collision() {
    let mut diagram = Diagram::new(Vec::new());
    diagram.declare_participant("Alice", Some("A"), None).unwrap();
    assert!(diagram.declare_participant("Another", Some("A"), None).is_err());
    assert!(diagram.declare_participant("A", None, None).is_err());
}

#[test]
fn test_autonumber_increment_without_start() {
    let mut diagram = Diagram::new(Vec::new());
    let err = diagram.autonumber(None, Some(5)).unwrap_err();
    assert!(matches!(err, SequenceError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("increment without start"));
    assert!(diagram.get_ref().is_empty());
}

#[test]
fn test_invalid_enumerations() {
    for result in [
        "triangle".parse::<NoteShape>().map(|_| ()),
        "below".parse::<NotePosition>().map(|_| ()),
        "cloud".parse::<ParticipantShape>().map(|_| ()),
        "switch".parse::<GroupKind>().map(|_| ()),
        "over".parse::<MessageNotePosition>().map(|_| ()),
    ] {
        assert!(matches!(
            result,
            Err(SequenceError::InvalidEnumeration { .. })
        ));
    }
}

/// Sink that fails every write
#[derive(Debug)]
struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_io_errors_propagate() {
    let err = Diagram::open(BrokenSink, DiagramOptions::default()).unwrap_err();
    match err {
        SequenceError::Io { source } => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_failed_declaration_is_not_registered() {
    let mut diagram = Diagram::new(BrokenSink);
    assert!(diagram.declare_participant("Alice", None, None).is_err());
    assert_eq!(diagram.participant_count(), 0);
}

#[test]
fn test_drop_with_broken_sink_does_not_panic() {
    let mut diagram = Diagram::new(BrokenSink);
    let _ = diagram.begin();
    let scope = diagram.participants_box(None, None);
    assert!(scope.is_err());
}
