//! Scoped constructs restore state and write their closing lines on every
//! exit path: explicit close, normal drop, early `?` return and panic.

use std::panic::{self, AssertUnwindSafe};

use plantuml_sequence::prelude::*;
use plantuml_sequence::Result;

fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_nested_arrow_style_restoration() {
    let mut buffer = Vec::new();
    {
        let mut d = Diagram::new(&mut buffer);
        d.message("A", "B", "before").unwrap();
        {
            let mut dotted = d.override_arrow_style("-->");
            dotted.message("A", "B", "outer").unwrap();
            {
                let mut thin = dotted.override_arrow_style("->>");
                thin.message("A", "B", "inner").unwrap();
                assert_eq!(thin.arrow_style(), "->>");
            }
            dotted.message("A", "B", "outer again").unwrap();
            assert_eq!(dotted.arrow_style(), "-->");
        }
        d.message("A", "B", "after").unwrap();
        assert_eq!(d.arrow_style(), "->");
    }
    assert_eq!(
        output(buffer),
        "A -> B: before\nA --> B: outer\nA ->> B: inner\nA --> B: outer again\nA -> B: after\n"
    );
}

#[test]
fn test_explicit_arrow_overrides_scope() {
    let mut buffer = Vec::new();
    {
        let mut d = Diagram::new(&mut buffer);
        let mut red = d.override_arrow_style("-[#red]>");
        red.send(Message::new("A", "B").arrow("<->")).unwrap();
        red.message("A", "B", "").unwrap();
    }
    assert_eq!(output(buffer), "A <-> B\nA -[#red]> B\n");
}

#[test]
fn test_set_arrow_style_inside_scope_is_reverted() {
    let mut d = Diagram::new(Vec::new());
    {
        let mut scope = d.override_arrow_style("-->");
        scope.set_arrow_style("->x");
    }
    assert_eq!(d.arrow_style(), "->");
}

fn failing_body(d: &mut Diagram<&mut Vec<u8>>) -> Result<()> {
    let mut boxed = d.participants_box(Some("Cluster"), None)?;
    let mut active = boxed.active_lifeline("Worker", None, true)?;
    let mut dotted = active.override_arrow_style("-->");
    dotted.message("Worker", "Queue", "poll")?;
    dotted.autonumber(None, Some(2))?;
    dotted.message("Worker", "Queue", "unreachable")?;
    Ok(())
}

#[test]
fn test_scopes_close_on_early_return() {
    let mut buffer = Vec::new();
    {
        let mut d = Diagram::open(&mut buffer, DiagramOptions::default()).unwrap();
        let result = failing_body(&mut d);
        assert!(matches!(
            result,
            Err(SequenceError::InvalidConfiguration { .. })
        ));
        assert_eq!(d.arrow_style(), "->");
    }
    assert_eq!(
        output(buffer),
        "@startuml\nbox \"Cluster\"\nactivate Worker\nWorker --> Queue: poll\ndestroy Worker\nend box\n@enduml\n"
    );
}

#[test]
fn test_scopes_close_on_panic() {
    let mut buffer = Vec::new();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut d = Diagram::open(&mut buffer, DiagramOptions::default()).unwrap();
        let mut alt = d.group(GroupKind::Alt, Some("happy path")).unwrap();
        let mut active = alt.active_lifeline("Bob", Some("LightGreen"), false).unwrap();
        active.message("Alice", "Bob", "ping").unwrap();
        panic!("caller bug");
    }));
    assert!(result.is_err());
    assert_eq!(
        output(buffer),
        "@startuml\nalt happy path\nactivate Bob #LightGreen\nAlice -> Bob: ping\ndeactivate Bob\nend\n@enduml\n"
    );
}

#[test]
fn test_lifeline_scope_emits_exactly_one_exit() {
    let mut buffer = Vec::new();
    {
        let mut d = Diagram::new(&mut buffer);
        let scope = d.active_lifeline("A", None, false).unwrap();
        scope.close().unwrap();
        let scope = d.active_lifeline("B", None, true).unwrap();
        drop(scope);
    }
    assert_eq!(
        output(buffer),
        "activate A\ndeactivate A\nactivate B\ndestroy B\n"
    );
}

#[test]
fn test_deeply_nested_boxes() {
    let mut buffer = Vec::new();
    {
        let mut d = Diagram::new(&mut buffer);
        let mut one = d.participants_box(Some("1"), None).unwrap();
        let mut two = one.participants_box(Some("2"), None).unwrap();
        let mut three = two.participants_box(Some("3"), None).unwrap();
        three.declare_participant("Deep", None, None).unwrap();
    }
    assert_eq!(
        output(buffer),
        "box \"1\"\nbox \"2\"\nbox \"3\"\nparticipant Deep\nend box\nend box\nend box\n"
    );
}

#[test]
fn test_indentation_scopes() {
    let mut buffer = Vec::new();
    {
        let mut d = Diagram::new(&mut buffer);
        let mut group = d.group(GroupKind::Loop, Some("forever")).unwrap();
        {
            let mut body = group.indented(4);
            body.message("A", "B", "tick").unwrap();
            {
                let mut deeper = body.indented(2);
                deeper.blank_line().unwrap();
                deeper.message("B", "A", "tock").unwrap();
            }
            body.message("A", "B", "tick").unwrap();
        }
        group.message("A", "B", "out").unwrap();
    }
    assert_eq!(
        output(buffer),
        "loop forever\n    A -> B: tick\n\n      B -> A: tock\n    A -> B: tick\nA -> B: out\nend\n"
    );
}
