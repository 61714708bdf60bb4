//! End-to-end binding sessions: two peers exchanging edits through a relay.
//!
//! The "sync layer" here is a plain function call, which is exactly the
//! contract the binding exposes: edits out of one peer's settle go into the
//! other peer's remote application, one at a time, strictly serialized.

use tether::binding::{Binding, HostWidget, PlainWidget, RopeWidget};
use tether::cursor::{FlatPosition, LineColPosition, Selection};
use tether::edit::Edit;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Forward everything from one peer's settle into the other peer.
fn relay<A: HostWidget, B: HostWidget>(from: &mut Binding<A>, to: &mut Binding<B>) {
    for edit in from.content_settled() {
        to.apply_remote(&edit).expect("peer rejected a relayed edit");
    }
}

#[test]
fn test_typing_propagates_between_flat_widgets() {
    init_tracing();
    let mut alice = Binding::attach(PlainWidget::new(""));
    let mut bob = Binding::attach(PlainWidget::new(""));

    alice.widget_mut().replace_selection("hello");
    relay(&mut alice, &mut bob);

    assert_eq!(bob.widget().value(), "hello");
    assert_eq!(alice.content(), bob.content());
}

#[test]
fn test_flat_and_line_col_peers_converge() {
    init_tracing();
    let mut alice = Binding::attach(PlainWidget::new("ab\ncd"));
    let mut bob = Binding::attach(RopeWidget::new("ab\ncd"));
    bob.widget_mut().move_to(1, 1);

    // Alice prepends a line; Bob's cursor rides down with his text.
    alice.widget_mut().select(0, 0);
    alice.widget_mut().replace_selection("x\n");
    relay(&mut alice, &mut bob);

    assert_eq!(bob.widget().content(), "x\nab\ncd");
    assert_eq!(
        bob.widget().selection(),
        Selection::caret(LineColPosition::at(2, 1))
    );

    // Bob appends; Alice's caret (before the append point) stays put.
    bob.widget_mut().move_to(2, 2);
    bob.widget_mut().insert_str("!");
    relay(&mut bob, &mut alice);

    assert_eq!(alice.content(), bob.content());
    assert_eq!(alice.widget().value(), "x\nab\ncd!");
}

#[test]
fn test_remote_delete_relocates_peer_cursor() {
    init_tracing();
    let mut alice = Binding::attach(PlainWidget::new("one\ntwo\nthree"));
    let mut bob = Binding::attach(RopeWidget::new("one\ntwo\nthree"));
    bob.widget_mut().move_to(2, 3);

    // Alice deletes the middle line ("two\n", chars 4..8).
    alice.widget_mut().select(4, 8);
    alice.widget_mut().replace_selection("");
    relay(&mut alice, &mut bob);

    assert_eq!(bob.widget().content(), "one\nthree");
    assert_eq!(
        bob.widget().selection(),
        Selection::caret(LineColPosition::at(1, 3))
    );
}

#[test]
fn test_backspace_rounds_converge() {
    init_tracing();
    let mut alice = Binding::attach(PlainWidget::new("help"));
    let mut bob = Binding::attach(RopeWidget::new("help"));

    // Bob turns "help" back into "hello".
    bob.widget_mut().move_to(0, 4);
    assert!(bob.widget_mut().delete_back());
    bob.widget_mut().insert_str("lo");
    relay(&mut bob, &mut alice);

    assert_eq!(alice.widget().value(), "hello");
    assert_eq!(alice.content(), bob.content());
}

#[test]
fn test_interleaved_turns_build_a_document() {
    init_tracing();
    let mut alice = Binding::attach(PlainWidget::new(""));
    let mut bob = Binding::attach(PlainWidget::new(""));

    let turns: &[(bool, &str)] = &[
        (true, "fn main() {\n"),
        (false, "    println!(\"hi\");\n"),
        (true, "}\n"),
    ];
    for &(alice_turn, text) in turns {
        if alice_turn {
            let widget = alice.widget_mut();
            let end = widget.value().chars().count();
            widget.select(end, end);
            widget.replace_selection(text);
            relay(&mut alice, &mut bob);
        } else {
            let widget = bob.widget_mut();
            let end = widget.value().chars().count();
            widget.select(end, end);
            widget.replace_selection(text);
            relay(&mut bob, &mut alice);
        }
    }

    assert_eq!(alice.content(), "fn main() {\n    println!(\"hi\");\n}\n");
    assert_eq!(alice.content(), bob.content());
}

#[test]
fn test_selection_spanning_a_remote_edit_shrinks() {
    init_tracing();
    let mut alice = Binding::attach(PlainWidget::new("abcdefgh"));
    let mut bob = Binding::attach(PlainWidget::new("abcdefgh"));
    bob.widget_mut().select(1, 7);

    alice.widget_mut().select(3, 6);
    alice.widget_mut().replace_selection("");
    relay(&mut alice, &mut bob);

    assert_eq!(bob.widget().value(), "abcgh");
    assert_eq!(
        bob.widget().selection(),
        Selection::new(FlatPosition::new(1), FlatPosition::new(4))
    );
}

#[test]
fn test_edits_survive_the_wire() {
    init_tracing();
    let mut alice = Binding::attach(PlainWidget::new("hello"));
    let mut bob = Binding::attach(PlainWidget::new("hello"));

    alice.widget_mut().select(3, 5);
    alice.widget_mut().replace_selection("p");

    // Round-trip the edits through JSON, as a real sync layer would.
    let wire = serde_json::to_string(&alice.content_settled()).unwrap();
    let edits: Vec<Edit> = serde_json::from_str(&wire).unwrap();
    for edit in &edits {
        bob.apply_remote(edit).unwrap();
    }

    assert_eq!(bob.widget().value(), "help");
    assert_eq!(alice.content(), bob.content());
}

#[test]
fn test_crlf_host_content_is_normalized_on_the_way_out() {
    init_tracing();
    let mut alice = Binding::attach(PlainWidget::new("ab"));
    let mut bob = Binding::attach(RopeWidget::new("ab"));

    // A platform widget hands back CRLF; the peer only ever sees "\n".
    alice.widget_mut().set_content("a\r\nb");
    relay(&mut alice, &mut bob);

    assert_eq!(bob.widget().content(), "a\nb");
    assert_eq!(bob.widget().line_count(), 2);
}
