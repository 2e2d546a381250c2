//! Tests for the caller-frame record.

use patternlog::CallerFrame;

#[test]
fn module_separators_are_normalized_to_dots() {
    let frame = CallerFrame::new("my_app::net::socket", "connect", "socket.rs", 12);
    assert_eq!(frame.type_name(), "my_app.net.socket");
}

#[test]
fn display_joins_type_method_and_line() {
    let frame = CallerFrame::new("com.example.Worker", "run", "worker.rs", 42);
    assert_eq!(frame.to_string(), "com.example.Worker#run:42");
}

#[test]
fn empty_file_name_becomes_none() {
    let frame = CallerFrame::new("app", "main", "", 1);
    assert_eq!(frame.file_name(), None);

    let frame = CallerFrame::new("app", "main", "main.rs", 1);
    assert_eq!(frame.file_name(), Some("main.rs"));
}

#[test]
fn accessors_expose_the_parts() {
    let frame = CallerFrame::new("app.module", "handle", "module.rs", 99);
    assert_eq!(frame.method_name(), "handle");
    assert_eq!(frame.line(), 99);
}
