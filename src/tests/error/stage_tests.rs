use std::error::Error as _;
use std::io;

use crate::error::{EmptyDocument, Stage, StreamError};

#[test]
fn stage_context_strings() {
    assert_eq!(Stage::Open.to_string(), "opening file");
    assert_eq!(Stage::Read.to_string(), "reading");
    assert_eq!(Stage::Parse.to_string(), "parsing");
    assert_eq!(Stage::Serialize.to_string(), "serializing");
    assert_eq!(Stage::Write.to_string(), "writing");
}

#[test]
fn display_includes_target_when_known() {
    let err = StreamError::new(
        Stage::Open,
        io::Error::new(io::ErrorKind::NotFound, "no such file"),
    );
    assert_eq!(err.to_string(), "opening file: no such file");

    let err = err.with_target("ns.yaml");
    assert_eq!(err.to_string(), "opening file ns.yaml: no such file");
}

#[test]
fn with_target_keeps_first_target() {
    let err = StreamError::new(Stage::Write, io::Error::other("boom"))
        .with_target("inner")
        .with_target("outer");
    assert_eq!(err.target.as_deref(), Some("inner"));
}

#[test]
fn source_and_not_found() {
    let err = StreamError::new(
        Stage::Open,
        io::Error::new(io::ErrorKind::NotFound, "missing"),
    );
    assert!(err.is_not_found());
    assert!(err.source().is_some());

    let err = StreamError::new(Stage::Parse, EmptyDocument);
    assert!(!err.is_not_found());
    assert!(err.io_error().is_none());
    assert!(err.error.downcast_ref::<EmptyDocument>().is_some());
}
