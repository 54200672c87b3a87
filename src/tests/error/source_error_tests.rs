//! Tests for SourceError wrapping and display.

use std::error::Error;
use std::io;

use crate::error::{SourceError, Stage};

#[test]
fn display_includes_stage_and_target() {
    let err = SourceError::new(
        Stage::Open,
        "a.txt",
        io::Error::new(io::ErrorKind::NotFound, "no such file"),
    );

    assert_eq!(err.to_string(), "[Open] a.txt: no such file");
    assert!(err.source().is_some());
}

#[test]
fn into_io_keeps_kind_and_context() {
    let err: io::Error =
        SourceError::new(Stage::Read, "-", io::Error::from(io::ErrorKind::BrokenPipe)).into();

    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(SourceError::stage_of(&err), Some(Stage::Read));
    assert_eq!(SourceError::from_io(&err).unwrap().target, "-");
}

#[test]
fn from_io_ignores_foreign_errors() {
    let plain = io::Error::other("unrelated");
    assert!(SourceError::from_io(&plain).is_none());

    let bare = io::Error::from(io::ErrorKind::Interrupted);
    assert_eq!(SourceError::stage_of(&bare), None);
}
