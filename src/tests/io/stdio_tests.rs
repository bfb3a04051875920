//! Tests for standard IO providers.

use std::fs;
use std::io::{ErrorKind, Read, Write};

use crate::{FileInput, FileOutput, InputProvider, OutputTarget, StdinInput, StdoutOutput};

#[test]
fn file_input_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, b"hello world").unwrap();

    let inp = FileInput::new(path.clone());
    let mut reader = inp.open().unwrap();
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello world");
    assert_eq!(inp.id(), path.to_string_lossy());
}

#[test]
fn file_output_writes_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let out = FileOutput::new(path.clone());

    {
        let mut w = out.open_overwrite().unwrap();
        w.write_all(b"abc").unwrap();
    }
    assert_eq!(fs::read(&path).unwrap(), b"abc".to_vec());

    {
        let mut w = out.open_append().unwrap();
        w.write_all(b"def").unwrap();
    }
    assert_eq!(fs::read(&path).unwrap(), b"abcdef".to_vec());

    {
        let mut w = out.open_overwrite().unwrap();
        w.write_all(b"x").unwrap();
    }
    assert_eq!(fs::read(&path).unwrap(), b"x".to_vec());
}

#[test]
fn file_output_create_new_refuses_existing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.txt");
    let out = FileOutput::new(path.clone());

    drop(out.open_create_new().unwrap());
    assert!(path.exists());

    let err = out
        .open_create_new()
        .err()
        .expect("second create_new must fail");
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

#[test]
fn standard_streams_are_marked_std() {
    assert!(StdinInput::new().is_std());
    assert_eq!(StdinInput::new().id(), "-");
    assert!(StdoutOutput::new().is_std());
    assert_eq!(StdoutOutput::new().id(), "-");
    assert!(!FileOutput::new("-x").is_std());
}
