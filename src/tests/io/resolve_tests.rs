//! Tests for path resolution through `open_input` / `open_output`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Read};

use crate::error::Stage;
use crate::{FileExistsPolicy, open_input, open_output, open_output_with};

#[test]
fn sentinel_binds_standard_streams() {
    let input = open_input("-").expect("stdin always resolves");
    assert!(input.is_std());
    assert_eq!(input.id(), "-");

    let output = open_output("-").expect("stdout always resolves");
    assert!(output.is_std());

    // Closing only flushes; stdout is still usable afterwards.
    output.close().unwrap();
    let again = open_output_with("-", FileExistsPolicy::Error).unwrap();
    assert!(again.is_std());
    again.close().unwrap();
}

#[test]
fn file_input_yields_on_disk_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ns.yaml");
    let bytes = b"name: kube-system\nlabels:\n- core\n";
    fs::write(&path, bytes).unwrap();

    let mut input = open_input(path.to_str().unwrap()).unwrap();
    assert!(!input.is_std());

    let mut read = Vec::new();
    input.read_to_end(&mut read).unwrap();
    assert_eq!(read, bytes.to_vec());
}

#[test]
fn missing_input_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nonexistent").join("path.yaml");
    let missing = missing.to_str().unwrap();

    let err = open_input(missing).unwrap_err();
    assert_eq!(err.stage, Stage::Open);
    assert!(err.is_not_found());
    assert_eq!(err.target.as_deref(), Some(missing));
    assert!(err.to_string().starts_with("opening file"));
}

#[test]
fn output_into_missing_directory_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("out.yaml");

    let err = open_output(path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.stage, Stage::Open);
    assert!(err.is_not_found());
}

#[test]
fn output_file_receives_concatenated_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.yaml");
    fs::write(&path, "stale content that must disappear\n").unwrap();

    let mut out = open_output(path.to_str().unwrap()).unwrap();
    out.encode(&BTreeMap::from([("a", 1)])).unwrap();
    out.encode(&BTreeMap::from([("b", 2)])).unwrap();
    out.close().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "---\na: 1\n---\nb: 2\n");
}

#[test]
fn append_policy_keeps_earlier_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.yaml");
    let path = path.to_str().unwrap();

    let mut out = open_output(path).unwrap();
    out.encode(&BTreeMap::from([("run", 1)])).unwrap();
    out.close().unwrap();

    let mut out = open_output_with(path, FileExistsPolicy::Append).unwrap();
    out.encode(&BTreeMap::from([("run", 2)])).unwrap();
    out.close().unwrap();

    let docs: Vec<BTreeMap<String, i32>> = open_input(path).unwrap().decode_all().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["run"], 1);
    assert_eq!(docs[1]["run"], 2);
}

#[test]
fn error_policy_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.yaml");
    fs::write(&path, "a: 1\n").unwrap();

    let err = open_output_with(path.to_str().unwrap(), FileExistsPolicy::Error).unwrap_err();
    assert_eq!(err.stage, Stage::Open);
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(ErrorKind::AlreadyExists)
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "a: 1\n");
}
