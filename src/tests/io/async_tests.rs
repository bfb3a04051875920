use std::collections::BTreeMap;

use crate::error::Stage;
use crate::{FileExistsPolicy, open_input_async, open_output_async, open_output_with_async};

#[tokio::test]
async fn async_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.yaml");
    let path = path.to_str().unwrap();

    let mut out = open_output_async(path).await.unwrap();
    assert!(!out.is_std());
    out.encode(&BTreeMap::from([("a", 1)])).await.unwrap();
    out.encode(&BTreeMap::from([("b", 2)])).await.unwrap();
    out.close().await.unwrap();

    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "---\na: 1\n---\nb: 2\n"
    );

    let mut input = open_input_async(path).await.unwrap();
    let docs: Vec<BTreeMap<String, i32>> = input.decode_all().await.unwrap();
    assert_eq!(docs.len(), 2);

    // A single-value decode refuses a multi-document stream.
    let mut input = open_input_async(path).await.unwrap();
    let err = input.decode::<BTreeMap<String, i32>>().await.unwrap_err();
    assert_eq!(err.stage, Stage::Parse);
    assert_eq!(err.target.as_deref(), Some(path));
}

#[tokio::test]
async fn async_sentinel_and_missing_paths() {
    let input = open_input_async("-").await.unwrap();
    assert!(input.is_std());

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    let err = open_input_async(missing.to_str().unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.stage, Stage::Open);
    assert!(err.is_not_found());
}

#[tokio::test]
async fn async_error_policy_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exists.yaml");
    std::fs::write(&path, "a: 1\n").unwrap();

    let err = open_output_with_async(path.to_str().unwrap(), FileExistsPolicy::Error)
        .await
        .unwrap_err();
    assert_eq!(err.stage, Stage::Open);
}

#[tokio::test]
async fn async_output_stream_encodes_all_and_writes_raw_bytes() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.yaml");
    let path = path.to_str().unwrap();

    let mut out = open_output_async(path).await.unwrap();
    out.write_all(b"# generated\n").await.unwrap();
    out.encode_all(&[BTreeMap::from([("a", 1)]), BTreeMap::from([("b", 2)])])
        .await
        .unwrap();
    out.close().await.unwrap();

    let mut input = open_input_async(path).await.unwrap();
    let mut text = String::new();
    input.read_to_string(&mut text).await.unwrap();
    assert_eq!(text, "# generated\n---\na: 1\n---\nb: 2\n");
}
