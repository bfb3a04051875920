use std::collections::BTreeMap;

use crate::error::Stage;
use crate::format::{decode_all_async, decode_async, encode, encode_async};

#[tokio::test]
async fn encode_async_matches_sync_encoding() {
    let value = BTreeMap::from([("name", "default"), ("phase", "Active")]);

    let mut sync_out = Vec::new();
    encode(&mut sync_out, &value).unwrap();

    let mut async_out = Vec::new();
    encode_async(&mut async_out, &value).await.unwrap();

    assert_eq!(async_out, sync_out);
}

#[tokio::test]
async fn decode_async_reads_documents() {
    let input: &[u8] = b"---\na: 1\n---\nb: 2\n";

    let docs: Vec<BTreeMap<String, i32>> = decode_all_async(input).await.unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1]["b"], 2);

    let single: BTreeMap<String, i32> = decode_async(&b"a: 1\n"[..]).await.unwrap();
    assert_eq!(single["a"], 1);
}

#[tokio::test]
async fn decode_async_empty_is_parse_error() {
    let err = decode_async::<serde_yaml::Value>(&b""[..]).await.unwrap_err();
    assert_eq!(err.stage, Stage::Parse);
}
