use serde::{Serialize, de::DeserializeOwned};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use super::{DOCUMENT_MARKER, decode_all_slice, decode_slice};
use crate::error::{Stage, StreamError};

async fn read_to_end_async(mut reader: impl AsyncRead + Unpin) -> Result<Vec<u8>, StreamError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(|e| StreamError::new(Stage::Read, e))?;
    Ok(bytes)
}

/// Async version of [`decode`](super::decode). The whole stream is buffered
/// before parsing.
pub async fn decode_async<T: DeserializeOwned>(
    reader: impl AsyncRead + Unpin,
) -> Result<T, StreamError> {
    let bytes = read_to_end_async(reader).await?;
    decode_slice(&bytes)
}

/// Async version of [`decode_all`](super::decode_all).
pub async fn decode_all_async<T: DeserializeOwned>(
    reader: impl AsyncRead + Unpin,
) -> Result<Vec<T>, StreamError> {
    let bytes = read_to_end_async(reader).await?;
    decode_all_slice(&bytes)
}

/// Async version of [`encode`](super::encode).
pub async fn encode_async<T: Serialize + ?Sized>(
    mut writer: impl AsyncWrite + Unpin,
    value: &T,
) -> Result<(), StreamError> {
    let body = serde_yaml::to_string(value).map_err(|e| StreamError::new(Stage::Serialize, e))?;

    writer
        .write_all(DOCUMENT_MARKER)
        .await
        .map_err(|e| StreamError::new(Stage::Write, e))?;
    writer
        .write_all(body.as_bytes())
        .await
        .map_err(|e| StreamError::new(Stage::Write, e))?;

    Ok(())
}
