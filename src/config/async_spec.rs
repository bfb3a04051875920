use std::sync::Arc;

use crate::error::StreamError;
use crate::io::{
    AsyncFileInput, AsyncFileOutput, AsyncInputProvider, AsyncInputStream, AsyncOutputStream,
    AsyncOutputTarget, AsyncStdinInput, AsyncStdoutOutput, STD_STREAM,
};

use super::FileExistsPolicy;

#[derive(Debug, Clone)]
pub struct AsyncInputSpec {
    /// Raw path argument
    pub raw: String,
    /// The async input provider implementation
    pub provider: Arc<dyn AsyncInputProvider>,
}

impl AsyncInputSpec {
    pub fn new(raw: impl Into<String>, provider: Arc<dyn AsyncInputProvider>) -> Self {
        Self {
            raw: raw.into(),
            provider,
        }
    }

    pub fn parse(raw: &str) -> Self {
        let provider: Arc<dyn AsyncInputProvider> = if raw == STD_STREAM {
            Arc::new(AsyncStdinInput::new())
        } else {
            Arc::new(AsyncFileInput::new(raw))
        };
        Self::new(raw, provider)
    }

    pub async fn open(&self) -> Result<AsyncInputStream, StreamError> {
        let reader = self
            .provider
            .open()
            .await
            .map_err(|e| StreamError::open(&self.raw, e))?;
        Ok(AsyncInputStream::new(
            self.raw.clone(),
            self.provider.is_std(),
            reader,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct AsyncOutputSpec {
    /// Raw path argument
    pub raw: String,
    /// The async output target implementation
    pub target: Arc<dyn AsyncOutputTarget>,
    /// Policy for handling existing files
    pub file_exists_policy: FileExistsPolicy,
}

impl AsyncOutputSpec {
    pub fn new(raw: impl Into<String>, target: Arc<dyn AsyncOutputTarget>) -> Self {
        Self {
            raw: raw.into(),
            target,
            file_exists_policy: FileExistsPolicy::default(),
        }
    }

    pub fn parse(raw: &str) -> Self {
        let target: Arc<dyn AsyncOutputTarget> = if raw == STD_STREAM {
            Arc::new(AsyncStdoutOutput::new())
        } else {
            Arc::new(AsyncFileOutput::new(raw))
        };
        Self::new(raw, target)
    }

    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }

    pub async fn open(&self) -> Result<AsyncOutputStream, StreamError> {
        let result = match self.file_exists_policy {
            FileExistsPolicy::Overwrite => self.target.open_overwrite().await,
            FileExistsPolicy::Append => self.target.open_append().await,
            FileExistsPolicy::Error => self.target.open_create_new().await,
        };

        let writer = result.map_err(|e| StreamError::open(&self.raw, e))?;
        Ok(AsyncOutputStream::new(
            self.raw.clone(),
            self.target.is_std(),
            writer,
        ))
    }
}
