//! Local-file question source.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use quizdeck_core::traits::QuestionSource;

use crate::error::SourceError;

/// Reads a question-set document from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> anyhow::Result<Value> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SourceError::NotFound(self.location()),
                _ => SourceError::Io {
                    path: self.location(),
                    message: e.to_string(),
                },
            })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| SourceError::InvalidBody {
            location: self.location(),
            message: e.to_string(),
        })?;
        Ok(value)
    }
}
