//! HTTP question source.

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use quizdeck_core::traits::QuestionSource;

use crate::error::SourceError;

/// Fetches a question-set document with a single GET.
///
/// There is no retry and no timeout: a failed request is reported as-is and
/// the session does not start.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SourceError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn location(&self) -> String {
        self.url.clone()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> anyhow::Result<Value> {
        let response = self
            .client
            .get(&self.url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        let value: Value = serde_json::from_str(&body).map_err(|e| SourceError::InvalidBody {
            location: self.url.clone(),
            message: e.to_string(),
        })?;
        Ok(value)
    }
}
