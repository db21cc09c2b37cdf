//! The question-source seam.
//!
//! Sources are implemented by the `quizdeck-sources` crate (local files,
//! HTTP). The core only knows how to turn whatever a source returns into a
//! [`QuestionPool`].

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;

use crate::pool::QuestionPool;

/// Somewhere a question-set document can be read from.
///
/// A fetch is a single request/response: no retry, no caching. Failures are
/// reported immediately so the session never starts on partial data.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Short source kind (e.g. "file", "http").
    fn name(&self) -> &str;

    /// Where the document lives, for messages.
    fn location(&self) -> String;

    /// Read and parse the document.
    async fn fetch(&self) -> anyhow::Result<Value>;
}

/// Fetch a document from `source` and validate it into a pool.
///
/// Load failures and validation failures both come back as errors; a
/// [`crate::error::QuizError`] can be recovered with `downcast_ref`.
pub async fn load_pool(source: &dyn QuestionSource) -> anyhow::Result<QuestionPool> {
    let raw = source
        .fetch()
        .await
        .with_context(|| format!("could not load questions from {}", source.location()))?;
    let pool = QuestionPool::load(&raw)?;
    tracing::debug!(
        source = source.name(),
        location = %source.location(),
        count = pool.len(),
        "question pool ready"
    );
    Ok(pool)
}
