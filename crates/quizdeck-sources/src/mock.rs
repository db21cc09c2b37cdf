//! Mock source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use quizdeck_core::traits::QuestionSource;

use crate::error::SourceError;

/// A source that hands back a fixed document, or a fixed failure, without
/// touching the filesystem or network.
pub struct MockSource {
    response: Result<Value, String>,
    call_count: AtomicU32,
}

impl MockSource {
    /// A mock that always returns `document`.
    pub fn new(document: Value) -> Self {
        Self {
            response: Ok(document),
            call_count: AtomicU32::new(0),
        }
    }

    /// A mock whose fetch always fails with a network error.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of fetches made.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl QuestionSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn location(&self) -> String {
        "mock://questions".into()
    }

    async fn fetch(&self) -> anyhow::Result<Value> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(SourceError::Network(message.clone()).into()),
        }
    }
}
