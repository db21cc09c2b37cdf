//! quizdeck-sources — Question-set sources and topic configuration.
//!
//! Implements the `QuestionSource` trait for local files and HTTP, and maps
//! configured topic names onto sources.

pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod mock;

pub use config::{
    create_source, load_config, load_config_from, source_for_location, QuizdeckConfig, TopicConfig,
};
pub use error::SourceError;
pub use file::FileSource;
pub use http::HttpSource;
pub use mock::MockSource;
