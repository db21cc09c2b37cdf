//! Topic configuration and source factory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizdeck_core::traits::QuestionSource;

use crate::file::FileSource;
use crate::http::HttpSource;

/// Environment variable that adds (or replaces) a topic named `remote`.
pub const QUESTIONS_URL_ENV: &str = "QUIZDECK_QUESTIONS_URL";

/// Where one topic's question set lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TopicConfig {
    File {
        path: PathBuf,
        #[serde(default)]
        title: Option<String>,
    },
    Http {
        url: String,
        #[serde(default)]
        title: Option<String>,
    },
}

impl TopicConfig {
    /// Human-readable title, if one was configured.
    pub fn title(&self) -> Option<&str> {
        match self {
            TopicConfig::File { title, .. } | TopicConfig::Http { title, .. } => title.as_deref(),
        }
    }

    /// Path or URL of the question set.
    pub fn location(&self) -> String {
        match self {
            TopicConfig::File { path, .. } => path.display().to_string(),
            TopicConfig::Http { url, .. } => url.clone(),
        }
    }
}

/// Top-level quizdeck configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizdeckConfig {
    /// Question count used when none is given on the command line.
    #[serde(default)]
    pub default_count: Option<usize>,
    /// Topic played when none is named.
    #[serde(default)]
    pub default_topic: Option<String>,
    /// Topics keyed by identifier.
    #[serde(default)]
    pub topics: BTreeMap<String, TopicConfig>,
}

impl QuizdeckConfig {
    /// Look up a topic, falling back to `default_topic` when `name` is `None`.
    pub fn topic(&self, name: Option<&str>) -> Result<(&str, &TopicConfig)> {
        let name = match name.or(self.default_topic.as_deref()) {
            Some(n) => n,
            None => anyhow::bail!("no topic given and no default_topic configured"),
        };
        self.topics
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .with_context(|| {
                format!(
                    "topic '{name}' not found in config. Available: {:?}",
                    self.topics.keys().collect::<Vec<_>>()
                )
            })
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
    }
    result
}

/// Expand env vars and anchor relative file paths at `base_dir`.
fn resolve_topic(topic: &TopicConfig, base_dir: Option<&Path>) -> TopicConfig {
    match topic {
        TopicConfig::File { path, title } => {
            let expanded = PathBuf::from(resolve_env_vars(&path.to_string_lossy()));
            let path = match base_dir {
                Some(base) if expanded.is_relative() => base.join(expanded),
                _ => expanded,
            };
            TopicConfig::File {
                path,
                title: title.clone(),
            }
        }
        TopicConfig::Http { url, title } => TopicConfig::Http {
            url: resolve_env_vars(url),
            title: title.clone(),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizdeck.toml` in the current directory
/// 2. `~/.config/quizdeck/config.toml`
///
/// Environment variable override: `QUIZDECK_QUESTIONS_URL`.
pub fn load_config() -> Result<QuizdeckConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeckConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("quizdeck.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizdeckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizdeckConfig::default(),
    };

    if let Ok(url) = std::env::var(QUESTIONS_URL_ENV) {
        config.topics.insert(
            "remote".into(),
            TopicConfig::Http {
                url,
                title: Some("Remote question set".into()),
            },
        );
    }

    let base_dir = config_path
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf);
    config.topics = config
        .topics
        .iter()
        .map(|(k, v)| (k.clone(), resolve_topic(v, base_dir.as_deref())))
        .collect();

    tracing::debug!(
        path = ?config_path,
        topics = config.topics.len(),
        "configuration loaded"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdeck"))
}

/// Create a source for a configured topic.
pub fn create_source(topic: &TopicConfig) -> Result<Box<dyn QuestionSource>> {
    match topic {
        TopicConfig::File { path, .. } => Ok(Box::new(FileSource::new(path))),
        TopicConfig::Http { url, .. } => Ok(Box::new(HttpSource::new(url)?)),
    }
}

/// Create a source from a bare path or `http(s)://` URL.
pub fn source_for_location(location: &str) -> Result<Box<dyn QuestionSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
