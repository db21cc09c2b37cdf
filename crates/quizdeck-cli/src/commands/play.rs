//! The `quizdeck play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::Rng;

use quizdeck_core::traits::{load_pool, QuestionSource};
use quizdeck_core::SessionEngine;
use quizdeck_sources::{create_source, load_config_from, source_for_location};

use crate::terminal::{Outcome, SummaryFormat, Terminal};

pub async fn execute(
    topic: Option<String>,
    questions: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let format = SummaryFormat::parse(&format)?;

    // Resolve the question source, picking up the configured default count
    // when playing a named topic.
    let (source, default_count) = match questions {
        Some(location) => (source_for_location(&location)?, None),
        None => {
            let config = load_config_from(config_path.as_deref())?;
            let (name, topic) = config.topic(topic.as_deref())?;
            tracing::info!("playing topic '{name}' from {}", topic.location());
            (create_source(topic)?, config.default_count)
        }
    };

    let mut engine = match seed {
        Some(seed) => SessionEngine::with_seed(seed),
        None => SessionEngine::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    let outcome = run_session(
        source.as_ref(),
        &mut terminal,
        &mut engine,
        count,
        default_count,
        format,
    )
    .await?;

    match outcome {
        Outcome::Completed(summary) => {
            tracing::info!(
                session = %summary.session_id,
                score = summary.score,
                total = summary.total,
                retries = summary.retries(),
                "session finished in {}s",
                summary.duration_secs()
            );
        }
        Outcome::Abandoned => tracing::info!("session abandoned"),
    }

    Ok(())
}

/// Load the pool from `source` and play one session on `terminal`.
pub(crate) async fn run_session<I: BufRead, O: Write, R: Rng>(
    source: &dyn QuestionSource,
    terminal: &mut Terminal<I, O>,
    engine: &mut SessionEngine<R>,
    count: Option<usize>,
    default_count: Option<usize>,
    format: SummaryFormat,
) -> Result<Outcome> {
    let pool = load_pool(source).await?;
    tracing::info!("loaded {} questions from {}", pool.len(), source.location());

    let count = session_count(count, default_count, pool.len());
    terminal.run(engine, &pool, count, format)
}

/// An explicit count is used as given and fails if out of range. A configured
/// default is capped at the pool size; zero means "ask".
fn session_count(
    explicit: Option<usize>,
    configured: Option<usize>,
    available: usize,
) -> Option<usize> {
    explicit.or_else(|| {
        configured
            .filter(|&n| n > 0)
            .map(|n| n.min(available))
    })
}
