//! quizdeck CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(
    name = "quizdeck",
    version,
    about = "Terminal quiz runner with in-session retries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz session
    Play {
        /// Configured topic to play (defaults to `default_topic`)
        #[arg(long, conflicts_with = "questions")]
        topic: Option<String>,

        /// Question set path or http(s) URL, bypassing the config
        #[arg(long)]
        questions: Option<String>,

        /// Number of questions (prompted for when omitted)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible question and option order
        #[arg(long)]
        seed: Option<u64>,

        /// Summary format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question set for problems
    Validate {
        /// Question set path or http(s) URL
        #[arg(long)]
        questions: String,
    },

    /// List configured topics
    Topics {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question set
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdeck=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            topic,
            questions,
            count,
            seed,
            format,
            config,
        } => commands::play::execute(topic, questions, count, seed, format, config).await,
        Commands::Validate { questions } => commands::validate::execute(questions).await,
        Commands::Topics { config } => commands::topics::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
