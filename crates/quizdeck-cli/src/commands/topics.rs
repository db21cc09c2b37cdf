//! The `quizdeck topics` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = quizdeck_sources::config::load_config_from(config_path.as_deref())?;

    if config.topics.is_empty() {
        println!("No topics configured. Run `quizdeck init` to create a config file.");
        return Ok(());
    }

    println!("Topics:");
    for (name, topic) in &config.topics {
        let marker = if config.default_topic.as_deref() == Some(name.as_str()) {
            " (default)"
        } else {
            ""
        };
        match topic.title() {
            Some(title) => println!("  {name}{marker}: {title} [{}]", topic.location()),
            None => println!("  {name}{marker} [{}]", topic.location()),
        }
    }

    if let Some(count) = config.default_count {
        println!("\nDefault question count: {count}");
    }

    Ok(())
}
