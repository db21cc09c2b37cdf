//! The `quizdeck validate` command.

use anyhow::Result;

use quizdeck_core::traits::load_pool;
use quizdeck_core::{validate_pool, QuestionKind};
use quizdeck_sources::source_for_location;

pub async fn execute(questions: String) -> Result<()> {
    let source = source_for_location(&questions)?;
    let pool = load_pool(source.as_ref()).await?;

    let multiple_choice = pool
        .questions()
        .iter()
        .filter(|q| matches!(q.kind, QuestionKind::MultipleChoice { .. }))
        .count();
    println!(
        "Question set: {} ({} questions: {} multiple choice, {} fill in the blank)",
        source.location(),
        pool.len(),
        multiple_choice,
        pool.len() - multiple_choice
    );

    let warnings = validate_pool(&pool);
    for w in &warnings {
        println!("  [#{}] WARNING: {}", w.index + 1, w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
