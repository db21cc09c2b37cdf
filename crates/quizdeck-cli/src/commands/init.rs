//! The `quizdeck init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizdeck.toml
    if std::path::Path::new("quizdeck.toml").exists() {
        println!("quizdeck.toml already exists, skipping.");
    } else {
        std::fs::write("quizdeck.toml", SAMPLE_CONFIG)?;
        println!("Created quizdeck.toml");
    }

    // Create example question set
    std::fs::create_dir_all("question-sets")?;
    let example_path = std::path::Path::new("question-sets/example.json");
    if example_path.exists() {
        println!("question-sets/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTION_SET)?;
        println!("Created question-sets/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own question sets under question-sets/ and list them in quizdeck.toml");
    println!("  2. Run: quizdeck validate --questions question-sets/example.json");
    println!("  3. Run: quizdeck play --topic example");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdeck configuration

default_topic = "example"
# default_count = 10

[topics.example]
type = "file"
path = "question-sets/example.json"
title = "Materials science warm-up"

# [topics.week5]
# type = "http"
# url = "https://example.org/quizzes/week5.json"
"#;

const EXAMPLE_QUESTION_SET: &str = r#"[
  {
    "question": "Which crystal structure has 4 atoms per unit cell?",
    "type": "multiple_choice",
    "options": ["Simple cubic", "BCC", "FCC", "HCP"],
    "answer": "FCC"
  },
  {
    "question": "What type of bond forms when atoms share electron pairs?",
    "type": "fill_blank",
    "answer": "covalent bond"
  },
  {
    "question": "Which phase of steel is stable at room temperature in plain carbon steel?",
    "options": ["Austenite", "Ferrite", "Martensite"],
    "answer": "Ferrite"
  },
  {
    "question": "The stress at which plastic deformation begins is called the ____ strength.",
    "answer": "yield"
  }
]
"#;
