//! Line-oriented terminal front end for a quiz session.
//!
//! Renders engine state to a writer and turns input lines into engine calls.
//! Reading and writing go through `BufRead`/`Write` so whole sessions can be
//! scripted in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use comfy_table::{Cell, Table};
use rand::Rng;

use quizdeck_core::{Feedback, OptionState, Phase, QuestionPool, SessionEngine, SessionSummary};

/// How the final summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
}

impl SummaryFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            other => anyhow::bail!("unknown summary format '{other}' (expected text or json)"),
        }
    }
}

/// How a session ended.
#[derive(Debug)]
pub enum Outcome {
    Completed(SessionSummary),
    Abandoned,
}

/// What the learner typed at a prompt.
enum Reply {
    Line(String),
    Quit,
}

pub struct Terminal<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Run one full session: count prompt, questions, summary.
    pub fn run<R: Rng>(
        &mut self,
        engine: &mut SessionEngine<R>,
        pool: &QuestionPool,
        count: Option<usize>,
        format: SummaryFormat,
    ) -> Result<Outcome> {
        let started = match count {
            Some(n) => {
                engine.start(pool, n)?;
                true
            }
            None => self.prompt_for_count(engine, pool)?,
        };
        if !started {
            return self.abandon(engine);
        }

        while engine.phase() == Phase::InProgress {
            if !self.ask_current(engine)? {
                return self.abandon(engine);
            }
        }

        let summary = engine.summary()?;
        self.render_summary(&summary, format)?;
        Ok(Outcome::Completed(summary))
    }

    /// Ask how many questions to play until a valid count is given.
    /// Returns `false` if the learner quit instead.
    fn prompt_for_count<R: Rng>(
        &mut self,
        engine: &mut SessionEngine<R>,
        pool: &QuestionPool,
    ) -> Result<bool> {
        let available = pool.len();
        loop {
            write!(
                self.output,
                "How many questions? (1-{available}, Enter for all): "
            )?;
            self.output.flush()?;

            let line = match self.read_reply()? {
                Reply::Line(line) => line,
                Reply::Quit => return Ok(false),
            };
            let trimmed = line.trim();
            let requested = if trimmed.is_empty() {
                available
            } else {
                match trimmed.parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => {
                        writeln!(self.output, "Please enter a whole number.")?;
                        continue;
                    }
                }
            };

            match engine.start(pool, requested) {
                Ok(()) => return Ok(true),
                Err(e) if e.is_recoverable() => writeln!(self.output, "{e}.")?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Present the current question, take an answer, show feedback, and
    /// advance. Returns `false` if the learner quit.
    fn ask_current<R: Rng>(&mut self, engine: &mut SessionEngine<R>) -> Result<bool> {
        let question = engine.current_question()?.clone();
        let progress = engine.progress();

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Question {} of {}  |  Score: {}",
            progress.position, progress.total, progress.score
        )?;
        writeln!(self.output, "{}", question.text)?;

        let feedback = if question.is_multiple_choice() {
            let options = engine.current_options().to_vec();
            let choice = if options.is_empty() {
                // Nothing to pick from; take the option text directly.
                match self.prompt("Your answer: ")? {
                    Reply::Line(line) => line,
                    Reply::Quit => return Ok(false),
                }
            } else {
                for (i, option) in options.iter().enumerate() {
                    writeln!(self.output, "  {}) {option}", i + 1)?;
                }
                match self.prompt_for_option(options.len())? {
                    Some(i) => options[i].clone(),
                    None => return Ok(false),
                }
            };
            engine.submit_multiple_choice(&choice)?
        } else {
            match self.prompt("Your answer: ")? {
                Reply::Line(line) => engine.submit_fill_blank(&line)?,
                Reply::Quit => return Ok(false),
            }
        };

        if let Some(feedback) = feedback {
            self.render_feedback(engine, &feedback)?;
        }

        match self.prompt("Press Enter for the next question (q to quit): ")? {
            Reply::Line(_) => {}
            Reply::Quit => return Ok(false),
        }
        engine.advance()?;
        Ok(true)
    }

    /// Returns the zero-based option index, or `None` if the learner quit.
    fn prompt_for_option(&mut self, count: usize) -> Result<Option<usize>> {
        loop {
            let line = match self.prompt(&format!("Your choice (1-{count}): "))? {
                Reply::Line(line) => line,
                Reply::Quit => return Ok(None),
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Choose a number between 1 and {count}.")?,
            }
        }
    }

    fn render_feedback<R: Rng>(
        &mut self,
        engine: &SessionEngine<R>,
        feedback: &Feedback,
    ) -> Result<()> {
        if feedback.correct {
            writeln!(self.output, "Correct ✅")?;
        } else {
            writeln!(self.output, "Incorrect ❌")?;
            writeln!(self.output, "Correct answer: {}", feedback.correct_answer)?;
        }

        let marks = engine.option_marks();
        if !feedback.correct && !marks.is_empty() {
            for mark in &marks {
                let sign = match mark.state {
                    OptionState::Correct => "✔",
                    OptionState::Incorrect => "✘",
                    OptionState::Unmarked => " ",
                };
                writeln!(self.output, "  {sign} {}", mark.text)?;
            }
        }
        if feedback.retry_at.is_some() {
            writeln!(self.output, "This question will come back later in the session.")?;
        }

        let progress = engine.progress();
        writeln!(self.output, "Score: {}", progress.score)?;
        Ok(())
    }

    fn render_summary(&mut self, summary: &SessionSummary, format: SummaryFormat) -> Result<()> {
        match format {
            SummaryFormat::Json => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", serde_json::to_string_pretty(summary)?)?;
            }
            SummaryFormat::Text => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", summary.headline())?;
                if summary.is_perfect() {
                    writeln!(
                        self.output,
                        "Excellent! You answered every question correctly."
                    )?;
                } else {
                    let mut table = Table::new();
                    table.set_header(vec!["#", "Question", "Your answer", "Correct answer"]);
                    for (i, wrong) in summary.wrong_log.iter().enumerate() {
                        table.add_row(vec![
                            Cell::new(i + 1),
                            Cell::new(&wrong.question),
                            Cell::new(&wrong.user_answer),
                            Cell::new(&wrong.correct_answer),
                        ]);
                    }
                    writeln!(self.output, "Review your mistakes:")?;
                    writeln!(self.output, "{table}")?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn abandon<R: Rng>(&mut self, engine: &mut SessionEngine<R>) -> Result<Outcome> {
        engine.reset();
        writeln!(self.output)?;
        writeln!(self.output, "Session ended. Run again to start fresh.")?;
        self.output.flush()?;
        Ok(Outcome::Abandoned)
    }

    fn prompt(&mut self, text: &str) -> Result<Reply> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_reply()
    }

    /// Read one line. End of input and a lone `q` both mean quit.
    fn read_reply(&mut self) -> Result<Reply> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Quit);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if line.trim() == "q" {
            return Ok(Reply::Quit);
        }
        Ok(Reply::Line(line))
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> O {
        self.output
    }
}
