//! The quiz session state machine.
//!
//! A session moves `Setup → InProgress → Summary`. While in progress each
//! question is first unanswered, then answered; only an answered question can
//! be advanced past. Missed questions are scheduled again a few slots later
//! in the same session.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuizError;
use crate::model::{Question, WrongAnswer, FILL_BLANK, MULTIPLE_CHOICE};
use crate::normalize::answers_match;
use crate::pool::QuestionPool;
use crate::shuffle::shuffle;
use crate::summary::SessionSummary;

/// How many slots ahead of the current position a missed question returns.
pub const RETRY_OFFSET: usize = 4;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    InProgress,
    Summary,
}

/// Everything a running session tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Questions to ask, in order. Grows when misses are rescheduled.
    pub queue: Vec<Question>,
    /// Position of the current question in `queue`.
    pub index: usize,
    /// Correct submissions so far.
    pub score: usize,
    /// Misses in the order they happened.
    pub wrong_log: Vec<WrongAnswer>,
    /// Whether the current question has been answered.
    pub answered: bool,
}

/// Result of a submission that was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: bool,
    /// What was submitted, as given.
    pub user_answer: String,
    /// The authoritative answer, as written in the question set.
    pub correct_answer: String,
    /// Queue position the question was rescheduled to, on a miss.
    pub retry_at: Option<usize>,
}

/// Running counters for a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// One-based number of the current question, capped at `total`.
    pub position: usize,
    /// Current queue length.
    pub total: usize,
    pub score: usize,
}

/// How an option should be rendered after the question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    Unmarked,
    Correct,
    Incorrect,
}

/// An option in display order together with its marking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionMark {
    pub text: String,
    pub state: OptionState,
}

#[derive(Debug, Clone)]
struct SessionMeta {
    id: Uuid,
    requested: usize,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

/// Drives one quiz session at a time.
///
/// The generator is used to sample questions on `start` and to pick the
/// display order of each multiple-choice question's options.
pub struct SessionEngine<R = StdRng> {
    state: SessionState,
    phase: Phase,
    rng: R,
    meta: Option<SessionMeta>,
    display_options: Vec<String>,
    selected: Option<String>,
}

impl SessionEngine<StdRng> {
    /// An engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// An engine whose shuffles are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SessionEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SessionEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: SessionState::default(),
            phase: Phase::Setup,
            rng,
            meta: None,
            display_options: Vec::new(),
            selected: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Identifier of the current session, if one has been started.
    pub fn session_id(&self) -> Option<Uuid> {
        self.meta.as_ref().map(|m| m.id)
    }

    /// Start a fresh session of `desired_count` questions sampled from `pool`.
    ///
    /// Any previous session is discarded. On error nothing changes.
    pub fn start(&mut self, pool: &QuestionPool, desired_count: usize) -> Result<(), QuizError> {
        if pool.is_empty() {
            return Err(QuizError::EmptyPool);
        }
        if desired_count == 0 || desired_count > pool.len() {
            return Err(QuizError::InvalidCount {
                requested: desired_count,
                available: pool.len(),
            });
        }

        let mut queue = pool.to_vec();
        shuffle(&mut queue, &mut self.rng);
        queue.truncate(desired_count);

        self.state = SessionState {
            queue,
            ..SessionState::default()
        };
        self.phase = Phase::InProgress;
        self.meta = Some(SessionMeta {
            id: Uuid::new_v4(),
            requested: desired_count,
            started_at: Utc::now(),
            finished_at: None,
        });
        self.enter_question();

        tracing::debug!(
            requested = desired_count,
            available = pool.len(),
            "session started"
        );
        Ok(())
    }

    /// The question at the current position.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.state
            .queue
            .get(self.state.index)
            .ok_or(QuizError::OutOfRange {
                index: self.state.index,
                len: self.state.queue.len(),
            })
    }

    /// The current question's options in display order.
    ///
    /// The order is shuffled once when the question comes up and stays
    /// stable until the session moves on. Empty for fill-in-the-blank.
    pub fn current_options(&self) -> &[String] {
        &self.display_options
    }

    /// Options in display order with their post-answer marking: the chosen
    /// option is marked correct or incorrect, and on a miss the right option
    /// is marked correct too. Everything is unmarked before answering.
    pub fn option_marks(&self) -> Vec<OptionMark> {
        let answer = self.current_question().ok().map(|q| q.answer.as_str());
        self.display_options
            .iter()
            .map(|text| {
                let state = match (self.state.answered, answer) {
                    (true, Some(answer)) if text == answer => OptionState::Correct,
                    (true, Some(_)) if self.selected.as_deref() == Some(text.as_str()) => {
                        OptionState::Incorrect
                    }
                    _ => OptionState::Unmarked,
                };
                OptionMark {
                    text: text.clone(),
                    state,
                }
            })
            .collect()
    }

    pub fn progress(&self) -> Progress {
        let total = self.state.queue.len();
        Progress {
            position: (self.state.index + 1).min(total),
            total,
            score: self.state.score,
        }
    }

    /// Answer the current multiple-choice question.
    ///
    /// Matching is exact and case-sensitive. Returns `Ok(None)` without
    /// doing anything if the question was already answered.
    pub fn submit_multiple_choice(
        &mut self,
        selected: &str,
    ) -> Result<Option<Feedback>, QuizError> {
        let question = self.current_question()?;
        if self.state.answered {
            return Ok(None);
        }
        if !question.is_multiple_choice() {
            return Err(QuizError::WrongQuestionKind {
                expected: FILL_BLANK,
            });
        }

        let correct = selected == question.answer;
        self.selected = Some(selected.to_string());
        Ok(Some(self.record(correct, selected.to_string())))
    }

    /// Answer the current fill-in-the-blank question.
    ///
    /// Both sides are normalized before comparing; the review log keeps the
    /// text exactly as typed. Returns `Ok(None)` if already answered.
    pub fn submit_fill_blank(&mut self, raw_text: &str) -> Result<Option<Feedback>, QuizError> {
        let question = self.current_question()?;
        if self.state.answered {
            return Ok(None);
        }
        if question.is_multiple_choice() {
            return Err(QuizError::WrongQuestionKind {
                expected: MULTIPLE_CHOICE,
            });
        }

        let correct = answers_match(raw_text, &question.answer);
        Ok(Some(self.record(correct, raw_text.to_string())))
    }

    /// Score an accepted submission, rescheduling the question on a miss.
    fn record(&mut self, correct: bool, user_answer: String) -> Feedback {
        let index = self.state.index;
        let question = self.state.queue[index].clone();
        let mut retry_at = None;

        if correct {
            self.state.score += 1;
        } else {
            self.state.wrong_log.push(WrongAnswer {
                question: question.text.clone(),
                user_answer: user_answer.clone(),
                correct_answer: question.answer.clone(),
            });
            let at = (index + RETRY_OFFSET).min(self.state.queue.len());
            tracing::debug!(index, retry_at = at, "rescheduling missed question");
            self.state.queue.insert(at, question.clone());
            retry_at = Some(at);
        }
        self.state.answered = true;

        Feedback {
            correct,
            user_answer,
            correct_answer: question.answer,
            retry_at,
        }
    }

    /// Move past the answered question; finishing the queue ends the session.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        if !self.state.answered {
            return Err(QuizError::NotAnswered);
        }
        self.state.index += 1;
        self.state.answered = false;

        if self.state.index >= self.state.queue.len() {
            self.phase = Phase::Summary;
            self.display_options.clear();
            self.selected = None;
            if let Some(meta) = self.meta.as_mut() {
                meta.finished_at = Some(Utc::now());
            }
            tracing::info!(
                score = self.state.score,
                total = self.state.queue.len(),
                misses = self.state.wrong_log.len(),
                "session complete"
            );
        } else {
            self.enter_question();
            tracing::debug!(index = self.state.index, "advanced");
        }
        Ok(self.phase)
    }

    /// Final results. Only available once the session has finished.
    pub fn summary(&self) -> Result<SessionSummary, QuizError> {
        if self.phase != Phase::Summary {
            return Err(QuizError::SessionNotFinished);
        }
        let meta = self.meta.as_ref().ok_or(QuizError::SessionNotFinished)?;
        Ok(SessionSummary::new(
            meta.id,
            meta.requested,
            self.state.score,
            self.state.queue.len(),
            self.state.wrong_log.clone(),
            meta.started_at,
            meta.finished_at.unwrap_or_else(Utc::now),
        ))
    }

    /// Drop everything and return to setup. Always succeeds.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
        self.phase = Phase::Setup;
        self.meta = None;
        self.display_options.clear();
        self.selected = None;
    }

    fn enter_question(&mut self) {
        self.selected = None;
        self.display_options = self
            .state
            .queue
            .get(self.state.index)
            .map(|q| q.options().to_vec())
            .unwrap_or_default();
        shuffle(&mut self.display_options, &mut self.rng);
    }
}
