//! End-of-session results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::WrongAnswer;

/// Results of a finished session.
///
/// `total` counts every pass through a question, so a session with retries
/// can have more passes than the number of questions originally requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Unique session identifier.
    pub session_id: Uuid,
    /// Number of questions asked for at the start.
    pub requested: usize,
    /// Correct passes.
    pub score: usize,
    /// Total passes, including retries.
    pub total: usize,
    /// `score / total` as a rounded percentage (0 when `total` is 0).
    pub percent: u32,
    /// Misses in the order they happened.
    pub wrong_log: Vec<WrongAnswer>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SessionSummary {
    pub fn new(
        session_id: Uuid,
        requested: usize,
        score: usize,
        total: usize,
        wrong_log: Vec<WrongAnswer>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            requested,
            score,
            total,
            percent: percent(score, total),
            wrong_log,
            started_at,
            finished_at,
        }
    }

    /// `true` when nothing was missed.
    pub fn is_perfect(&self) -> bool {
        self.wrong_log.is_empty()
    }

    /// Number of retry passes added on top of the requested questions.
    pub fn retries(&self) -> usize {
        self.total.saturating_sub(self.requested)
    }

    /// One-line score, e.g. `Final Score: 4 / 5 (80%)`.
    pub fn headline(&self) -> String {
        format!(
            "Final Score: {} / {} ({}%)",
            self.score, self.total, self.percent
        )
    }

    /// Wall-clock time spent in the session, in seconds.
    pub fn duration_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Rounded percentage, half away from zero.
pub fn percent(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}
