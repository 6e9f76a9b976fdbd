use std::time::Duration;

use crate::model::question::Question;

/// Record of one scored submission.
///
/// Only numeric submissions produce a record; it is never mutated after the
/// scoring engine creates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    question: Question,
    correct: bool,
    elapsed: Duration,
    raw_input: String,
}

impl AnswerRecord {
    pub(crate) fn new(
        question: Question,
        correct: bool,
        elapsed: Duration,
        raw_input: impl Into<String>,
    ) -> Self {
        Self {
            question,
            correct,
            elapsed,
            raw_input: raw_input.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Time from the question being shown to the submission.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The literal text the player typed.
    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }
}
