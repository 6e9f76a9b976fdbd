use std::time::Duration;

use crate::model::{AnswerRecord, Question, TimeBudget};
use crate::style::{ColorOverride, ColorToken};

/// Whether a numeric submission matched the expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn from_match(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    #[must_use]
    pub fn feedback(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct!",
            Verdict::Incorrect => "Incorrect!",
        }
    }

    /// Transient nudge applied to the bar's filled width.
    #[must_use]
    pub fn bar_adjust(self) -> i8 {
        match self {
            Verdict::Correct => 1,
            Verdict::Incorrect => -1,
        }
    }

    #[must_use]
    pub fn color_override(self) -> ColorOverride {
        match self {
            Verdict::Correct => ColorOverride::BrightPositive,
            Verdict::Incorrect => ColorOverride::BrightNegative,
        }
    }

    #[must_use]
    pub fn feedback_color(self) -> ColorToken {
        match self {
            Verdict::Correct => ColorToken::FeedbackPositive,
            Verdict::Incorrect => ColorToken::FeedbackNegative,
        }
    }

    /// Reward or penalize the time budget.
    pub fn settle(self, budget: &mut TimeBudget) {
        match self {
            Verdict::Correct => budget.credit(),
            Verdict::Incorrect => budget.debit(),
        }
    }
}

/// Result of scoring a numeric submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub record: AnswerRecord,
}

/// Parses a submission as a signed integer, ignoring surrounding whitespace.
#[must_use]
pub fn parse_answer(raw_input: &str) -> Option<i64> {
    raw_input.trim().parse().ok()
}

/// Scores `raw_input` against `question`.
///
/// Returns `None` for input that is not an integer; no record exists for it.
#[must_use]
pub fn score(question: &Question, raw_input: &str, elapsed: Duration) -> Option<Outcome> {
    let value = parse_answer(raw_input)?;
    let verdict = Verdict::from_match(value == question.answer());
    Some(Outcome {
        verdict,
        record: AnswerRecord::new(
            question.clone(),
            verdict == Verdict::Correct,
            elapsed,
            raw_input,
        ),
    })
}
