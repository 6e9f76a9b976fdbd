use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::CoreError;

/// Lower bound applied after a wrong answer: a penalty never ends the round.
pub const MIN_REMAINING: Duration = Duration::from_secs(1);

/// Size of one time adjustment (one tick, one reward, one penalty).
pub const STEP: Duration = Duration::from_secs(1);

//
// ─── QUIZ LENGTH ───────────────────────────────────────────────────────────────
//

/// Duration chosen from the second menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizLength {
    HalfMinute,
    OneMinute,
    NinetySeconds,
    TwoMinutes,
}

impl QuizLength {
    /// Lengths offered by the duration menu, in display order.
    pub const LISTED: [QuizLength; 4] = [
        QuizLength::HalfMinute,
        QuizLength::OneMinute,
        QuizLength::NinetySeconds,
        QuizLength::TwoMinutes,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuizLength::HalfMinute => "30s",
            QuizLength::OneMinute => "60s",
            QuizLength::NinetySeconds => "90s",
            QuizLength::TwoMinutes => "2m",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            QuizLength::HalfMinute => "Brain Storm",
            QuizLength::OneMinute => "Normal Person",
            QuizLength::NinetySeconds => "Ok, Boomer",
            QuizLength::TwoMinutes => "Marathon",
        }
    }

    #[must_use]
    pub fn limit(self) -> Duration {
        match self {
            QuizLength::HalfMinute => Duration::from_secs(30),
            QuizLength::OneMinute => Duration::from_secs(60),
            QuizLength::NinetySeconds => Duration::from_secs(90),
            QuizLength::TwoMinutes => Duration::from_secs(120),
        }
    }
}

impl FromStr for QuizLength {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuizLength::LISTED
            .into_iter()
            .find(|length| length.label() == s)
            .ok_or_else(|| CoreError::UnknownQuizLength(s.to_string()))
    }
}

impl fmt::Display for QuizLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── TIME BUDGET ───────────────────────────────────────────────────────────────
//

/// Remaining play time for one round.
///
/// Rewards never push `remaining` above `limit` and penalties never drop it
/// below [`MIN_REMAINING`]; only the main tick can take it to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBudget {
    limit: Duration,
    remaining: Duration,
}

impl TimeBudget {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    #[must_use]
    pub fn for_length(length: QuizLength) -> Self {
        Self::new(length.limit())
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whole seconds left, as shown in the header.
    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.remaining.as_secs()
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// One main-tick decrement.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(STEP);
    }

    /// Reward for a correct answer, capped at the limit.
    pub fn credit(&mut self) {
        self.remaining = (self.remaining + STEP).min(self.limit);
    }

    /// Penalty for a wrong answer, floored at [`MIN_REMAINING`].
    pub fn debit(&mut self) {
        self.remaining = self.remaining.saturating_sub(STEP).max(MIN_REMAINING);
    }
}
