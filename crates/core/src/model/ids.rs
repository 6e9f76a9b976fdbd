use std::fmt;

/// Uniqueness token for an issued question.
///
/// Composite of the difficulty label the question was drawn for and a random
/// 64-bit draw. Two questions with identical text still carry distinct ids.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    tier: &'static str,
    draw: u64,
}

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(tier: &'static str, draw: u64) -> Self {
        Self { tier, draw }
    }

    /// Returns the difficulty label part of the id
    #[must_use]
    pub fn tier(&self) -> &'static str {
        self.tier
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({}|{})", self.tier, self.draw)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.tier, self.draw)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
