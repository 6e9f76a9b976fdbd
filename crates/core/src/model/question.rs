use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::model::ids::QuestionId;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier chosen from the first menu.
///
/// `Unrecognized` is the fallback tier for labels that do not match any menu
/// entry; it only produces simple additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    FirstGrade,
    ThirdGrade,
    FifthGrade,
    Algebra,
    Unrecognized,
}

impl Difficulty {
    /// Tiers offered by the difficulty menu, in display order.
    pub const LISTED: [Difficulty; 4] = [
        Difficulty::FirstGrade,
        Difficulty::ThirdGrade,
        Difficulty::FifthGrade,
        Difficulty::Algebra,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::FirstGrade => "1st Grade",
            Difficulty::ThirdGrade => "3rd Grade",
            Difficulty::FifthGrade => "5th Grade",
            Difficulty::Algebra => "Algebra",
            Difficulty::Unrecognized => "Unrecognized",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::FirstGrade => "Basic single-digit addition and subtraction",
            Difficulty::ThirdGrade => "Larger numbers and simple multiplication",
            Difficulty::FifthGrade => "Two-digit operations",
            Difficulty::Algebra => "Variables and expressions",
            Difficulty::Unrecognized => "Simple addition",
        }
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    /// Parses a menu label. `Unrecognized` is never produced by parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::LISTED
            .into_iter()
            .find(|tier| tier.label() == s)
            .ok_or_else(|| CoreError::UnknownDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── OPERATION TYPE ────────────────────────────────────────────────────────────
//

/// Prefix shared by the tags of all algebra operation types.
pub const ALGEBRA_MARKER: &str = "algebra_";

/// Category of a question, used for per-category timing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpType {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    AlgebraAddition,
    AlgebraSubtraction,
    AlgebraMultiplication,
    AlgebraDivision,
}

impl OpType {
    pub const ALL: [OpType; 8] = [
        OpType::Addition,
        OpType::Subtraction,
        OpType::Multiplication,
        OpType::Division,
        OpType::AlgebraAddition,
        OpType::AlgebraSubtraction,
        OpType::AlgebraMultiplication,
        OpType::AlgebraDivision,
    ];

    /// Stable tag, e.g. `"multiplication"` or `"algebra_division"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            OpType::Addition => "addition",
            OpType::Subtraction => "subtraction",
            OpType::Multiplication => "multiplication",
            OpType::Division => "division",
            OpType::AlgebraAddition => "algebra_addition",
            OpType::AlgebraSubtraction => "algebra_subtraction",
            OpType::AlgebraMultiplication => "algebra_multiplication",
            OpType::AlgebraDivision => "algebra_division",
        }
    }

    #[must_use]
    pub fn is_algebra(self) -> bool {
        self.tag().starts_with(ALGEBRA_MARKER)
    }

    /// The tag with the algebra marker stripped.
    #[must_use]
    pub fn base_name(self) -> &'static str {
        let tag = self.tag();
        tag.strip_prefix(ALGEBRA_MARKER).unwrap_or(tag)
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single problem shown to the player. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answer: i64,
    op_type: OpType,
    id: QuestionId,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, answer: i64, op_type: OpType, id: QuestionId) -> Self {
        Self {
            text: text.into(),
            answer,
            op_type,
            id,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The only accepted correct value.
    #[must_use]
    pub fn answer(&self) -> i64 {
        self.answer
    }

    #[must_use]
    pub fn op_type(&self) -> OpType {
        self.op_type
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }
}
