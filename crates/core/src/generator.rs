//! Question generation per difficulty tier.
//!
//! Randomness is always supplied by the caller so that a seeded generator
//! reproduces the same sequence of questions.

use std::collections::HashSet;

use rand::Rng;

use crate::model::{Difficulty, OpType, Question, QuestionId};

//
// ─── USED QUESTIONS ────────────────────────────────────────────────────────────
//

/// Ids issued during the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedQuestions {
    ids: HashSet<QuestionId>,
}

impl UsedQuestions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns false if the id was already present.
    fn register(&mut self, id: QuestionId) -> bool {
        self.ids.insert(id)
    }
}

//
// ─── OPERATORS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operator {
    const TIER_ONE: [Operator; 2] = [Operator::Plus, Operator::Minus];
    const TIER_TWO: [Operator; 3] = [Operator::Plus, Operator::Minus, Operator::Times];
    const TIER_THREE: [Operator; 4] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Divide,
    ];

    fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
            Operator::Divide => '/',
        }
    }

    fn op_type(self) -> OpType {
        match self {
            Operator::Plus => OpType::Addition,
            Operator::Minus => OpType::Subtraction,
            Operator::Times => OpType::Multiplication,
            Operator::Divide => OpType::Division,
        }
    }

    fn pick<R: Rng>(ops: &[Operator], rng: &mut R) -> Operator {
        ops[rng.random_range(0..ops.len())]
    }
}

/// Problem content before an id is attached.
struct Draft {
    text: String,
    answer: i64,
    op_type: OpType,
}

impl Draft {
    fn arithmetic(a: i64, op: Operator, b: i64, answer: i64) -> Self {
        Self {
            text: format!("{a} {} {b} = ?", op.symbol()),
            answer,
            op_type: op.op_type(),
        }
    }

    fn algebra(equation: String, x: i64, op_type: OpType) -> Self {
        Self {
            text: format!("{equation}. What is x?"),
            answer: x,
            op_type,
        }
    }
}

//
// ─── GENERATION ────────────────────────────────────────────────────────────────
//

/// Produces a question whose id is not in `used`, and registers that id.
///
/// Only the id is guaranteed unique: the same problem text may be issued again
/// under a different id. The retry loop is unbounded but a collision on a
/// 64-bit draw is practically impossible.
pub fn generate<R: Rng>(difficulty: Difficulty, used: &mut UsedQuestions, rng: &mut R) -> Question {
    loop {
        let draft = draft(difficulty, rng);
        let id = QuestionId::new(difficulty.label(), rng.random());
        if used.register(id.clone()) {
            return Question::new(draft.text, draft.answer, draft.op_type, id);
        }
    }
}

fn draft<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Draft {
    match difficulty {
        Difficulty::FirstGrade => first_grade(rng),
        Difficulty::ThirdGrade => third_grade(rng),
        Difficulty::FifthGrade => fifth_grade(rng),
        Difficulty::Algebra => algebra(rng),
        Difficulty::Unrecognized => fallback(rng),
    }
}

fn first_grade<R: Rng>(rng: &mut R) -> Draft {
    let (mut a, mut b) = (rng.random_range(0..=10), rng.random_range(0..=10));
    match Operator::pick(&Operator::TIER_ONE, rng) {
        Operator::Minus => {
            if a < b {
                std::mem::swap(&mut a, &mut b);
            }
            Draft::arithmetic(a, Operator::Minus, b, a - b)
        }
        _ => Draft::arithmetic(a, Operator::Plus, b, a + b),
    }
}

fn third_grade<R: Rng>(rng: &mut R) -> Draft {
    let (a, b) = (rng.random_range(0..=20), rng.random_range(0..=20));
    match Operator::pick(&Operator::TIER_TWO, rng) {
        Operator::Plus => Draft::arithmetic(a, Operator::Plus, b, a + b),
        Operator::Minus => Draft::arithmetic(a, Operator::Minus, b, a - b),
        _ => {
            // single-digit tables only
            let (a, b) = (rng.random_range(0..=9), rng.random_range(0..=9));
            Draft::arithmetic(a, Operator::Times, b, a * b)
        }
    }
}

fn fifth_grade<R: Rng>(rng: &mut R) -> Draft {
    match Operator::pick(&Operator::TIER_THREE, rng) {
        Operator::Plus => {
            let (a, b) = (rng.random_range(10..=99), rng.random_range(10..=99));
            Draft::arithmetic(a, Operator::Plus, b, a + b)
        }
        Operator::Minus => {
            let (a, b) = (rng.random_range(10..=99), rng.random_range(10..=99));
            Draft::arithmetic(a, Operator::Minus, b, a - b)
        }
        Operator::Times => {
            let (a, b) = (rng.random_range(1..=15), rng.random_range(1..=15));
            Draft::arithmetic(a, Operator::Times, b, a * b)
        }
        Operator::Divide => {
            let divisor = rng.random_range(1..=15);
            let quotient = rng.random_range(1..=20);
            Draft::arithmetic(divisor * quotient, Operator::Divide, divisor, quotient)
        }
    }
}

fn algebra<R: Rng>(rng: &mut R) -> Draft {
    let x: i64 = rng.random_range(-20..=20);
    match rng.random_range(0..7) {
        0 => {
            let n = rng.random_range(1..=10);
            Draft::algebra(format!("x + {n} = {}", x + n), x, OpType::AlgebraAddition)
        }
        1 => {
            let n = rng.random_range(1..=5);
            Draft::algebra(format!("x - {n} = {}", x - n), x, OpType::AlgebraSubtraction)
        }
        2 => {
            let n = rng.random_range(1..=10);
            Draft::algebra(format!("{n} + x = {}", x + n), x, OpType::AlgebraAddition)
        }
        3 => {
            let n = x + rng.random_range(0..10);
            Draft::algebra(format!("{n} - x = {}", n - x), x, OpType::AlgebraSubtraction)
        }
        4 => {
            let n = rng.random_range(1..=6);
            Draft::algebra(format!("x * {n} = {}", x * n), x, OpType::AlgebraMultiplication)
        }
        5 => {
            let n: i64 = rng.random_range(1..=5);
            let m = match rng.random_range(-10..=10) {
                0 => 1,
                m => m,
            };
            Draft::algebra(format!("x ÷ {n} = {m}"), n * m, OpType::AlgebraDivision)
        }
        _ => {
            let n = rng.random_range(1..=6);
            Draft::algebra(format!("{n} * x = {}", x * n), x, OpType::AlgebraMultiplication)
        }
    }
}

fn fallback<R: Rng>(rng: &mut R) -> Draft {
    let (a, b) = (rng.random_range(0..=10), rng.random_range(0..=10));
    Draft::arithmetic(a, Operator::Plus, b, a + b)
}
