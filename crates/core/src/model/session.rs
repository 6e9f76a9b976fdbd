use std::time::Duration;

use crate::model::{AnswerRecord, OpType};

//
// ─── BUCKETS ───────────────────────────────────────────────────────────────────
//

/// Grouping of operation types in the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Arithmetic,
    Algebra,
}

impl Bucket {
    /// Emission order of buckets.
    pub const ORDER: [Bucket; 2] = [Bucket::Arithmetic, Bucket::Algebra];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Arithmetic => "Arithmetic",
            Bucket::Algebra => "Algebra",
        }
    }

    #[must_use]
    pub fn of(op: OpType) -> Self {
        if op.is_algebra() {
            Bucket::Algebra
        } else {
            Bucket::Arithmetic
        }
    }
}

/// Average answer time for one operation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpAverage {
    pub op: OpType,
    pub count: usize,
    pub average: Duration,
}

/// Non-empty bucket with its operation averages in first-answered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub bucket: Bucket,
    pub ops: Vec<OpAverage>,
}

/// One incorrect answer, kept for the review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    /// 1-based position in the answer history.
    pub position: usize,
    pub question_text: String,
    pub user_input: String,
    pub correct_answer: i64,
}

//
// ─── SESSION SUMMARY ───────────────────────────────────────────────────────────
//

/// Aggregate summary for a finished (or abandoned) round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    total: usize,
    correct: usize,
    overall_average: Option<Duration>,
    buckets: Vec<BucketSummary>,
    misses: Vec<Miss>,
    timed_out: bool,
}

impl SessionSummary {
    /// Build a summary from the ordered answer history.
    ///
    /// `timed_out` marks a round that ended because the time budget ran out.
    #[must_use]
    pub fn from_answers(answers: &[AnswerRecord], timed_out: bool) -> Self {
        let mut correct = 0_usize;
        let mut total_elapsed = Duration::ZERO;
        // (op, count, summed elapsed) in first-seen order
        let mut per_op: Vec<(OpType, usize, Duration)> = Vec::new();
        let mut misses = Vec::new();

        for (index, record) in answers.iter().enumerate() {
            let question = record.question();
            if record.is_correct() {
                correct += 1;
            } else {
                misses.push(Miss {
                    position: index + 1,
                    question_text: question.text().to_string(),
                    user_input: record.raw_input().to_string(),
                    correct_answer: question.answer(),
                });
            }
            total_elapsed = total_elapsed.saturating_add(record.elapsed());

            let op = question.op_type();
            match per_op.iter_mut().find(|(seen, _, _)| *seen == op) {
                Some((_, count, sum)) => {
                    *count += 1;
                    *sum = sum.saturating_add(record.elapsed());
                }
                None => per_op.push((op, 1, record.elapsed())),
            }
        }

        let buckets = Bucket::ORDER
            .into_iter()
            .filter_map(|bucket| {
                let ops: Vec<OpAverage> = per_op
                    .iter()
                    .filter(|(op, _, _)| Bucket::of(*op) == bucket)
                    .map(|&(op, count, sum)| OpAverage {
                        op,
                        count,
                        average: average(sum, count),
                    })
                    .collect();
                (!ops.is_empty()).then_some(BucketSummary { bucket, ops })
            })
            .collect();

        Self {
            total: answers.len(),
            correct,
            overall_average: (!answers.is_empty()).then(|| average(total_elapsed, answers.len())),
            buckets,
            misses,
            timed_out,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// `None` when nothing was answered.
    #[must_use]
    pub fn overall_average(&self) -> Option<Duration> {
        self.overall_average
    }

    #[must_use]
    pub fn buckets(&self) -> &[BucketSummary] {
        &self.buckets
    }

    #[must_use]
    pub fn misses(&self) -> &[Miss] {
        &self.misses
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }
}

fn average(sum: Duration, count: usize) -> Duration {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    sum.checked_div(count).unwrap_or_default()
}
