use quiz_core::model::{Bucket, Miss, OpAverage, SessionSummary};

use crate::vm::time_fmt::format_seconds;

/// Shown above the results when the round ended on time-out.
pub const BOOM_BANNER: &str = "💣💥 BOOM! TIME’S UP! 💥💣";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsSectionVm {
    pub header: &'static str,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissVm {
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
}

impl From<&Miss> for MissVm {
    fn from(miss: &Miss) -> Self {
        Self {
            question: format!("Question #{}: {}", miss.position, miss.question_text),
            your_answer: format!("Your Answer: {}", miss.user_input),
            correct_answer: format!("Correct Answer: {}", miss.correct_answer),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub timed_out: bool,
    pub final_score: String,
    pub overall_average: Option<String>,
    pub sections: Vec<ResultsSectionVm>,
    pub misses: Vec<MissVm>,
}

impl From<&SessionSummary> for ResultsVm {
    fn from(summary: &SessionSummary) -> Self {
        let sections = summary
            .buckets()
            .iter()
            .map(|bucket| ResultsSectionVm {
                header: bucket.bucket.label(),
                lines: bucket
                    .ops
                    .iter()
                    .map(|op| average_line(bucket.bucket, op))
                    .collect(),
            })
            .collect();

        Self {
            timed_out: summary.timed_out(),
            final_score: format!("Final Score: {} / {}", summary.correct(), summary.total()),
            overall_average: summary
                .overall_average()
                .map(|avg| format!("Avg time (overall): {}", format_seconds(avg))),
            sections,
            misses: summary.misses().iter().map(MissVm::from).collect(),
        }
    }
}

fn average_line(bucket: Bucket, op: &OpAverage) -> String {
    let name = op.op.base_name();
    let label = match bucket {
        Bucket::Algebra => format!("algebra ({name})"),
        Bucket::Arithmetic => name.to_string(),
    };
    format!("  Avg time ({label}): {}", format_seconds(op.average))
}

impl ResultsVm {
    /// The results screen as plain text, before padding.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if self.timed_out {
            out.push_str("\n\n");
            out.push_str(BOOM_BANNER);
            out.push_str("\n\n");
        }

        out.push_str(&self.final_score);
        out.push('\n');
        if let Some(avg) = &self.overall_average {
            out.push_str(avg);
            out.push('\n');
        }

        for section in &self.sections {
            out.push_str(&format!("\n{}:\n", section.header));
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }

        if !self.misses.is_empty() {
            out.push_str("\nIncorrect Answers:\n");
            for miss in &self.misses {
                out.push_str(&format!(
                    "  {}\n    {}\n    {}\n",
                    miss.question, miss.your_answer, miss.correct_answer
                ));
            }
        }

        out.push_str("\n[←] to play again");
        out
    }
}
