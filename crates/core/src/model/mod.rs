mod answer;
mod budget;
mod ids;
mod question;
mod session;

pub use ids::QuestionId;

pub use answer::AnswerRecord;
pub use budget::{MIN_REMAINING, QuizLength, STEP, TimeBudget};
pub use question::{ALGEBRA_MARKER, Difficulty, OpType, Question};
pub use session::{Bucket, BucketSummary, Miss, OpAverage, SessionSummary};
