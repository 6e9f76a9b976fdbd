use quiz_core::style::Painter;
use rand::Rng;

use crate::QuizMachine;

/// Pre-rendered pieces of the running screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunningVm {
    pub time_left: String,
    pub bar: String,
    pub score: String,
    pub question: String,
    pub input: String,
    /// Bold feedback in its polarity color, while the flash is active.
    pub feedback: Option<String>,
}

impl RunningVm {
    #[must_use]
    pub fn new<R: Rng>(machine: &QuizMachine<R>, painter: &dyn Painter) -> Self {
        let flash = machine.flash();
        let feedback = flash
            .polarity()
            .zip(flash.message())
            .map(|(verdict, text)| painter.paint_bold(text, verdict.feedback_color()));

        Self {
            time_left: format!("Time Left: {}s", machine.budget().remaining_secs()),
            bar: machine.countdown_bar().render(painter),
            score: format!(
                "Correct: {}/{}",
                machine.correct_count(),
                machine.answers().len()
            ),
            question: machine
                .current_question()
                .map(|q| q.text().to_string())
                .unwrap_or_default(),
            input: machine.answer_box().view(),
            feedback,
        }
    }

    /// The running screen as plain text, before padding.
    #[must_use]
    pub fn to_text(&self) -> String {
        let feedback = self
            .feedback
            .as_ref()
            .map(|text| format!("\n\n{text}"))
            .unwrap_or_default();
        format!(
            "{}\n{}\n{}\n\n{}\n\n{}\n[q] to quit\n{}",
            self.time_left, self.bar, self.score, self.question, self.input, feedback
        )
    }
}
