//! Full-frame text for each phase.

mod menus;

use quiz_core::style::Painter;
use rand::Rng;
use services::SessionPhase;

use crate::QuizMachine;
use crate::vm::{ResultsVm, RunningVm};

pub use menus::{list_view, menu, time_select};

/// Cursor home plus erase display, sent before every frame.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Renders the whole screen for the machine's current phase.
#[must_use]
pub fn render_frame<R: Rng>(machine: &QuizMachine<R>, painter: &dyn Painter) -> String {
    let body = match machine.phase() {
        SessionPhase::Menu => menu(machine.difficulties()),
        SessionPhase::TimeSelect => time_select(machine.lengths()),
        SessionPhase::Running => pad(&RunningVm::new(machine, painter).to_text()),
        SessionPhase::Results => pad(&ResultsVm::from(&machine.summary()).to_text()),
    };
    format!("{CLEAR_SCREEN}{body}")
}

/// One blank row above and below, two columns on the left.
fn pad(text: &str) -> String {
    let rows: Vec<String> = text.split('\n').map(|row| format!("  {row}")).collect();
    format!("\n{}\n", rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_indents_every_row() {
        assert_eq!(pad("a\nb"), "\n  a\n  b\n");
    }
}
