#![forbid(unsafe_code)]

pub mod style;
pub mod views;
pub mod vm;
pub mod widgets;

use rand::Rng;
use services::{Clock, SessionConfig, SessionMachine};

pub use style::{AnsiPainter, painter};
pub use views::{CLEAR_SCREEN, render_frame};
pub use widgets::{SelectList, TextInput};

/// Session machine wired to the terminal widgets.
pub type QuizMachine<R> = SessionMachine<SelectList, TextInput, R>;

/// Builds a machine in the Menu phase with fresh menus and a focused answer box.
#[must_use]
pub fn build_machine<R: Rng>(config: SessionConfig, clock: Clock, rng: R) -> QuizMachine<R> {
    SessionMachine::new(
        config,
        clock,
        rng,
        SelectList::difficulties(),
        SelectList::quiz_lengths(),
        TextInput::new(),
    )
}
