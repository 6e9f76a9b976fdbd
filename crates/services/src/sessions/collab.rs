//! Capabilities the engine needs from the terminal widgets.

use super::events::Input;

/// A list the player picks from.
pub trait SelectionList {
    /// Label of the highlighted item.
    fn selected_label(&self) -> Option<&str>;

    fn select(&mut self, index: usize);

    /// Inputs the engine did not consume (navigation keys).
    fn handle_input(&mut self, input: Input);
}

/// Single-line answer box.
pub trait TextCapture {
    fn value(&self) -> &str;

    /// Clears the typed text.
    fn reset(&mut self);

    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// Editing keys. Implementations ignore input while blurred.
    fn handle_input(&mut self, input: Input);
}
