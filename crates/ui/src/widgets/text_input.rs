use services::{Input, TextCapture};

pub const CHAR_LIMIT: usize = 5;
pub const PLACEHOLDER: &str = "Your answer";

const PROMPT: &str = "> ";

/// Single-line answer box. Ignores keystrokes while blurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    focused: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    /// A focused, empty box.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: String::new(),
            focused: true,
        }
    }

    /// Prompt plus the value, or the placeholder while empty.
    #[must_use]
    pub fn view(&self) -> String {
        if self.value.is_empty() {
            format!("{PROMPT}{PLACEHOLDER}")
        } else {
            format!("{PROMPT}{}", self.value)
        }
    }
}

impl TextCapture for TextInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn reset(&mut self) {
        self.value.clear();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_input(&mut self, input: Input) {
        if !self.focused {
            return;
        }
        match input {
            Input::Char(c) if !c.is_control() && self.value.chars().count() < CHAR_LIMIT => {
                self.value.push(c);
            }
            Input::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
    }
}
