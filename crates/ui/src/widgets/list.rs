use quiz_core::model::{Difficulty, QuizLength};
use services::{Input, SelectionList};

/// One row of a [`SelectList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListItem {
    label: &'static str,
    description: &'static str,
}

impl ListItem {
    #[must_use]
    pub const fn new(label: &'static str, description: &'static str) -> Self {
        Self { label, description }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }
}

/// Titled single-choice list driven by the arrow keys (or `j`/`k`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectList {
    title: &'static str,
    items: Vec<ListItem>,
    cursor: usize,
}

impl SelectList {
    #[must_use]
    pub fn new(title: &'static str, items: Vec<ListItem>) -> Self {
        Self {
            title,
            items,
            cursor: 0,
        }
    }

    /// The difficulty menu.
    #[must_use]
    pub fn difficulties() -> Self {
        let items = Difficulty::LISTED
            .iter()
            .map(|d| ListItem::new(d.label(), d.description()))
            .collect();
        Self::new("Select Difficulty Level", items)
    }

    /// The duration menu.
    #[must_use]
    pub fn quiz_lengths() -> Self {
        let items = QuizLength::LISTED
            .iter()
            .map(|l| ListItem::new(l.label(), l.description()))
            .collect();
        Self::new("Select Quiz Duration", items)
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}

impl SelectionList for SelectList {
    fn selected_label(&self) -> Option<&str> {
        self.items.get(self.cursor).map(ListItem::label)
    }

    fn select(&mut self, index: usize) {
        self.cursor = index.min(self.last_index());
    }

    fn handle_input(&mut self, input: Input) {
        match input {
            Input::Up | Input::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            Input::Down | Input::Char('j') => self.cursor = (self.cursor + 1).min(self.last_index()),
            _ => {}
        }
    }
}
