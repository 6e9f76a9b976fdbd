use crate::error::SessionError;

pub const DEFAULT_BAR_WIDTH: usize = 30;
pub const MIN_BAR_WIDTH: usize = 10;
pub const MAX_BAR_WIDTH: usize = 200;

/// Engine settings chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    bar_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl SessionConfig {
    /// Set the countdown bar width in columns.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidBarWidth` outside `MIN_BAR_WIDTH..=MAX_BAR_WIDTH`.
    pub fn with_bar_width(mut self, bar_width: usize) -> Result<Self, SessionError> {
        if !(MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&bar_width) {
            return Err(SessionError::InvalidBarWidth(bar_width));
        }
        self.bar_width = bar_width;
        Ok(self)
    }

    #[must_use]
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }
}
