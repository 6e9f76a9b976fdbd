//! Color tokens and the painting seam between the engine and the terminal.

/// Named colors used by the quiz screens. The terminal layer decides what each
/// token looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Countdown bar above half time.
    Calm,
    /// Countdown bar between 20% and 50%.
    Warning,
    /// Countdown bar at or below 20%.
    Danger,
    BrightPositive,
    BrightNegative,
    /// The moving fuse glyph.
    FuseAccent,
    FeedbackPositive,
    FeedbackNegative,
}

/// Transient bar color set by a scored answer or by the final-seconds pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOverride {
    #[default]
    None,
    BrightPositive,
    BrightNegative,
}

impl ColorOverride {
    #[must_use]
    pub fn token(self) -> Option<ColorToken> {
        match self {
            ColorOverride::None => None,
            ColorOverride::BrightPositive => Some(ColorToken::BrightPositive),
            ColorOverride::BrightNegative => Some(ColorToken::BrightNegative),
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        !matches!(self, ColorOverride::None)
    }
}

/// Turns text plus a color token into a string ready for the terminal.
pub trait Painter {
    fn paint(&self, text: &str, token: ColorToken) -> String;

    fn paint_bold(&self, text: &str, token: ColorToken) -> String {
        self.paint(text, token)
    }
}

/// Painter that drops all styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, text: &str, _token: ColorToken) -> String {
        text.to_string()
    }
}
