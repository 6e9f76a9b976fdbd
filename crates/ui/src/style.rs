//! ANSI rendering of the color tokens.

use crossterm::style::{Color, Stylize};
use quiz_core::style::{ColorToken, Painter, PlainPainter};

/// 256-color palette index for each token.
#[must_use]
pub fn ansi_index(token: ColorToken) -> u8 {
    match token {
        ColorToken::Calm | ColorToken::FeedbackPositive => 10,
        ColorToken::Warning | ColorToken::FuseAccent => 11,
        ColorToken::Danger => 88,
        ColorToken::BrightPositive => 82,
        ColorToken::BrightNegative => 196,
        ColorToken::FeedbackNegative => 9,
    }
}

/// Painter emitting 256-color foreground sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, text: &str, token: ColorToken) -> String {
        text.with(Color::AnsiValue(ansi_index(token))).to_string()
    }

    fn paint_bold(&self, text: &str, token: ColorToken) -> String {
        text.with(Color::AnsiValue(ansi_index(token)))
            .bold()
            .to_string()
    }
}

/// Picks the painter for the terminal.
#[must_use]
pub fn painter(color: bool) -> Box<dyn Painter + Send> {
    if color {
        Box::new(AnsiPainter)
    } else {
        Box::new(PlainPainter)
    }
}
