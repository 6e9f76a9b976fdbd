//! Countdown bar: a fixed-width row of blocks with a fuse glyph at its
//! leading edge.

use std::time::Duration;

use crate::style::{ColorOverride, ColorToken, Painter};

/// Shown in place of the bar once time has run out.
pub const TIMES_UP: &str = "💥 TIME'S UP! 💥";

/// Fuse animation frames, in cycling order.
pub const FUSE_GLYPHS: [&str; 4] = ["*", "✨", "·", "✶"];

const BLOCK: &str = "█";

/// Everything needed to draw one frame of the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownBar<'a> {
    pub remaining: Duration,
    pub limit: Duration,
    pub width: usize,
    /// Transient nudge in {-1, 0, +1} after a scored answer.
    pub adjust: i8,
    pub color_override: ColorOverride,
    pub fuse_glyph: &'a str,
}

/// Resolved geometry and color of a live bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub percent: f64,
    pub filled: usize,
    pub color: ColorToken,
}

impl CountdownBar<'_> {
    /// Geometry of the bar, or `None` once time is up.
    #[must_use]
    pub fn layout(&self) -> Option<BarLayout> {
        let remaining = self.remaining.as_secs();
        if remaining == 0 {
            return None;
        }

        let limit = self.limit.as_secs();
        let percent = if limit == 0 {
            1.0
        } else {
            (remaining as f64 / limit as f64).clamp(0.0, 1.0)
        };
        let width = i64::try_from(self.width).unwrap_or(i64::MAX);
        #[allow(clippy::cast_possible_truncation)]
        let base = (percent * self.width as f64).floor() as i64;
        let filled = base
            .saturating_add(i64::from(self.adjust))
            .clamp(0, width);

        Some(BarLayout {
            percent,
            filled: usize::try_from(filled).unwrap_or(0),
            color: self.color_override.token().unwrap_or(tier_color(percent)),
        })
    }

    /// Draws the bar with `painter`.
    #[must_use]
    pub fn render<P: Painter + ?Sized>(&self, painter: &P) -> String {
        let Some(layout) = self.layout() else {
            return TIMES_UP.to_string();
        };

        let mut cells = String::with_capacity(self.width * 4);
        for i in 0..self.width {
            if i + 1 == layout.filled {
                cells.push_str(&painter.paint(self.fuse_glyph, ColorToken::FuseAccent));
            } else if i < layout.filled {
                cells.push_str(&painter.paint(BLOCK, layout.color));
            } else {
                cells.push(' ');
            }
        }
        format!("💣[{cells}]")
    }
}

fn tier_color(percent: f64) -> ColorToken {
    if percent > 0.5 {
        ColorToken::Calm
    } else if percent > 0.2 {
        ColorToken::Warning
    } else {
        ColorToken::Danger
    }
}
