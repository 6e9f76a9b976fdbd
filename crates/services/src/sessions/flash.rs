use quiz_core::bar::FUSE_GLYPHS;
use quiz_core::scoring::Verdict;
use quiz_core::style::ColorOverride;

/// Number of 300 ms fade steps after each answer.
pub const FADE_STEPS: u8 = 3;

/// Post-answer feedback shown for about a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlashState {
    active: bool,
    polarity: Option<Verdict>,
    bar_adjust: i8,
    fade_steps_left: u8,
    color_override: ColorOverride,
}

/// Whether the fade clock should fire again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    Continue,
    Done,
}

impl FlashState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn polarity(&self) -> Option<Verdict> {
        self.polarity
    }

    #[must_use]
    pub fn bar_adjust(&self) -> i8 {
        self.bar_adjust
    }

    #[must_use]
    pub fn fade_steps_left(&self) -> u8 {
        self.fade_steps_left
    }

    #[must_use]
    pub fn color_override(&self) -> ColorOverride {
        self.color_override
    }

    /// Feedback text while active.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.polarity.filter(|_| self.active).map(Verdict::feedback)
    }

    pub(crate) fn arm(&mut self, verdict: Verdict) {
        *self = Self {
            active: true,
            polarity: Some(verdict),
            bar_adjust: verdict.bar_adjust(),
            fade_steps_left: FADE_STEPS,
            color_override: verdict.color_override(),
        };
    }

    pub(crate) fn fade(&mut self) -> Fade {
        if self.fade_steps_left == 0 {
            return Fade::Done;
        }
        self.fade_steps_left -= 1;
        if self.fade_steps_left == 0 {
            self.color_override = ColorOverride::None;
            Fade::Done
        } else {
            Fade::Continue
        }
    }

    /// Final-seconds blink: alternate between bright-negative and no override.
    pub(crate) fn pulse(&mut self) {
        self.color_override = if self.color_override.is_set() {
            ColorOverride::None
        } else {
            ColorOverride::BrightNegative
        };
    }

    pub(crate) fn tear_down(&mut self) {
        *self = Self::default();
    }
}

/// Cycling glyph at the leading edge of the countdown bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuseAnimation {
    frame_index: usize,
}

impl FuseAnimation {
    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    #[must_use]
    pub fn glyph(&self) -> &'static str {
        FUSE_GLYPHS[self.frame_index % FUSE_GLYPHS.len()]
    }

    pub(crate) fn advance(&mut self) {
        self.frame_index = (self.frame_index + 1) % FUSE_GLYPHS.len();
    }
}
