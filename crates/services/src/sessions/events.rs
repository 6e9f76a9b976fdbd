use std::time::Duration;

//
// ─── INPUT ─────────────────────────────────────────────────────────────────────
//

/// A single keystroke, already decoded from the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    /// Left arrow: "back" from TimeSelect and Results.
    Back,
    Forward,
    Enter,
    Backspace,
    Char(char),
    /// Ctrl-C.
    Interrupt,
}

//
// ─── TIMERS ────────────────────────────────────────────────────────────────────
//

/// The five logical clocks of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockKind {
    /// Decrements the time budget.
    Tick,
    /// Advances the fuse glyph.
    Fuse,
    /// Blinks the bar in the final seconds.
    Pulse,
    /// One-shot end of the post-answer feedback.
    FlashTimeout,
    /// Self-rescheduling fade of the feedback color.
    FlashFade,
}

impl ClockKind {
    #[must_use]
    pub fn period(self) -> Duration {
        match self {
            ClockKind::Tick | ClockKind::FlashTimeout => Duration::from_secs(1),
            ClockKind::Fuse | ClockKind::Pulse => Duration::from_millis(150),
            ClockKind::FlashFade => Duration::from_millis(300),
        }
    }
}

/// Generation counter bumped on every round start; fires armed in an older
/// epoch are stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A clock firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerEvent {
    pub kind: ClockKind,
    pub epoch: Epoch,
}

//
// ─── EVENTS & COMMANDS ─────────────────────────────────────────────────────────
//

/// Everything the state machine consumes, one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Input(Input),
    Timer(TimerEvent),
}

impl From<Input> for Event {
    fn from(input: Input) -> Self {
        Event::Input(input)
    }
}

impl From<TimerEvent> for Event {
    fn from(timer: TimerEvent) -> Self {
        Event::Timer(timer)
    }
}

/// Side effects requested by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Deliver `event` after `after` has elapsed.
    Schedule { after: Duration, event: TimerEvent },
    /// Ring the terminal bell.
    Bell,
    /// Leave the program.
    Exit,
}
