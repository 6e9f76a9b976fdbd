//! Timer composer: arms the five clocks and decides what a main tick does.

use std::time::Duration;

use quiz_core::model::TimeBudget;

use super::events::{ClockKind, Command, Epoch, TimerEvent};

/// Remaining time at or below which the pulse clock blinks the bar.
pub const PULSE_THRESHOLD: Duration = Duration::from_secs(10);

/// Owns the current clock epoch and produces schedule commands.
#[derive(Debug, Clone, Default)]
pub struct TimerComposer {
    epoch: Epoch,
}

impl TimerComposer {
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// True if `event` was armed in the current epoch.
    #[must_use]
    pub fn is_current(&self, event: TimerEvent) -> bool {
        event.epoch == self.epoch
    }

    /// Schedule the next fire of `kind` one period from now.
    #[must_use]
    pub fn arm(&self, kind: ClockKind) -> Command {
        Command::Schedule {
            after: kind.period(),
            event: TimerEvent {
                kind,
                epoch: self.epoch,
            },
        }
    }

    /// Animation clocks running from program start.
    #[must_use]
    pub fn boot(&self) -> Vec<Command> {
        vec![self.arm(ClockKind::Fuse), self.arm(ClockKind::Pulse)]
    }

    /// Opens a new epoch and arms the round clocks. Fires from earlier rounds
    /// become stale.
    pub fn start_round(&mut self) -> Vec<Command> {
        self.epoch = self.epoch.next();
        vec![
            self.arm(ClockKind::Tick),
            self.arm(ClockKind::Fuse),
            self.arm(ClockKind::Pulse),
        ]
    }

    /// Feedback clocks started by a scored answer.
    #[must_use]
    pub fn answer_scored(&self) -> Vec<Command> {
        vec![self.arm(ClockKind::FlashTimeout), self.arm(ClockKind::FlashFade)]
    }
}

/// What a main tick did to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDecision {
    Decremented,
    Suspended,
    Expired,
}

/// Applies one main tick. Suspension skips the decrement but an already
/// exhausted budget still expires.
pub fn main_tick(budget: &mut TimeBudget, suspended: bool) -> TickDecision {
    let decision = if suspended {
        TickDecision::Suspended
    } else {
        budget.tick();
        TickDecision::Decremented
    };
    if budget.is_expired() {
        TickDecision::Expired
    } else {
        decision
    }
}

#[must_use]
pub fn pulse_due(budget: &TimeBudget) -> bool {
    budget.remaining() <= PULSE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_round_bumps_epoch_and_arms_three_clocks() {
        let mut timers = TimerComposer::default();
        let stale = TimerEvent {
            kind: ClockKind::Tick,
            epoch: timers.epoch(),
        };

        let commands = timers.start_round();

        assert!(!timers.is_current(stale));
        let kinds: Vec<_> = commands
            .iter()
            .map(|cmd| match cmd {
                Command::Schedule { after, event } => (event.kind, *after),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (ClockKind::Tick, Duration::from_secs(1)),
                (ClockKind::Fuse, Duration::from_millis(150)),
                (ClockKind::Pulse, Duration::from_millis(150)),
            ]
        );
    }

    #[test]
    fn suspended_tick_keeps_budget() {
        let mut budget = TimeBudget::new(Duration::from_secs(5));
        assert_eq!(main_tick(&mut budget, true), TickDecision::Suspended);
        assert_eq!(budget.remaining_secs(), 5);
        assert_eq!(main_tick(&mut budget, false), TickDecision::Decremented);
        assert_eq!(budget.remaining_secs(), 4);
    }

    #[test]
    fn last_second_expires() {
        let mut budget = TimeBudget::new(Duration::from_secs(1));
        assert_eq!(main_tick(&mut budget, false), TickDecision::Expired);
    }

    #[test]
    fn pulse_starts_at_ten_seconds() {
        let mut budget = TimeBudget::new(Duration::from_secs(11));
        assert!(!pulse_due(&budget));
        budget.tick();
        assert!(pulse_due(&budget));
    }
}
