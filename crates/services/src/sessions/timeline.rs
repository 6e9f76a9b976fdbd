//! Ordered queue of pending timer fires on a virtual time axis.
//!
//! The runtime maps virtual time onto a monotonic instant; tests advance it
//! directly. Either way fires come out one at a time, ordered by due time and
//! then by scheduling order.
//!
//! New fires are due relative to the instant of the event being handled: the
//! due time of a popped fire, or the time an input arrived. A late fire
//! therefore re-arms on its own cadence.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use super::events::{Command, TimerEvent};

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: Duration,
    seq: u64,
    event: TimerEvent,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Pending timer fires keyed by virtual due time.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    anchor: Duration,
    seq: u64,
    pending: BinaryHeap<Reverse<Pending>>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, after: Duration, event: TimerEvent) {
        let pending = Pending {
            due: self.anchor.saturating_add(after),
            seq: self.seq,
            event,
        };
        self.seq = self.seq.wrapping_add(1);
        self.pending.push(Reverse(pending));
    }

    /// Queues every `Schedule` command and hands back the rest.
    pub fn apply(&mut self, commands: Vec<Command>) -> Vec<Command> {
        commands
            .into_iter()
            .filter_map(|command| match command {
                Command::Schedule { after, event } => {
                    self.schedule(after, event);
                    None
                }
                other => Some(other),
            })
            .collect()
    }

    /// Due time of the earliest pending fire.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse(pending)| pending.due)
    }

    /// Moves virtual time forward; never backwards.
    pub fn advance_to(&mut self, at: Duration) {
        self.now = self.now.max(at);
        self.anchor = self.now;
    }

    /// Pops the earliest fire due at or before `limit`, moving virtual time to
    /// its due time. When nothing is due, time moves to `limit` and `None`
    /// is returned.
    ///
    /// Schedules made while handling the popped fire count from its due time,
    /// even when an input already moved `now` past it.
    pub fn pop_until(&mut self, limit: Duration) -> Option<TimerEvent> {
        match self.next_due() {
            Some(due) if due <= limit => {
                let Reverse(pending) = self.pending.pop()?;
                self.now = self.now.max(pending.due);
                self.anchor = pending.due;
                Some(pending.event)
            }
            _ => {
                self.advance_to(limit);
                None
            }
        }
    }
}
