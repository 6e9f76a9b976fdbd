mod collab;
mod events;
mod flash;
mod machine;
mod timeline;
mod timers;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use collab::{SelectionList, TextCapture};
pub use events::{ClockKind, Command, Epoch, Event, Input, TimerEvent};
pub use flash::{FADE_STEPS, Fade, FlashState, FuseAnimation};
pub use machine::{SessionMachine, SessionPhase};
pub use timeline::Timeline;
pub use timers::{PULSE_THRESHOLD, TickDecision, TimerComposer, main_tick, pulse_due};
