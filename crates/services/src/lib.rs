#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use config::SessionConfig;
pub use error::SessionError;

pub use sessions::{
    ClockKind, Command, Epoch, Event, FlashState, FuseAnimation, Input, SelectionList,
    SessionMachine, SessionPhase, TextCapture, Timeline, TimerEvent,
};
