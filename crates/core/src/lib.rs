#![forbid(unsafe_code)]

pub mod bar;
pub mod error;
pub mod generator;
pub mod model;
pub mod scoring;
pub mod style;
pub mod time;

pub use error::CoreError;
pub use time::Clock;
