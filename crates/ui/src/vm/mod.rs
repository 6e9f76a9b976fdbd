mod results_vm;
mod running_vm;
mod time_fmt;

pub use results_vm::{BOOM_BANNER, MissVm, ResultsSectionVm, ResultsVm};
pub use running_vm::RunningVm;
pub use time_fmt::format_seconds;
