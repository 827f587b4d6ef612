//! Application state module

mod announcer;
mod document;
mod forms;
mod scheduler;

pub use announcer::*;
pub use document::*;
pub use forms::*;
pub use scheduler::*;
