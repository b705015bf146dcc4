//! Logger collaborator used by every install stage.
//!
//! The install workflow never prints directly; it reports through a
//! [`Logger`] so that the binary can write to the terminal while tests record
//! entries in memory and assert on them.

pub mod console;
pub mod log_entry;
#[cfg(test)]
pub mod memory;

pub use console::ConsoleLogger;
pub use log_entry::{LogEntry, LogLevel};
#[cfg(test)]
pub use memory::MemoryLogger;

pub trait Logger {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}
