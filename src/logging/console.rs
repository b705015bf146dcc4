use super::{LogEntry, LogLevel, Logger};

/// Terminal logger. Debug lines are only shown with `--debug`, and in that
/// mode every line carries the entry timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    debug_enabled: bool,
}

impl ConsoleLogger {
    pub fn new(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }

    /// The line to print for `message`, or `None` when it is filtered out.
    fn render(&self, level: LogLevel, message: &str) -> Option<String> {
        if level == LogLevel::Debug && !self.debug_enabled {
            return None;
        }

        let line = if self.debug_enabled {
            LogEntry::new(level, message).to_string()
        } else {
            message.to_string()
        };

        Some(match level {
            LogLevel::Debug => format!("🔍 {line}"),
            LogLevel::Info => line,
            LogLevel::Error => format!("❌ {line}"),
        })
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if let Some(line) = self.render(LogLevel::Debug, message) {
            println!("{line}");
        }
    }

    fn info(&self, message: &str) {
        if let Some(line) = self.render(LogLevel::Info, message) {
            println!("{line}");
        }
    }

    fn error(&self, message: &str) {
        if let Some(line) = self.render(LogLevel::Error, message) {
            eprintln!("{line}");
        }
    }
}
