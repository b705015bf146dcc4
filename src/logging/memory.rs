use super::{LogEntry, LogLevel, Logger};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const MAX_LOG_ENTRIES: usize = 1000;

/// Bounded in-memory log, shared between clones.
pub struct MemoryLogger {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    fn push(&self, entry: LogEntry) {
        // A poisoned lock still holds valid entries.
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push_back(entry);

        if entries.len() > MAX_LOG_ENTRIES {
            entries.pop_front();
        }
    }

    pub fn get_all(&self) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }

    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.get_all()
            .into_iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message)
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.messages(LogLevel::Error).is_empty()
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(LogEntry::new(LogLevel::Debug, message));
    }

    fn info(&self, message: &str) {
        self.push(LogEntry::new(LogLevel::Info, message));
    }

    fn error(&self, message: &str) {
        self.push(LogEntry::new(LogLevel::Error, message));
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryLogger {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_levels_in_order() {
        let logger = MemoryLogger::new();
        logger.debug("starting");
        logger.info("done");
        logger.error("boom");

        let all = logger.get_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].level, LogLevel::Debug);
        assert_eq!(all[2].message, "boom");
        assert!(logger.has_errors());
    }

    #[test]
    fn test_clones_share_entries() {
        let logger = MemoryLogger::new();
        let other = logger.clone();
        other.info("from clone");
        assert_eq!(logger.messages(LogLevel::Info), vec!["from clone".to_string()]);
    }

    #[test]
    fn test_caps_entries() {
        let logger = MemoryLogger::new();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            logger.debug(&format!("line {i}"));
        }
        let all = logger.get_all();
        assert_eq!(all.len(), MAX_LOG_ENTRIES);
        assert_eq!(all[0].message, "line 5");
    }
}
