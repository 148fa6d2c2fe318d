use crate::log::{Category, LogTarget};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// One delivered message, as a target saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub category: Category,
    pub file: String,
    pub line: u32,
    pub message: String,
}

/// Keeps every delivered message in memory, in delivery order.
#[derive(Debug, Default)]
pub struct MemoryLogTarget {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Message texts only.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogTarget for MemoryLogTarget {
    fn write(&self, category: Category, file: &str, line: u32, message: &str) {
        self.lock().push(LogRecord {
            category,
            file: file.to_owned(),
            line,
            message: message.to_owned(),
        });
    }
}
