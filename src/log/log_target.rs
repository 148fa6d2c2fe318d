use crate::log::category::Category;

/// A delivery sink for formatted log messages.
///
/// Targets are owned by the embedding application. A [`Logger`](crate::log::Logger)
/// only borrows them, so a target must outlive every logger it is attached to.
/// Filtering and display policy belong to the target.
pub trait LogTarget: Send + Sync {
    fn write(&self, category: Category, file: &str, line: u32, message: &str);
}

/// Discards every message.
///
/// Zero-sized, so two instances may share an address and
/// [`Logger::remove_target`](crate::log::Logger::remove_target) cannot tell
/// them apart. Attach at most one per logger.
#[derive(Debug, Clone, Default)]
pub struct NoopLogTarget;

impl LogTarget for NoopLogTarget {
    #[inline]
    fn write(&self, _category: Category, _file: &str, _line: u32, _message: &str) {}
}
