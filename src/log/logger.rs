use crate::log::{category::Category, log_target::LogTarget, message_buffer::MessageBuffer};

use std::{fmt, process, ptr};

/// Called after a terminal message has been delivered. Never returns.
pub type FatalHandler = fn() -> !;

/// Default [`FatalHandler`]: exits the process with a failure status.
pub fn exit_failure() -> ! {
    process::exit(1)
}

/// Formats categorized messages once and fans them out to every attached target.
///
/// # Ownership
///
/// Targets are borrowed for `'t`, never owned: the logger neither creates nor
/// drops them, and the borrow checker guarantees they outlive the logger.
///
/// # Concurrency
///
/// The message buffer is reused in place by every [`write`](Self::write),
/// which therefore takes `&mut self`. Share a logger between threads only
/// behind external mutual exclusion, or give each worker its own logger.
///
/// # Termination
///
/// `write` returns only if the category is not terminal. A
/// [`Category::Fatal`] message is delivered (when enabled) and then the
/// fatal handler runs, which by default exits the process with status 1.
/// This happens even when the logger is disabled or formatting failed.
pub struct Logger<'t> {
    enabled: bool,
    targets: Vec<&'t dyn LogTarget>,
    buffer: MessageBuffer,
    on_fatal: FatalHandler,
}

impl Default for Logger<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Logger<'t> {
    /// Creates an enabled logger with no targets and a default-size buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_buffer(MessageBuffer::new())
    }

    /// Creates a logger whose message buffer starts at `initial` bytes and
    /// never grows past `max` bytes.
    #[must_use]
    pub fn with_buffer_limits(initial: usize, max: usize) -> Self {
        Self::with_buffer(MessageBuffer::with_limits(initial, max))
    }

    fn with_buffer(buffer: MessageBuffer) -> Self {
        Self {
            enabled: true,
            targets: Vec::new(),
            buffer,
            on_fatal: exit_failure,
        }
    }

    /// Enables or disables formatting and delivery. Termination on
    /// [`Category::Fatal`] is not affected.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replaces what happens after a terminal message has been delivered.
    pub fn set_fatal_handler(&mut self, handler: FatalHandler) {
        self.on_fatal = handler;
    }

    /// Appends `target` to the delivery list.
    ///
    /// Adding the same target twice makes it receive every message twice.
    pub fn add_target(&mut self, target: &'t dyn LogTarget) {
        self.targets.push(target);
    }

    /// Removes every occurrence of `target`. Unknown targets are ignored.
    ///
    /// Targets are compared by address. Zero-sized targets may share an
    /// address, so removing one of them removes all of them.
    pub fn remove_target(&mut self, target: &dyn LogTarget) {
        self.targets.retain(|t| !same_target(*t, target));
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn has_target(&self, target: &dyn LogTarget) -> bool {
        self.targets.iter().any(|t| same_target(*t, target))
    }

    /// Size of the message buffer in bytes.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.size()
    }

    /// Formats `args` and delivers the text to every target, in the order
    /// they were added.
    ///
    /// Text that exceeds the buffer cap is delivered truncated. Text that
    /// fails to format is not delivered. Neither case is reported.
    /// Delivery is synchronous; a panicking target stops delivery to the
    /// targets after it.
    ///
    /// Does not return if `category` is terminal.
    pub fn write(&mut self, category: Category, file: &str, line: u32, args: fmt::Arguments<'_>) {
        // Truncated text is still delivered; only a formatting error is not.
        if self.enabled && self.buffer.format(args).is_ok() {
            let message = self.buffer.as_str();
            for target in &self.targets {
                target.write(category, file, line, message);
            }
        }

        if category.is_terminal() {
            (self.on_fatal)();
        }
    }
}

impl fmt::Debug for Logger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.enabled)
            .field("targets", &self.targets.len())
            .field("buffer_size", &self.buffer.size())
            .field("max_buffer_size", &self.buffer.max_size())
            .finish()
    }
}

fn same_target(a: &dyn LogTarget, b: &dyn LogTarget) -> bool {
    ptr::addr_eq(a, b)
}
