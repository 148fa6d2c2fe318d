pub mod console_target;
pub mod file_target;
pub mod memory_target;
pub mod stream_target;
pub use console_target::{ConsoleLogTarget, ConsoleStream};
pub use file_target::FileLogTarget;
pub use memory_target::{LogRecord, MemoryLogTarget};
pub use stream_target::StreamLogTarget;
