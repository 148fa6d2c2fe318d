pub mod category;
pub mod formatting;
pub mod log_macros;
pub mod log_target;
pub mod logger;
pub mod message_buffer;
pub mod settings;
pub use category::Category;
pub use formatting::{FormattingFlags, TargetFormat};
pub use log_target::{LogTarget, NoopLogTarget};
pub use logger::{FatalHandler, Logger, exit_failure};
pub use message_buffer::{FormatError, FormatOutcome, MessageBuffer};
pub use settings::LoggerSettings;
