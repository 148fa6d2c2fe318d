//! fanlog is a small structured logging facility.
//!
//! A [`Logger`](log::Logger) formats each categorized message once, into a
//! reusable buffer bounded in size, and fans the text out to every attached
//! [`LogTarget`](log::LogTarget) in the order the targets were added. Writing
//! a [`Category::Fatal`](log::Category::Fatal) message terminates the process.
//!
//! The crate is structured into a few modules:

/// Command-line front end used by the `fanlog` binary.
pub mod cli;
/// Handles configuration loading and management.
pub mod config;
/// The logger, message categories, formatting and the category macros.
pub mod log;
/// Concrete log targets: console, stream, file and in-memory.
pub mod targets;
