//! Category macros for [`Logger`](crate::log::Logger).
//!
//! Every macro records the call site with `file!()` and `line!()` and takes
//! `format!`-style arguments:
//!
//! ```rust,ignore
//! log_info!(logger, "value={}", 42);
//! ```
//!
//! # Feature Flags
//! Categories below `Fatal` are controlled by cargo features:
//! `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macro expands to `()`, removing
//! all formatting overhead at compile time. `log_fatal!` is never compiled out
//! because it terminates the process.

#[macro_export]
macro_rules! log_write {
    ($logger:expr, $cat:expr, $($arg:tt)*) => {{
        $logger.write($cat, file!(), line!(), format_args!($($arg)*));
    }};
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug { ($logger:expr, $($arg:tt)*) => { $crate::log_write!($logger, $crate::log::Category::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info { ($logger:expr, $($arg:tt)*) => { $crate::log_write!($logger, $crate::log::Category::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warning { ($logger:expr, $($arg:tt)*) => { $crate::log_write!($logger, $crate::log::Category::Warning, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error { ($logger:expr, $($arg:tt)*) => { $crate::log_write!($logger, $crate::log::Category::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
#[macro_export]
macro_rules! log_fatal { ($logger:expr, $($arg:tt)*) => { $crate::log_write!($logger, $crate::log::Category::Fatal, $($arg)*) } }
