//! Writes one categorized message through a fanlog logger.
//!
//! ```text
//! fanlog [--message-coloring] [--log-file PATH] [--config PATH]
//!        [--category CAT] [--disabled] [MESSAGE]...
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(fanlog::cli::run(std::env::args_os()))
}
