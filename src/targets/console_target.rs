use crate::{
    log::{Category, FormattingFlags, LogTarget, TargetFormat},
    targets::stream_target::StreamLogTarget,
};

use colored::Colorize;
use std::io::{self, Write};

/// Which standard stream a [`ConsoleLogTarget`] writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Console target that colors each line according to its category.
///
/// Coloring follows the `colored` crate's global control, so it turns off
/// when `NO_COLOR` is set or the stream is not a terminal.
pub struct ConsoleLogTarget {
    inner: StreamLogTarget<Box<dyn Write + Send>>,
}

impl ConsoleLogTarget {
    pub fn new(stream: ConsoleStream) -> Self {
        let out: Box<dyn Write + Send> = match stream {
            ConsoleStream::Stdout => Box::new(io::stdout()),
            ConsoleStream::Stderr => Box::new(io::stderr()),
        };
        Self::with_writer(out)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    /// Colored output into an arbitrary writer.
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            inner: StreamLogTarget::new(out),
        }
    }

    #[must_use]
    pub fn format(&self) -> &TargetFormat {
        self.inner.format()
    }

    pub fn set_formatting_flags(&mut self, category: Category, flags: FormattingFlags) {
        self.inner.set_formatting_flags(category, flags);
    }

    pub fn flush(&self) {
        self.inner.flush();
    }
}

impl LogTarget for ConsoleLogTarget {
    fn write(&self, category: Category, file: &str, line: u32, message: &str) {
        let Some(text) = self.inner.format().render(category, file, line, message) else {
            return;
        };

        let mut painted = String::with_capacity(text.len() + 16);
        for row in text.lines() {
            painted.push_str(&paint(category, row));
            painted.push('\n');
        }
        self.inner.write_rendered(&painted);
    }
}

fn paint(category: Category, line: &str) -> String {
    match category {
        Category::Debug => line.dimmed().to_string(),
        Category::Info => line.normal().to_string(),
        Category::Warning => line.yellow().to_string(),
        Category::Error => line.red().to_string(),
        Category::Fatal => line.red().bold().to_string(),
    }
}
