use crate::log::{Category, FormattingFlags, LogTarget, TargetFormat};

use std::{
    io::Write,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Writes rendered messages to any byte stream (stderr, an open file, a
/// `Vec<u8>`). I/O errors are ignored.
pub struct StreamLogTarget<W: Write + Send> {
    format: TargetFormat,
    out: Mutex<W>,
}

impl<W: Write + Send> StreamLogTarget<W> {
    pub fn new(out: W) -> Self {
        Self {
            format: TargetFormat::default(),
            out: Mutex::new(out),
        }
    }

    #[must_use]
    pub fn format(&self) -> &TargetFormat {
        &self.format
    }

    pub fn set_formatting_flags(&mut self, category: Category, flags: FormattingFlags) {
        self.format.set_formatting_flags(category, flags);
    }

    pub fn flush(&self) {
        let _ = self.lock().flush();
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_rendered(&self, text: &str) {
        let _ = self.lock().write_all(text.as_bytes());
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogTarget for StreamLogTarget<W> {
    fn write(&self, category: Category, file: &str, line: u32, message: &str) {
        if let Some(text) = self.format.render(category, file, line, message) {
            self.write_rendered(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn writes_rendered_lines() {
        let target = StreamLogTarget::new(Vec::new());
        target.write(Category::Info, "a.rs", 1, "first");
        target.write(Category::Error, "a.rs", 2, "second");

        let out = String::from_utf8(target.into_inner()).unwrap();
        assert_eq!(out, "info    | first\nerror   | a.rs(2) second\n");
    }

    #[test]
    fn honors_per_category_flags() {
        let mut target = StreamLogTarget::new(Vec::new());
        target.set_formatting_flags(Category::Info, FormattingFlags::MESSAGE);
        target.set_formatting_flags(Category::Debug, FormattingFlags::NOTHING);
        target.write(Category::Debug, "a.rs", 1, "hidden");
        target.write(Category::Info, "a.rs", 1, "shown");

        assert_eq!(target.into_inner(), b"shown\n");
    }
}
