//! Bounded, reusable formatting buffer.
//!
//! A [`MessageBuffer`] formats one message at a time into a byte buffer that
//! starts small and grows on demand, but never beyond a hard cap. Text that
//! still does not fit at the cap is truncated instead of dropped.

use std::fmt::{self, Write};

/// Size of a freshly created buffer, in bytes.
pub const INITIAL_BUFFER_SIZE: usize = 1024;

/// Hard ceiling on the buffer size, in bytes.
pub const MAX_BUFFER_SIZE: usize = 1024 * 1024;

/// How a successful [`MessageBuffer::format`] call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The buffer holds the full text.
    Complete,
    /// The text needed more than the maximum size; the buffer holds the
    /// longest prefix that fits.
    Truncated,
}

/// Why [`MessageBuffer::format`] produced no text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A `Display`/`Debug` implementation reported an error.
    #[error("a formatting trait implementation returned an error")]
    Malformed,
}

/// Owns the bytes a logger formats into.
///
/// A buffer of size `n` stores at most `n - 1` bytes of text followed by a
/// zero terminator, so the size needed for a text of length `len` is
/// `len + 1`. The size always stays within `[initial, max]` and never shrinks.
#[derive(Debug, Clone)]
pub struct MessageBuffer {
    bytes: Vec<u8>,
    len: usize,
    max_size: usize,
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuffer {
    /// Creates a buffer of [`INITIAL_BUFFER_SIZE`] bytes that may grow up to
    /// [`MAX_BUFFER_SIZE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(INITIAL_BUFFER_SIZE, MAX_BUFFER_SIZE)
    }

    /// Creates a buffer with custom limits.
    ///
    /// Limits are clamped so that `1 <= initial <= max`.
    #[must_use]
    pub fn with_limits(initial: usize, max: usize) -> Self {
        let max_size = max.max(1);
        let initial = initial.clamp(1, max_size);
        Self {
            bytes: vec![0; initial],
            len: 0,
            max_size,
        }
    }

    /// Current size in bytes, terminator slot included. Grows on demand and
    /// never shrinks.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Size the buffer may grow to. Longer text is truncated to
    /// `max_size - 1` bytes.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Text produced by the last [`format`](Self::format) call.
    ///
    /// Empty after a [`FormatError`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only whole characters are ever copied in, see `BoundedWriter`.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    /// Formats `args` into the buffer, growing it as needed up to the cap.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Malformed`] if any formatted value reports an
    /// error. No retry is attempted and the buffer text is left empty.
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> Result<FormatOutcome, FormatError> {
        loop {
            let size = self.bytes.len();

            let mut writer = BoundedWriter::new(&mut self.bytes);
            let result = writer.write_fmt(args);
            let (written, total) = (writer.written, writer.total);

            if result.is_err() {
                self.terminate_at(0);
                return Err(FormatError::Malformed);
            }
            self.terminate_at(written);

            let needed = total.saturating_add(1);
            if needed <= size {
                return Ok(FormatOutcome::Complete);
            }
            if size >= self.max_size {
                return Ok(FormatOutcome::Truncated);
            }

            // Grows strictly: needed > size and max_size > size here.
            self.bytes.resize(needed.min(self.max_size), 0);
        }
    }

    fn terminate_at(&mut self, len: usize) {
        self.len = len;
        if let Some(slot) = self.bytes.get_mut(len) {
            *slot = 0;
        }
    }
}

/// `fmt::Write` sink that keeps the first `buf.len() - 1` bytes and counts
/// the length of everything it was asked to write.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
    total: usize,
    full: bool,
}

impl<'a> BoundedWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            written: 0,
            total: 0,
            full: false,
        }
    }

    fn room(&self) -> usize {
        self.buf.len().saturating_sub(1).saturating_sub(self.written)
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.total = self.total.saturating_add(s.len());
        if self.full {
            return Ok(());
        }

        let room = self.room();
        let take = if s.len() <= room {
            s.len()
        } else {
            // Once a piece is cut, nothing after it may be appended.
            self.full = true;
            floor_char_boundary(s, room)
        };

        let end = self.written + take;
        self.buf[self.written..end].copy_from_slice(&s.as_bytes()[..take]);
        self.written = end;
        Ok(())
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
