use crate::{
    log::{Category, FormattingFlags, LogTarget, TargetFormat},
    targets::stream_target::StreamLogTarget,
};

use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Appends rendered messages to a log file.
///
/// Output is buffered and flushed after every `Error` or `Fatal` message, so
/// the file is complete before a fatal message ends the process, and again on
/// drop.
pub struct FileLogTarget {
    inner: StreamLogTarget<BufWriter<Box<dyn Write + Send>>>,
    path: PathBuf,
}

impl FileLogTarget {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Propagates the I/O error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = open_append(&path)?;
        Ok(Self::from_writer(Box::new(file), path))
    }

    /// Creates a new per-process log file in `dir`.
    ///
    /// This function:
    /// 1. Creates `dir` if it is missing.
    /// 2. Names the file after `app_name`, the UTC time and the process ID,
    ///    e.g. `fanlog-20261018_093045-pid1234.log`.
    /// 3. Falls back to a file in the temp directory, then to a sink.
    ///    It never fails.
    pub fn create_in_dir<D: AsRef<Path>>(dir: D, app_name: Option<&str>) -> Self {
        let dir = dir.as_ref();
        let _ = fs::create_dir_all(dir);

        let ts = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let pid = std::process::id();
        let fname = match app_name {
            Some(name) => format!("{name}-{ts}-pid{pid}.log"),
            None => format!("{ts}-pid{pid}.log"),
        };

        let path = dir.join(&fname);
        if let Ok(f) = open_append(&path) {
            return Self::from_writer(Box::new(f), path);
        }

        let fallback = std::env::temp_dir().join("fanlog-fallback.log");
        match open_append(&fallback) {
            Ok(f) => Self::from_writer(Box::new(f), fallback),
            Err(_) => Self::from_writer(Box::new(io::sink()), path),
        }
    }

    fn from_writer(writer: Box<dyn Write + Send>, path: PathBuf) -> Self {
        Self {
            inner: StreamLogTarget::new(BufWriter::new(writer)),
            path,
        }
    }

    /// Path of the file being written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
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

impl LogTarget for FileLogTarget {
    fn write(&self, category: Category, file: &str, line: u32, message: &str) {
        self.inner.write(category, file, line, message);
        if category >= Category::Error {
            self.inner.flush();
        }
    }
}

impl Drop for FileLogTarget {
    fn drop(&mut self) {
        self.inner.flush();
    }
}

fn open_append(path: &Path) -> io::Result<fs::File> {
    OpenOptions::new().create(true).append(true).open(path)
}
