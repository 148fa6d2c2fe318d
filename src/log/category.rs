use std::{fmt, str::FromStr};

/// Classification attached to every log message.
///
/// Ordered from least to most severe. `Fatal` is the only terminal category:
/// writing it ends the process once delivery has been attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Fine-grained information that is mostly useful while debugging.
    Debug,
    /// Regular progress and usage messages.
    Info,
    /// Potentially harmful situations.
    Warning,
    /// Errors that still allow the program to keep running.
    Error,
    /// Unrecoverable errors. Terminates the process.
    Fatal,
}

impl Category {
    /// All categories, least severe first.
    pub const ALL: [Category; 5] = [
        Category::Debug,
        Category::Info,
        Category::Warning,
        Category::Error,
        Category::Fatal,
    ];

    /// Stable lowercase label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Debug => "debug",
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Error => "error",
            Category::Fatal => "fatal",
        }
    }

    /// Whether writing a message of this category terminates the process.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Category::Fatal)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Category::Debug),
            "info" => Ok(Category::Info),
            "warning" | "warn" => Ok(Category::Warning),
            "error" => Ok(Category::Error),
            "fatal" => Ok(Category::Fatal),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}
