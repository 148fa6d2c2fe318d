//! Per-category display settings shared by the concrete log targets.

use crate::log::category::Category;

use std::{fmt::Write as _, ops::BitOr, thread};

/// Set of fields a target shows for a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct FormattingFlags(u8);

impl FormattingFlags {
    pub const NOTHING: Self = Self(0);
    pub const CATEGORY: Self = Self(1 << 0);
    pub const FILE_NAME: Self = Self(1 << 1);
    pub const LINE_NUMBER: Self = Self(1 << 2);
    pub const TIMESTAMP: Self = Self(1 << 3);
    pub const THREAD_ID: Self = Self(1 << 4);
    pub const MESSAGE: Self = Self(1 << 5);
    pub const EVERYTHING: Self = Self(0b11_1111);

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for FormattingFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Display flags for every [`Category`], plus the renderer that applies them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetFormat {
    flags: [FormattingFlags; Category::ALL.len()],
}

impl Default for TargetFormat {
    fn default() -> Self {
        use FormattingFlags as F;

        let brief = F::CATEGORY | F::MESSAGE;
        let located = brief | F::FILE_NAME | F::LINE_NUMBER;
        Self {
            flags: [brief, brief, brief, located, located],
        }
    }
}

impl TargetFormat {
    /// A format that uses `flags` for every category.
    #[must_use]
    pub fn uniform(flags: FormattingFlags) -> Self {
        Self {
            flags: [flags; Category::ALL.len()],
        }
    }

    pub fn set_formatting_flags(&mut self, category: Category, flags: FormattingFlags) {
        self.flags[category.index()] = flags;
    }

    #[must_use]
    pub fn formatting_flags(&self, category: Category) -> FormattingFlags {
        self.flags[category.index()]
    }

    /// Builds the text a target should emit, one header per message line.
    ///
    /// Each line ends with `\n`. Returns `None` when the category displays
    /// nothing.
    ///
    /// Layout: `<timestamp> <thread> <category> | <file>(<line>) <message>`,
    /// skipping fields whose flag is not set.
    #[must_use]
    pub fn render(
        &self,
        category: Category,
        file: &str,
        line: u32,
        message: &str,
    ) -> Option<String> {
        let flags = self.formatting_flags(category);
        if flags.is_empty() {
            return None;
        }

        let header = build_header(flags, category, file, line);
        let mut out = String::with_capacity(header.len() + message.len() + 1);

        if !flags.contains(FormattingFlags::MESSAGE) {
            out.push_str(header.trim_end());
            out.push('\n');
            return Some(out);
        }

        // An empty message still yields one line.
        let mut lines = message.lines().peekable();
        if lines.peek().is_none() {
            out.push_str(header.trim_end());
            out.push('\n');
        }
        for text in lines {
            out.push_str(&header);
            out.push_str(text);
            out.push('\n');
        }
        Some(out)
    }
}

fn build_header(flags: FormattingFlags, category: Category, file: &str, line: u32) -> String {
    use FormattingFlags as F;

    let mut h = String::new();
    if flags.contains(F::TIMESTAMP) {
        let now = chrono::Local::now();
        let _ = write!(h, "{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
    }
    if flags.contains(F::THREAD_ID) {
        let _ = write!(h, "<{:?}> ", thread::current().id());
    }
    if flags.contains(F::CATEGORY) {
        let _ = write!(h, "{:<7} | ", category.name());
    }
    match (flags.contains(F::FILE_NAME), flags.contains(F::LINE_NUMBER)) {
        (true, true) => {
            let _ = write!(h, "{file}({line}) ");
        }
        (true, false) => {
            let _ = write!(h, "{file} ");
        }
        (false, true) => {
            let _ = write!(h, "({line}) ");
        }
        (false, false) => {}
    }
    h
}
