//! The `fanlog` command-line tool.
//!
//! Builds a logger with exactly one target chosen from the command line and
//! writes a single categorized message through it. Usage text and parse
//! diagnostics are reported through the same logger.

use crate::{
    config::Config,
    log::{Category, FormattingFlags, LogTarget, Logger, LoggerSettings},
    log_write,
    targets::{ConsoleLogTarget, FileLogTarget, StreamLogTarget},
};

use clap::{CommandFactory, Parser, error::ErrorKind};
use std::{
    ffi::OsString,
    io::{self, Stderr},
    path::PathBuf,
};

/// Process exit status for a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit status for usage errors and fatal messages.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug, Clone)]
#[command(name = "fanlog")]
#[command(about = "Write a categorized message through a fanlog logger")]
pub struct CliArgs {
    #[arg(long, help = "enable message coloring")]
    pub message_coloring: bool,

    #[arg(long, value_name = "PATH", help = "append messages to a file instead of stderr")]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "read [Logging] settings from a config file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        short,
        default_value = "info",
        help = "message category (debug, info, warning, error, fatal)"
    )]
    pub category: Category,

    #[arg(long, help = "disable the logger before writing")]
    pub disabled: bool,

    /// Message words, joined with spaces.
    pub message: Vec<String>,
}

/// The single target a tool invocation writes to.
enum ToolTarget {
    Console(ConsoleLogTarget),
    Stream(StreamLogTarget<Stderr>),
    File(FileLogTarget),
}

impl ToolTarget {
    fn select(args: Option<&CliArgs>, settings: &LoggerSettings, coloring: bool) -> io::Result<Self> {
        if let Some(path) = args.and_then(|a| a.log_file.as_ref()) {
            return FileLogTarget::open(path).map(ToolTarget::File);
        }
        if let Some(dir) = &settings.log_dir {
            let name = settings.log_filename.as_deref().or(Some("fanlog"));
            return Ok(ToolTarget::File(FileLogTarget::create_in_dir(dir, name)));
        }
        if coloring || settings.message_coloring {
            return Ok(ToolTarget::Console(ConsoleLogTarget::stderr()));
        }
        Ok(ToolTarget::Stream(StreamLogTarget::new(io::stderr())))
    }

    fn set_formatting_flags(&mut self, category: Category, flags: FormattingFlags) {
        match self {
            ToolTarget::Console(t) => t.set_formatting_flags(category, flags),
            ToolTarget::Stream(t) => t.set_formatting_flags(category, flags),
            ToolTarget::File(t) => t.set_formatting_flags(category, flags),
        }
    }

    fn as_target(&self) -> &dyn LogTarget {
        match self {
            ToolTarget::Console(t) => t,
            ToolTarget::Stream(t) => t,
            ToolTarget::File(t) => t,
        }
    }
}

/// Runs the tool on `argv` (program name first) and returns the exit status.
///
/// Does not return when the message category is `fatal`: the process exits
/// with status 1 after the message has been delivered.
pub fn run<I, T>(argv: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let parsed = CliArgs::try_parse_from(&argv);

    // Diagnostics must go through the target the user asked for, even when
    // the rest of the command line is invalid.
    let coloring = match &parsed {
        Ok(args) => args.message_coloring,
        Err(_) => argv.iter().any(|a| a == "--message-coloring"),
    };

    let (settings, settings_error) = match parsed.as_ref().ok().and_then(|a| a.config.as_ref()) {
        Some(path) => match Config::load(path).and_then(|c| LoggerSettings::from_config(&c)) {
            Ok(settings) => (settings, None),
            Err(e) => (LoggerSettings::default(), Some(e)),
        },
        None => (LoggerSettings::default(), None),
    };

    let mut target = match ToolTarget::select(parsed.as_ref().ok(), &settings, coloring) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("fanlog: cannot open log file: {e}");
            return EXIT_FAILURE;
        }
    };
    target.set_formatting_flags(Category::Info, FormattingFlags::MESSAGE);

    let mut logger = settings.build_logger();
    logger.add_target(target.as_target());

    if let Some(e) = settings_error {
        log_write!(logger, Category::Error, "{e}");
        return EXIT_FAILURE;
    }

    let args = match parsed {
        Ok(args) => args,
        Err(e) => return report_parse_error(&mut logger, &e),
    };

    if args.message.is_empty() {
        print_program_usage(&mut logger);
        return EXIT_SUCCESS;
    }

    if args.disabled {
        logger.set_enabled(false);
    }
    log_write!(logger, args.category, "{}", args.message.join(" "));

    EXIT_SUCCESS
}

fn report_parse_error(logger: &mut Logger<'_>, err: &clap::Error) -> u8 {
    let text = err.render().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            log_write!(logger, Category::Info, "{}", text.trim_end());
            EXIT_SUCCESS
        }
        _ => {
            log_write!(logger, Category::Error, "{}", text.trim_end());
            EXIT_FAILURE
        }
    }
}

fn print_program_usage(logger: &mut Logger<'_>) {
    let help = CliArgs::command().render_help().to_string();
    log_write!(logger, Category::Info, "usage: fanlog [options] message...");
    log_write!(logger, Category::Info, "{}", help.trim_end());
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn parses_category_and_message() {
        let args = CliArgs::try_parse_from(["fanlog", "--category", "warning", "disk", "full"]).unwrap();
        assert_eq!(args.category, Category::Warning);
        assert_eq!(args.message, ["disk", "full"]);
        assert!(!args.message_coloring);
    }

    #[test]
    fn defaults_to_info() {
        let args = CliArgs::try_parse_from(["fanlog", "hello"]).unwrap();
        assert_eq!(args.category, Category::Info);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn rejects_unknown_category() {
        let err = CliArgs::try_parse_from(["fanlog", "-c", "loud", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn log_file_wins_over_coloring() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tool.log");
        let args = CliArgs::try_parse_from([
            OsString::from("fanlog"),
            OsString::from("--message-coloring"),
            OsString::from("--log-file"),
            path.clone().into_os_string(),
            OsString::from("x"),
        ])
        .unwrap();

        let target = ToolTarget::select(Some(&args), &LoggerSettings::default(), true).unwrap();
        assert!(matches!(target, ToolTarget::File(ref f) if f.path() == path));
    }

    #[test]
    fn plain_stream_without_coloring() {
        let target = ToolTarget::select(None, &LoggerSettings::default(), false).unwrap();
        assert!(matches!(target, ToolTarget::Stream(_)));

        let target = ToolTarget::select(None, &LoggerSettings::default(), true).unwrap();
        assert!(matches!(target, ToolTarget::Console(_)));
    }

    #[test]
    fn run_writes_message_to_log_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.log");
        let code = run([
            OsString::from("fanlog"),
            OsString::from("--log-file"),
            path.clone().into_os_string(),
            OsString::from("-c"),
            OsString::from("warning"),
            OsString::from("careful"),
        ]);

        assert_eq!(code, EXIT_SUCCESS);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "warning | careful\n");
    }

    #[test]
    fn usage_goes_through_the_selected_target() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("usage.log");
        let code = run([
            OsString::from("fanlog"),
            OsString::from("--log-file"),
            path.clone().into_os_string(),
        ]);

        assert_eq!(code, EXIT_SUCCESS);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("usage: fanlog [options] message...\n"), "got {content:?}");
        assert!(content.contains("--log-file"), "got {content:?}");
    }
}
