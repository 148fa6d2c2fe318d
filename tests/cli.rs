use std::fs;
use std::process::{Command, Output};

fn fanlog(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fanlog"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run fanlog")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn info_message_shows_text_only() {
    let out = fanlog(&["hello", "world"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stderr(&out), "hello world\n");
}

#[test]
fn error_message_shows_location() {
    let out = fanlog(&["--category", "error", "broken"]);
    assert_eq!(out.status.code(), Some(0));
    let err = stderr(&out);
    assert!(err.starts_with("error   | "), "got {err:?}");
    assert!(err.contains("cli.rs("), "got {err:?}");
    assert!(err.ends_with(") broken\n"), "got {err:?}");
}

#[test]
fn fatal_message_is_delivered_then_exits_with_failure() {
    let out = fanlog(&["--category", "fatal", "oom"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("oom"));
}

#[test]
fn fatal_exits_even_when_disabled() {
    let out = fanlog(&["--disabled", "--category", "fatal", "oom"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!stderr(&out).contains("oom"));
}

#[test]
fn disabled_logger_is_silent() {
    let out = fanlog(&["--disabled", "note"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}

#[test]
fn no_message_prints_usage() {
    let out = fanlog(&[]);
    assert_eq!(out.status.code(), Some(0));
    let err = stderr(&out);
    assert!(err.starts_with("usage: fanlog [options] message...\n"), "got {err:?}");
    assert!(err.contains("--message-coloring"));
}

#[test]
fn unknown_flag_is_reported_through_the_logger() {
    let out = fanlog(&["--bogus", "x"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("error   | "), "got {err:?}");
    assert!(err.contains("--bogus"));
}

#[test]
fn coloring_keeps_the_message() {
    let out = fanlog(&["--message-coloring", "-c", "warning", "tinted"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stderr(&out).contains("tinted"));
}

#[test]
fn fatal_to_log_file_is_flushed_before_exit() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("tool.log");
    let path_str = path.to_str().expect("utf-8 path");

    let out = fanlog(&["--log-file", path_str, "-c", "fatal", "disk", "gone"]);
    assert_eq!(out.status.code(), Some(1));

    let content = fs::read_to_string(&path).expect("log file");
    assert!(content.starts_with("fatal   | "), "got {content:?}");
    assert!(content.ends_with(") disk gone\n"), "got {content:?}");
}

#[test]
fn config_can_disable_logging() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let conf = tmp.path().join("fanlog.conf");
    fs::write(&conf, "[Logging]\nenabled = false\n").expect("write config");

    let out = fanlog(&["--config", conf.to_str().expect("utf-8 path"), "quiet"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}

#[test]
fn bad_config_value_is_an_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let conf = tmp.path().join("fanlog.conf");
    fs::write(&conf, "[Logging]\nmax_buffer_size = huge\n").expect("write config");

    let out = fanlog(&["--config", conf.to_str().expect("utf-8 path"), "x"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("huge"));
}

#[test]
fn config_directory_gets_a_timestamped_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let logs = tmp.path().join("logs");
    let conf = tmp.path().join("fanlog.conf");
    fs::write(
        &conf,
        format!("[Logging]\nlog_dir = {}\nlog_filename = tool\n", logs.display()),
    )
    .expect("write config");

    let out = fanlog(&["--config", conf.to_str().expect("utf-8 path"), "stored"]);
    assert_eq!(out.status.code(), Some(0));

    let entries: Vec<_> = fs::read_dir(&logs).expect("log dir").collect();
    assert_eq!(entries.len(), 1);
    let path = entries[0].as_ref().expect("entry").path();
    assert!(path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with("tool-")));
    assert_eq!(fs::read_to_string(path).expect("log file"), "stored\n");
}
