use crate::{
    config::{Config, ConfigError, expand_path},
    log::{
        logger::Logger,
        message_buffer::{INITIAL_BUFFER_SIZE, MAX_BUFFER_SIZE},
    },
};

use std::path::PathBuf;

/// Config section read by [`LoggerSettings::from_config`].
pub const LOGGING_SECTION: &str = "Logging";

/// Typed view of the `[Logging]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSettings {
    pub enabled: bool,
    pub initial_buffer_size: usize,
    pub max_buffer_size: usize,
    pub message_coloring: bool,
    /// Directory for a timestamped log file, `~` expanded.
    pub log_dir: Option<PathBuf>,
    /// Prefix of the log file name.
    pub log_filename: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_buffer_size: INITIAL_BUFFER_SIZE,
            max_buffer_size: MAX_BUFFER_SIZE,
            message_coloring: false,
            log_dir: None,
            log_filename: None,
        }
    }
}

impl LoggerSettings {
    /// Reads settings, keeping defaults for absent keys.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when a present key does not parse.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let s = LOGGING_SECTION;

        Ok(Self {
            enabled: config.parse_value(s, "enabled")?.unwrap_or(defaults.enabled),
            initial_buffer_size: config
                .parse_value(s, "initial_buffer_size")?
                .unwrap_or(defaults.initial_buffer_size),
            max_buffer_size: config
                .parse_value(s, "max_buffer_size")?
                .unwrap_or(defaults.max_buffer_size),
            message_coloring: config
                .parse_value(s, "message_coloring")?
                .unwrap_or(defaults.message_coloring),
            log_dir: config.get_non_empty(s, "log_dir").map(expand_path),
            log_filename: config.get_non_empty(s, "log_filename").map(str::to_owned),
        })
    }

    /// A logger with these buffer limits and enabled state, and no targets.
    #[must_use]
    pub fn build_logger<'t>(&self) -> Logger<'t> {
        let mut logger = Logger::with_buffer_limits(self.initial_buffer_size, self.max_buffer_size);
        logger.set_enabled(self.enabled);
        logger
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn empty_config_gives_defaults() {
        let settings = LoggerSettings::from_config(&Config::empty()).unwrap();
        assert_eq!(settings, LoggerSettings::default());

        let logger = settings.build_logger();
        assert!(logger.is_enabled());
        assert_eq!(logger.buffer_size(), INITIAL_BUFFER_SIZE);
    }

    #[test]
    fn reads_logging_section() {
        let config = Config::parse(
            "[Logging]\n\
             enabled = false\n\
             initial_buffer_size = 64\n\
             max_buffer_size = 256\n\
             message_coloring = true\n\
             log_dir = /tmp/fanlog\n\
             log_filename = tool\n",
        );
        let settings = LoggerSettings::from_config(&config).unwrap();
        assert!(!settings.enabled);
        assert!(settings.message_coloring);
        assert_eq!(settings.log_dir, Some(PathBuf::from("/tmp/fanlog")));
        assert_eq!(settings.log_filename.as_deref(), Some("tool"));

        let logger = settings.build_logger();
        assert!(!logger.is_enabled());
        assert_eq!(logger.buffer_size(), 64);
    }

    #[test]
    fn rejects_non_boolean_flag() {
        let config = Config::parse("[Logging]\nenabled = sometimes\n");
        let err = LoggerSettings::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }
}
