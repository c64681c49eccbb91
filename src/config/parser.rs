//! Line-oriented `key: value` configuration parser.
//!
//! The parser is forgiving: a bad line is reported through the caller's
//! callback and skipped, and the remaining lines are still applied.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use strum::{Display, EnumString};
use tracing::{debug, info, instrument, warn};

use super::configuration::ConfigurationBuilder;
use super::error::{ConfigError, ConfigErrorKind};

/// Keys recognized in a configuration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigKey {
    /// Lower bound of the range.
    Minimum,
    /// Upper bound of the range.
    Maximum,
    /// Attempt budget.
    Attempts,
}

/// Parses configuration text into a [`ConfigurationBuilder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigParser;

impl ConfigParser {
    /// Parses configuration held in memory.
    #[instrument(skip(text, report), fields(bytes = text.len()))]
    pub fn parse_str(text: &str, mut report: impl FnMut(ConfigError)) -> ConfigurationBuilder {
        text.lines()
            .enumerate()
            .fold(ConfigurationBuilder::default(), |builder, (idx, line)| {
                Self::parse_line(builder, idx + 1, line, &mut report)
            })
    }

    /// Parses configuration from a buffered reader.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and judged like any
    /// other line. A read failure stops parsing; fields set before the failure
    /// are kept.
    #[instrument(skip(reader, report))]
    pub fn parse_reader<R: BufRead>(
        reader: R,
        source_name: &str,
        mut report: impl FnMut(ConfigError),
    ) -> ConfigurationBuilder {
        let mut builder = ConfigurationBuilder::default();
        for (idx, line) in reader.split(b'\n').enumerate() {
            match line {
                Ok(bytes) => {
                    let line = String::from_utf8_lossy(&bytes);
                    let line = line.strip_suffix('\r').unwrap_or(&line);
                    builder = Self::parse_line(builder, idx + 1, line, &mut report);
                }
                Err(e) => {
                    warn!(error = %e, line_no = idx + 1, "Read failed, keeping parsed fields");
                    report(ConfigError::new(ConfigErrorKind::Unreadable {
                        source_name: source_name.to_string(),
                        reason: e.to_string(),
                    }));
                    break;
                }
            }
        }
        builder
    }

    /// Parses configuration from a file on disk.
    ///
    /// A missing or unreadable file is reported and yields a builder holding
    /// only defaults.
    #[instrument(skip(path, report), fields(path = %path.as_ref().display()))]
    pub fn read_file(
        path: impl AsRef<Path>,
        mut report: impl FnMut(ConfigError),
    ) -> ConfigurationBuilder {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        match File::open(path) {
            Ok(file) => {
                info!("Reading configuration file");
                Self::parse_reader(BufReader::new(file), &source_name, report)
            }
            Err(e) => {
                warn!(error = %e, "Configuration file unavailable");
                report(ConfigError::new(ConfigErrorKind::Unreadable {
                    source_name,
                    reason: e.to_string(),
                }));
                ConfigurationBuilder::default()
            }
        }
    }

    /// Applies a single line to the builder.
    fn parse_line(
        builder: ConfigurationBuilder,
        line_no: usize,
        line: &str,
        report: &mut impl FnMut(ConfigError),
    ) -> ConfigurationBuilder {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return builder;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            debug!(line_no, line, "Malformed line");
            report(ConfigError::new(ConfigErrorKind::MalformedLine {
                line_no,
                text: line.to_string(),
            }));
            return builder;
        };
        let (key, value) = (key.trim(), value.trim());

        let value = match value.parse::<i64>() {
            Ok(v) => v,
            Err(e) => {
                debug!(line_no, key, value, "Malformed value");
                report(ConfigError::new(ConfigErrorKind::MalformedValue {
                    line_no,
                    key: key.to_string(),
                    value: value.to_string(),
                    reason: e.to_string(),
                }));
                return builder;
            }
        };

        match ConfigKey::from_str(key) {
            Ok(ConfigKey::Minimum) => builder.min(value),
            Ok(ConfigKey::Maximum) => builder.max(value),
            Ok(ConfigKey::Attempts) => builder.attempts(value),
            Err(_) => {
                debug!(line_no, key, "Unrecognized key");
                report(ConfigError::new(ConfigErrorKind::UnrecognizedKey {
                    line_no,
                    key: key.to_string(),
                }));
                builder
            }
        }
    }
}

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file on disk.
    File(PathBuf),
    /// Configuration text held in memory.
    Text(String),
}

impl ConfigSource {
    /// Parses the source, reporting every problem through `report`.
    #[instrument(skip(report))]
    pub fn load(&self, report: impl FnMut(ConfigError)) -> ConfigurationBuilder {
        match self {
            Self::File(path) => ConfigParser::read_file(path, report),
            Self::Text(text) => ConfigParser::parse_str(text, report),
        }
    }
}
