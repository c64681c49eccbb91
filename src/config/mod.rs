//! Game configuration: parsing, defaults and validation.

mod configuration;
mod error;
mod parser;

pub use configuration::{
    Configuration, ConfigurationBuilder, DEFAULT_ATTEMPTS, DEFAULT_MAX, DEFAULT_MIN,
    ValidConfiguration,
};
pub use error::{ConfigError, ConfigErrorKind, InconsistentConfiguration};
pub use parser::{ConfigKey, ConfigParser, ConfigSource};
