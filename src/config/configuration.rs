//! Game configuration values.

use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use tracing::{debug, instrument};

use super::error::InconsistentConfiguration;

/// Lower bound used when the source does not set `minimum`.
pub const DEFAULT_MIN: i64 = 0;

/// Upper bound used when the source does not set `maximum`.
pub const DEFAULT_MAX: i64 = 100;

/// Attempt budget used when the source does not set `attempts`.
pub const DEFAULT_ATTEMPTS: i64 = 10;

/// Parsed game configuration: the guessing range and the attempt budget.
///
/// May be inconsistent. Call [`Configuration::validate`] before handing it to
/// a [`GameState`](crate::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, new)]
pub struct Configuration {
    /// Smallest number that may be drawn or guessed.
    min: i64,
    /// Largest number that may be drawn or guessed.
    max: i64,
    /// Number of guesses allowed per game.
    attempts: i64,
}

impl Configuration {
    /// Returns `true` when `min < max` and `attempts > 0`.
    pub fn is_consistent(&self) -> bool {
        self.min < self.max && self.attempts > 0
    }

    /// Checks consistency, freezing the value into a [`ValidConfiguration`].
    ///
    /// # Errors
    ///
    /// Returns [`InconsistentConfiguration`] carrying the offending values.
    #[instrument]
    pub fn validate(self) -> Result<ValidConfiguration, InconsistentConfiguration> {
        if self.is_consistent() {
            debug!("Configuration is consistent");
            Ok(ValidConfiguration(self))
        } else {
            Err(InconsistentConfiguration {
                min: self.min,
                max: self.max,
                attempts: self.attempts,
            })
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_MIN, DEFAULT_MAX, DEFAULT_ATTEMPTS)
    }
}

/// A configuration known to satisfy `min < max` and `attempts > 0`.
///
/// Only obtainable through [`Configuration::validate`] or [`Default`], so a
/// [`GameState`](crate::GameState) can never be built from bad bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidConfiguration(Configuration);

impl ValidConfiguration {
    /// Lower bound of the range.
    pub fn min(&self) -> i64 {
        self.0.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> i64 {
        self.0.max
    }

    /// Attempt budget.
    pub fn attempts(&self) -> i64 {
        self.0.attempts
    }

    /// Returns the underlying configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.0
    }
}

impl Default for ValidConfiguration {
    fn default() -> Self {
        Self(Configuration::default())
    }
}

/// Accumulates configuration fields as they are parsed.
///
/// Fields never set keep the `DEFAULT_*` values.
///
/// ```
/// use draw_number::ConfigurationBuilder;
///
/// let config = ConfigurationBuilder::default().min(1).max(10).build();
/// assert_eq!(*config.attempts(), draw_number::DEFAULT_ATTEMPTS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
pub struct ConfigurationBuilder {
    /// Lower bound.
    min: i64,
    /// Upper bound.
    max: i64,
    /// Attempt budget.
    attempts: i64,
}

impl ConfigurationBuilder {
    /// Freezes the accumulated fields.
    pub fn build(self) -> Configuration {
        Configuration::new(self.min, self.max, self.attempts)
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}
