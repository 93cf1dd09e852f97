//! Deck construction options.

use crate::messages::unknown_value;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{}", unknown_value(.field, .value))]
    UnknownValue { field: &'static str, value: String },
}

/// Options recognized when building a poker deck.
///
/// ```
/// use deck_rs::config::PokerConfig;
///
/// assert!(PokerConfig::default().ace_high);
/// assert!(!PokerConfig::default().with_ace_high(false).ace_high);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PokerConfig {
    /// Ace ranks above the King (order 14) instead of below the Two (order 1).
    pub ace_high: bool,
}

impl Default for PokerConfig {
    fn default() -> Self {
        Self { ace_high: true }
    }
}

impl PokerConfig {
    pub const ACE_HIGH: &'static str = "ace_high";

    #[must_use]
    pub const fn with_ace_high(mut self, ace_high: bool) -> Self {
        self.ace_high = ace_high;
        self
    }

    /// Builds a config from string options, starting from the defaults.
    ///
    /// Keys other than `ace_high` are ignored.
    ///
    /// ```
    /// use deck_rs::config::PokerConfig;
    ///
    /// let config = PokerConfig::from_pairs([("ace_high", "no"), ("jokers", "2")]).unwrap();
    /// assert!(!config.ace_high);
    /// assert!(PokerConfig::from_pairs([("ace_high", "maybe")]).is_err());
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            if key.as_ref().trim() == Self::ACE_HIGH {
                config.ace_high = parse_flag(Self::ACE_HIGH, value.as_ref())?;
            }
        }
        Ok(config)
    }
}

/// Per-variant options handed to [`DeckFactory`](crate::factory::DeckFactory).
///
/// Only the section for the requested deck type is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DeckConfig {
    pub poker: PokerConfig,
}

impl DeckConfig {
    #[must_use]
    pub const fn with_poker(mut self, poker: PokerConfig) -> Self {
        self.poker = poker;
        self
    }
}

impl From<PokerConfig> for DeckConfig {
    fn from(poker: PokerConfig) -> Self {
        Self { poker }
    }
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::UnknownValue { field, value: value.to_string() }),
    }
}
