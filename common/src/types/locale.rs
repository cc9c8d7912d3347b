use crate::errors::ConfigError;
use crate::constants::LOCALE_VAR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for on-screen text and speech.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ur,
}

impl Locale {
    /// BCP 47 tag handed to speech engines.
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Ur => "ur-PK",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ur => write!(f, "ur"),
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" => Ok(Locale::En),
            "ur" | "ur-pk" => Ok(Locale::Ur),
            _ => Err(ConfigError::InvalidValue {
                key: LOCALE_VAR,
                value: s.to_string(),
            }),
        }
    }
}
