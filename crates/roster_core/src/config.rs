//! Roster configuration.
//!
//! # Responsibility
//! - Hold the closed set of cities offered by the city filter.
//! - Hold the placeholder photo used for new drafts.
//!
//! # Invariants
//! - `cities` is non-empty, has no blank or duplicate entries and never
//!   contains the `All` wildcard.

use crate::model::user::DEFAULT_PHOTO;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wildcard value shown in front of the configured cities.
pub const ALL_CITIES: &str = "All";

const DEFAULT_CITIES: &[&str] = &["USA", "Pamir", "DuBAi", "Brasil", "Canada"];

/// Configuration loading/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    NoCities,
    BlankCity,
    DuplicateCity(String),
    /// `All` is reserved for the filter wildcard.
    ReservedCity,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid config json: {err}"),
            Self::NoCities => write!(f, "config must declare at least one city"),
            Self::BlankCity => write!(f, "config city names cannot be blank"),
            Self::DuplicateCity(city) => write!(f, "duplicate city in config: `{city}`"),
            Self::ReservedCity => write!(f, "`{ALL_CITIES}` is reserved and cannot be a city"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Static roster settings supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Valid values for the city filter, in menu order.
    pub cities: Vec<String>,
    /// Photo reference assigned to new drafts.
    pub default_photo: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(|city| city.to_string()).collect(),
            default_photo: DEFAULT_PHOTO.to_string(),
        }
    }
}

impl RosterConfig {
    /// Parses and validates a JSON config document.
    ///
    /// Missing keys fall back to defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cities.is_empty() {
            return Err(ConfigError::NoCities);
        }

        let mut seen = BTreeSet::<&str>::new();
        for city in &self.cities {
            if city.trim().is_empty() {
                return Err(ConfigError::BlankCity);
            }
            if city == ALL_CITIES {
                return Err(ConfigError::ReservedCity);
            }
            if !seen.insert(city.as_str()) {
                return Err(ConfigError::DuplicateCity(city.clone()));
            }
        }
        Ok(())
    }

    /// Exact, case-sensitive membership check.
    pub fn is_known_city(&self, city: &str) -> bool {
        self.cities.iter().any(|known| known == city)
    }

    /// City menu entries: the wildcard followed by configured cities.
    pub fn city_options(&self) -> Vec<String> {
        std::iter::once(ALL_CITIES.to_string())
            .chain(self.cities.iter().cloned())
            .collect()
    }
}
