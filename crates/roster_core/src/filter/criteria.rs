//! Filter criteria types and parsing.

use crate::config::{RosterConfig, ALL_CITIES};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Criteria parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    UnknownStatus(String),
    /// City is neither `All` nor one of the configured cities.
    UnknownCity(String),
}

impl Display for CriteriaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatus(value) => write!(
                f,
                "unknown status filter `{value}`; expected All|Active|Inactive"
            ),
            Self::UnknownCity(value) => write!(f, "unknown city filter `{value}`"),
        }
    }
}

impl Error for CriteriaError {}

/// Completion status filter.
///
/// `Active` keeps completed records, `Inactive` keeps the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn accepts(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => completed,
            Self::Inactive => !completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CriteriaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CriteriaError::UnknownStatus(value.to_string())),
        }
    }
}

/// City filter over `UserRecord::country`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityFilter {
    #[default]
    All,
    /// Exact, case-sensitive match.
    Only(String),
}

impl CityFilter {
    /// Parses a menu value against the configured closed set of cities.
    pub fn parse(value: &str, config: &RosterConfig) -> Result<Self, CriteriaError> {
        if value == ALL_CITIES {
            return Ok(Self::All);
        }
        if config.is_known_city(value) {
            return Ok(Self::Only(value.to_string()));
        }
        Err(CriteriaError::UnknownCity(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CITIES,
            Self::Only(city) => city.as_str(),
        }
    }

    pub fn accepts(&self, country: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(city) => city == country,
        }
    }
}

/// Active query driving the visible list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring over name/email/phone/country.
    pub query: String,
    pub status: StatusFilter,
    pub city: CityFilter,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, status: StatusFilter, city: CityFilter) -> Self {
        Self {
            query: query.into(),
            status,
            city,
        }
    }

    /// Returns whether the criteria keep every record.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.status == StatusFilter::All && self.city == CityFilter::All
    }
}
