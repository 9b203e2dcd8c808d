//! Unique property reference number

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A unique property reference number (UPRN) identifying a physical address.
///
/// UPRNs are positive integers of at most thirteen digits. They are stored
/// as strings in the case records, so the value object owns both the parsing
/// and the canonical string rendering used for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniquePropertyReferenceNumber(u64);

impl UniquePropertyReferenceNumber {
    /// Largest UPRN accepted
    pub const MAX: u64 = 9_999_999_999_999;

    /// Creates a UPRN, rejecting values outside the valid range
    pub fn new(value: u64) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::validation(format!(
                "UPRN {} exceeds maximum of {}",
                value,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UniquePropertyReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UniquePropertyReferenceNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::validation(format!("Invalid UPRN: {}", s)))?;
        Self::new(value)
    }
}

impl TryFrom<String> for UniquePropertyReferenceNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UniquePropertyReferenceNumber> for String {
    fn from(uprn: UniquePropertyReferenceNumber) -> String {
        uprn.to_string()
    }
}
