//! Product definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProductError;

/// The kind of case a product is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseType {
    /// Household
    #[serde(rename = "HH")]
    Household,
    /// Individual within a household
    #[serde(rename = "HI")]
    Individual,
    /// Communal establishment
    #[serde(rename = "CE")]
    Establishment,
}

/// How a fulfilment reaches the respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeliveryChannel {
    Post,
    Sms,
    Email,
}

/// Geographic region a product is available in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// England
    #[serde(rename = "E")]
    England,
    /// Wales
    #[serde(rename = "W")]
    Wales,
    /// Northern Ireland
    #[serde(rename = "N")]
    NorthernIreland,
}

impl Region {
    /// Returns the region code used by case records and the catalog
    pub fn code(&self) -> &'static str {
        match self {
            Region::England => "E",
            Region::Wales => "W",
            Region::NorthernIreland => "N",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(Region::England),
            "W" => Ok(Region::Wales),
            "N" => Ok(Region::NorthernIreland),
            other => Err(ProductError::UnknownRegion(other.to_string())),
        }
    }
}

/// Channel through which a fulfilment request may be made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestChannel {
    /// Contact centre
    #[serde(rename = "CC")]
    ContactCentre,
    /// Respondent home (this service)
    #[serde(rename = "RH")]
    RespondentHome,
    /// Field staff
    #[serde(rename = "FIELD")]
    Field,
}

/// A fulfilment product from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub fulfilment_code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub case_type: CaseType,
    pub delivery_channel: DeliveryChannel,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub request_channels: Vec<RequestChannel>,
}

impl Product {
    /// Returns true when the product targets an individual rather than the
    /// whole household or establishment
    pub fn is_individual(&self) -> bool {
        self.case_type == CaseType::Individual
    }
}
