//! Collection case records
//!
//! The JSON shape mirrors the case feed published by case management, so
//! records can be stored and re-read without a separate persistence model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CaseId, UniquePropertyReferenceNumber};

/// Housing classification of a sampled address
///
/// Codes this service does not act on are carried verbatim so a stored
/// case always reads back exactly as case management sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AddressType {
    /// Household
    Household,
    /// Communal establishment (care home, student halls, ...)
    Establishment,
    /// Shared property group
    SharedPropertyGroup,
    /// Any other code
    Other(String),
}

impl AddressType {
    /// Returns the code used in case records
    pub fn code(&self) -> &str {
        match self {
            AddressType::Household => "HH",
            AddressType::Establishment => "CE",
            AddressType::SharedPropertyGroup => "SPG",
            AddressType::Other(code) => code,
        }
    }
}

impl From<String> for AddressType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "HH" => AddressType::Household,
            "CE" => AddressType::Establishment,
            "SPG" => AddressType::SharedPropertyGroup,
            _ => AddressType::Other(code),
        }
    }
}

impl From<AddressType> for String {
    fn from(address_type: AddressType) -> String {
        match address_type {
            AddressType::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Address of a sampled unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: Option<String>,
    pub town_name: String,
    pub postcode: String,
    /// Raw region code (`E`, `W`, `N`) as held by the case store
    pub region: String,
    pub address_type: AddressType,
    #[serde(default)]
    pub estab_type: Option<String>,
    #[serde(default)]
    pub uprn: Option<UniquePropertyReferenceNumber>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub arid: Option<String>,
}

/// A case record as held by the case store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCase {
    pub id: CaseId,
    #[serde(default)]
    pub case_ref: Option<String>,
    #[serde(default)]
    pub survey: Option<String>,
    #[serde(default)]
    pub collection_exercise_id: Option<String>,
    #[serde(default)]
    pub actionable_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: Option<String>,
    pub address: Address,
}

impl CollectionCase {
    /// Returns true when the case address is a household
    pub fn is_household(&self) -> bool {
        self.address.address_type == AddressType::Household
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASE_JSON: &str = r#"{
        "id": "bbd55984-0dbf-4499-bfa7-0aa4228700e9",
        "caseRef": "10000000010",
        "survey": "CENSUS",
        "collectionExerciseId": "n66de4dc-3c3b-11e9-b210-d663bd873d93",
        "actionableFrom": "2019-04-29T12:00:00Z",
        "state": "ACTIONABLE",
        "address": {
            "addressLine1": "1 main street",
            "addressLine2": "upper upperingham",
            "townName": "upton",
            "postcode": "UP103UP",
            "region": "E",
            "addressType": "HH",
            "uprn": "123456",
            "latitude": "50.863849",
            "longitude": "-1.229710"
        }
    }"#;

    #[test]
    fn test_deserialize_case_feed_record() {
        let case: CollectionCase = serde_json::from_str(CASE_JSON).unwrap();
        assert_eq!(case.case_ref.as_deref(), Some("10000000010"));
        assert_eq!(case.address.region, "E");
        assert_eq!(case.address.uprn.map(|u| u.value()), Some(123456));
        assert!(case.is_household());
        assert!(case.address.address_line3.is_none());
    }

    #[test]
    fn test_unknown_address_type_is_tolerated() {
        let json = CASE_JSON.replace("\"HH\"", "\"XX\"");
        let case: CollectionCase = serde_json::from_str(&json).unwrap();
        assert_eq!(case.address.address_type, AddressType::Other("XX".to_string()));
        assert!(!case.is_household());
    }

    #[test]
    fn test_unknown_address_type_is_written_back_unchanged() {
        let json = CASE_JSON.replace("\"HH\"", "\"XX\"");
        let case: CollectionCase = serde_json::from_str(&json).unwrap();

        let back = serde_json::to_value(&case).unwrap();

        assert_eq!(back["address"]["addressType"], "XX");
        assert_eq!(case.address.address_type.to_string(), "XX");
    }

    #[test]
    fn test_address_type_codes() {
        assert_eq!(AddressType::Household.to_string(), "HH");
        assert_eq!(AddressType::Establishment.code(), "CE");
        assert_eq!(AddressType::SharedPropertyGroup.code(), "SPG");
        assert_eq!(AddressType::from("CE".to_string()), AddressType::Establishment);
        assert_eq!(String::from(AddressType::Household), "HH");
    }
}
