//! External representation of a case

use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, UniquePropertyReferenceNumber};

use crate::case::{AddressType, CollectionCase};

/// Case details returned to respondents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    pub case_id: CaseId,
    pub case_ref: Option<String>,
    pub address_type: AddressType,
    pub state: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub town_name: String,
    pub region: String,
    pub postcode: String,
    pub uprn: Option<UniquePropertyReferenceNumber>,
}

impl From<&CollectionCase> for CaseSummary {
    fn from(case: &CollectionCase) -> Self {
        let address = &case.address;
        Self {
            case_id: case.id,
            case_ref: case.case_ref.clone(),
            address_type: address.address_type.clone(),
            state: case.state.clone(),
            address_line1: address.address_line1.clone(),
            address_line2: address.address_line2.clone(),
            address_line3: address.address_line3.clone(),
            town_name: address.town_name.clone(),
            region: address.region.clone(),
            postcode: address.postcode.clone(),
            uprn: address.uprn,
        }
    }
}
