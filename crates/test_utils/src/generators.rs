//! Property-Based Test Generators
//!
//! Proptest strategies producing cases, phone numbers and fulfilment codes.

use core_kernel::{CaseId, UniquePropertyReferenceNumber};
use domain_case::{AddressType, CollectionCase};
use proptest::prelude::*;
use uuid::Uuid;

use crate::builders::CollectionCaseBuilder;

/// Strategy for case ids
pub fn case_id_strategy() -> impl Strategy<Value = CaseId> {
    any::<u128>().prop_map(|n| CaseId::from_uuid(Uuid::from_u128(n)))
}

/// Strategy for every address type, including unrecognised ones
pub fn address_type_strategy() -> impl Strategy<Value = AddressType> {
    prop_oneof![
        Just(AddressType::Household),
        Just(AddressType::Establishment),
        Just(AddressType::SharedPropertyGroup),
        "[A-Z]{1,3}".prop_map(AddressType::from),
    ]
}

/// Strategy for stored region codes, valid ones only
pub fn region_code_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("E"), Just("W"), Just("N")]
}

/// Strategy for telephone numbers in the shapes respondents type them
pub fn tel_no_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "07[0-9]{9}",
        "\\+447[0-9]{9}",
        "07[0-9]{3} [0-9]{6}",
        "[0-9]{7,15}",
    ]
}

/// Strategy for fulfilment codes
pub fn fulfilment_code_strategy() -> impl Strategy<Value = String> {
    "[A-Z_]{2,8}[0-9]{0,2}W?"
}

/// Strategy for cases recorded against one UPRN
pub fn cases_at_uprn_strategy(
    uprn: UniquePropertyReferenceNumber,
) -> impl Strategy<Value = Vec<CollectionCase>> {
    prop::collection::vec((case_id_strategy(), address_type_strategy()), 0..8).prop_map(
        move |entries| {
            entries
                .into_iter()
                .map(|(id, address_type)| {
                    CollectionCaseBuilder::new()
                        .with_id(id)
                        .with_address_type(address_type)
                        .with_uprn(uprn)
                        .build()
                })
                .collect()
        },
    )
}
