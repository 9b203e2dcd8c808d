//! Pre-built Test Fixtures
//!
//! Ready-to-use cases, UACs and products for the common scenarios.

use core_kernel::{CaseId, UniquePropertyReferenceNumber};
use domain_case::{AddressType, CollectionCase, Uac};
use domain_product::{CaseType, DeliveryChannel, Product};
use uuid::Uuid;

use crate::builders::{CollectionCaseBuilder, ProductBuilder};

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// UPRN shared by the default cases
    pub const UPRN: u64 = 100_041_045_018;

    /// A telephone number reserved for drama use
    pub fn tel_no() -> &'static str {
        "07700900000"
    }

    /// A case reference
    pub fn case_ref() -> &'static str {
        "10000000010"
    }

    /// First address line
    pub fn address_line1() -> &'static str {
        "1 Main Street"
    }

    /// Town name
    pub fn town_name() -> &'static str {
        "Upton"
    }

    /// Postcode
    pub fn postcode() -> &'static str {
        "UP10 3UP"
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// A case id that is stable across test runs
    pub fn case_id() -> CaseId {
        CaseId::from_uuid(Uuid::from_u128(0x3305e937_6fb1_4ce1_9d4c_077f147789ab))
    }

    /// The default UPRN
    pub fn uprn() -> UniquePropertyReferenceNumber {
        UniquePropertyReferenceNumber::new(StringFixtures::UPRN)
            .unwrap_or_else(|e| panic!("fixture UPRN is invalid: {e}"))
    }
}

/// Fixture for collection cases
pub struct CaseFixtures;

impl CaseFixtures {
    /// Household case in England
    pub fn household_in_england() -> CollectionCase {
        CollectionCaseBuilder::new().build()
    }

    /// Household case in Wales
    pub fn household_in_wales() -> CollectionCase {
        CollectionCaseBuilder::new().with_region("W").build()
    }

    /// Communal establishment case sharing the default UPRN
    pub fn establishment() -> CollectionCase {
        CollectionCaseBuilder::new()
            .with_address_type(AddressType::Establishment)
            .with_address_line1("Upton Care Home")
            .build()
    }

    /// Case whose stored region is not a known code
    pub fn with_bad_region() -> CollectionCase {
        CollectionCaseBuilder::new().with_region("England").build()
    }
}

/// Fixture for unique access codes
pub struct UacFixtures;

impl UacFixtures {
    /// Hash of an active household UAC
    pub const HASH: &'static str =
        "72C84BA99D77EE766E9468A0DE36433A44888E5DEC4AFB84F8019777800B7364";

    /// Active household UAC unlocking the given case
    pub fn household_for(case_id: CaseId) -> Uac {
        Uac {
            uac_hash: Self::HASH.to_string(),
            active: true,
            questionnaire_id: Some("1110000009".to_string()),
            case_type: Some("HH".to_string()),
            region: Some("E".to_string()),
            case_id: Some(case_id),
            collection_exercise_id: None,
            form_type: Some("H".to_string()),
        }
    }
}

/// Fixture for products
pub struct ProductFixtures;

impl ProductFixtures {
    /// Household access code by SMS in England
    pub fn household_sms(code: &str) -> Product {
        ProductBuilder::new(code)
            .with_description("Household Unique Access Code via SMS")
            .build()
    }

    /// Individual access code by SMS in England
    pub fn individual_sms(code: &str) -> Product {
        ProductBuilder::new(code)
            .with_case_type(CaseType::Individual)
            .with_description("Individual Unique Access Code via SMS")
            .build()
    }

    /// Household paper questionnaire in England
    pub fn household_post(code: &str) -> Product {
        ProductBuilder::new(code)
            .with_delivery_channel(DeliveryChannel::Post)
            .build()
    }
}
