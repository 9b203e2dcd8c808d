//! Test Data Builders
//!
//! Builders let tests state only the fields they care about and take
//! defaults for everything else.

use core_kernel::{CaseId, UniquePropertyReferenceNumber};
use domain_case::{Address, AddressType, CollectionCase};
use domain_product::{CaseType, DeliveryChannel, Product, Region, RequestChannel};

use crate::fixtures::StringFixtures;

/// Builder for collection cases
pub struct CollectionCaseBuilder {
    id: CaseId,
    case_ref: Option<String>,
    region: String,
    address_type: AddressType,
    uprn: Option<UniquePropertyReferenceNumber>,
    address_line1: String,
    postcode: String,
}

impl Default for CollectionCaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionCaseBuilder {
    /// Creates a household case in England with a fresh id
    pub fn new() -> Self {
        Self {
            id: CaseId::new(),
            case_ref: Some(StringFixtures::case_ref().to_string()),
            region: "E".to_string(),
            address_type: AddressType::Household,
            uprn: UniquePropertyReferenceNumber::new(StringFixtures::UPRN).ok(),
            address_line1: StringFixtures::address_line1().to_string(),
            postcode: StringFixtures::postcode().to_string(),
        }
    }

    /// Sets the case id
    pub fn with_id(mut self, id: CaseId) -> Self {
        self.id = id;
        self
    }

    /// Sets the case reference
    pub fn with_case_ref(mut self, case_ref: impl Into<String>) -> Self {
        self.case_ref = Some(case_ref.into());
        self
    }

    /// Sets the raw stored region code
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the address type
    pub fn with_address_type(mut self, address_type: AddressType) -> Self {
        self.address_type = address_type;
        self
    }

    /// Sets the UPRN
    pub fn with_uprn(mut self, uprn: UniquePropertyReferenceNumber) -> Self {
        self.uprn = Some(uprn);
        self
    }

    /// Sets the first address line
    pub fn with_address_line1(mut self, line: impl Into<String>) -> Self {
        self.address_line1 = line.into();
        self
    }

    /// Builds the case
    pub fn build(self) -> CollectionCase {
        CollectionCase {
            id: self.id,
            case_ref: self.case_ref,
            survey: Some("CENSUS".to_string()),
            collection_exercise_id: None,
            actionable_from: None,
            state: Some("ACTIONABLE".to_string()),
            address: Address {
                address_line1: self.address_line1,
                address_line2: None,
                address_line3: None,
                town_name: StringFixtures::town_name().to_string(),
                postcode: self.postcode,
                region: self.region,
                address_type: self.address_type,
                estab_type: None,
                uprn: self.uprn,
                latitude: None,
                longitude: None,
                arid: None,
            },
        }
    }
}

/// Builder for catalog products
pub struct ProductBuilder {
    fulfilment_code: String,
    description: Option<String>,
    case_type: CaseType,
    delivery_channel: DeliveryChannel,
    regions: Vec<Region>,
    request_channels: Vec<RequestChannel>,
}

impl ProductBuilder {
    /// Creates a household SMS product available in England through the
    /// contact centre and respondent home
    pub fn new(fulfilment_code: impl Into<String>) -> Self {
        Self {
            fulfilment_code: fulfilment_code.into(),
            description: None,
            case_type: CaseType::Household,
            delivery_channel: DeliveryChannel::Sms,
            regions: vec![Region::England],
            request_channels: vec![RequestChannel::ContactCentre, RequestChannel::RespondentHome],
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the case type
    pub fn with_case_type(mut self, case_type: CaseType) -> Self {
        self.case_type = case_type;
        self
    }

    /// Sets the delivery channel
    pub fn with_delivery_channel(mut self, channel: DeliveryChannel) -> Self {
        self.delivery_channel = channel;
        self
    }

    /// Replaces the regions
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    /// Replaces the request channels
    pub fn with_request_channels(mut self, channels: Vec<RequestChannel>) -> Self {
        self.request_channels = channels;
        self
    }

    /// Builds the product
    pub fn build(self) -> Product {
        Product {
            fulfilment_code: self.fulfilment_code,
            description: self.description,
            language: Some("eng".to_string()),
            case_type: self.case_type,
            delivery_channel: self.delivery_channel,
            regions: self.regions,
            request_channels: self.request_channels,
        }
    }
}
