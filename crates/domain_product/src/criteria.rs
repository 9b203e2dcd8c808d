//! Product search criteria

use crate::product::{CaseType, DeliveryChannel, Product, Region, RequestChannel};

/// Criteria for searching the product catalog
///
/// A product matches when every populated criterion matches it. List
/// criteria are containment checks: each requested region and request
/// channel must be among the product's own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearchCriteria {
    /// Channels the request arrived through
    pub request_channels: Vec<RequestChannel>,
    /// Regions the product must be available in
    pub regions: Vec<Region>,
    /// Required delivery channel
    pub delivery_channel: Option<DeliveryChannel>,
    /// Required fulfilment code
    pub fulfilment_code: Option<String>,
    /// Required case type
    pub case_type: Option<CaseType>,
}

impl ProductSearchCriteria {
    /// Creates empty criteria that match every product
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a request channel
    pub fn request_channel(mut self, channel: RequestChannel) -> Self {
        self.request_channels.push(channel);
        self
    }

    /// Adds a region
    pub fn region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Sets the delivery channel
    pub fn delivery_channel(mut self, channel: DeliveryChannel) -> Self {
        self.delivery_channel = Some(channel);
        self
    }

    /// Sets the fulfilment code
    pub fn fulfilment_code(mut self, code: impl Into<String>) -> Self {
        self.fulfilment_code = Some(code.into());
        self
    }

    /// Sets the case type
    pub fn case_type(mut self, case_type: CaseType) -> Self {
        self.case_type = Some(case_type);
        self
    }

    /// Returns true when the product satisfies every populated criterion
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref code) = self.fulfilment_code {
            if &product.fulfilment_code != code {
                return false;
            }
        }
        if let Some(channel) = self.delivery_channel {
            if product.delivery_channel != channel {
                return false;
            }
        }
        if let Some(case_type) = self.case_type {
            if product.case_type != case_type {
                return false;
            }
        }
        self.regions.iter().all(|r| product.regions.contains(r))
            && self
                .request_channels
                .iter()
                .all(|c| product.request_channels.contains(c))
    }
}
