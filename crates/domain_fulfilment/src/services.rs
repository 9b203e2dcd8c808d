//! Fulfilment resolution service
//!
//! Turns a respondent's fulfilment request into exactly one
//! `FULFILMENT_REQUESTED` event, or into an error with no event at all.

use std::sync::Arc;

use tracing::{debug, info, warn};

use core_kernel::{CaseId, Channel, EventType, IndividualCaseId, Source, TransactionId};
use domain_case::{CaseReader, CollectionCase};
use domain_product::{
    DeliveryChannel, Product, ProductCatalog, ProductSearchCriteria, Region, RequestChannel,
};

use crate::error::FulfilmentError;
use crate::events::{Contact, EventPayload, FulfilmentRequest};
use crate::ports::EventPublisher;

/// A request for a fulfilment to be sent by text message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsFulfilmentRequest {
    pub case_id: CaseId,
    pub fulfilment_code: String,
    pub tel_no: String,
}

/// Service resolving fulfilment requests against the product catalog
///
/// The service holds no state of its own; every call reads the case,
/// searches the catalog and publishes, in that order, and each step
/// depends on the previous one.
#[derive(Clone)]
pub struct FulfilmentService {
    case_reader: Arc<dyn CaseReader>,
    product_catalog: Arc<dyn ProductCatalog>,
    publisher: Arc<dyn EventPublisher>,
}

impl FulfilmentService {
    /// Creates a service over its three collaborators
    pub fn new(
        case_reader: Arc<dyn CaseReader>,
        product_catalog: Arc<dyn ProductCatalog>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            case_reader,
            product_catalog,
            publisher,
        }
    }

    /// Handles a fulfilment request by SMS
    ///
    /// # Errors
    ///
    /// See [`FulfilmentService::resolve_and_publish`]
    pub async fn fulfilment_request_by_sms(
        &self,
        request: SmsFulfilmentRequest,
    ) -> Result<TransactionId, FulfilmentError> {
        self.resolve_and_publish(
            request.case_id,
            &request.fulfilment_code,
            &request.tel_no,
            DeliveryChannel::Sms,
        )
        .await
    }

    /// Resolves a fulfilment request and publishes the resulting event
    ///
    /// This method:
    /// 1. Reads the case
    /// 2. Maps the case's stored region to a `Region`
    /// 3. Searches the catalog for products requestable through respondent
    ///    home in that region, by that delivery channel, with that code
    /// 4. Takes the first match in catalog order
    /// 5. Builds the fulfilment request payload
    /// 6. Publishes it
    ///
    /// # Arguments
    ///
    /// * `case_id` - The case the fulfilment is for
    /// * `fulfilment_code` - Requested product code
    /// * `tel_no` - Telephone number, passed through unchanged
    /// * `delivery_channel` - How the fulfilment is to be delivered
    ///
    /// # Returns
    ///
    /// The transaction id of the published event
    ///
    /// # Errors
    ///
    /// * `CaseNotFound` - no case with that id; nothing else is consulted
    /// * `InvalidRegion` - the case's stored region is not a known code
    /// * `NoCompatibleProduct` - the catalog returned no match
    /// * `Dependency` - the case store, catalog or transport failed
    pub async fn resolve_and_publish(
        &self,
        case_id: CaseId,
        fulfilment_code: &str,
        tel_no: &str,
        delivery_channel: DeliveryChannel,
    ) -> Result<TransactionId, FulfilmentError> {
        let case = self
            .case_reader
            .get_case(case_id)
            .await
            .map_err(FulfilmentError::dependency("case lookup", case_id))?
            .ok_or_else(|| {
                info!(%case_id, "Case not found");
                FulfilmentError::CaseNotFound(case_id)
            })?;

        let product = self.find_product(&case, fulfilment_code, delivery_channel).await?;

        let payload = create_fulfilment_request_payload(&product, tel_no, &case);
        let transaction_id = self
            .publisher
            .send_event(
                EventType::FulfilmentRequested,
                Source::RespondentHome,
                Channel::Rh,
                EventPayload::FulfilmentRequest(payload),
            )
            .await
            .map_err(|source| {
                warn!(%case_id, error = %source, "Failed to publish fulfilment request");
                FulfilmentError::Dependency {
                    step: "event publish",
                    case_id,
                    source,
                }
            })?;

        info!(
            %case_id,
            fulfilment_code = %product.fulfilment_code,
            %transaction_id,
            "Fulfilment request published"
        );
        Ok(transaction_id)
    }

    async fn find_product(
        &self,
        case: &CollectionCase,
        fulfilment_code: &str,
        delivery_channel: DeliveryChannel,
    ) -> Result<Product, FulfilmentError> {
        let region: Region = case.address.region.parse().map_err(|_| {
            info!(case_id = %case.id, region = %case.address.region, "Case has unrecognised region");
            FulfilmentError::InvalidRegion {
                case_id: case.id,
                region: case.address.region.clone(),
            }
        })?;

        debug!(
            %region,
            ?delivery_channel,
            fulfilment_code,
            "Attempting to find product"
        );

        let criteria = ProductSearchCriteria::new()
            .request_channel(RequestChannel::RespondentHome)
            .region(region)
            .delivery_channel(delivery_channel)
            .fulfilment_code(fulfilment_code);

        let products = self
            .product_catalog
            .search_products(&criteria)
            .await
            .map_err(FulfilmentError::dependency("product search", case.id))?;

        products.into_iter().next().ok_or_else(|| {
            info!(case_id = %case.id, fulfilment_code, "Can't find compatible product");
            FulfilmentError::NoCompatibleProduct {
                fulfilment_code: fulfilment_code.to_string(),
                region,
                delivery_channel,
            }
        })
    }
}

fn create_fulfilment_request_payload(
    product: &Product,
    tel_no: &str,
    case: &CollectionCase,
) -> FulfilmentRequest {
    FulfilmentRequest {
        fulfilment_code: product.fulfilment_code.clone(),
        case_id: case.id,
        individual_case_id: product.is_individual().then(IndividualCaseId::new),
        contact: Contact::by_telephone(tel_no),
    }
}
