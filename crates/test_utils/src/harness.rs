//! Fulfilment service wired to mock collaborators

use std::sync::Arc;

use domain_case::{CaseService, CollectionCase, MockCaseReader};
use domain_fulfilment::{FulfilmentService, MockEventPublisher, PublishedEvent};
use domain_product::{MockProductCatalog, Product};

/// Mocks plus the services built over them
///
/// The mocks stay reachable so tests can inspect what each collaborator
/// saw after driving the services.
pub struct FulfilmentHarness {
    pub case_reader: Arc<MockCaseReader>,
    pub catalog: Arc<MockProductCatalog>,
    pub publisher: Arc<MockEventPublisher>,
    pub fulfilment_service: FulfilmentService,
    pub case_service: CaseService,
}

impl FulfilmentHarness {
    /// Wires the services over the given cases and products
    pub fn new(cases: Vec<CollectionCase>, products: Vec<Product>) -> Self {
        let case_reader = Arc::new(MockCaseReader::with_cases(cases));
        let catalog = Arc::new(MockProductCatalog::with_products(products));
        let publisher = Arc::new(MockEventPublisher::new());

        let fulfilment_service =
            FulfilmentService::new(case_reader.clone(), catalog.clone(), publisher.clone());
        let case_service = CaseService::new(case_reader.clone());

        Self {
            case_reader,
            catalog,
            publisher,
            fulfilment_service,
            case_service,
        }
    }

    /// Events published so far
    pub fn published(&self) -> Vec<PublishedEvent> {
        self.publisher.published()
    }
}
