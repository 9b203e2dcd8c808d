//! Fulfilment Service Tests
//!
//! Drives `FulfilmentService` against mock collaborators and checks both
//! the outcome and what each collaborator was asked to do.
//!
//! # Test Organization
//!
//! - `resolution` - the success paths and the event they publish
//! - `failures` - not found, bad request and dependency failures
//! - `properties` - quantified properties over generated inputs

use core_kernel::{CaseId, Channel, EventType, Source};
use domain_fulfilment::{ErrorKind, FulfilmentError, SmsFulfilmentRequest};
use domain_product::{DeliveryChannel, Region, RequestChannel};
use test_utils::{
    CaseFixtures, CollectionCaseBuilder, FulfilmentHarness, ProductBuilder, ProductFixtures,
    StringFixtures,
};

fn sms_request(case_id: CaseId, code: &str, tel_no: &str) -> SmsFulfilmentRequest {
    SmsFulfilmentRequest {
        case_id,
        fulfilment_code: code.to_string(),
        tel_no: tel_no.to_string(),
    }
}

mod resolution {
    use super::*;

    #[tokio::test]
    async fn test_household_product_publishes_event_without_individual_id() {
        let case = CaseFixtures::household_in_england();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![ProductFixtures::household_sms("P1")],
        );

        let transaction_id = harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "P1", "07700900000"))
            .await
            .unwrap();

        let published = harness.published();
        assert_eq!(published.len(), 1);

        let event = &published[0];
        assert_eq!(event.header.event_type, EventType::FulfilmentRequested);
        assert_eq!(event.header.source, Source::RespondentHome);
        assert_eq!(event.header.channel, Channel::Rh);
        assert_eq!(event.header.transaction_id, transaction_id);

        let request = event.fulfilment_request();
        assert_eq!(request.case_id, case.id);
        assert_eq!(request.individual_case_id, None);
        assert_eq!(request.fulfilment_code, "P1");
        assert_eq!(request.contact.tel_no.as_deref(), Some("07700900000"));
    }

    #[tokio::test]
    async fn test_search_criteria_built_from_case_and_request() {
        let case = CaseFixtures::household_in_wales();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![ProductBuilder::new("UACHHT2W").with_regions(vec![Region::Wales]).build()],
        );

        harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "UACHHT2W", StringFixtures::tel_no()))
            .await
            .unwrap();

        let searches = harness.catalog.searches();
        assert_eq!(searches.len(), 1);
        let criteria = &searches[0];
        assert_eq!(criteria.request_channels, vec![RequestChannel::RespondentHome]);
        assert_eq!(criteria.regions, vec![Region::Wales]);
        assert_eq!(criteria.delivery_channel, Some(DeliveryChannel::Sms));
        assert_eq!(criteria.fulfilment_code.as_deref(), Some("UACHHT2W"));
    }

    #[tokio::test]
    async fn test_individual_product_gets_fresh_individual_case_id() {
        let case = CaseFixtures::household_in_england();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![ProductFixtures::individual_sms("UACIT1")],
        );

        for _ in 0..2 {
            harness
                .fulfilment_service
                .fulfilment_request_by_sms(sms_request(case.id, "UACIT1", StringFixtures::tel_no()))
                .await
                .unwrap();
        }

        let individual_ids: Vec<_> = harness
            .published()
            .iter()
            .map(|e| e.fulfilment_request().individual_case_id)
            .collect();

        assert_eq!(individual_ids.len(), 2);
        let first = individual_ids[0].expect("individual case id set");
        let second = individual_ids[1].expect("individual case id set");
        assert_ne!(first, second);
        assert_ne!(*first.as_uuid(), *case.id.as_uuid());
        assert_ne!(*second.as_uuid(), *case.id.as_uuid());
    }

    #[tokio::test]
    async fn test_first_catalog_match_wins() {
        let case = CaseFixtures::household_in_england();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![
                ProductFixtures::individual_sms("DUP"),
                ProductFixtures::household_sms("DUP"),
            ],
        );

        harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "DUP", StringFixtures::tel_no()))
            .await
            .unwrap();

        let published = harness.published();
        assert!(published[0].fulfilment_request().individual_case_id.is_some());
    }

    #[tokio::test]
    async fn test_post_channel_resolution() {
        let case = CaseFixtures::household_in_england();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![ProductFixtures::household_post("P_OR_H1")],
        );

        harness
            .fulfilment_service
            .resolve_and_publish(case.id, "P_OR_H1", StringFixtures::tel_no(), DeliveryChannel::Post)
            .await
            .unwrap();

        assert_eq!(harness.published().len(), 1);
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn test_unknown_case_is_not_found_and_nothing_else_happens() {
        let harness = FulfilmentHarness::new(vec![], vec![ProductFixtures::household_sms("P1")]);
        let missing = CaseId::new();

        let err = harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(missing, "P1", StringFixtures::tel_no()))
            .await
            .unwrap_err();

        assert!(matches!(err, FulfilmentError::CaseNotFound(id) if id == missing));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(harness.catalog.searches().is_empty());
        assert!(harness.published().is_empty());
    }

    #[tokio::test]
    async fn test_no_matching_product_is_bad_request() {
        let case = CaseFixtures::household_in_england();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![ProductFixtures::household_sms("P1")],
        );

        let err = harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "ZZZ", StringFixtures::tel_no()))
            .await
            .unwrap_err();

        assert!(matches!(err, FulfilmentError::NoCompatibleProduct { .. }));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(harness.published().is_empty());
    }

    #[tokio::test]
    async fn test_product_only_offered_in_other_region_is_bad_request() {
        let case = CaseFixtures::household_in_wales();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![ProductFixtures::household_sms("UACHHT1")],
        );

        let err = harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "UACHHT1", StringFixtures::tel_no()))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(harness.published().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_stored_region_is_bad_request() {
        let case = CaseFixtures::with_bad_region();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![ProductFixtures::household_sms("P1")],
        );

        let err = harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "P1", StringFixtures::tel_no()))
            .await
            .unwrap_err();

        assert!(matches!(err, FulfilmentError::InvalidRegion { ref region, .. } if region == "England"));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(harness.catalog.searches().is_empty());
        assert!(harness.published().is_empty());
    }

    #[tokio::test]
    async fn test_case_store_failure_is_dependency_failure() {
        let case = CaseFixtures::household_in_england();
        let harness = FulfilmentHarness::new(vec![case.clone()], vec![]);
        harness.case_reader.set_unavailable(true);

        let err = harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "P1", StringFixtures::tel_no()))
            .await
            .unwrap_err();

        assert!(matches!(err, FulfilmentError::Dependency { step: "case lookup", .. }));
        assert_eq!(err.kind(), ErrorKind::DependencyFailure);
        assert!(harness.published().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failure_is_dependency_failure() {
        let case = CaseFixtures::household_in_england();
        let harness = FulfilmentHarness::new(vec![case.clone()], vec![]);
        harness.catalog.set_unavailable(true);

        let err = harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "P1", StringFixtures::tel_no()))
            .await
            .unwrap_err();

        assert!(matches!(err, FulfilmentError::Dependency { step: "product search", .. }));
        assert!(harness.published().is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_is_dependency_failure() {
        let case = CaseFixtures::household_in_england();
        let harness = FulfilmentHarness::new(
            vec![case.clone()],
            vec![ProductFixtures::household_sms("P1")],
        );
        harness.publisher.set_failing(true);

        let err = harness
            .fulfilment_service
            .fulfilment_request_by_sms(sms_request(case.id, "P1", StringFixtures::tel_no()))
            .await
            .unwrap_err();

        assert!(matches!(err, FulfilmentError::Dependency { step: "event publish", .. }));
        assert_eq!(err.kind(), ErrorKind::DependencyFailure);
        assert!(harness.published().is_empty());
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{case_id_strategy, fulfilment_code_strategy, region_code_strategy, tel_no_strategy};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    proptest! {
        #[test]
        fn prop_unknown_case_never_publishes(case_id in case_id_strategy(), code in fulfilment_code_strategy()) {
            let harness = FulfilmentHarness::new(
                vec![CaseFixtures::household_in_england()],
                vec![ProductFixtures::household_sms(&code)],
            );

            let result = block_on(
                harness.fulfilment_service.fulfilment_request_by_sms(sms_request(case_id, &code, "07700900000")),
            );

            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
            prop_assert!(harness.published().is_empty());
        }

        #[test]
        fn prop_empty_catalog_result_never_publishes(
            region in region_code_strategy(),
            code in fulfilment_code_strategy(),
        ) {
            let case = CollectionCaseBuilder::new().with_region(region).build();
            let harness = FulfilmentHarness::new(vec![case.clone()], vec![]);

            let result = block_on(
                harness.fulfilment_service.fulfilment_request_by_sms(sms_request(case.id, &code, "07700900000")),
            );

            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::BadRequest);
            prop_assert!(harness.published().is_empty());
        }

        #[test]
        fn prop_tel_no_passes_through_verbatim(tel_no in tel_no_strategy(), individual in any::<bool>()) {
            let case = CaseFixtures::household_in_england();
            let product = if individual {
                ProductFixtures::individual_sms("P1")
            } else {
                ProductFixtures::household_sms("P1")
            };
            let harness = FulfilmentHarness::new(vec![case.clone()], vec![product]);

            block_on(
                harness.fulfilment_service.fulfilment_request_by_sms(sms_request(case.id, "P1", &tel_no)),
            ).unwrap();

            let published = harness.published();
            prop_assert_eq!(published.len(), 1);
            let request = published[0].fulfilment_request();
            prop_assert_eq!(request.contact.tel_no.as_deref(), Some(tel_no.as_str()));
            prop_assert_eq!(request.individual_case_id.is_some(), individual);
        }
    }
}
