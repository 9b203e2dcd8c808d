//! Unit tests for identifiers and the UPRN value object
//!
//! Tests cover creation, parsing, conversion and the string forms used on
//! the wire.

use core_kernel::{CaseId, IndividualCaseId, TransactionId, UniquePropertyReferenceNumber};
use proptest::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

mod case_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let ids: HashSet<CaseId> = (0..1000).map(|_| CaseId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ids_convert_back_to_uuid() {
        let id = TransactionId::new();
        let uuid: Uuid = id.into();
        assert_eq!(TransactionId::from(uuid), id);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = CaseId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let uuid = Uuid::new_v4();
        let id: CaseId = format!("  {}  ", uuid).parse().unwrap();
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_deserialize_from_bare_uuid() {
        let json = "\"3305e937-6fb1-4ce1-9d4c-077f147789ab\"";
        let id: CaseId = serde_json::from_str(json).unwrap();
        assert_eq!(id.to_string(), "3305e937-6fb1-4ce1-9d4c-077f147789ab");
    }

    #[test]
    fn test_individual_id_displays_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let individual = IndividualCaseId::from_uuid(uuid);
        assert_eq!(individual.to_string(), CaseId::from_uuid(uuid).to_string());
    }
}

mod uprn_tests {
    use super::*;

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let result: Result<UniquePropertyReferenceNumber, _> =
            serde_json::from_str("\"99999999999999\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_valid_uprns_roundtrip_through_strings(value in 0u64..=UniquePropertyReferenceNumber::MAX) {
            let uprn = UniquePropertyReferenceNumber::new(value).unwrap();
            let parsed: UniquePropertyReferenceNumber = uprn.to_string().parse().unwrap();
            prop_assert_eq!(parsed, uprn);
        }

        #[test]
        fn prop_oversized_uprns_are_rejected(value in (UniquePropertyReferenceNumber::MAX + 1)..u64::MAX) {
            prop_assert!(UniquePropertyReferenceNumber::new(value).is_err());
        }
    }
}
