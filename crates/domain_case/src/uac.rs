//! Unique access code records
//!
//! Case management issues each questionnaire a unique access code (UAC).
//! Only its hash ever reaches this service, together with the case and
//! questionnaire it unlocks.

use serde::{Deserialize, Serialize};

use core_kernel::CaseId;

/// A UAC record as held in the UAC bucket, keyed by `uac_hash`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Uac {
    pub uac_hash: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub questionnaire_id: Option<String>,
    #[serde(default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub case_id: Option<CaseId>,
    #[serde(default)]
    pub collection_exercise_id: Option<String>,
    #[serde(default)]
    pub form_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_uac_feed_record() {
        let json = r#"{
            "uacHash": "72C84BA99D77EE766E9468A0DE36433A44888E5DEC4AFB84F8019777800B7364",
            "active": true,
            "questionnaireId": "1110000009",
            "caseType": "HH",
            "region": "E",
            "caseId": "c45de4dc-3c3b-11e9-b210-d663bd873d93",
            "formType": "H"
        }"#;

        let uac: Uac = serde_json::from_str(json).unwrap();

        assert!(uac.active);
        assert_eq!(uac.questionnaire_id.as_deref(), Some("1110000009"));
        assert_eq!(
            uac.case_id.map(|id| id.to_string()).as_deref(),
            Some("c45de4dc-3c3b-11e9-b210-d663bd873d93")
        );
        assert!(uac.collection_exercise_id.is_none());
    }
}
