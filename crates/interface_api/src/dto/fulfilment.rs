//! Fulfilment DTOs

use serde::Deserialize;
use validator::{Validate, ValidationError};

use core_kernel::CaseId;
use domain_fulfilment::SmsFulfilmentRequest;

/// Body of `POST /fulfilment-request/sms`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SmsFulfilmentRequestDto {
    pub case_id: CaseId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub fulfilment_code: String,
    #[serde(alias = "telephoneNumber")]
    #[validate(custom(function = "validate_tel_no"))]
    pub tel_no: String,
}

impl From<SmsFulfilmentRequestDto> for SmsFulfilmentRequest {
    fn from(dto: SmsFulfilmentRequestDto) -> Self {
        Self {
            case_id: dto.case_id,
            fulfilment_code: dto.fulfilment_code,
            tel_no: dto.tel_no,
        }
    }
}

/// Body of `POST /cases/:case_id/fulfilments/sms`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CaseSmsFulfilmentRequestDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub fulfilment_code: String,
    #[serde(alias = "telephoneNumber")]
    #[validate(custom(function = "validate_tel_no"))]
    pub tel_no: String,
}

impl CaseSmsFulfilmentRequestDto {
    /// Combines the body with the case id from the path
    pub fn into_request(self, case_id: CaseId) -> SmsFulfilmentRequest {
        SmsFulfilmentRequest {
            case_id,
            fulfilment_code: self.fulfilment_code,
            tel_no: self.tel_no,
        }
    }
}

/// Accepts digits with an optional leading `+` and spaces between groups
///
/// The number is forwarded exactly as typed; this only rejects input that
/// cannot be a telephone number at all.
fn validate_tel_no(tel_no: &str) -> Result<(), ValidationError> {
    let digits = tel_no.chars().filter(char::is_ascii_digit).count();
    let body = tel_no.strip_prefix('+').unwrap_or(tel_no);
    let well_formed = body.chars().all(|c| c.is_ascii_digit() || c == ' ');

    if well_formed && (7..=15).contains(&digits) {
        Ok(())
    } else {
        let mut error = ValidationError::new("tel_no");
        error.message = Some("must be a telephone number".into());
        Err(error)
    }
}
