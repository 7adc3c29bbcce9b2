//! Customer registration form data and validation.

use crate::code::WarrantyCode;
use crate::error::{Field, FieldError};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// National mobile number: optional-zero-prefixed 2-3 digit group, then a
/// 3-4 digit group, then a 4 digit group. Deliberately looser than the
/// phone mask output so pasted numbers with 2-digit area codes still pass.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0\d{1,2}-\d{3,4}-\d{4}$").unwrap());

/// Where the product was purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchasePlace {
    OfficialStore,
    OnlineMarketplace,
    OtherRetailer,
}

/// Live state of the registration form, one field per editable control.
///
/// Nothing here is validated until submit; [`RegistrationDraft::validate`]
/// runs every check and reports all violations together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_place: Option<PurchasePlace>,
    pub customer_address: String,
    /// Optional; free text, suggestion list is advisory only.
    pub product_model: String,
    /// Optional free text.
    pub notes: String,
    pub agree_terms: bool,
}

impl RegistrationDraft {
    /// Run every field check and collect all violations, in form order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.customer_name.trim().is_empty() {
            errors.push(FieldError::new(
                Field::CustomerName,
                "Please enter your name.",
            ));
        }
        if !PHONE_PATTERN.is_match(self.customer_phone.trim()) {
            errors.push(FieldError::new(
                Field::CustomerPhone,
                "Enter a valid phone number (e.g. 010-1234-5678).",
            ));
        }
        if self.customer_email.trim().is_empty() {
            errors.push(FieldError::new(
                Field::CustomerEmail,
                "Please enter your email address.",
            ));
        }
        if self.purchase_date.is_none() {
            errors.push(FieldError::new(
                Field::PurchaseDate,
                "Please select the purchase date.",
            ));
        }
        if self.purchase_place.is_none() {
            errors.push(FieldError::new(
                Field::PurchasePlace,
                "Please select where you purchased.",
            ));
        }
        if self.customer_address.trim().is_empty() {
            errors.push(FieldError::new(
                Field::CustomerAddress,
                "Please enter your address.",
            ));
        }
        if !self.agree_terms {
            errors.push(FieldError::new(
                Field::AgreeTerms,
                "You must agree to the terms.",
            ));
        }

        errors
    }

    /// Validate and assemble the submit payload.
    ///
    /// Text fields are trimmed; the verified code rides along as an
    /// opaque token. Fails with the full list of field errors when any
    /// check does not pass.
    pub fn finish(&self, code: WarrantyCode) -> Result<CustomerRegistration, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        // validate() guarantees date and place are set.
        let (purchase_date, purchase_place) = match (self.purchase_date, self.purchase_place) {
            (Some(date), Some(place)) => (date, place),
            _ => return Err(errors),
        };

        Ok(CustomerRegistration {
            warranty_code: code,
            customer_name: self.customer_name.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            customer_email: self.customer_email.trim().to_string(),
            purchase_date,
            purchase_place,
            customer_address: self.customer_address.trim().to_string(),
            product_model: self.product_model.trim().to_string(),
            notes: self.notes.trim().to_string(),
            agree_terms: self.agree_terms,
        })
    }
}

/// Payload sent to the registration endpoint. Field names follow the
/// backend contract exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRegistration {
    pub warranty_code: WarrantyCode,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub purchase_date: NaiveDate,
    pub purchase_place: PurchasePlace,
    pub customer_address: String,
    pub product_model: String,
    pub notes: String,
    pub agree_terms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            customer_name: "Jane Doe".into(),
            customer_phone: "010-1234-5678".into(),
            customer_email: "jane@example.com".into(),
            purchase_date: NaiveDate::from_ymd_opt(2025, 3, 14),
            purchase_place: Some(PurchasePlace::OfficialStore),
            customer_address: "23-302, 34-gil, Apgujeong-ro".into(),
            product_model: "10CAM Ukulele".into(),
            notes: String::new(),
            agree_terms: true,
        }
    }

    fn code() -> WarrantyCode {
        WarrantyCode::parse("AAAC-BBBU-CCCK-DDDE").unwrap()
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = RegistrationDraft::default().validate();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::CustomerName,
                Field::CustomerPhone,
                Field::CustomerEmail,
                Field::PurchaseDate,
                Field::PurchasePlace,
                Field::CustomerAddress,
                Field::AgreeTerms,
            ]
        );
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn whitespace_only_text_fields_fail() {
        let draft = RegistrationDraft {
            customer_name: "   ".into(),
            customer_email: "\t".into(),
            customer_address: " \n ".into(),
            ..valid_draft()
        };
        let fields: Vec<Field> = draft.validate().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::CustomerName,
                Field::CustomerEmail,
                Field::CustomerAddress
            ]
        );
    }

    #[test]
    fn phone_pattern_accepts_short_area_group() {
        for phone in ["010-1234-5678", "02-123-4567", "031-123-4567", "010-123-4567"] {
            let draft = RegistrationDraft {
                customer_phone: phone.into(),
                ..valid_draft()
            };
            assert!(draft.validate().is_empty(), "expected {phone} to pass");
        }
    }

    #[test]
    fn phone_pattern_rejects_malformed_numbers() {
        for phone in [
            "",
            "01012345678",
            "110-1234-5678",
            "010-12-5678",
            "010-1234-567",
            "010-1234-56789",
            "010 1234 5678",
        ] {
            let draft = RegistrationDraft {
                customer_phone: phone.into(),
                ..valid_draft()
            };
            let errors = draft.validate();
            assert_eq!(errors.len(), 1, "expected {phone:?} to fail");
            assert_eq!(errors[0].field, Field::CustomerPhone);
        }
    }

    #[test]
    fn unchecked_terms_fail() {
        let draft = RegistrationDraft {
            agree_terms: false,
            ..valid_draft()
        };
        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::AgreeTerms);
    }

    #[test]
    fn optional_fields_are_never_validated() {
        let draft = RegistrationDraft {
            product_model: String::new(),
            notes: String::new(),
            ..valid_draft()
        };
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn finish_trims_text_fields() {
        let draft = RegistrationDraft {
            customer_name: "  Jane Doe  ".into(),
            customer_email: " jane@example.com ".into(),
            customer_address: " Apgujeong-ro ".into(),
            product_model: " 10CAM Ukulele ".into(),
            notes: " gift wrap please ".into(),
            ..valid_draft()
        };
        let registration = draft.finish(code()).unwrap();
        assert_eq!(registration.customer_name, "Jane Doe");
        assert_eq!(registration.customer_email, "jane@example.com");
        assert_eq!(registration.customer_address, "Apgujeong-ro");
        assert_eq!(registration.product_model, "10CAM Ukulele");
        assert_eq!(registration.notes, "gift wrap please");
        assert!(registration.agree_terms);
    }

    #[test]
    fn finish_rejects_invalid_draft_with_all_errors() {
        let errors = RegistrationDraft::default().finish(code()).unwrap_err();
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn payload_uses_backend_field_names() {
        let registration = valid_draft().finish(code()).unwrap();
        let json = serde_json::to_value(&registration).unwrap();

        assert_eq!(json["warrantyCode"], "AAACBBBUCCCKDDDE");
        assert_eq!(json["customerName"], "Jane Doe");
        assert_eq!(json["customerPhone"], "010-1234-5678");
        assert_eq!(json["customerEmail"], "jane@example.com");
        assert_eq!(json["purchaseDate"], "2025-03-14");
        assert_eq!(json["purchasePlace"], "official_store");
        assert_eq!(json["customerAddress"], "23-302, 34-gil, Apgujeong-ro");
        assert_eq!(json["productModel"], "10CAM Ukulele");
        assert_eq!(json["notes"], "");
        assert_eq!(json["agreeTerms"], true);
    }
}
