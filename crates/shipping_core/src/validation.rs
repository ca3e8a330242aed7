//! Per-stage required-field and format rules.
//!
//! Rules report only the first failure. The payment stage keeps its own card check
//! ([`validate_payment`]); the generic [`validate_stage`] lets payment through.

use thiserror::Error;

use crate::{
    model::{OrderDraft, OrderField},
    notice::Notice,
    stage::WizardStage,
};

/// Title shared by every validation notice.
pub const VALIDATION_TITLE: &str = "Validation error";

const MOBILE_PREFIX: &str = "05";
const MOBILE_SUBSCRIBER_DIGITS: usize = 8;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// First rule a stage failed.
pub enum ValidationFailure {
    /// A sender field is blank.
    #[error("Please complete all sender fields")]
    SenderIncomplete,
    /// The sender phone is not a local mobile number.
    #[error("Please enter a valid mobile number (05xxxxxxxx)")]
    SenderPhoneInvalid,
    /// A receiver field is blank.
    #[error("Please complete all receiver fields")]
    ReceiverIncomplete,
    /// The receiver phone is not a local mobile number.
    #[error("Please enter a valid mobile number (05xxxxxxxx)")]
    ReceiverPhoneInvalid,
    /// A package field is blank.
    #[error("Please complete all package fields")]
    PackageIncomplete,
    /// No carrier option selected.
    #[error("Please choose a shipping carrier")]
    CarrierMissing,
    /// A card field is blank.
    #[error("Please complete all card fields")]
    CardIncomplete,
}

impl ValidationFailure {
    /// Field the failure points at; the first blank one for presence rules.
    pub fn field(self, draft: &OrderDraft) -> OrderField {
        let first_blank = |fields: &[OrderField]| {
            fields
                .iter()
                .copied()
                .find(|field| draft.is_blank(*field))
                .unwrap_or(fields[0])
        };
        match self {
            Self::SenderIncomplete => first_blank(&OrderField::SENDER),
            Self::SenderPhoneInvalid => OrderField::SenderPhone,
            Self::ReceiverIncomplete => first_blank(&OrderField::RECEIVER),
            Self::ReceiverPhoneInvalid => OrderField::ReceiverPhone,
            Self::PackageIncomplete => first_blank(&OrderField::PACKAGE),
            Self::CarrierMissing => OrderField::Carrier,
            Self::CardIncomplete => first_blank(&OrderField::CARD),
        }
    }

    /// Destructive notice describing the failure.
    pub fn notice(self) -> Notice {
        Notice::destructive(VALIDATION_TITLE, self.to_string())
    }
}

/// Returns whether `phone` is `05` followed by exactly eight ASCII digits.
pub fn is_valid_mobile_number(phone: &str) -> bool {
    let Some(rest) = phone.strip_prefix(MOBILE_PREFIX) else {
        return false;
    };
    rest.len() == MOBILE_SUBSCRIBER_DIGITS && rest.bytes().all(|b| b.is_ascii_digit())
}

fn all_filled(draft: &OrderDraft, fields: &[OrderField]) -> bool {
    fields.iter().all(|field| !draft.is_blank(*field))
}

/// Checks the rules for leaving `stage`.
///
/// Summary and payment always pass here; card fields are checked by [`validate_payment`].
pub fn validate_stage(stage: WizardStage, draft: &OrderDraft) -> Result<(), ValidationFailure> {
    match stage {
        WizardStage::Sender => {
            if !all_filled(draft, &OrderField::SENDER) {
                return Err(ValidationFailure::SenderIncomplete);
            }
            if !is_valid_mobile_number(&draft.sender_phone) {
                return Err(ValidationFailure::SenderPhoneInvalid);
            }
        }
        WizardStage::Receiver => {
            if !all_filled(draft, &OrderField::RECEIVER) {
                return Err(ValidationFailure::ReceiverIncomplete);
            }
            if !is_valid_mobile_number(&draft.receiver_phone) {
                return Err(ValidationFailure::ReceiverPhoneInvalid);
            }
        }
        WizardStage::Package => {
            if !all_filled(draft, &OrderField::PACKAGE) {
                return Err(ValidationFailure::PackageIncomplete);
            }
        }
        WizardStage::Carrier => {
            if draft.carrier.is_empty() {
                return Err(ValidationFailure::CarrierMissing);
            }
        }
        WizardStage::Summary | WizardStage::Payment => {}
    }
    Ok(())
}

/// Checks that card number, expiry and CVV are filled.
///
/// No checksum, expiry-date or CVV-length rules apply.
pub fn validate_payment(draft: &OrderDraft) -> Result<(), ValidationFailure> {
    if all_filled(draft, &OrderField::CARD) {
        Ok(())
    } else {
        Err(ValidationFailure::CardIncomplete)
    }
}
