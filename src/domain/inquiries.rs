//! Inquiry records and the rules that hold for their review state.

pub use staffdesk_api_types::{InquiryDecision, InquiryRecord, InquiryStatus};

use super::error::DomainError;

/// Justification attached to a decline. Never blank; surrounding whitespace
/// is stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclineNotes(String);

impl DeclineNotes {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("decline notes are required"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `declineNotes` is non-empty exactly when the record is declined.
pub fn check_consistency(record: &InquiryRecord) -> Result<(), DomainError> {
    let declined = record.status == InquiryStatus::Declined;
    let has_notes = !record.decline_notes.trim().is_empty();
    match (declined, has_notes) {
        (true, false) => Err(DomainError::invariant(format!(
            "inquiry `{}` is declined without notes",
            record.id
        ))),
        (false, true) => Err(DomainError::invariant(format!(
            "inquiry `{}` carries decline notes while {}",
            record.id, record.status
        ))),
        _ => Ok(()),
    }
}

/// Mirror the server's answer onto the local record. Notes only survive on a
/// declined record.
pub fn apply_decision(record: &mut InquiryRecord, decision: &InquiryDecision) {
    record.status = decision.status;
    record.decline_notes = match decision.status {
        InquiryStatus::Declined => decision.decline_notes.clone(),
        InquiryStatus::Pending | InquiryStatus::Approved => String::new(),
    };
}
