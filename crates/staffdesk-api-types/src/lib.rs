//! Wire shapes exchanged with the staffdesk backend.
//!
//! Field names follow the backend's camelCase JSON; identifiers are opaque
//! strings and accept the `_id` spelling some collections still emit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Review state of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "approved")]
    Approved,
    #[serde(alias = "declined")]
    Declined,
}

impl InquiryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryStatus::Pending => "Pending",
            InquiryStatus::Approved => "Approved",
            InquiryStatus::Declined => "Declined",
        }
    }

    /// Approved and declined inquiries no longer await a decision.
    pub fn is_resolved(self) -> bool {
        !matches!(self, InquiryStatus::Pending)
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown inquiry status `{}`", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for InquiryStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(InquiryStatus::Pending),
            "approved" => Ok(InquiryStatus::Approved),
            "declined" => Ok(InquiryStatus::Declined),
            _ => Err(UnknownStatus(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub request_name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub status: InquiryStatus,
    #[serde(default)]
    pub decline_notes: String,
}

/// Body returned by the approve and decline endpoints.
///
/// The backend may answer with the whole updated record; only the fields the
/// client mirrors are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDecision {
    pub status: InquiryStatus,
    #[serde(default)]
    pub decline_notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclineInquiryRequest {
    pub decline_notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Error envelope; every field is optional because not every failing
/// endpoint fills it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}
