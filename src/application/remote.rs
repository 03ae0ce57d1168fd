//! Traits describing the backend collections the client talks to.

use async_trait::async_trait;
use staffdesk_api_types::EmployeeRecord;
use thiserror::Error;

use crate::domain::inquiries::{InquiryDecision, InquiryRecord};

const GENERIC_FAILURE: &str = "Something went wrong, please try again";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("`{0}` is not a usable identifier")]
    InvalidIdentifier(String),
}

impl RemoteError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    /// Text shown to the user: the server's own message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            RemoteError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            RemoteError::InvalidIdentifier(_) => self.to_string(),
            RemoteError::Server { message: None, .. }
            | RemoteError::Network(_)
            | RemoteError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

#[async_trait]
pub trait InquiryRemote: Send + Sync {
    async fn list_inquiries(&self) -> Result<Vec<InquiryRecord>, RemoteError>;

    async fn approve_inquiry(&self, id: &str) -> Result<InquiryDecision, RemoteError>;

    async fn decline_inquiry(&self, id: &str, notes: &str)
    -> Result<InquiryDecision, RemoteError>;
}

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn current_employee(&self) -> Result<EmployeeRecord, RemoteError>;

    async fn find_employee(&self, id: &str) -> Result<EmployeeRecord, RemoteError>;

    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, RemoteError>;
}
