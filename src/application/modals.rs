//! Approve and decline review surfaces bound to a single inquiry.
//!
//! A modal is open exactly while it holds a target record. Confirming hands
//! the decision to a [`ReviewActions`] implementation and closes the modal
//! whether or not that action succeeds; only a decline with blank notes keeps
//! the modal open.

use async_trait::async_trait;

use super::inquiries::InquiryError;
use crate::domain::inquiries::{DeclineNotes, InquiryRecord};

/// The two decisions a review surface can hand back.
#[async_trait]
pub trait ReviewActions: Send {
    async fn approve(&mut self, record: &InquiryRecord) -> Result<InquiryRecord, InquiryError>;

    async fn decline(
        &mut self,
        record: &InquiryRecord,
        notes: &str,
    ) -> Result<InquiryRecord, InquiryError>;
}

/// Snapshot of which modal is open and for which record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSelection {
    pub target: Option<InquiryRecord>,
    pub approve_open: bool,
    pub decline_open: bool,
}

impl ModalSelection {
    pub fn is_closed(&self) -> bool {
        !self.approve_open && !self.decline_open
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApproveModal {
    target: Option<InquiryRecord>,
}

impl ApproveModal {
    pub fn open(&mut self, record: InquiryRecord) {
        self.target = Some(record);
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&InquiryRecord> {
        self.target.as_ref()
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub async fn confirm<A>(&mut self, actions: &mut A) -> Result<InquiryRecord, InquiryError>
    where
        A: ReviewActions + ?Sized,
    {
        let record = self.target.take().ok_or(InquiryError::NoSelection)?;
        actions.approve(&record).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeclineModal {
    target: Option<InquiryRecord>,
    notes: String,
    error: Option<String>,
}

impl DeclineModal {
    pub fn open(&mut self, record: InquiryRecord) {
        self.target = Some(record);
        self.notes.clear();
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&InquiryRecord> {
        self.target.as_ref()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Inline validation message; cleared by any edit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_notes(&mut self, text: impl Into<String>) {
        self.notes = text.into();
        self.error = None;
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    /// Discards any unsaved notes.
    pub fn close(&mut self) {
        self.target = None;
        self.notes.clear();
        self.error = None;
    }

    pub async fn confirm<A>(&mut self, actions: &mut A) -> Result<InquiryRecord, InquiryError>
    where
        A: ReviewActions + ?Sized,
    {
        if self.target.is_none() {
            return Err(InquiryError::NoSelection);
        }
        let notes = match DeclineNotes::parse(&self.notes) {
            Ok(notes) => notes,
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(InquiryError::Validation(err));
            }
        };

        let record = self.target.take().ok_or(InquiryError::NoSelection)?;
        self.close();
        actions.decline(&record, notes.as_str()).await
    }
}
