//! Inquiry list controller: holds the loaded list, derives the filtered view
//! and drives approve/decline against the backend.
//!
//! The server is the source of truth. Nothing is applied locally until the
//! backend has answered, and a failed call leaves the list exactly as it was.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::modals::{ApproveModal, DeclineModal, ModalSelection, ReviewActions};
use super::notices::{Notice, NoticeBoard};
use super::remote::{InquiryRemote, RemoteError};
use crate::domain::actor::Actor;
use crate::domain::error::DomainError;
use crate::domain::filter::{self, FilterState, StatusFilter};
use crate::domain::inquiries::{
    DeclineNotes, InquiryDecision, InquiryRecord, InquiryStatus, apply_decision,
    check_consistency,
};

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Validation(#[from] DomainError),
    #[error("inquiry `{id}` not found")]
    NotFound { id: String },
    #[error("inquiry `{id}` is already {status}")]
    NotPending { id: String, status: InquiryStatus },
    #[error("{actor} is not allowed to review inquiries")]
    Forbidden { actor: String },
    #[error("no inquiry is selected")]
    NoSelection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InquiryStatusCounts {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub declined: u64,
}

pub struct InquiryListController {
    remote: Arc<dyn InquiryRemote>,
    actor: Actor,
    records: Vec<InquiryRecord>,
    filter: FilterState,
    approve_modal: ApproveModal,
    decline_modal: DeclineModal,
    loading: bool,
    notices: NoticeBoard,
}

impl InquiryListController {
    pub fn new(remote: Arc<dyn InquiryRemote>, actor: Actor) -> Self {
        Self {
            remote,
            actor,
            records: Vec::new(),
            filter: FilterState::default(),
            approve_modal: ApproveModal::default(),
            decline_modal: DeclineModal::default(),
            loading: false,
            notices: NoticeBoard::default(),
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn records(&self) -> &[InquiryRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn find(&self, id: &str) -> Option<&InquiryRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Replace the held list with the backend's. On failure the list is left
    /// empty and the error is raised as a notice.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<usize, InquiryError> {
        self.loading = true;
        let result = self.remote.list_inquiries().await;
        self.loading = false;

        match result {
            Ok(records) => {
                for record in &records {
                    if let Err(err) = check_consistency(record) {
                        warn!(inquiry_id = %record.id, error = %err, "inconsistent inquiry from backend");
                    }
                }
                self.records = records;
                debug!(count = self.records.len(), "inquiries loaded");
                Ok(self.records.len())
            }
            Err(err) => {
                self.records.clear();
                self.notices.push(Notice::error(err.user_message()));
                warn!(error = %err, "failed to load inquiries");
                Err(err.into())
            }
        }
    }

    pub fn view(&self) -> Vec<&InquiryRecord> {
        filter::view(&self.records, &self.filter)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn reset_filter(&mut self) {
        self.filter = FilterState::default();
    }

    pub fn status_counts(&self) -> InquiryStatusCounts {
        self.records
            .iter()
            .fold(InquiryStatusCounts::default(), |mut counts, record| {
                counts.total += 1;
                match record.status {
                    InquiryStatus::Pending => counts.pending += 1,
                    InquiryStatus::Approved => counts.approved += 1,
                    InquiryStatus::Declined => counts.declined += 1,
                }
                counts
            })
    }

    #[instrument(skip(self, record), fields(inquiry_id = %record.id))]
    pub async fn approve(&mut self, record: &InquiryRecord) -> Result<InquiryRecord, InquiryError> {
        self.ensure_reviewer()?;

        self.loading = true;
        let result = self.remote.approve_inquiry(&record.id).await;
        self.loading = false;

        match result {
            Ok(decision) => {
                let updated = self.reconcile(record, &decision);
                record_action("approve", "success");
                info!(status = %updated.status, "inquiry approved");
                self.notices
                    .push(Notice::success(format!("Inquiry from {} approved", updated.name)));
                Ok(updated)
            }
            Err(err) => Err(self.report_failure("approve", err)),
        }
    }

    /// Notes are trimmed and must not be blank; that is checked before any
    /// call goes out.
    #[instrument(skip(self, record, notes), fields(inquiry_id = %record.id))]
    pub async fn decline(
        &mut self,
        record: &InquiryRecord,
        notes: &str,
    ) -> Result<InquiryRecord, InquiryError> {
        let notes = DeclineNotes::parse(notes)?;
        self.ensure_reviewer()?;

        self.loading = true;
        let result = self
            .remote
            .decline_inquiry(&record.id, notes.as_str())
            .await;
        self.loading = false;

        match result {
            Ok(decision) => {
                let updated = self.reconcile(record, &decision);
                record_action("decline", "success");
                info!(status = %updated.status, "inquiry declined");
                self.notices
                    .push(Notice::success(format!("Inquiry from {} declined", updated.name)));
                Ok(updated)
            }
            Err(err) => Err(self.report_failure("decline", err)),
        }
    }

    pub fn selection(&self) -> ModalSelection {
        if let Some(record) = self.approve_modal.target() {
            return ModalSelection {
                target: Some(record.clone()),
                approve_open: true,
                decline_open: false,
            };
        }
        if let Some(record) = self.decline_modal.target() {
            return ModalSelection {
                target: Some(record.clone()),
                approve_open: false,
                decline_open: true,
            };
        }
        ModalSelection::default()
    }

    pub fn open_approve(&mut self, id: &str) -> Result<&ApproveModal, InquiryError> {
        let record = self.pending_record(id)?.clone();
        self.decline_modal.close();
        self.approve_modal.open(record);
        Ok(&self.approve_modal)
    }

    pub fn open_decline(&mut self, id: &str) -> Result<&mut DeclineModal, InquiryError> {
        let record = self.pending_record(id)?.clone();
        self.approve_modal.cancel();
        self.decline_modal.open(record);
        Ok(&mut self.decline_modal)
    }

    /// The open decline modal, for editing its notes.
    pub fn decline_modal_mut(&mut self) -> Option<&mut DeclineModal> {
        if self.decline_modal.is_open() {
            Some(&mut self.decline_modal)
        } else {
            None
        }
    }

    pub async fn confirm_approve(&mut self) -> Result<InquiryRecord, InquiryError> {
        let mut modal = std::mem::take(&mut self.approve_modal);
        let result = modal.confirm(self).await;
        self.approve_modal = modal;
        result
    }

    pub async fn confirm_decline(&mut self) -> Result<InquiryRecord, InquiryError> {
        let mut modal = std::mem::take(&mut self.decline_modal);
        let result = modal.confirm(self).await;
        self.decline_modal = modal;
        result
    }

    pub fn cancel_modal(&mut self) {
        self.approve_modal.cancel();
        self.decline_modal.cancel();
    }

    fn pending_record(&self, id: &str) -> Result<&InquiryRecord, InquiryError> {
        let record = self.find(id).ok_or_else(|| InquiryError::NotFound { id: id.into() })?;
        if record.status.is_resolved() {
            return Err(InquiryError::NotPending {
                id: id.into(),
                status: record.status,
            });
        }
        Ok(record)
    }

    fn ensure_reviewer(&mut self) -> Result<(), InquiryError> {
        if self.actor.can_review() {
            return Ok(());
        }
        self.notices
            .push(Notice::error("You are not allowed to review inquiries"));
        Err(InquiryError::Forbidden {
            actor: self.actor.name.clone(),
        })
    }

    fn reconcile(&mut self, record: &InquiryRecord, decision: &InquiryDecision) -> InquiryRecord {
        match self.records.iter_mut().find(|held| held.id == record.id) {
            Some(held) => {
                apply_decision(held, decision);
                held.clone()
            }
            None => {
                warn!(inquiry_id = %record.id, "reviewed inquiry is no longer in the loaded list");
                let mut detached = record.clone();
                apply_decision(&mut detached, decision);
                detached
            }
        }
    }

    fn report_failure(&mut self, action: &'static str, err: RemoteError) -> InquiryError {
        record_action(action, "failure");
        warn!(action, error = %err, "inquiry review failed");
        self.notices.push(Notice::error(err.user_message()));
        InquiryError::Remote(err)
    }
}

#[async_trait]
impl ReviewActions for InquiryListController {
    async fn approve(&mut self, record: &InquiryRecord) -> Result<InquiryRecord, InquiryError> {
        InquiryListController::approve(self, record).await
    }

    async fn decline(
        &mut self,
        record: &InquiryRecord,
        notes: &str,
    ) -> Result<InquiryRecord, InquiryError> {
        InquiryListController::decline(self, record, notes).await
    }
}

fn record_action(action: &'static str, outcome: &'static str) {
    metrics::counter!(
        "staffdesk_inquiry_actions_total",
        "action" => action,
        "outcome" => outcome
    )
    .increment(1);
}
