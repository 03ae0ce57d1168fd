//! User-visible success and error messages raised by the services.

use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
    pub raised_at: OffsetDateTime,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self::with_kind(NoticeKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_kind(NoticeKind::Error, text)
    }

    fn with_kind(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            raised_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Pending notices in the order they were raised.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    pending: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, notice: Notice) {
        self.pending.push(notice);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.pending.last()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }
}
