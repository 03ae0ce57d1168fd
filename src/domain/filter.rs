//! Client-side search and status filtering over a loaded inquiry list.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;
use super::inquiries::{InquiryRecord, InquiryStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InquiryStatus),
}

impl StatusFilter {
    pub fn matches(self, status: InquiryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status.as_str().to_ascii_lowercase()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        value
            .parse::<InquiryStatus>()
            .map(StatusFilter::Only)
            .map_err(|err| DomainError::validation(err.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub status: StatusFilter,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search_term: search_term.into(),
            status,
        }
    }

    pub fn matches(&self, record: &InquiryRecord) -> bool {
        self.status.matches(record.status) && name_contains(&record.name, &self.search_term)
    }
}

fn name_contains(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Records matching `filter`, pending ones first.
///
/// This is a stable partition rather than a sort: records keep their loaded
/// order inside the pending and resolved buckets.
pub fn view<'a>(records: &'a [InquiryRecord], filter: &FilterState) -> Vec<&'a InquiryRecord> {
    let (pending, resolved): (Vec<_>, Vec<_>) = records
        .iter()
        .filter(|record| filter.matches(record))
        .partition(|record| !record.status.is_resolved());

    let mut out = pending;
    out.extend(resolved);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, status: InquiryStatus) -> InquiryRecord {
        InquiryRecord {
            id: id.into(),
            name: name.into(),
            request_name: String::new(),
            kind: String::new(),
            description: String::new(),
            status,
            decline_notes: if status == InquiryStatus::Declined {
                "n/a".into()
            } else {
                String::new()
            },
        }
    }

    fn ids(view: &[&InquiryRecord]) -> Vec<String> {
        view.iter().map(|record| record.id.clone()).collect()
    }

    #[test]
    fn pending_records_come_first() {
        let list = vec![
            record("1", "Alex", InquiryStatus::Pending),
            record("2", "Bea", InquiryStatus::Approved),
        ];
        assert_eq!(ids(&view(&list, &FilterState::default())), ["1", "2"]);
    }

    #[test]
    fn partition_is_stable_within_buckets() {
        let list = vec![
            record("a", "Ana", InquiryStatus::Declined),
            record("b", "Ben", InquiryStatus::Pending),
            record("c", "Cy", InquiryStatus::Approved),
            record("d", "Di", InquiryStatus::Pending),
            record("e", "Ed", InquiryStatus::Declined),
        ];
        assert_eq!(
            ids(&view(&list, &FilterState::default())),
            ["b", "d", "a", "c", "e"]
        );
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name() {
        let list = vec![
            record("1", "Alexandra", InquiryStatus::Pending),
            record("2", "Bea", InquiryStatus::Pending),
            record("3", "ALEX", InquiryStatus::Approved),
        ];
        let filter = FilterState::new("aLe", StatusFilter::All);
        assert_eq!(ids(&view(&list, &filter)), ["1", "3"]);
    }

    #[test]
    fn status_filter_composes_with_search() {
        let list = vec![
            record("1", "Alex", InquiryStatus::Pending),
            record("2", "Alex", InquiryStatus::Declined),
            record("3", "Bea", InquiryStatus::Declined),
        ];
        let filter = FilterState::new("alex", StatusFilter::Only(InquiryStatus::Declined));
        assert_eq!(ids(&view(&list, &filter)), ["2"]);
    }

    #[test]
    fn view_contains_exactly_the_matching_records() {
        let list = vec![
            record("1", "Kim", InquiryStatus::Approved),
            record("2", "Kimberly", InquiryStatus::Pending),
            record("3", "Lee", InquiryStatus::Pending),
            record("4", "Akim", InquiryStatus::Declined),
        ];
        let cases: [(StatusFilter, &[&str]); 4] = [
            (StatusFilter::All, &["2", "1", "4"]),
            (StatusFilter::Only(InquiryStatus::Pending), &["2"]),
            (StatusFilter::Only(InquiryStatus::Approved), &["1"]),
            (StatusFilter::Only(InquiryStatus::Declined), &["4"]),
        ];
        for (status, expected) in cases {
            let filter = FilterState::new("KIM", status);
            assert_eq!(ids(&view(&list, &filter)), expected, "filter {status}");
        }
    }

    #[test]
    fn status_filter_parses_all_and_statuses() {
        assert_eq!("ALL".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "pending".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(InquiryStatus::Pending))
        );
        assert!("closed".parse::<StatusFilter>().is_err());
    }
}
