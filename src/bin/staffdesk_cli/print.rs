#![deny(clippy::all, clippy::pedantic)]

use serde::Serialize;
use staffdesk::application::notices::{Notice, NoticeKind};
use staffdesk::domain::inquiries::InquiryRecord;

use crate::client::CliError;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::InvalidInput(format!("failed to render output: {e}")))?;
    println!("{out}");
    Ok(())
}

pub fn print_inquiries(records: &[&InquiryRecord]) {
    if records.is_empty() {
        println!("no inquiries");
        return;
    }
    println!(
        "{:<26} {:<10} {:<22} {:<24} {}",
        "ID", "STATUS", "NAME", "REQUEST", "TYPE"
    );
    for record in records {
        println!(
            "{:<26} {:<10} {:<22} {:<24} {}",
            record.id, record.status, record.name, record.request_name, record.kind
        );
        if !record.decline_notes.is_empty() {
            println!("{:<26} notes: {}", "", record.decline_notes);
        }
    }
}

/// Success notices go to stdout, errors to stderr.
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.text),
            NoticeKind::Error => eprintln!("{}: {}", notice.kind.as_str(), notice.text),
        }
    }
}
