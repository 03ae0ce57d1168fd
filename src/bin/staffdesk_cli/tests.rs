#![deny(clippy::all, clippy::pedantic)]

use std::time::Duration;

use httpmock::MockServer;
use staffdesk::application::error::AppError;
use staffdesk::application::inquiries::InquiryError;
use staffdesk::config::{ApiSettings, LogFormat, LoggingSettings, Settings};
use tempfile::NamedTempFile;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::args::{InquiriesCmd, StatusArg};
use crate::client::{CliError, Ctx};
use crate::handlers::{inquiries, profile};

const ME_ADMIN: &str = r#"{"_id":"u1","name":"Robin Hale","email":"robin@example.com","role":"admin"}"#;
const ME_EMPLOYEE: &str = r#"{"_id":"u2","name":"Sam Ortiz","email":"sam@example.com","role":"employee"}"#;
const INQUIRIES: &str = r#"[
    {"_id":"2","name":"Bea","requestName":"Parking","type":"facilities","description":"","status":"Approved","declineNotes":""},
    {"_id":"1","name":"Alex","requestName":"Laptop","type":"equipment","description":"","status":"Pending","declineNotes":""}
]"#;

fn ctx(server: &MockServer) -> Ctx {
    let settings = Settings {
        api: ApiSettings {
            base_url: Url::parse(&server.url("/api/")).expect("url"),
            token: Some("key".into()),
            timeout: Duration::from_secs(5),
        },
        logging: LoggingSettings {
            level: LevelFilter::WARN,
            format: LogFormat::Compact,
        },
    };
    Ctx::new(settings).expect("ctx")
}

fn tmp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    std::io::Write::write_all(&mut file, contents.as_bytes()).expect("write tmp");
    file
}

fn mock_session(server: &MockServer, me: &'static str) {
    server.mock(|when, then| {
        when.method("GET").path("/api/employees/me");
        then.status(200)
            .header("content-type", "application/json")
            .body(me);
    });
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/inquiries")
            .header("authorization", "Bearer key");
        then.status(200)
            .header("content-type", "application/json")
            .body(INQUIRIES);
    });
}

#[test]
fn read_value_prefers_file_over_inline() -> Result<(), CliError> {
    let file = tmp_file("from-file");
    let val = crate::io::read_value(
        "notes",
        Some("inline".into()),
        Some(file.path().to_path_buf()),
    )?;
    assert_eq!(val, "from-file");
    Ok(())
}

#[test]
fn read_value_requires_something() {
    let err = crate::io::read_value("notes", None, None).expect_err("nothing given");
    assert!(matches!(err, CliError::InvalidInput(_)));
}

#[tokio::test]
async fn list_loads_inquiries() -> Result<(), CliError> {
    let server = MockServer::start();
    let me = server.mock(|when, then| {
        when.method("GET")
            .path("/api/employees/me")
            .header("authorization", "Bearer key");
        then.status(200)
            .header("content-type", "application/json")
            .body(ME_ADMIN);
    });
    let list = server.mock(|when, then| {
        when.method("GET")
            .path("/api/inquiries")
            .header("authorization", "Bearer key");
        then.status(200)
            .header("content-type", "application/json")
            .body(INQUIRIES);
    });

    let ctx = ctx(&server);
    inquiries::handle(
        &ctx,
        InquiriesCmd::List {
            search: Some("al".into()),
            status: StatusArg::All,
            json: true,
        },
    )
    .await?;
    me.assert_calls(1);
    list.assert_calls(1);

    let mut controller = ctx.controller().await?;
    let ids: Vec<String> = controller.view().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, ["1", "2"]);
    controller.set_search("al");
    let ids: Vec<String> = controller.view().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, ["1"]);
    Ok(())
}

#[tokio::test]
async fn approve_hits_endpoint() -> Result<(), CliError> {
    let server = MockServer::start();
    mock_session(&server, ME_ADMIN);
    let mock = server.mock(|when, then| {
        when.method("PATCH").path("/api/inquiries/1/approve");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status":"Approved"}"#);
    });

    let ctx = ctx(&server);
    inquiries::handle(&ctx, InquiriesCmd::Approve { id: "1".into() }).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn decline_reads_trimmed_notes_from_file() -> Result<(), CliError> {
    let server = MockServer::start();
    mock_session(&server, ME_ADMIN);
    let mock = server.mock(|when, then| {
        when.method("PATCH")
            .path("/api/inquiries/1/decline")
            .json_body_includes(r#"{"declineNotes":"insufficient funds"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status":"Declined","declineNotes":"insufficient funds"}"#);
    });

    let notes = tmp_file("  insufficient funds\n");
    let ctx = ctx(&server);
    inquiries::handle(
        &ctx,
        InquiriesCmd::Decline {
            id: "1".into(),
            notes: None,
            notes_file: Some(notes.path().to_path_buf()),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn decline_with_blank_notes_is_a_validation_error() {
    let server = MockServer::start();
    mock_session(&server, ME_ADMIN);

    let ctx = ctx(&server);
    let err = inquiries::handle(
        &ctx,
        InquiriesCmd::Decline {
            id: "1".into(),
            notes: Some("   ".into()),
            notes_file: None,
        },
    )
    .await
    .expect_err("blank notes");
    assert!(matches!(
        err,
        CliError::App(AppError::Inquiry(InquiryError::Validation(_)))
    ));
    assert!(err.already_reported());
}

#[tokio::test]
async fn approve_of_resolved_inquiry_is_refused() {
    let server = MockServer::start();
    mock_session(&server, ME_ADMIN);

    let ctx = ctx(&server);
    let err = inquiries::handle(&ctx, InquiriesCmd::Approve { id: "2".into() })
        .await
        .expect_err("already approved");
    assert!(matches!(
        err,
        CliError::App(AppError::Inquiry(InquiryError::NotPending { .. }))
    ));
}

#[tokio::test]
async fn employees_cannot_approve() {
    let server = MockServer::start();
    mock_session(&server, ME_EMPLOYEE);

    let ctx = ctx(&server);
    let err = inquiries::handle(&ctx, InquiriesCmd::Approve { id: "1".into() })
        .await
        .expect_err("forbidden");
    assert!(matches!(
        err,
        CliError::App(AppError::Inquiry(InquiryError::Forbidden { .. }))
    ));
}

#[tokio::test]
async fn profile_by_id_hits_endpoint() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/employees/u9");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":"u9","name":"Lee Park","email":"lee@example.com","role":"manager","department":"Finance"}"#);
    });

    let ctx = ctx(&server);
    profile::handle(&ctx, Some("u9".into())).await?;
    mock.assert();
    Ok(())
}
