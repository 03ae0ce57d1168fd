#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use tracing::debug;

use crate::args::{InquiriesCmd, StatusArg};
use crate::client::{CliError, Ctx};
use crate::io::read_value;
use crate::print::{print_inquiries, print_json, print_notices};

pub async fn handle(ctx: &Ctx, cmd: InquiriesCmd) -> Result<(), CliError> {
    match cmd {
        InquiriesCmd::List {
            search,
            status,
            json,
        } => list(ctx, search, status, json).await,
        InquiriesCmd::Approve { id } => approve(ctx, &id).await,
        InquiriesCmd::Decline {
            id,
            notes,
            notes_file,
        } => decline(ctx, &id, notes, notes_file).await,
    }
}

async fn list(
    ctx: &Ctx,
    search: Option<String>,
    status: StatusArg,
    json: bool,
) -> Result<(), CliError> {
    let mut controller = ctx.controller().await?;
    if let Some(term) = search {
        controller.set_search(term);
    }
    controller.set_status_filter(status.into());

    let view = controller.view();
    if json {
        print_json(&view)?;
    } else {
        print_inquiries(&view);
    }
    Ok(())
}

async fn approve(ctx: &Ctx, id: &str) -> Result<(), CliError> {
    let mut controller = ctx.controller().await?;
    controller.open_approve(id)?;

    let result = controller.confirm_approve().await;
    print_notices(&controller.notices_mut().drain());
    let updated = result?;
    debug!(inquiry_id = %updated.id, status = %updated.status, "approve finished");
    Ok(())
}

async fn decline(
    ctx: &Ctx,
    id: &str,
    notes: Option<String>,
    notes_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let notes = read_value("notes (use --notes or --notes-file)", notes, notes_file)?;
    let mut controller = ctx.controller().await?;
    controller.open_decline(id)?.set_notes(notes);

    let result = controller.confirm_decline().await;
    if let Some(message) = controller.decline_modal_mut().and_then(|modal| modal.error()) {
        eprintln!("notes: {message}");
    }
    print_notices(&controller.notices_mut().drain());
    let updated = result?;
    debug!(inquiry_id = %updated.id, status = %updated.status, "decline finished");
    Ok(())
}
