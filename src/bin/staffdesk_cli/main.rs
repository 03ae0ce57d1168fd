//! staffdesk-cli: inquiry review, dashboard and profile lookups from the terminal.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;
#[cfg(test)]
mod tests;

use std::process;

use clap::Parser;
use staffdesk::application::error::ErrorReport;
use staffdesk::infra::telemetry;
use tracing::{dispatcher, error};

use args::{Cli, Commands};
use client::{CliError, build_ctx_from_cli};
use handlers::{dashboard, employees, inquiries, profile};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        report(&err);
        process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = build_ctx_from_cli(&cli)?;
    telemetry::init(&ctx.settings.logging)?;

    match cli.command {
        Commands::Inquiries(cmd) => inquiries::handle(&ctx, cmd.action).await?,
        Commands::Dashboard { json } => dashboard::handle(&ctx, json).await?,
        Commands::Profile { id } => profile::handle(&ctx, id).await?,
        Commands::Employees(cmd) => employees::handle(&ctx, cmd.action).await?,
    }

    Ok(())
}

fn report(err: &CliError) {
    if dispatcher::has_been_set() {
        error!(error = %err, "command failed");
    }
    if err.already_reported() {
        return;
    }
    let message = match err {
        CliError::App(app) => app.presentation_message(),
        other => ErrorReport::from_error("staffdesk-cli", other).render(),
    };
    eprintln!("error: {message}");
}
