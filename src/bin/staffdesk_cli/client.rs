#![deny(clippy::all, clippy::pedantic)]

use std::sync::Arc;

use staffdesk::application::error::AppError;
use staffdesk::application::inquiries::{InquiryError, InquiryListController};
use staffdesk::application::profile::{ProfileError, ProfileService};
use staffdesk::config::{self, LoadError, Settings};
use staffdesk::infra::{error::InfraError, http::HttpRemote};
use thiserror::Error;

use crate::args::Cli;
use crate::print::print_notices;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        Self::App(err.into())
    }
}

impl From<InfraError> for CliError {
    fn from(err: InfraError) -> Self {
        Self::App(err.into())
    }
}

impl From<InquiryError> for CliError {
    fn from(err: InquiryError) -> Self {
        Self::App(err.into())
    }
}

impl From<ProfileError> for CliError {
    fn from(err: ProfileError) -> Self {
        Self::App(err.into())
    }
}

impl CliError {
    /// Errors the user has already seen as a notice or inline message.
    pub fn already_reported(&self) -> bool {
        matches!(
            self,
            CliError::App(AppError::Inquiry(
                InquiryError::Remote(_)
                    | InquiryError::Forbidden { .. }
                    | InquiryError::Validation(_)
            ))
        )
    }
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub remote: Arc<HttpRemote>,
    pub settings: Settings,
}

impl Ctx {
    pub fn new(settings: Settings) -> Result<Self, CliError> {
        let remote = Arc::new(HttpRemote::new(&settings.api)?);
        Ok(Self { remote, settings })
    }

    pub fn profiles(&self) -> ProfileService {
        ProfileService::new(self.remote.clone())
    }

    /// Controller for the signed-in actor with the inquiry list loaded.
    pub async fn controller(&self) -> Result<InquiryListController, CliError> {
        let actor = self.profiles().current_actor().await?;
        let mut controller = InquiryListController::new(self.remote.clone(), actor);
        let loaded = controller.load().await;
        print_notices(&controller.notices_mut().drain());
        loaded?;
        Ok(controller)
    }
}

pub fn build_ctx_from_cli(cli: &Cli) -> Result<Ctx, CliError> {
    let settings = config::load(cli.config_file.as_deref(), &cli.overrides)?;
    Ctx::new(settings)
}
