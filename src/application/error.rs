use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    application::{inquiries::InquiryError, profile::ProfileError},
    config::LoadError,
    infra::error::InfraError,
};

/// An error together with every source beneath it, outermost first.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self { source, messages }
    }

    pub fn render(&self) -> String {
        self.messages.join(": ")
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Inquiry(#[from] InquiryError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl AppError {
    /// Short text for the user; remote failures carry the server's message.
    pub fn presentation_message(&self) -> String {
        match self {
            AppError::Inquiry(InquiryError::Remote(err)) => err.user_message(),
            AppError::Profile(err) => err.user_message(),
            AppError::Inquiry(err) => err.to_string(),
            AppError::Config(err) => format!("Configuration is invalid: {err}"),
            AppError::Infra(InfraError::Telemetry(_)) => {
                "Logging subsystem could not start".to_string()
            }
            AppError::Infra(err) => format!("HTTP client could not be set up: {err}"),
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from_error("application::error::AppError", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::remote::RemoteError;

    #[test]
    fn remote_failures_present_server_message() {
        let err = AppError::from(InquiryError::from(RemoteError::server(
            422,
            Some("Inquiry already declined".into()),
        )));
        assert_eq!(err.presentation_message(), "Inquiry already declined");
    }

    #[test]
    fn config_failures_name_the_offending_key() {
        let err = AppError::from(LoadError::invalid("api.base_url", "required"));
        assert_eq!(
            err.presentation_message(),
            "Configuration is invalid: invalid configuration for `api.base_url`: required"
        );
    }

    #[test]
    fn infra_failures_are_told_apart() {
        let telemetry = AppError::from(InfraError::telemetry("already installed"));
        assert_eq!(
            telemetry.presentation_message(),
            "Logging subsystem could not start"
        );
        let client = AppError::from(InfraError::configuration("`mailto:x` is not a base"));
        assert_eq!(
            client.presentation_message(),
            "HTTP client could not be set up: configuration error: `mailto:x` is not a base"
        );
    }

    #[test]
    fn report_walks_the_source_chain() {
        let build = ::config::ConfigError::Message("unexpected token".into());
        let err = AppError::from(LoadError::from(build));
        let report = err.report();
        assert_eq!(
            report.messages,
            [
                "failed to build configuration: unexpected token",
                "unexpected token"
            ]
        );
        assert!(report.render().ends_with("unexpected token"));
    }
}
