//! reqwest-backed adapter for the inquiry and employee collections.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use staffdesk_api_types::{
    ApiErrorBody, DeclineInquiryRequest, EmployeeRecord, InquiryDecision, InquiryRecord,
};
use tracing::{debug, instrument};

use crate::application::remote::{EmployeeDirectory, InquiryRemote, RemoteError};
use crate::config::ApiSettings;

use super::error::InfraError;

#[derive(Clone, Debug)]
pub struct HttpRemote {
    client: Client,
    base: Url,
    token: Option<String>,
}

impl HttpRemote {
    pub fn new(settings: &ApiSettings) -> Result<Self, InfraError> {
        Self::from_parts(
            settings.base_url.clone(),
            settings.token.clone(),
            settings.timeout,
        )
    }

    pub fn from_parts(
        base: Url,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, InfraError> {
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(InfraError::configuration(format!(
                "`{base}` is not an http(s) base URL"
            )));
        }
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()
            .map_err(|err| InfraError::http_client(err.to_string()))?;
        Ok(Self {
            client,
            base,
            token,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("staffdesk/", env!("CARGO_PKG_VERSION"))
    }

    /// `None` when the client runs unauthenticated.
    pub fn auth_header(&self) -> Result<Option<HeaderValue>, RemoteError> {
        self.token
            .as_deref()
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|err| RemoteError::network(format!("invalid token: {err}")))
            })
            .transpose()
    }

    /// Append path segments to the base URL; each segment is percent-encoded.
    /// Empty, `.` and `..` segments are refused since they would be dropped
    /// or resolved away and address a different endpoint.
    pub fn url(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(RemoteError::InvalidIdentifier((*bad).to_string()));
        }
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| RemoteError::network("base URL cannot carry a path"))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    #[instrument(skip_all, fields(endpoint = endpoint, method = %method))]
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &'static str,
        segments: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<T, RemoteError> {
        let url = self.url(segments)?;
        let mut req = self.client.request(method, url);
        if let Some(header) = self.auth_header()? {
            req = req.header(AUTHORIZATION, header);
        }
        if let Some(b) = body {
            req = req.json(&b);
        }

        let started = Instant::now();
        let outcome = req.send().await;
        metrics::histogram!("staffdesk_remote_request_ms", "endpoint" => endpoint)
            .record(started.elapsed().as_secs_f64() * 1000.0);

        let resp = outcome.map_err(RemoteError::network)?;
        Self::handle(resp).await
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, RemoteError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(RemoteError::network)?;
        if !status.is_success() {
            debug!(%status, body = %String::from_utf8_lossy(&bytes), "backend rejected request");
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .ok()
                .and_then(ApiErrorBody::into_message);
            return Err(RemoteError::server(status.as_u16(), message));
        }
        serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl InquiryRemote for HttpRemote {
    async fn list_inquiries(&self) -> Result<Vec<InquiryRecord>, RemoteError> {
        self.request(Method::GET, "inquiries.list", &["inquiries"], None)
            .await
    }

    async fn approve_inquiry(&self, id: &str) -> Result<InquiryDecision, RemoteError> {
        self.request(
            Method::PATCH,
            "inquiries.approve",
            &["inquiries", id, "approve"],
            None,
        )
        .await
    }

    async fn decline_inquiry(
        &self,
        id: &str,
        notes: &str,
    ) -> Result<InquiryDecision, RemoteError> {
        let payload = DeclineInquiryRequest {
            decline_notes: notes.to_string(),
        };
        let body = serde_json::to_value(payload).map_err(|e| RemoteError::Decode(e.to_string()))?;
        self.request(
            Method::PATCH,
            "inquiries.decline",
            &["inquiries", id, "decline"],
            Some(body),
        )
        .await
    }
}

#[async_trait]
impl EmployeeDirectory for HttpRemote {
    async fn current_employee(&self) -> Result<EmployeeRecord, RemoteError> {
        self.request(Method::GET, "employees.me", &["employees", "me"], None)
            .await
    }

    async fn find_employee(&self, id: &str) -> Result<EmployeeRecord, RemoteError> {
        self.request(Method::GET, "employees.get", &["employees", id], None)
            .await
    }

    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, RemoteError> {
        self.request(Method::GET, "employees.list", &["employees"], None)
            .await
    }
}
