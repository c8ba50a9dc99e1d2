//! The network seam for delivery channels.
//!
//! Channels describe *what* to send as a [`SubmissionRequest`]; a
//! [`Transport`] sends it and reports the HTTP status. [`HttpTransport`] is
//! the production implementation over a blocking `reqwest` client.

use std::time::Duration;

use reqwest::blocking::{Client, multipart};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use thiserror::Error;
use tracing::debug;

/// Per-request timeout. A hung endpoint must not stall the fallback chain.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Payload encodings the channels produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// `multipart/form-data`, one text part per entry.
    Multipart(Vec<(String, String)>),
    /// `application/x-www-form-urlencoded`, already encoded.
    UrlEncoded(String),
}

/// One POST a channel wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub url: String,
    pub body: RequestBody,
    /// Send `Accept: application/json` (form services answer JSON instead of
    /// redirecting to a thank-you page).
    pub accept_json: bool,
}

/// Sends a submission and reports the HTTP status code.
///
/// A returned status is not a verdict; the pipeline decides what counts as
/// delivered (see [`is_ok_status`]). `Err` means no response was obtained.
pub trait Transport {
    fn send(&self, request: &SubmissionRequest) -> Result<u16, TransportError>;
}

/// HTTP-level OK: any 2xx status.
pub fn is_ok_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy settings, custom TLS roots...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &SubmissionRequest) -> Result<u16, TransportError> {
        let url = reqwest::Url::parse(&request.url).map_err(|e| TransportError::InvalidUrl {
            url: request.url.clone(),
            reason: e.to_string(),
        })?;

        debug!(url = %url, "posting submission");
        let mut builder = self
            .client
            .post(url)
            .header(USER_AGENT, concat!("cardinal/", env!("CARGO_PKG_VERSION")));
        if request.accept_json {
            builder = builder.header(ACCEPT, "application/json");
        }
        builder = match &request.body {
            RequestBody::Multipart(fields) => {
                let form = fields
                    .iter()
                    .fold(multipart::Form::new(), |form, (name, value)| {
                        form.text(name.clone(), value.clone())
                    });
                builder.multipart(form)
            }
            RequestBody::UrlEncoded(encoded) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encoded.clone()),
        };

        let response = builder
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}
