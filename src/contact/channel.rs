//! Delivery channels, in priority order.
//!
//! | Priority | Channel | Applies when | Payload |
//! |---|---|---|---|
//! | 1 | [`EndpointChannel`] | an endpoint is configured | multipart, all fields + `to` |
//! | 2 | [`OriginRelayChannel`] | no endpoint, page served over the network | url-encoded, POST `/` |
//! | 3 | mail handoff | always | `mailto:` URI (see [`mailto`](super::mailto)) |
//!
//! The network channels implement [`Channel`]. The mail handoff is not a
//! network channel and is not in the list: the pipeline runs it after the
//! list is exhausted, unconditionally.

use serde::Serialize;
use std::fmt;

use super::fields::FormData;
use super::transport::{RequestBody, SubmissionRequest};
use crate::config::ResolvedContact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelKind {
    Endpoint,
    FormRelay,
    MailHandoff,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChannelKind::Endpoint => "endpoint",
            ChannelKind::FormRelay => "form-relay",
            ChannelKind::MailHandoff => "mail-handoff",
        })
    }
}

/// A network delivery channel.
pub trait Channel: fmt::Debug {
    fn kind(&self) -> ChannelKind;

    /// The request to make, or `None` when the channel does not apply to
    /// this form's settings.
    fn request(&self, form: &FormData, contact: &ResolvedContact) -> Option<SubmissionRequest>;
}

/// POST every field plus the destination address to the configured endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointChannel;

impl Channel for EndpointChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Endpoint
    }

    fn request(&self, form: &FormData, contact: &ResolvedContact) -> Option<SubmissionRequest> {
        let endpoint = contact.endpoint.as_ref()?;
        let mut fields = form.entries().to_vec();
        fields.push(("to".to_string(), contact.to.clone()));
        Some(SubmissionRequest {
            url: endpoint.clone(),
            body: RequestBody::Multipart(fields),
            accept_json: true,
        })
    }
}

/// POST the url-encoded form to the root of the page's own origin, where the
/// static host's form handling picks it up.
///
/// Only used when no endpoint is configured, and never from a local file.
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginRelayChannel;

impl Channel for OriginRelayChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::FormRelay
    }

    fn request(&self, form: &FormData, contact: &ResolvedContact) -> Option<SubmissionRequest> {
        if contact.endpoint.is_some() {
            return None;
        }
        let root = contact.origin.as_ref()?.join("/").ok()?;
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form.entries())
            .finish();
        Some(SubmissionRequest {
            url: root.to_string(),
            body: RequestBody::UrlEncoded(encoded),
            accept_json: false,
        })
    }
}

/// The network channels in priority order.
pub fn default_channels() -> Vec<Box<dyn Channel>> {
    vec![Box::new(EndpointChannel), Box::new(OriginRelayChannel)]
}
