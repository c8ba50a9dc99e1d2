//! Contact form submission pipeline.
//!
//! Turns a submit event into one of two end states the user can observe:
//! the message was delivered over the network, or their mail client opened
//! with the message prefilled. Nothing in between is ever surfaced as a bare
//! failure.
//!
//! The module is split into:
//! - **Fields**: form entries, the honeypot check, required-field validation
//! - **Mailto**: the mail handoff URI (subject, body template, encoding)
//! - **Channel**: the ordered network channels and the requests they build
//! - **Transport**: [`Transport`] trait + [`HttpTransport`] over `reqwest`
//! - **Pipeline**: [`ContactForm::submit`], the driver walking the channels

pub mod channel;
pub mod fields;
pub mod mailto;
pub mod pipeline;
pub mod transport;

pub use channel::{Channel, ChannelKind, EndpointChannel, OriginRelayChannel, default_channels};
pub use fields::{ContactValues, Field, FormData, HONEYPOT_FIELD};
pub use mailto::build_mailto;
pub use pipeline::{ContactForm, FormSurface, Outcome, Status, SubmissionAttempt};
pub use transport::{
    HttpTransport, RequestBody, SubmissionRequest, Transport, TransportError, is_ok_status,
};
