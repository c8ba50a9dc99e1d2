//! The submission driver.
//!
//! One call to [`ContactForm::submit`] is one [`SubmissionAttempt`]:
//!
//! 1. Honeypot filled → report success, reset, send nothing.
//! 2. Required field blank → report the validation error, send nothing.
//! 3. Walk the channel list; the first channel that applies and answers 2xx
//!    delivers the message. Transport errors and rejections only advance the
//!    walk.
//! 4. List exhausted → mail handoff. Always reachable, so every attempt ends
//!    in a state the user can act on.
//!
//! The submit control is marked busy while a network channel is in flight and
//! released on every exit path.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::channel::{Channel, ChannelKind, default_channels};
use super::fields::{ContactValues, Field, FormData};
use super::mailto::build_mailto;
use super::transport::{Transport, is_ok_status};
use crate::config::ResolvedContact;

/// Human-readable status published to the form's status area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Sending,
    Sent,
    /// Shown for honeypot submissions, which are dropped silently.
    Thanks,
    MissingFields,
    OpeningMail,
    /// Shown once the mail client has been asked to open.
    SendPrompt,
}

impl Status {
    pub fn message(&self) -> &'static str {
        match self {
            Status::Sending => "Sending…",
            Status::Sent => "Sent! We’ll reply soon.",
            Status::Thanks => "Thanks! Your message was sent.",
            Status::MissingFields => "Please fill in name, email, and message.",
            Status::OpeningMail => "Opening your email client...",
            Status::SendPrompt => "Please send the email that was created.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::MissingFields)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The form as the pipeline sees it: a status area, a submit control, and the
/// browser around them.
pub trait FormSurface {
    fn set_status(&mut self, status: Status);

    /// Disable (and visually mute) the submit control, or release it.
    fn set_busy(&mut self, busy: bool);

    /// Clear the form fields.
    fn reset(&mut self);

    /// Navigate to a `mailto:` URI.
    fn open_mail_client(&mut self, uri: &str);

    /// Cooperative pause before the next step.
    fn wait(&mut self, delay: Duration);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    Pending,
    /// `via` is `None` for honeypot submissions, which are reported as sent
    /// without transmitting anything.
    Delivered { via: Option<ChannelKind> },
    HandedOffToMail { uri: String },
    RejectedValidation { missing: Vec<Field> },
}

/// Record of one submit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionAttempt {
    pub fields: ContactValues,
    /// Channels attempted, in order. Skipped channels are not listed.
    pub channels_tried: Vec<ChannelKind>,
    pub outcome: Outcome,
}

impl SubmissionAttempt {
    fn new(fields: ContactValues) -> Self {
        Self {
            fields,
            channels_tried: Vec::new(),
            outcome: Outcome::Pending,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.outcome, Outcome::Delivered { .. })
    }
}

/// A contact form with its resolved settings and channel list.
#[derive(Debug)]
pub struct ContactForm {
    contact: ResolvedContact,
    channels: Vec<Box<dyn Channel>>,
}

impl ContactForm {
    /// A form using the standard channel order.
    pub fn new(contact: ResolvedContact) -> Self {
        Self::with_channels(contact, default_channels())
    }

    pub fn with_channels(contact: ResolvedContact, channels: Vec<Box<dyn Channel>>) -> Self {
        Self { contact, channels }
    }

    pub fn contact(&self) -> &ResolvedContact {
        &self.contact
    }

    pub fn channels(&self) -> impl Iterator<Item = ChannelKind> + '_ {
        self.channels.iter().map(|c| c.kind())
    }

    /// The channels a submission would walk with these settings, ending with
    /// the mail handoff.
    pub fn chain(&self) -> Vec<ChannelKind> {
        let probe = FormData::new();
        self.channels
            .iter()
            .filter(|c| c.request(&probe, &self.contact).is_some())
            .map(|c| c.kind())
            .chain(std::iter::once(ChannelKind::MailHandoff))
            .collect()
    }

    /// Run one submission to completion.
    ///
    /// Never fails: transport problems are absorbed by the fallback chain and
    /// validation problems are reported in the returned attempt.
    pub fn submit<T, S>(&self, form: &FormData, transport: &T, surface: &mut S) -> SubmissionAttempt
    where
        T: Transport + ?Sized,
        S: FormSurface + ?Sized,
    {
        let mut attempt = SubmissionAttempt::new(ContactValues::from_form(form));

        if form.honeypot_tripped() {
            debug!("honeypot filled, dropping submission");
            surface.set_status(Status::Thanks);
            surface.reset();
            attempt.outcome = Outcome::Delivered { via: None };
            return attempt;
        }

        let missing = attempt.fields.missing();
        if !missing.is_empty() {
            debug!(?missing, "submission rejected");
            surface.set_busy(false);
            surface.set_status(Status::MissingFields);
            attempt.outcome = Outcome::RejectedValidation { missing };
            return attempt;
        }

        for channel in &self.channels {
            let kind = channel.kind();
            let Some(request) = channel.request(form, &self.contact) else {
                debug!(channel = %kind, "channel not applicable, skipping");
                continue;
            };

            attempt.channels_tried.push(kind);
            surface.set_busy(true);
            surface.set_status(Status::Sending);

            match transport.send(&request) {
                Ok(status) if is_ok_status(status) => {
                    info!(channel = %kind, status, "message delivered");
                    surface.set_status(Status::Sent);
                    surface.reset();
                    surface.set_busy(false);
                    attempt.outcome = Outcome::Delivered { via: Some(kind) };
                    return attempt;
                }
                Ok(status) => {
                    warn!(channel = %kind, status, url = %request.url, "submission rejected, falling through");
                }
                Err(err) => {
                    warn!(channel = %kind, url = %request.url, "submission failed, falling through: {err}");
                }
            }
        }

        self.hand_off(attempt, surface)
    }

    fn hand_off<S: FormSurface + ?Sized>(
        &self,
        mut attempt: SubmissionAttempt,
        surface: &mut S,
    ) -> SubmissionAttempt {
        surface.set_busy(false);
        surface.set_status(Status::OpeningMail);

        let uri = build_mailto(
            &self.contact.to,
            &attempt.fields,
            &self.contact.product_name,
            &self.contact.attribution,
        );
        surface.wait(self.contact.handoff_delay);
        surface.open_mail_client(&uri);
        surface.set_status(Status::SendPrompt);
        surface.reset();

        info!(to = %self.contact.to, "handed submission off to mail client");
        attempt.channels_tried.push(ChannelKind::MailHandoff);
        attempt.outcome = Outcome::HandedOffToMail { uri };
        attempt
    }
}
