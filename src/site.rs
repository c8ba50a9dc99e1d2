//! Page runtime: the carousels and contact forms attached to one document.
//!
//! A host binding offers elements as they appear ([`Site::attach_carousel`],
//! [`Site::attach_track`], [`Site::attach_form`]) and forwards their events. Elements whose markup is
//! incomplete are skipped silently; absent UI is normal on most pages.

use std::time::Instant;

use tracing::debug;

use crate::attach::{Attach, Attachments};
use crate::carousel::{
    ButtonState, CarouselController, ScrollStrip, ScrollTrack, SettleOutcome, TabDisplay, TrackController,
};
use crate::config::{FormOverrides, SiteConfig};
use crate::contact::{ContactForm, FormData, FormSurface, SubmissionAttempt, Transport};

/// Forms are only wired up when named `contact`.
pub const CONTACT_FORM_NAME: &str = "contact";

#[derive(Debug)]
pub struct Site<T> {
    config: SiteConfig,
    transport: T,
    carousels: Attachments<CarouselController>,
    tracks: Attachments<TrackController>,
    forms: Attachments<ContactForm>,
}

impl<T: Transport> Site<T> {
    pub fn new(config: SiteConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            carousels: Attachments::new(),
            tracks: Attachments::new(),
            forms: Attachments::new(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Attach a controller to the strip with element id `id`.
    ///
    /// Returns `true` when a controller was attached by this call. Missing
    /// layout is logged at debug level and otherwise ignored.
    pub fn attach_carousel<S, D>(&mut self, id: &str, strip: &mut S, display: &mut D, now: Instant) -> bool
    where
        S: ScrollStrip + ?Sized,
        D: TabDisplay + ?Sized,
    {
        let config = &self.config.carousel;
        match self
            .carousels
            .attach_with(id, || CarouselController::init(strip, display, config, now))
        {
            Attach::Attached => true,
            Attach::AlreadyInitialized => false,
            Attach::Declined(reason) => {
                debug!(id, %reason, "carousel layout unavailable, skipping");
                false
            }
        }
    }

    /// Attach a bounded-track controller to the strip with element id `id`.
    ///
    /// Tracks always attach; one without buttons is still keyboard-scrollable.
    pub fn attach_track<S: ScrollTrack + ?Sized>(&mut self, id: &str, track: &mut S) -> bool {
        let config = &self.config.track;
        matches!(
            self.tracks
                .attach_with::<std::convert::Infallible>(id, || Ok(TrackController::attach(track, config))),
            Attach::Attached
        )
    }

    /// Attach the submission pipeline to the form with element id `id`.
    ///
    /// `name` is the form's `name` attribute; only `contact` forms are wired.
    pub fn attach_form(&mut self, id: &str, name: &str, overrides: &FormOverrides) -> bool {
        if name != CONTACT_FORM_NAME {
            debug!(id, name, "not a contact form, skipping");
            return false;
        }
        let contact = self.config.contact.resolve(overrides);
        matches!(
            self.forms
                .attach_with::<std::convert::Infallible>(id, || Ok(ContactForm::new(contact))),
            Attach::Attached
        )
    }

    pub fn carousel(&self, id: &str) -> Option<&CarouselController> {
        self.carousels.get(id)
    }

    pub fn carousel_mut(&mut self, id: &str) -> Option<&mut CarouselController> {
        self.carousels.get_mut(id)
    }

    pub fn track(&self, id: &str) -> Option<&TrackController> {
        self.tracks.get(id)
    }

    pub fn track_mut(&mut self, id: &str) -> Option<&mut TrackController> {
        self.tracks.get_mut(id)
    }

    /// Forward a scroll event to a track. Returns the refreshed buttons, or
    /// `None` for an unknown id.
    pub fn track_scrolled<S: ScrollTrack + ?Sized>(&mut self, id: &str, track: &mut S) -> Option<ButtonState> {
        Some(self.tracks.get_mut(id)?.on_scroll(track))
    }

    /// Forward a window resize to a track. The host calls this for every
    /// id in [`track_ids`](Self::track_ids).
    pub fn track_resized<S: ScrollTrack + ?Sized>(&mut self, id: &str, track: &mut S) -> Option<ButtonState> {
        Some(self.tracks.get_mut(id)?.on_resize(track))
    }

    pub fn track_ids(&self) -> impl Iterator<Item = &str> {
        self.tracks.ids()
    }

    pub fn form(&self, id: &str) -> Option<&ContactForm> {
        self.forms.get(id)
    }

    /// Forward a scroll event. Unknown ids are ignored.
    pub fn carousel_scrolled<S: ScrollStrip + ?Sized>(&mut self, id: &str, strip: &mut S, now: Instant) {
        if let Some(controller) = self.carousels.get_mut(id) {
            controller.on_scroll(strip, now);
        }
    }

    /// Advance the carousel's timers.
    pub fn carousel_tick<S, D>(&mut self, id: &str, strip: &mut S, display: &mut D, now: Instant) -> Option<SettleOutcome>
    where
        S: ScrollStrip + ?Sized,
        D: TabDisplay + ?Sized,
    {
        self.carousels.get_mut(id)?.tick(strip, display, now)
    }

    /// Handle a submit event on form `id`.
    ///
    /// Returns `None` when no pipeline is attached to that form; the submit
    /// then proceeds as plain HTML would.
    pub fn submit<S: FormSurface + ?Sized>(
        &self,
        id: &str,
        form: &FormData,
        surface: &mut S,
    ) -> Option<SubmissionAttempt> {
        let pipeline = self.forms.get(id)?;
        Some(pipeline.submit(form, &self.transport, surface))
    }
}
