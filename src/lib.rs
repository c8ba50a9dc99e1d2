//! # Cardinal
//!
//! Interactive behavior for the Digital Cardinal marketing site: infinite
//! carousels that select content tabs, and contact forms that always reach
//! the inbox one way or another.
//!
//! The browser page is a thin host. It implements a handful of seam traits
//! (a scroll container, a tab display, a form surface, an HTTP transport) and
//! forwards events; every decision lives here, where it can be unit tested
//! without a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Clone-padded infinite strips (centering, settle debounce, teleport, stepping) and bounded tracks |
//! | [`contact`] | Submission pipeline: honeypot, validation, endpoint, origin relay, mail handoff |
//! | [`attach`] | Idempotent per-element initialization for late-inserted markup |
//! | [`site`] | Page runtime tying attached carousels and forms to one config and transport |
//! | [`config`] | `config.toml` loading over stock defaults, validation, per-form overrides |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## The Mailbox Is the Last Resort, Not an Error
//!
//! A contact form never shows a bare failure. Network channels are tried in
//! order (a configured endpoint, then the static host's form relay on the
//! page's own origin) and whatever they answer, the message is finally handed
//! to the visitor's mail client with every field prefilled. The visitor always
//! ends in one of two states: delivered, or looking at a ready-to-send email.
//!
//! ## Time Is an Argument
//!
//! Carousel timers take the current [`std::time::Instant`] as a parameter
//! instead of reading the clock. The host calls `tick` whenever a deadline may
//! have passed. This makes every scroll sequence reproducible in tests and in
//! the `cardinal carousel` replay command.
//!
//! ## Teleports Must Not Echo
//!
//! Jumping from a boundary clone to its real item is itself a scroll, and the
//! browser reports it like any other. The controller stays in a teleporting
//! phase that remembers where the jump landed; the report of that offset
//! closes the phase without starting a second settle cycle.

pub mod attach;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod output;
pub mod site;

#[cfg(test)]
pub(crate) mod test_helpers;
