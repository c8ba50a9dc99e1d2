//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output leads with what happened (the outcome of a submission, the item a
//! carousel settled on) and shows mechanism (channels, scroll offsets) as
//! indented context lines underneath.
//!
//! # Output Format
//!
//! ## Submit
//!
//! ```text
//! Handed off to mail client
//!     Tried: endpoint, mail-handoff
//!     From: Ann <a@x.com>
//!     Interest: (none)
//!     URI: mailto:SamiElarab@gmail.com?subject=...
//! ```
//!
//! ## Carousel
//!
//! ```text
//! Start  002 web
//! next   003 seo  @ 424.0
//! next   004 ai  @ 542.0
//! next   001 mix  @ 198.0  teleported from 005
//! ```
//!
//! ## Track
//!
//! ```text
//! Start  @ 0.0  [prev disabled]
//! next   @ 460.0
//! next   @ 700.0  [next disabled]
//! ```
//!
//! ## Check
//!
//! ```text
//! Contact
//!     To: SamiElarab@gmail.com
//!     Channels: endpoint → mail-handoff
//! Carousel
//!     Settle: 50ms (initial 200ms)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::carousel::{
    ButtonState, Direction, FixedStrip, Replay, ReplayFrame, ScrollStrip, SettleOutcome, StripEvent,
    TrackReplay,
};
use crate::config::{ResolvedContact, SiteConfig};
use crate::contact::{ContactForm, Outcome, Status, SubmissionAttempt};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a padded item index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `001 mix` for tagged items, `001` for untagged ones.
fn item_label(strip: &FixedStrip, index: usize) -> String {
    match strip.item_tab(index) {
        Some(tab) => format!("{} {}", format_index(index), tab),
        None => format_index(index),
    }
}

fn event_label(event: &StripEvent) -> String {
    match event {
        StripEvent::Scroll(left) => format!("scroll:{left}"),
        StripEvent::Step(Direction::Next) => "next".to_string(),
        StripEvent::Step(Direction::Prev) => "prev".to_string(),
        StripEvent::Key(key) => format!("key:{key}"),
        StripEvent::Resize(width) => format!("resize:{width}"),
    }
}

// ============================================================================
// Submit
// ============================================================================

/// One status line as the user sees it. Errors are flagged.
pub fn format_status(status: Status) -> String {
    if status.is_error() {
        format!("! {}", status.message())
    } else {
        status.message().to_string()
    }
}

/// Summarize a submission attempt.
pub fn format_attempt(attempt: &SubmissionAttempt) -> Vec<String> {
    let mut lines = Vec::new();

    let headline = match &attempt.outcome {
        Outcome::Pending => "Pending".to_string(),
        Outcome::Delivered { via: Some(kind) } => format!("Delivered via {kind}"),
        Outcome::Delivered { via: None } => "Dropped (honeypot filled)".to_string(),
        Outcome::HandedOffToMail { .. } => "Handed off to mail client".to_string(),
        Outcome::RejectedValidation { .. } => "Rejected".to_string(),
    };
    lines.push(headline);

    if !attempt.channels_tried.is_empty() {
        let tried: Vec<String> = attempt.channels_tried.iter().map(|k| k.to_string()).collect();
        lines.push(format!("{}Tried: {}", indent(1), tried.join(", ")));
    }

    let fields = &attempt.fields;
    lines.push(format!("{}From: {} <{}>", indent(1), fields.name, fields.email));
    let interest = if fields.service.is_empty() {
        "(none)"
    } else {
        fields.service.as_str()
    };
    lines.push(format!("{}Interest: {}", indent(1), interest));

    match &attempt.outcome {
        Outcome::HandedOffToMail { uri } => {
            lines.push(format!("{}URI: {}", indent(1), uri));
        }
        Outcome::RejectedValidation { missing } => {
            let missing: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
            lines.push(format!("{}Missing: {}", indent(1), missing.join(", ")));
        }
        _ => {}
    }
    lines
}

pub fn print_attempt(attempt: &SubmissionAttempt) {
    for line in format_attempt(attempt) {
        println!("{}", line);
    }
}

// ============================================================================
// Carousel
// ============================================================================

/// Format a replayed carousel session, one line per event.
///
/// Labels come from `strip`, which must be the strip the session ran on.
pub fn format_replay(replay: &Replay, strip: &FixedStrip) -> Vec<String> {
    let mut lines = vec![format!("Start  {}", item_label(strip, replay.initial_index))];
    for frame in &replay.frames {
        lines.push(format_frame(frame, strip));
    }
    lines
}

fn format_frame(frame: &ReplayFrame, strip: &FixedStrip) -> String {
    let mut line = format!(
        "{:<6} {}  @ {:.1}",
        event_label(&frame.event),
        item_label(strip, frame.centered),
        frame.scroll_left
    );
    if let Some(SettleOutcome::Teleported { from, .. }) = frame.settle {
        line.push_str(&format!("  teleported from {}", format_index(from)));
    }
    line
}

pub fn print_replay(replay: &Replay, strip: &FixedStrip) {
    for line in format_replay(replay, strip) {
        println!("{}", line);
    }
}

// ============================================================================
// Track
// ============================================================================

/// `  [prev disabled]`, `  [prev, next disabled]`, or nothing.
fn button_note(buttons: ButtonState) -> String {
    let disabled: Vec<&str> = [("prev", buttons.prev_disabled), ("next", buttons.next_disabled)]
        .into_iter()
        .filter_map(|(name, off)| off.then_some(name))
        .collect();
    if disabled.is_empty() {
        String::new()
    } else {
        format!("  [{} disabled]", disabled.join(", "))
    }
}

/// Format a replayed bounded-track session, one line per event.
pub fn format_track_replay(replay: &TrackReplay) -> Vec<String> {
    let mut lines = vec![format!("Start  @ 0.0{}", button_note(replay.initial))];
    for frame in &replay.frames {
        lines.push(format!(
            "{:<6} @ {:.1}{}",
            event_label(&frame.event),
            frame.scroll_left,
            button_note(frame.buttons)
        ));
    }
    lines
}

pub fn print_track_replay(replay: &TrackReplay) {
    for line in format_track_replay(replay) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the effective configuration, with the channel chain a default
/// contact form would walk.
pub fn format_config(config: &SiteConfig) -> Vec<String> {
    let contact = config.contact.resolve(&Default::default());
    let mut lines = vec!["Contact".to_string()];
    lines.extend(format_contact(&contact).into_iter().map(|l| format!("{}{}", indent(1), l)));

    let carousel = &config.carousel;
    lines.push("Carousel".to_string());
    lines.push(format!(
        "{}Settle: {}ms (initial {}ms)",
        indent(1),
        carousel.settle_delay_ms,
        carousel.initial_settle_ms
    ));
    lines.push(format!(
        "{}Step: item width + {}px (fallback {}px)",
        indent(1),
        carousel.item_gap,
        carousel.fallback_step
    ));
    let start = match &carousel.initial_tab {
        Some(tab) => format!("tab {tab} (else index {})", carousel.initial_index),
        None => format!("index {}", carousel.initial_index),
    };
    lines.push(format!("{}Start: {}", indent(1), start));

    let track = &config.track;
    lines.push("Track".to_string());
    lines.push(format!(
        "{}Step: {}% of width (at least {}px)",
        indent(1),
        track.page_fraction * 100.0,
        track.min_step
    ));
    lines.push(format!("{}Edge tolerance: {}px", indent(1), track.edge_tolerance));
    lines
}

fn format_contact(contact: &ResolvedContact) -> Vec<String> {
    let chain: Vec<String> = ContactForm::new(contact.clone())
        .chain()
        .iter()
        .map(|kind| kind.to_string())
        .collect();

    let mut lines = vec![format!("To: {}", contact.to)];
    if let Some(endpoint) = &contact.endpoint {
        lines.push(format!("Endpoint: {}", endpoint));
    }
    if let Some(origin) = &contact.origin {
        lines.push(format!("Origin: {}", origin));
    }
    lines.push(format!("Channels: {}", chain.join(" \u{2192} ")));
    lines
}

pub fn print_config(config: &SiteConfig) {
    for line in format_config(config) {
        println!("{}", line);
    }
}
