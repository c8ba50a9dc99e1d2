//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a user `config.toml` only needs the keys it wants to
//! override. Individual contact forms can further override the destination
//! mailbox and the endpoint (the `data-contact-to` / `data-form-endpoint`
//! attributes on the form markup), see [`ContactConfig::resolve`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [contact]
//! contact_email = "SamiElarab@gmail.com"  # Destination mailbox + mailto target
//! form_endpoint = ""                       # Empty = relay to origin, then mailto
//! site_origin = ""                         # Empty or file:// = local-file context
//! product_name = "Digital Cardinal"        # Default mail subject suffix
//! attribution = "— Sent from digitalcardinal.com"
//! handoff_delay_ms = 800                   # Pause before opening the mail client
//!
//! [carousel]
//! settle_delay_ms = 50      # Scroll-settle debounce window
//! initial_settle_ms = 200   # Scroll logic stays off this long after load
//! item_gap = 8.0            # Gap between items (px), added to each step
//! fallback_step = 280.0     # Step used when an item measures zero width
//! initial_index = 2         # Padded index centered on load
//! # initial_tab = "web"     # Tab id centered on load (wins over the index)
//!
//! [track]
//! min_step = 280.0          # Shortest arrow step on a bounded strip (px)
//! page_fraction = 0.92      # Arrow step as a fraction of the visible width
//! edge_tolerance = 2.0      # Within this many px of an end counts as at it
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Contact form delivery settings.
    pub contact: ContactConfig,
    /// Infinite carousel behavior.
    pub carousel: CarouselConfig,
    /// Bounded (non-looping) carousel behavior.
    pub track: TrackConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.contact.contact_email.contains('@') {
            return Err(ConfigError::Validation(
                "contact.contact_email must be an email address".into(),
            ));
        }
        for (key, value) in [
            ("contact.form_endpoint", &self.contact.form_endpoint),
            ("contact.site_origin", &self.contact.site_origin),
        ] {
            if !value.trim().is_empty() && url::Url::parse(value.trim()).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an absolute URL, got {value:?}"
                )));
            }
        }
        if self.carousel.settle_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.settle_delay_ms must be non-zero".into(),
            ));
        }
        if !(self.carousel.fallback_step > 0.0) {
            return Err(ConfigError::Validation(
                "carousel.fallback_step must be positive".into(),
            ));
        }
        if !(self.carousel.item_gap >= 0.0) {
            return Err(ConfigError::Validation(
                "carousel.item_gap must not be negative".into(),
            ));
        }
        if !(self.track.min_step > 0.0) {
            return Err(ConfigError::Validation(
                "track.min_step must be positive".into(),
            ));
        }
        if !(self.track.page_fraction > 0.0 && self.track.page_fraction <= 1.0) {
            return Err(ConfigError::Validation(
                "track.page_fraction must be in (0, 1]".into(),
            ));
        }
        if !(self.track.edge_tolerance >= 0.0) {
            return Err(ConfigError::Validation(
                "track.edge_tolerance must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Contact form delivery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Destination mailbox. Sent as the `to` field to the endpoint and used
    /// as the `mailto:` target.
    pub contact_email: String,
    /// Direct form endpoint (Formspree, serverless function...). Empty means
    /// no endpoint: relay to the site origin, then fall back to mail.
    pub form_endpoint: String,
    /// Origin the page is served from. Empty or a `file:` URL means the page
    /// runs from disk, where the origin relay is meaningless.
    pub site_origin: String,
    /// Product name used in the mail subject when no interest was selected.
    pub product_name: String,
    /// Trailing line appended to the mail handoff body.
    pub attribution: String,
    /// Pause between announcing the mail handoff and opening the client.
    pub handoff_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            contact_email: "SamiElarab@gmail.com".to_string(),
            form_endpoint: String::new(),
            site_origin: String::new(),
            product_name: "Digital Cardinal".to_string(),
            attribution: "— Sent from digitalcardinal.com".to_string(),
            handoff_delay_ms: 800,
        }
    }
}

/// Per-form overrides read from the form markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOverrides {
    /// Replaces `contact_email` for this form.
    pub contact_to: Option<String>,
    /// Replaces `form_endpoint` for this form.
    pub endpoint: Option<String>,
}

/// Contact settings after applying a form's overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContact {
    pub to: String,
    /// `None` when neither the form nor the site configures an endpoint.
    pub endpoint: Option<String>,
    /// `None` in a local-file context.
    pub origin: Option<url::Url>,
    pub product_name: String,
    pub attribution: String,
    pub handoff_delay: Duration,
}

impl ContactConfig {
    /// Apply per-form overrides. Blank override values count as absent.
    pub fn resolve(&self, overrides: &FormOverrides) -> ResolvedContact {
        let to = non_blank(overrides.contact_to.as_deref())
            .unwrap_or(self.contact_email.trim())
            .to_string();
        let endpoint = non_blank(overrides.endpoint.as_deref())
            .or_else(|| non_blank(Some(&self.form_endpoint)))
            .map(str::to_string);

        ResolvedContact {
            to,
            endpoint,
            origin: served_origin(&self.site_origin),
            product_name: self.product_name.clone(),
            attribution: self.attribution.clone(),
            handoff_delay: Duration::from_millis(self.handoff_delay_ms),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse the configured origin, treating blank and `file:` origins as
/// "not served over the network".
fn served_origin(origin: &str) -> Option<url::Url> {
    let url = url::Url::parse(non_blank(Some(origin))?).ok()?;
    (url.scheme() != "file").then_some(url)
}

/// Infinite carousel behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Debounce window: settle logic runs once no scroll event arrived for
    /// this long.
    pub settle_delay_ms: u64,
    /// Scroll-driven logic stays disabled this long after the initial jump.
    pub initial_settle_ms: u64,
    /// Gap between items in pixels, added to the centered item's width to
    /// form one navigation step.
    pub item_gap: f64,
    /// Step used when the centered item measures zero width (hidden strip).
    pub fallback_step: f64,
    /// Padded index centered on load when `initial_tab` is absent or unknown.
    pub initial_index: usize,
    /// Tab id centered on load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_tab: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 50,
            initial_settle_ms: 200,
            item_gap: 8.0,
            fallback_step: 280.0,
            initial_index: 2,
            initial_tab: None,
        }
    }
}

impl CarouselConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn initial_settle(&self) -> Duration {
        Duration::from_millis(self.initial_settle_ms)
    }
}

/// Bounded carousel behavior: strips that stop at both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackConfig {
    /// Lower bound for one arrow step, in pixels.
    pub min_step: f64,
    /// One arrow step is this fraction of the visible width, rounded down.
    pub page_fraction: f64,
    /// A scroll offset within this many pixels of an end disables that
    /// end's button.
    pub edge_tolerance: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            min_step: 280.0,
            page_fraction: 0.92,
            edge_tolerance: 2.0,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Cardinal Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Contact forms
# ---------------------------------------------------------------------------
[contact]
# Destination mailbox. Sent to the endpoint as the `to` field and used as
# the mailto: target when every network channel fails.
# A form can override it with a data-contact-to attribute.
contact_email = "SamiElarab@gmail.com"

# Direct form endpoint, e.g. "https://formspree.io/f/YOUR_FORM_ID".
# Empty means: post to the site origin, then fall back to mailto.
# A form can override it with a data-form-endpoint attribute.
form_endpoint = ""

# Origin the site is served from, e.g. "https://digitalcardinal.com".
# Empty or a file:// URL disables the origin relay.
site_origin = ""

# Used in the mail subject when the visitor picked no service.
product_name = "Digital Cardinal"

# Last line of the mail handoff body.
attribution = "— Sent from digitalcardinal.com"

# Milliseconds between "Opening your email client..." and opening it.
handoff_delay_ms = 800

# ---------------------------------------------------------------------------
# Carousels
# ---------------------------------------------------------------------------
[carousel]
# Scroll-settle debounce window (ms). Each scroll event restarts it.
settle_delay_ms = 50

# Scroll-driven logic stays disabled this long after the initial jump (ms).
initial_settle_ms = 200

# Gap between items (px). One arrow step = centered item width + gap.
item_gap = 8.0

# Step (px) used when the centered item measures zero width.
fallback_step = 280.0

# Padded index centered on load. Index 0 is the clone of the last item.
initial_index = 2

# Tab id centered on load; wins over initial_index when present.
# initial_tab = "web"

# ---------------------------------------------------------------------------
# Bounded carousels (strips that do not loop)
# ---------------------------------------------------------------------------
[track]
# Shortest arrow step (px).
min_step = 280.0

# One arrow step = this fraction of the visible width, rounded down,
# but never less than min_step.
page_fraction = 0.92

# A scroll offset within this many px of an end disables that end's button.
edge_tolerance = 2.0
"##
}
