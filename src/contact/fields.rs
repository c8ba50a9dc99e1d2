//! Submitted form data and the checks that run before any network attempt.

use serde::Serialize;
use std::fmt;

/// Hidden field a human never fills in. Bots that auto-complete every input do.
pub const HONEYPOT_FIELD: &str = "bot-field";

/// Raw form entries, in document order, exactly as submitted.
///
/// Network channels forward these unchanged; [`ContactValues`] is the trimmed
/// view used for validation and the mail handoff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Value of the first entry called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the honeypot field carries anything at all.
    pub fn honeypot_tripped(&self) -> bool {
        self.get(HONEYPOT_FIELD).is_some_and(|v| !v.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A required field left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trimmed contact values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    /// Selected service. The form names it `interest`.
    pub service: String,
    pub message: String,
}

impl ContactValues {
    /// Read and trim the contact fields. Absent fields read as empty.
    pub fn from_form(form: &FormData) -> Self {
        let field = |name: &str| form.get(name).unwrap_or("").trim().to_string();
        let service = match field("interest") {
            s if s.is_empty() => field("service"),
            s => s,
        };
        Self {
            name: field("name"),
            email: field("email"),
            service,
            message: field("message"),
        }
    }

    /// Required fields that are empty, in form order.
    pub fn missing(&self) -> Vec<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
