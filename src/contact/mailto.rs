//! The mail handoff: a `mailto:` URI the user's mail client opens prefilled.

use super::fields::ContactValues;

/// Subject line: the selected service, or the product name when none was picked.
pub fn subject(values: &ContactValues, product_name: &str) -> String {
    let topic = if values.service.is_empty() {
        product_name
    } else {
        values.service.as_str()
    };
    format!("New inquiry — {topic}")
}

/// Body template embedding all four fields and the attribution line.
pub fn body(values: &ContactValues, attribution: &str) -> String {
    format!(
        "Name: {}\nEmail: {}\nInterested in: {}\n\nMessage:\n{}\n\n{}",
        values.name, values.email, values.service, values.message, attribution
    )
}

/// Build the handoff URI. Address, subject and body are percent-encoded.
pub fn build_mailto(
    to: &str,
    values: &ContactValues,
    product_name: &str,
    attribution: &str,
) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(to),
        urlencoding::encode(&subject(values, product_name)),
        urlencoding::encode(&body(values, attribution)),
    )
}
