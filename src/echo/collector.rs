//! Attribute collection from request parts.
//!
//! # Responsibilities
//! - Group multi-valued fields by name
//! - Order groups by name, keep per-name value order
//! - Decode query strings and urlencoded form bodies
//!
//! Parsing of raw bytes into a `HeaderMap`/`Uri` is hyper's job; this module
//! only reshapes what it already produced.

use std::collections::BTreeMap;

use axum::http::{header, HeaderMap, HeaderName, Method};
use url::form_urlencoded;

use crate::echo::Attribute;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Group `(name, value)` pairs by name.
///
/// Names come out in ascending byte order, each exactly once. Values for a
/// name keep the order the pairs arrived in.
pub fn collect_attributes<I, K, V>(pairs: I) -> Vec<Attribute>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in pairs {
        grouped.entry(name.into()).or_default().push(value.into());
    }

    grouped
        .into_iter()
        .map(|(name, values)| Attribute { name, values })
        .collect()
}

/// Header table of a request.
///
/// `Host` is left out: it identifies the target, it is not echoed as a
/// header. Names are reported in canonical form (`x-foo` → `X-Foo`).
pub fn header_attributes(headers: &HeaderMap) -> Vec<Attribute> {
    collect_attributes(
        headers
            .iter()
            .filter(|(name, _)| **name != header::HOST)
            .map(|(name, value)| {
                (
                    canonical_header_name(name),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            }),
    )
}

/// Query parameters of a request URI. `None` and `Some("")` both yield an
/// empty group.
pub fn query_attributes(query: Option<&str>) -> Vec<Attribute> {
    match query {
        Some(q) => collect_attributes(form_urlencoded::parse(q.as_bytes())),
        None => Vec::new(),
    }
}

/// Form parameters carried in a request body.
///
/// Only urlencoded bodies of `POST`, `PUT` and `PATCH` requests are parsed;
/// anything else yields an empty group.
pub fn form_attributes(method: &Method, headers: &HeaderMap, body: &[u8]) -> Vec<Attribute> {
    if !is_form_request(method, headers) {
        return Vec::new();
    }
    collect_attributes(form_urlencoded::parse(body))
}

/// Whether the request announces a urlencoded form body.
pub fn is_form_request(method: &Method, headers: &HeaderMap) -> bool {
    if !matches!(*method, Method::POST | Method::PUT | Method::PATCH) {
        return false;
    }

    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|media_type| media_type.trim().eq_ignore_ascii_case(FORM_URLENCODED))
        .unwrap_or(false)
}

/// Canonical MIME spelling of a header name.
///
/// The first letter and every letter following a hyphen are upper-cased,
/// the rest lower-cased.
pub fn canonical_header_name(name: &HeaderName) -> String {
    let mut upper = true;
    name.as_str()
        .chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}
