//! Request introspection subsystem.
//!
//! # Data Flow
//! ```text
//! Request<Body>
//!     → collector.rs (headers, query, form → sorted attribute groups)
//!     → EchoResponse (three groups, request-local)
//!     → negotiate.rs (JSON or HTML?)
//!     → render.rs (serialize groups, set Content-Type)
//! ```
//!
//! # Design Decisions
//! - Groups are built once per request and only borrowed by the renderers
//! - One attribute per distinct name; values keep arrival order
//! - Names sort byte-wise, so `Zeta` sorts before `alpha`

pub mod collector;
pub mod negotiate;
pub mod render;

use serde::Serialize;

pub use collector::{collect_attributes, form_attributes, header_attributes, query_attributes};
pub use negotiate::OutputFormat;

/// A named field with every value it was sent with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Values")]
    pub values: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// First value, if any.
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// Everything echoed back for a single request.
///
/// Field order here is the field order of the JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EchoResponse {
    #[serde(rename = "Header")]
    pub header: Vec<Attribute>,
    #[serde(rename = "Query")]
    pub query: Vec<Attribute>,
    #[serde(rename = "FormParams")]
    pub form_params: Vec<Attribute>,
}

impl EchoResponse {
    pub fn new(header: Vec<Attribute>, query: Vec<Attribute>, form_params: Vec<Attribute>) -> Self {
        Self {
            header,
            query,
            form_params,
        }
    }

    /// Look up a query parameter by exact name.
    pub fn query_param(&self, name: &str) -> Option<&Attribute> {
        find(&self.query, name)
    }
}

/// Binary search over a sorted group.
pub(crate) fn find<'a>(group: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    group
        .binary_search_by(|attr| attr.name.as_str().cmp(name))
        .ok()
        .map(|idx| &group[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_lookup() {
        let resp = EchoResponse::new(
            vec![],
            vec![
                Attribute::new("a", vec!["1".into()]),
                Attribute::new("format", vec!["json".into(), "html".into()]),
            ],
            vec![],
        );

        assert_eq!(resp.query_param("format").and_then(Attribute::first), Some("json"));
        assert!(resp.query_param("missing").is_none());
    }

    #[test]
    fn test_json_field_names() {
        let resp = EchoResponse::new(vec![Attribute::new("X-Foo", vec!["bar".into()])], vec![], vec![]);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            json,
            r#"{"Header":[{"Name":"X-Foo","Values":["bar"]}],"Query":[],"FormParams":[]}"#
        );
    }
}
