//! Output format selection.

use axum::http::{header, HeaderMap};

use crate::echo::{Attribute, EchoResponse};

/// Output formats the echo endpoint can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    /// Pick a format for a request.
    ///
    /// JSON wins when the first `Accept` value mentions `application/json`
    /// anywhere, or when the first `format` query value is exactly `json`.
    pub fn negotiate(headers: &HeaderMap, echo: &EchoResponse) -> Self {
        let accepts_json = headers
            .get(header::ACCEPT)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).contains("application/json"))
            .unwrap_or(false);

        let wants_json = echo.query_param("format").and_then(Attribute::first) == Some("json");

        if accepts_json || wants_json {
            OutputFormat::Json
        } else {
            OutputFormat::Html
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html",
            OutputFormat::Json => "application/json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echo::query_attributes;
    use axum::http::HeaderValue;

    fn echo_with_query(query: &str) -> EchoResponse {
        EchoResponse::new(vec![], query_attributes(Some(query)), vec![])
    }

    #[test]
    fn test_accept_substring_match() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html, application/json;q=0.9"));
        assert_eq!(OutputFormat::negotiate(&headers, &EchoResponse::default()), OutputFormat::Json);
    }

    #[test]
    fn test_only_first_accept_value_counts() {
        let mut headers = HeaderMap::new();
        headers.append(header::ACCEPT, HeaderValue::from_static("text/html"));
        headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert_eq!(OutputFormat::negotiate(&headers, &EchoResponse::default()), OutputFormat::Html);
    }

    #[test]
    fn test_format_query_param() {
        let headers = HeaderMap::new();
        assert_eq!(OutputFormat::negotiate(&headers, &echo_with_query("format=json")), OutputFormat::Json);
        assert_eq!(OutputFormat::negotiate(&headers, &echo_with_query("format=JSON")), OutputFormat::Html);
        assert_eq!(OutputFormat::negotiate(&headers, &echo_with_query("format=html&format=json")), OutputFormat::Html);
        assert_eq!(OutputFormat::negotiate(&headers, &echo_with_query("fmt=json")), OutputFormat::Html);
    }

    #[test]
    fn test_accept_wins_over_query() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert_eq!(OutputFormat::negotiate(&headers, &echo_with_query("format=html")), OutputFormat::Json);
    }

    #[test]
    fn test_default_is_html() {
        let format = OutputFormat::negotiate(&HeaderMap::new(), &EchoResponse::default());
        assert_eq!(format, OutputFormat::Html);
        assert_eq!(format.content_type(), "text/html");
    }
}
