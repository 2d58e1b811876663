//! The echo endpoint.
//!
//! # Responsibilities
//! - Split the request into headers, URI and body
//! - Read the body only when it announces a urlencoded form
//! - Build the three attribute groups and hand them to a renderer

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::echo::render::{render_html, render_json};
use crate::echo::{
    collector::is_form_request, form_attributes, header_attributes, query_attributes, Attribute,
    EchoResponse, OutputFormat,
};
use crate::http::server::AppState;

/// Handles every method on every path.
pub async fn echo_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();

    let form_params = if is_form_request(&parts.method, &parts.headers) {
        read_form(&parts, body, state.max_form_bytes).await
    } else {
        Vec::new()
    };

    let echo = EchoResponse::new(
        header_attributes(&parts.headers),
        query_attributes(parts.uri.query()),
        form_params,
    );
    let format = OutputFormat::negotiate(&parts.headers, &echo);

    tracing::debug!(
        method = %parts.method,
        path = %parts.uri.path(),
        format = %format,
        headers = echo.header.len(),
        query = echo.query.len(),
        form = echo.form_params.len(),
        "Echoing request"
    );

    render_response(format, state.template, &echo)
}

async fn read_form(
    parts: &axum::http::request::Parts,
    body: Body,
    limit: usize,
) -> Vec<Attribute> {
    match axum::body::to_bytes(body, limit).await {
        Ok(bytes) => form_attributes(&parts.method, &parts.headers, &bytes),
        Err(e) => {
            tracing::warn!(
                path = %parts.uri.path(),
                limit,
                error = %e,
                "Failed to read form body, echoing without form params"
            );
            Vec::new()
        }
    }
}

/// Serialize `echo` in `format` with the matching `Content-Type`.
pub fn render_response(format: OutputFormat, template: &[u8], echo: &EchoResponse) -> Response {
    let body = match format {
        OutputFormat::Json => match render_json(echo) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode echo response");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        },
        OutputFormat::Html => render_html(template, echo),
    };

    ([(header::CONTENT_TYPE, format.content_type())], body).into_response()
}
