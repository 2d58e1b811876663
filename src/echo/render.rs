//! Serialization of attribute groups.
//!
//! # Responsibilities
//! - JSON: one object, fixed `Header`, `Query`, `FormParams` order
//! - HTML: static page shell followed by one section per non-empty group
//!
//! Names and values go into the HTML stream unescaped.

use std::fmt::Write;

use crate::echo::{Attribute, EchoResponse};

/// Page shell written ahead of every HTML response.
pub static INDEX_HTML: &[u8] = include_bytes!("../../assets/index.html");

/// Encode the groups as a JSON document terminated by a newline.
pub fn render_json(echo: &EchoResponse) -> Result<Vec<u8>, serde_json::Error> {
    let mut body = serde_json::to_vec(echo)?;
    body.push(b'\n');
    Ok(body)
}

/// Render the HTML page: `template` verbatim, then the non-empty groups.
pub fn render_html(template: &[u8], echo: &EchoResponse) -> Vec<u8> {
    let mut sections = String::new();
    for (title, group) in [
        ("Header", &echo.header),
        ("Query", &echo.query),
        ("Form Params", &echo.form_params),
    ] {
        if !group.is_empty() {
            write_section(&mut sections, title, group);
        }
    }

    let mut body = Vec::with_capacity(template.len() + sections.len());
    body.extend_from_slice(template);
    body.extend_from_slice(sections.as_bytes());
    body
}

fn write_section(out: &mut String, title: &str, group: &[Attribute]) {
    // Writing into a String cannot fail.
    let _ = write!(out, "<h2>{}</h2>", title);

    for attr in group {
        out.push_str("<details><summary>");
        out.push_str(&attr.name);
        out.push_str("</summary>");
        for value in &attr.values {
            out.push_str("<p>");
            out.push_str(value);
            out.push_str("</p>");
        }
        out.push_str("</details>\n");
    }
}
