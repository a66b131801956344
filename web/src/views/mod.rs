//! HTML views
//!
//! Server-side rendering of every page as a plain `String`.

pub mod contacts;
pub mod news_releases;

use axum::http::StatusCode;

use crate::error::ValidationErrors;

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared layout
pub fn layout(title: &str, body: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str(&format!("<title>{} | Contacts</title>\n", escape(title)));
    buf.push_str("</head>\n<body>\n");
    buf.push_str("<nav>\n");
    buf.push_str("<a href=\"/contacts\">Contacts</a>\n");
    buf.push_str("<a href=\"/news_releases\">News</a>\n");
    buf.push_str("</nav>\n<main>\n");
    buf.push_str(body);
    buf.push_str("</main>\n</body>\n</html>\n");

    buf
}

/// Generic error page; details are only shown for client errors
pub fn error_page(status: StatusCode, title: &str, details: Option<&str>) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    match details {
        Some(details) if status.is_client_error() => {
            body.push_str(&format!("<p>{}</p>\n", escape(details)));
        }
        _ => body.push_str("<p>We're sorry, but something went wrong.</p>\n"),
    }
    body.push_str("<p><a href=\"/contacts\">Back to contacts</a></p>\n");

    layout(title, &body)
}

/// Error summary shown at the top of a form
fn render_error_summary(subject: &str, errors: &ValidationErrors) -> String {
    let mut buf = String::new();
    let count = errors.len();

    buf.push_str("<div id=\"error_explanation\">\n");
    buf.push_str(&format!(
        "<h2>{} {} prohibited this {} from being saved:</h2>\n<ul>\n",
        count,
        if count == 1 { "error" } else { "errors" },
        subject
    ));
    for message in errors.full_messages() {
        buf.push_str(&format!("<li>{}</li>\n", escape(&message)));
    }
    buf.push_str("</ul>\n</div>\n");

    buf
}

/// Labelled text input, marked when the field has errors
fn render_text_field(
    label: &str,
    name: &str,
    value: Option<&str>,
    input_type: &str,
    has_error: bool,
) -> String {
    let class = if has_error { " class=\"field_with_errors\"" } else { "" };
    format!(
        "<div{}><label>{} <input type=\"{}\" name=\"{}\" value=\"{}\"></label></div>\n",
        class,
        escape(label),
        input_type,
        name,
        escape(value.unwrap_or_default()),
    )
}

/// Hidden field that lets an HTML form stand in for PATCH or DELETE
fn method_override(method: &str) -> String {
    format!("<input type=\"hidden\" name=\"_method\" value=\"{}\">\n", method)
}

/// A one-button form that deletes the resource at `action`
fn render_delete_button(action: &str, label: &str) -> String {
    format!(
        "<form action=\"{}\" method=\"post\">\n{}<button type=\"submit\">{}</button>\n</form>\n",
        escape(action),
        method_override("delete"),
        escape(label)
    )
}
