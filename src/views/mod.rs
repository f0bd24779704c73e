//! Server-rendered HTML.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render their content, layouts wrap it in navigation chrome, and
//! `document` places the result in the shared page template together with
//! any pending toast. Every interpolated value goes through `escape`.

pub mod layout;
pub mod pages;

use axum::response::Html;

use crate::services::notify::Toast;

const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Escape text for HTML element content and double-quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Keeps escaped text from forming template placeholders.
            '{' => out.push_str("&#123;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_toast(toast: Option<&Toast>) -> String {
    toast.map_or_else(String::new, |t| {
        format!(
            r#"<div class="toast toast--{variant}" role="status"><strong>{title}</strong><p>{description}</p></div>"#,
            variant = t.variant.as_str(),
            title = escape(&t.title),
            description = escape(&t.description),
        )
    })
}

/// Complete HTML document around an already-rendered body.
#[must_use]
pub fn document(title: &str, toast: Option<&Toast>, body: &str) -> Html<String> {
    Html(
        PAGE_TEMPLATE
            .replace("{{TITLE}}", &escape(title))
            .replace("{{TOAST}}", &render_toast(toast))
            .replace("{{BODY}}", body),
    )
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
