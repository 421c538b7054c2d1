//! Server-rendered HTML.
//!
//! Pages are plain strings built with `format!`; every value that came from
//! a user goes through [`escape`] first.

pub mod users;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;color:#222}\
header{background:#343a40;padding:.75rem 1.5rem}\
header a{color:#fff;text-decoration:none;font-weight:600}\
main{max-width:960px;margin:1.5rem auto;padding:0 1rem}\
table{width:100%;border-collapse:collapse}\
th,td{text-align:left;padding:.5rem;border-bottom:1px solid #dee2e6}\
label{display:block;margin-top:.75rem;font-weight:600}\
input{width:100%;padding:.4rem;box-sizing:border-box}\
input[readonly]{background:#e9ecef}\
.field-error{color:#dc3545;font-size:.875rem}\
.alert{padding:.75rem;margin-bottom:1rem;background:#f8d7da;color:#842029}\
.actions{margin-top:1rem;display:flex;gap:.5rem}\
.inline{display:inline}";

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode a value for use as one URL path segment.
pub fn path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - User Management</title>
<style>{STYLE}</style>
</head>
<body>
<header><a href="/users">User Management</a></header>
<main>
{content}
</main>
</body>
</html>"#,
        title = escape(title),
    )
}

/// Standalone error page.
pub fn error_page(title: &str, message: &str) -> String {
    layout(
        title,
        &format!(
            r#"<h1>{}</h1>
<p>{}</p>
<p><a href="/users">Back to list</a></p>"#,
            escape(title),
            escape(message)
        ),
    )
}
