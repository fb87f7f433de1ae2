//! Server-rendered HTML. Markup is assembled directly into a `String`.

pub mod course;
pub mod student;
pub mod teacher;

use axum::response::Html;
use std::fmt::Write;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/StudentPage/List">Students</a> | <a href="/TeacherPage/List">Teachers</a> | <a href="/CoursePage/List">Courses</a></nav>
<h1>{title}</h1>
"#;

/// Escape text for use inside element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

pub fn layout(title: &str, body: &str) -> Html<String> {
    let mut html = HEAD.replace("{title}", &escape(title));
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    Html(html)
}

/// Shown after a rejected form submission.
pub fn validation(title: &str, message: &str, back: &str) -> Html<String> {
    let body = format!(
        "<p class=\"error\">{}</p>\n<a href=\"{}\">Back</a>\n",
        escape(message),
        escape(back)
    );
    layout(title, &body)
}

pub fn not_found(message: &str) -> Html<String> {
    let body = format!("<p>{}</p>\n", escape(message));
    layout("Not found", &body)
}

pub(crate) fn server_error() -> Html<String> {
    layout("Error", "<p>Something went wrong. Please try again later.</p>\n")
}

/// A labelled `<input>` row.
pub(crate) fn input(out: &mut String, label: &str, name: &str, kind: &str, value: &str) {
    let _ = writeln!(
        out,
        "<label for=\"{name}\">{label}</label> <input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{}\"><br>",
        escape(value)
    );
}

/// A labelled read-only value on a detail page.
pub(crate) fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "<p><strong>{label}:</strong> {}</p>", escape(value));
}

pub(crate) fn form(out: &mut String, action: &str, fields: impl FnOnce(&mut String), submit: &str) {
    let _ = writeln!(out, "<form method=\"post\" action=\"{action}\">");
    fields(out);
    let _ = writeln!(out, "<button type=\"submit\">{submit}</button>\n</form>");
}

pub(crate) fn delete_confirm(title: &str, question: &str, action: &str, cancel: &str) -> Html<String> {
    let mut body = format!("<p>{}</p>\n", escape(question));
    form(&mut body, action, |_| {}, "Delete");
    let _ = writeln!(body, "<a href=\"{cancel}\">Cancel</a>");
    layout(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape(r#"<b>"O'Neil" & co</b>"#), "&lt;b&gt;&quot;O&#39;Neil&quot; &amp; co&lt;/b&gt;");
    }

    #[test]
    fn layout_escapes_the_title() {
        let Html(page) = layout("A < B", "<p>x</p>");
        assert!(page.contains("<title>A &lt; B</title>"));
        assert!(page.contains("<p>x</p>"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn validation_page_shows_the_message_and_a_way_back() {
        let Html(page) = validation("New Student", "Student number cannot be empty", "/StudentPage/New");
        assert!(page.contains("Student number cannot be empty"));
        assert!(page.contains("href=\"/StudentPage/New\""));
    }
}
