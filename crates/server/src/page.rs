//! Clock page rendering.

use std::fmt::Write as _;

use clockwork_domain::{FormattedTime, TimezoneEntry};

const TEMPLATE: &str = include_str!("../assets/index.html");

/// Renders the clock page with an initial snapshot and the timezone selector.
#[must_use]
pub fn render_page(snapshot: &FormattedTime, timezones: &[TimezoneEntry]) -> String {
    TEMPLATE
        .replace("{{ date }}", &escape_html(&snapshot.date))
        .replace("{{ time }}", &escape_html(&snapshot.time))
        .replace("{{ timezone_options }}", &timezone_options(timezones))
}

fn timezone_options(timezones: &[TimezoneEntry]) -> String {
    let mut out = String::new();
    for entry in timezones {
        let _ = writeln!(
            out,
            r#"                <option value="{}">{}</option>"#,
            escape_html(entry.id),
            escape_html(entry.label)
        );
    }
    out.trim_end().to_string()
}

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
