//! Text cleanup for terminal display
//!
//! Review bodies arrive as small HTML fragments. The terminal can't render
//! markup, so tags are dropped and common entities decoded.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Strip HTML tags and decode the common entities
///
/// `<br>` and closing block tags (`</p>`, `</div>`, `</li>`) become line
/// breaks; every other tag is removed. Runs of blank lines are collapsed.
///
/// # Examples
/// ```
/// use themedeck::logic::text::strip_html;
///
/// assert_eq!(strip_html("<p>Love it &amp; use it <b>daily</b></p>"), "Love it & use it daily");
/// assert_eq!(strip_html("one<br/>two"), "one\ntwo");
/// ```
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars();

    while let Some(c) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }

        let mut tag = String::new();
        for t in chars.by_ref() {
            if t == '>' {
                break;
            }
            tag.push(t);
        }

        let name = tag
            .trim_start_matches('/')
            .split(|ch: char| ch.is_whitespace() || ch == '/')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        let closing = tag.starts_with('/');

        if name == "br" || (closing && matches!(name.as_str(), "p" | "div" | "li")) {
            out.push('\n');
        }
    }

    let decoded = decode_entities(&out);

    let mut lines: Vec<&str> = Vec::new();
    for line in decoded.lines().map(str::trim) {
        if line.is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Truncate `text` to at most `max_width` terminal columns
///
/// Wide characters (CJK, emoji) count as two columns. When truncation
/// happens the last column becomes an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
