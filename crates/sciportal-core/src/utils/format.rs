/// Format an ISO timestamp for display, echoing the input back when it
/// does not parse.
pub fn format_date(date: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%b %d, %Y %H:%M").to_string()
    } else if date.len() >= 10 {
        // Settle for the YYYY-MM-DD prefix
        date.chars().take(10).collect()
    } else {
        date.to_string()
    }
}

/// Remove HTML tags, keeping only text content.
pub fn strip_html(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

/// Tag-stripped preview of at most `max_len` characters, with `...`
/// appended when content was cut.
pub fn extract_summary(content: &str, max_len: usize) -> String {
    let text = strip_html(content);
    if text.chars().count() <= max_len {
        return text;
    }
    let truncated: String = text.chars().take(max_len).collect();
    format!("{}...", truncated)
}
