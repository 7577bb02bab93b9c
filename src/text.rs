//! Text Helpers
//!
//! Formatting shared by the views: truncation, search normalization,
//! counters and timestamps.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Cut `text` to at most `max_chars` characters, appending "..." if cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Upper-case the first character
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case and trim, for search matching
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Group digits by thousands: `12345` → `"12,345"`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Time of day for chat turns, e.g. `"10:30 AM"`
pub fn format_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%I:%M %p").to_string()
}
