use chrono::{DateTime, Utc};

/// Short calendar date, e.g. `Nov 14, 2023`.
#[must_use]
pub fn format_added_on(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}
