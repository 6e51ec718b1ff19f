//! Shared formatting utilities for the UI layer.

/// Capitalize the first character of a word (e.g. "male" to "Male").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Format an ISO date string as "Jan 20, 2026".
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    const MONTH_NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun",
        "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    let parsed_month = month
        .parse::<usize>()
        .ok()
        .filter(|m| (1..=12).contains(m));
    if let Some(m) = parsed_month {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("male"), "Male");
        assert_eq!(capitalize("female"), "Female");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn format_date_human_basic() {
        assert_eq!(format_date_human("2026-01-20T21:35:00Z"), "Jan 20, 2026");
        assert_eq!(format_date_human("2025-09-01"), "Sep 1, 2025");
    }

    #[test]
    fn format_date_human_falls_back_on_garbage() {
        assert_eq!(format_date_human("short"), "short");
        assert_eq!(format_date_human("2026-xx-20T00:00:00Z"), "2026-xx-20");
    }
}
