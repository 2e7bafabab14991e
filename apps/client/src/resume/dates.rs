use chrono::{DateTime, NaiveDate};

/// Formats a resume date as `"{Mon} {YYYY}"`, e.g. `"2022-03-15"` → `"Mar 2022"`.
///
/// Missing, empty and unparseable dates all format to `""`.
pub fn format_date(date: Option<&str>) -> String {
    date.map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(parse_date)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, `YYYY-MM` and `YYYY`.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d").ok();
    }
    None
}
