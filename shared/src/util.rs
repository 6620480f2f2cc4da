//! Small display and date helpers shared by client and console.

use chrono::NaiveDate;

/// Date formats the backend has historically accepted besides ISO.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y", "%Y/%m/%d"];

/// Render an optional field for a fixed-schema table, with `"-"` for
/// absent or blank values.
pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Truncate an ISO timestamp (`2023-04-01T00:00:00`) to its date portion.
///
/// Idempotent: an already-truncated `YYYY-MM-DD` value passes through
/// unchanged, as does anything that doesn't look like an ISO timestamp.
pub fn truncate_iso_date(value: &str) -> &str {
    match value.split_once('T') {
        Some((date, _)) if is_iso_date(date) => date,
        _ => value,
    }
}

/// Normalize a date-like string to `YYYY-MM-DD`.
///
/// Accepts ISO timestamps and the handful of regional formats the
/// backend tolerates. Unparseable input is returned trimmed rather than
/// rejected; the server performs its own validation.
pub fn normalize_date(value: &str) -> String {
    let v = value.trim();
    if v.len() >= 10
        && v.is_char_boundary(10)
        && is_iso_date(&v[..10])
        && NaiveDate::parse_from_str(&v[..10], "%Y-%m-%d").is_ok()
    {
        return v[..10].to_string();
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(v, fmt) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    v.to_string()
}

fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter().enumerate().all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit())
}
