//! Date-time normalization between the wire format and the date picker
//!
//! The server stores UTC strings (`2024-03-15T14:02:26Z`). The picker works
//! with `YYYY-MM-DDTHH:MM:SS` values interpreted as UTC wall time, so one
//! load → edit → store cycle never shifts the value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format of values placed into the `datetime-local` control
pub const PICKER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format of values stored in the draft and sent to the server
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse any date-time shape the server or the picker produces into UTC
pub fn parse_utc(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Stored value → picker value. Unparseable input yields an empty picker.
pub fn to_picker_value(raw: &str) -> String {
    parse_utc(raw)
        .map(|dt| dt.format(PICKER_FORMAT).to_string())
        .unwrap_or_default()
}

/// Picker value → stored UTC value
pub fn from_picker_value(input: &str) -> Option<String> {
    parse_utc(input).map(|dt| dt.format(WIRE_FORMAT).to_string())
}

/// Human-readable form used on read-only screens: DD.MM.YYYY HH:MM:SS
pub fn format_display(raw: &str) -> String {
    match parse_utc(raw) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        None => raw.to_string(),
    }
}
