//! Converters from raw payload text to display labels.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::model::UNKNOWN;

const SUN_GLYPHS: &[&str] = &["晴", "☀"];
const RAIN_GLYPHS: &[&str] = &["雨", "☔"];
const CLOUD_GLYPHS: &[&str] = &["曇", "くもり", "☁"];

/// Map a provider weather text to `"sunny"`, `"rainy"` or `"cloudy"`.
///
/// Sun wins over rain, rain over cloud, so "晴れ時々くもり" is sunny. Text with
/// none of the glyphs is returned unchanged; missing text becomes `"unknown"`.
pub fn classify_weather(text: Option<&str>) -> String {
    let Some(text) = text else {
        return UNKNOWN.to_string();
    };

    let contains_any = |glyphs: &[&str]| glyphs.iter().any(|g| text.contains(g));

    if contains_any(SUN_GLYPHS) {
        "sunny".to_string()
    } else if contains_any(RAIN_GLYPHS) {
        "rainy".to_string()
    } else if contains_any(CLOUD_GLYPHS) {
        "cloudy".to_string()
    } else {
        text.to_string()
    }
}

/// Day-of-month label ("3日") in the host's local zone.
///
/// See [`format_day_label_in`] for how each timestamp form is interpreted.
pub fn format_day_label(input: Option<&str>) -> String {
    format_day_label_in(input, &Local)
}

/// Day-of-month label for `input` as seen in `tz`.
///
/// - offset timestamps (`2024-05-03T11:00:00+09:00`) are converted into `tz`
/// - timestamps without offset are read as wall-clock time in `tz` (a time
///   skipped by a DST jump keeps the day it was written with)
/// - bare dates are read as UTC midnight, then converted into `tz`
pub fn format_day_label_in<Tz: TimeZone>(input: Option<&str>, tz: &Tz) -> String {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| day_of_month(s, tz))
        .map(|day| format!("{day}日"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn day_of_month<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<u32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz).day());
    }

    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        // A wall-clock time inside a DST gap still names its calendar day.
        let day = tz.from_local_datetime(&naive).earliest().map_or(naive.day(), |dt| dt.day());
        return Some(day);
    }

    let date = s.parse::<NaiveDate>().ok()?;
    let utc_midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(utc_midnight.with_timezone(tz).day())
}
