//! Mapping from the provider payload to the two display summaries.
//!
//! The payload is an array of report entries. Entry 0 is the short-range
//! issuance and entry 1 the extended one; each holds a `timeSeries` array of
//! parallel buckets. Leaf lookups go through JSON pointers and degrade to
//! `"unknown"` on their own, while structural mismatches fail the extraction.

use serde_json::Value;

use crate::{
    error::ExtractError,
    model::{DaySummary, RawForecast, TodaySummary, UNKNOWN, scalar_text},
    normalize::{classify_weather, format_day_label},
};

const TODAY_DATE: &str = "/0/reportDatetime";
const TODAY_WEATHER: &str = "/0/timeSeries/0/areas/0/weathers/0";
const TODAY_PRECIPITATION: &str = "/0/timeSeries/1/areas/0/pops/0";
// Extended report, third bucket, second value.
const TODAY_TEMPERATURE: &str = "/1/timeSeries/2/areas/0/temps/1";

const DAY_DATES: &str = "/0/timeDefines";
const DAY_WEATHERS: &str = "/0/areas/0/weathers";
const DAY_MAX_TEMPS: &str = "/1/areas/0/temps";
const DAY_MIN_TEMPS: &str = "/2/areas/0/temps";

/// Rows in the three-day table.
pub const THREE_DAYS: usize = 3;

pub fn extract_today(payload: &RawForecast) -> Result<TodaySummary, ExtractError> {
    check_reports(payload)?;

    let unknown_or = |v: Option<String>| v.unwrap_or_else(|| UNKNOWN.to_string());

    Ok(TodaySummary {
        date: format_day_label(payload.at(TODAY_DATE).and_then(Value::as_str)),
        weather: classify_weather(payload.at(TODAY_WEATHER).and_then(Value::as_str)),
        temperature: unknown_or(payload.text_at(TODAY_TEMPERATURE)),
        precipitation: unknown_or(payload.text_at(TODAY_PRECIPITATION)),
    })
}

pub fn extract_three_day(payload: &RawForecast) -> Result<Vec<DaySummary>, ExtractError> {
    let first = check_reports(payload)?;

    let series = match first.get("timeSeries") {
        Some(series @ Value::Array(_)) => series,
        _ => return Err(ExtractError::MissingTimeSeries),
    };

    let dates = list_at(series, DAY_DATES);
    let weathers = list_at(series, DAY_WEATHERS);
    let max_temps = list_at(series, DAY_MAX_TEMPS);
    let min_temps = list_at(series, DAY_MIN_TEMPS);

    let days = dates
        .iter()
        .take(THREE_DAYS)
        .enumerate()
        .map(|(i, date)| DaySummary {
            date: format_day_label(date.as_str()),
            weather: classify_weather(weathers.get(i).and_then(Value::as_str)),
            max_temp: text_or_unknown(max_temps.get(i)),
            min_temp: text_or_unknown(min_temps.get(i)),
        })
        .collect();

    Ok(days)
}

/// Validates the top-level shape and returns the first report entry.
fn check_reports(payload: &RawForecast) -> Result<&Value, ExtractError> {
    let reports = match payload.as_value() {
        Value::Array(reports) => reports,
        Value::Null => return Err(ExtractError::EmptyPayload),
        _ => return Err(ExtractError::NotAnArray),
    };

    let first = reports.first().ok_or(ExtractError::EmptyPayload)?;
    if !first.is_object() {
        return Err(ExtractError::MalformedReport(0));
    }

    Ok(first)
}

fn list_at<'a>(root: &'a Value, pointer: &str) -> &'a [Value] {
    root.pointer(pointer)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn text_or_unknown(value: Option<&Value>) -> String {
    value.and_then(scalar_text).unwrap_or_else(|| UNKNOWN.to_string())
}
