//! Server timestamp parsing and local rendering.
//!
//! The server renders `LocalDateTime` values without an offset
//! (`2024-03-07T14:05:09.123`), so naive date-times are read in the viewer's
//! local zone. Values with an offset are read as-is; bare dates are UTC
//! midnight, the way browsers treat them.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const TOOLTIP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Parse a raw attribute value, reading naive values in the local zone.
#[must_use]
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    parse_instant_in(raw, &Local)
}

/// Parse a raw attribute value, reading naive values in `zone`.
#[must_use]
pub fn parse_instant_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return zone
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date.and_time(NaiveTime::MIN).and_utc()),
        Err(_) => None,
    }
}

/// Hover text for a timestamp in the viewer's locale and time zone.
///
/// The browser formats it (`Date.toLocaleString`); native builds have no
/// locale to consult and fall back to [`tooltip_text_in`] with the US pattern.
#[must_use]
pub fn tooltip_text(instant: DateTime<Utc>) -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let date = js_sys::Date::new(&JsValue::from_f64(epoch_ms(instant)));
        String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        tooltip_text_in(instant, &Local)
    }
}

/// `M/D/YYYY, h:mm:ss AM` rendering in `zone`.
#[must_use]
pub fn tooltip_text_in<Tz: TimeZone>(instant: DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(zone).format(TOOLTIP_FORMAT).to_string()
}

/// Milliseconds since the Unix epoch, as `Date.now()` reports them.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn epoch_ms(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64
}
