// SPDX-License-Identifier: MPL-2.0
//! Date/time backend on top of chrono's localized formatting.

use crate::formats::DateTimeFormatOptions;
use chrono::{DateTime, Utc};
use std::fmt::{self, Write as _};
use unic_langid::LanguageIdentifier;

/// A point in time accepted by the facade: either a [`DateTime<Utc>`] or a
/// millisecond timestamp.
///
/// Its `Display` rendering is the fallback string the facade returns when
/// formatting fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePoint(DateTime<Utc>);

impl TimePoint {
    #[must_use]
    pub fn timestamp_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    pub(crate) fn as_utc(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for TimePoint {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<i64> for TimePoint {
    /// Milliseconds since the Unix epoch. Out-of-range timestamps clamp to
    /// the representable extremes.
    fn from(millis: i64) -> Self {
        let clamped = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });
        Self(clamped)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats `value` with the given options in the given locale.
///
/// Invalid patterns surface as `Err` rather than panicking: the delayed
/// format is written into a buffer so a bad specifier fails the write.
pub(crate) fn format(
    value: &TimePoint,
    options: Option<&DateTimeFormatOptions>,
    locale: &LanguageIdentifier,
) -> Result<String, String> {
    let defaults = DateTimeFormatOptions::default();
    let options = options.unwrap_or(&defaults);
    let pattern = options.strftime_pattern();

    let mut out = String::new();
    write!(
        out,
        "{}",
        value.as_utc().format_localized(&pattern, chrono_locale(locale))
    )
    .map_err(|_| format!("invalid date-time pattern `{pattern}`"))?;
    Ok(out)
}

/// Maps a language identifier onto the closest chrono locale, POSIX when no
/// better match exists.
fn chrono_locale(locale: &LanguageIdentifier) -> chrono::Locale {
    if let Some(region) = locale.region {
        let name = format!("{}_{}", locale.language.as_str(), region.as_str());
        if let Ok(found) = chrono::Locale::try_from(name.as_str()) {
            return found;
        }
    }
    match locale.language.as_str() {
        "en" => chrono::Locale::en_US,
        "fr" => chrono::Locale::fr_FR,
        "de" => chrono::Locale::de_DE,
        "es" => chrono::Locale::es_ES,
        "it" => chrono::Locale::it_IT,
        _ => chrono::Locale::POSIX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::DateTimeStyle;
    use chrono::TimeZone;

    fn sample() -> TimePoint {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
            .single()
            .expect("valid timestamp")
            .into()
    }

    fn en() -> LanguageIdentifier {
        "en-US".parse().expect("valid locale")
    }

    #[test]
    fn default_options_render_plainly() {
        let formatted = format(&sample(), None, &en()).expect("format should succeed");
        assert_eq!(formatted, "2024-01-15 10:30:00");
    }

    #[test]
    fn explicit_pattern_is_used() {
        let options = DateTimeFormatOptions {
            pattern: Some("%Y/%m".to_string()),
            ..Default::default()
        };
        let formatted = format(&sample(), Some(&options), &en()).expect("format should succeed");
        assert_eq!(formatted, "2024/01");
    }

    #[test]
    fn full_date_style_spells_out_the_date() {
        let options = DateTimeFormatOptions {
            date_style: Some(DateTimeStyle::Full),
            ..Default::default()
        };
        let formatted = format(&sample(), Some(&options), &en()).expect("format should succeed");
        assert_eq!(formatted, "Monday, January 15, 2024");
    }

    #[test]
    fn month_names_follow_the_locale() {
        let options = DateTimeFormatOptions {
            pattern: Some("%B".to_string()),
            ..Default::default()
        };
        let french = format(
            &sample(),
            Some(&options),
            &"fr-FR".parse().expect("valid locale"),
        )
        .expect("format should succeed");
        assert_eq!(french, "janvier");
    }

    #[test]
    fn invalid_pattern_is_an_error_not_a_panic() {
        let options = DateTimeFormatOptions {
            pattern: Some("%!".to_string()),
            ..Default::default()
        };
        let error = format(&sample(), Some(&options), &en()).unwrap_err();
        assert!(error.contains("invalid date-time pattern"));
    }

    #[test]
    fn millisecond_timestamps_convert() {
        let point = TimePoint::from(0_i64);
        assert_eq!(point.timestamp_millis(), 0);
        assert_eq!(point.to_string(), "1970-01-01 00:00:00 UTC");
    }
}
