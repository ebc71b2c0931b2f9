//! Relative-time bucketing and phrasing.
//!
//! [`bucket`] is the pure part: it classifies a signed duration in seconds
//! into a display unit and a rounded magnitude. Phrasing goes through Fluent
//! bundles embedded from `assets/i18n/`, with idiomatic forms ("yesterday"
//! rather than "1 day ago") where a locale's messages provide them.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const MINUTE: f64 = 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const WEEK: f64 = DAY * 7.0;
// Non-integer month length, kept as-is. It makes the week/month boundary
// land slightly past a calendar month; callers rely on the exact cutoffs.
const MONTH: f64 = DAY * (365.0 / 12.0);
const YEAR: f64 = DAY * 365.0;

/// Display unit for relative-time phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

/// A bucketed duration: unit plus signed, rounded magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTimeParts {
    pub value: i64,
    pub unit: TimeUnit,
}

/// Classifies a signed duration (negative = past) into a display unit and
/// rounds the magnitude in that unit.
///
/// Classification uses the pre-rounded absolute value against fixed
/// thresholds; the first matching threshold wins. Values are rounded
/// half-away-from-zero so the phrasing never shows fractional amounts.
#[must_use]
pub fn bucket(seconds: f64) -> RelativeTimeParts {
    let abs = seconds.abs();

    let (value, unit) = if abs < MINUTE {
        (seconds.round(), TimeUnit::Second)
    } else if abs < HOUR {
        ((seconds / MINUTE).round(), TimeUnit::Minute)
    } else if abs < DAY {
        ((seconds / HOUR).round(), TimeUnit::Hour)
    } else if abs < WEEK {
        ((seconds / DAY).round(), TimeUnit::Day)
    } else if abs < MONTH {
        ((seconds / WEEK).round(), TimeUnit::Week)
    } else if abs < YEAR {
        ((seconds / MONTH).round(), TimeUnit::Month)
    } else {
        ((seconds / YEAR).round(), TimeUnit::Year)
    };

    RelativeTimeParts {
        value: value as i64,
        unit,
    }
}

/// Lists the locales for which phrasing messages are embedded.
#[must_use]
pub fn available_locales() -> Vec<LanguageIdentifier> {
    Asset::iter()
        .filter_map(|file| {
            file.as_ref()
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse().ok())
        })
        .collect()
}

/// Fluent-backed phrasing for one locale.
///
/// Construction never fails; a locale with no embedded messages produces a
/// formatter whose [`format`](Self::format) reports an error, which the
/// facade turns into its fallback path.
pub(crate) struct RelativeTimeFormatter {
    bundle: Option<FluentBundle<FluentResource>>,
}

impl RelativeTimeFormatter {
    pub fn new(locale: &LanguageIdentifier) -> Self {
        let bundle = select_locale(locale).and_then(load_bundle);
        Self { bundle }
    }

    /// Renders `value` in `unit` ("2 hours ago", "yesterday", "in 3 weeks").
    ///
    /// Direction is taken from the sign of `value`; the message receives its
    /// absolute magnitude.
    pub fn format(&self, value: i64, unit: TimeUnit) -> Result<String, String> {
        let bundle = self
            .bundle
            .as_ref()
            .ok_or_else(|| "no relative-time messages embedded for this locale".to_string())?;

        let direction = if value < 0 { "past" } else { "future" };
        let id = format!("relative-{}-{}", unit.name(), direction);
        let pattern = bundle
            .get_message(&id)
            .and_then(|message| message.value())
            .ok_or_else(|| format!("message `{id}` is missing"))?;

        let mut args = FluentArgs::new();
        args.set("value", value.unsigned_abs());

        let mut errors = vec![];
        let formatted = bundle.format_pattern(pattern, Some(&args), &mut errors);
        if errors.is_empty() {
            Ok(formatted.to_string())
        } else {
            Err(format!("failed to format `{id}`: {errors:?}"))
        }
    }
}

fn select_locale(wanted: &LanguageIdentifier) -> Option<LanguageIdentifier> {
    let available = available_locales();
    if available.contains(wanted) {
        return Some(wanted.clone());
    }
    // Fall back to a same-language bundle, e.g. fr-CA -> fr.
    available
        .into_iter()
        .find(|candidate| candidate.language == wanted.language)
}

fn load_bundle(locale: LanguageIdentifier) -> Option<FluentBundle<FluentResource>> {
    let content = Asset::get(&format!("{locale}.ftl"))?;
    let res =
        FluentResource::try_new(String::from_utf8_lossy(content.data.as_ref()).to_string()).ok()?;
    let mut bundle = FluentBundle::new(vec![locale]);
    // Plain-text output; directional isolation marks would leak into it.
    bundle.set_use_isolating(false);
    bundle.add_resource(res).ok()?;
    Some(bundle)
}
