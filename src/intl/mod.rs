// SPDX-License-Identifier: MPL-2.0
//! The formatting facade.
//!
//! [`Intl`] exposes three operations over an explicit [`IntlConfig`]:
//! [`format_date_time`](Intl::format_date_time),
//! [`format_number`](Intl::format_number) and
//! [`format_relative_time`](Intl::format_relative_time).
//! Every operation returns a `String`: failures are reported
//! once through the configured callback and degrade to the raw value's
//! `Display` rendering, so a caller never sees an error or a blank output.
//!
//! # Example
//!
//! ```
//! use intl_kit::intl::{Intl, IntlConfig};
//!
//! let config = IntlConfig::new("en-US".parse().unwrap());
//! let intl = Intl::new(&config);
//! assert_eq!(intl.format_number(1234.5, None), "1,234.5");
//! ```

pub mod datetime;
pub mod error;
pub mod number;
pub mod relative;

pub use datetime::TimePoint;
pub use error::{IntlError, IntlErrorKind};
pub use relative::{bucket, RelativeTimeParts, TimeUnit};

use crate::config::Settings;
use crate::formats::{DateTimeFormatOptions, FormatRegistry, FormatSpec, NumberFormatOptions};
use relative::RelativeTimeFormatter;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

type ErrorCallback = Box<dyn Fn(&IntlError) + Send + Sync>;

/// Everything a facade call needs, injected explicitly.
///
/// The registry and locale are read-only for the duration of a call;
/// distinct configs never share state, so concurrent facades over different
/// configs cannot interfere.
pub struct IntlConfig {
    pub locale: LanguageIdentifier,
    pub formats: FormatRegistry,
    /// Attach diagnostic messages to `MissingFormat` errors.
    pub debug: bool,
    on_error: ErrorCallback,
}

impl IntlConfig {
    /// A config for `locale` with an empty registry and an error callback
    /// that writes to stderr.
    #[must_use]
    pub fn new(locale: LanguageIdentifier) -> Self {
        Self {
            locale,
            formats: FormatRegistry::default(),
            debug: false,
            on_error: Box::new(|error| eprintln!("intl-kit: {error}")),
        }
    }

    /// Builds a config from a settings file, parsing its language tag.
    pub fn from_settings(settings: &Settings) -> crate::error::Result<Self> {
        let locale = match &settings.language {
            Some(language) => language.parse()?,
            None => "en-US".parse().unwrap_or_default(),
        };
        Ok(Self {
            locale,
            formats: settings.formats.clone(),
            debug: settings.debug.unwrap_or(false),
            on_error: Box::new(|error| eprintln!("intl-kit: {error}")),
        })
    }

    #[must_use]
    pub fn with_formats(mut self, formats: FormatRegistry) -> Self {
        self.formats = formats;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Replaces the error callback. The callback's return value is ignored;
    /// if it panics, the panic propagates to the caller of the formatting
    /// operation.
    #[must_use]
    pub fn with_on_error(mut self, on_error: impl Fn(&IntlError) + Send + Sync + 'static) -> Self {
        self.on_error = Box::new(on_error);
        self
    }

    fn report(&self, error: &IntlError) {
        (self.on_error)(error);
    }
}

/// The formatting facade over one [`IntlConfig`].
pub struct Intl<'c> {
    config: &'c IntlConfig,
    relative: RelativeTimeFormatter,
}

impl<'c> Intl<'c> {
    #[must_use]
    pub fn new(config: &'c IntlConfig) -> Self {
        Self {
            relative: RelativeTimeFormatter::new(&config.locale),
            config,
        }
    }

    /// Formats a point in time, either with a named format from the
    /// registry's `date_time` slice or with inline options.
    pub fn format_date_time(
        &self,
        value: impl Into<TimePoint>,
        spec: Option<FormatSpec<DateTimeFormatOptions>>,
    ) -> String {
        let value = value.into();
        self.formatted(
            &value,
            spec.as_ref(),
            &self.config.formats.date_time,
            |options| datetime::format(&value, options, &self.config.locale),
        )
    }

    /// Formats a number, either with a named format from the registry's
    /// `number` slice or with inline options.
    pub fn format_number(
        &self,
        value: f64,
        spec: Option<FormatSpec<NumberFormatOptions>>,
    ) -> String {
        self.formatted(&value, spec.as_ref(), &self.config.formats.number, |options| {
            number::format(value, options, &self.config.locale)
        })
    }

    /// Phrases the distance between `date` and `now` ("2 hours ago",
    /// "yesterday"). On failure the fallback is `date`'s rendering.
    pub fn format_relative_time(
        &self,
        date: impl Into<TimePoint>,
        now: impl Into<TimePoint>,
    ) -> String {
        let date = date.into();
        let now = now.into();

        let seconds = (date.timestamp_millis() - now.timestamp_millis()) as f64 / 1000.0;
        let parts = relative::bucket(seconds);

        match self.relative.format(parts.value, parts.unit) {
            Ok(formatted) => formatted,
            Err(message) => {
                self.config.report(&IntlError::formatting_error(message));
                date.to_string()
            }
        }
    }

    /// Shared resolve-format-report pattern for the registry-backed
    /// operations. Each failure is reported exactly once, then the value's
    /// own rendering is returned.
    fn formatted<O, V: fmt::Display>(
        &self,
        value: &V,
        spec: Option<&FormatSpec<O>>,
        formats: &HashMap<String, O>,
        format: impl FnOnce(Option<&O>) -> Result<String, String>,
    ) -> String {
        let options = match spec {
            None => None,
            Some(spec) => match spec.resolve(formats, self.config.debug) {
                Ok(options) => Some(options),
                Err(error) => {
                    self.config.report(&error);
                    return value.to_string();
                }
            },
        };

        match format(options) {
            Ok(formatted) => formatted,
            Err(message) => {
                self.config.report(&IntlError::formatting_error(message));
                value.to_string()
            }
        }
    }
}
