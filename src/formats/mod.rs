// SPDX-License-Identifier: MPL-2.0
//! Format specifications and the named-format registry.
//!
//! Callers reference formatting options either by name (looked up in a
//! [`FormatRegistry`] supplied through the configuration) or inline. The
//! registry is read-only for the duration of a formatting call; a failed
//! lookup is reported as a [`crate::intl::IntlError`] by the facade, never
//! silently swallowed.

pub mod options;

pub use options::{DateTimeFormatOptions, DateTimeStyle, NumberFormatOptions, NumberStyle};

use crate::intl::IntlError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A caller-supplied reference to formatting options.
///
/// `Named` is a key into the relevant [`FormatRegistry`] slice; `Inline`
/// carries the options directly and resolves to them unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatSpec<O> {
    Named(String),
    Inline(O),
}

impl<O> FormatSpec<O> {
    /// Resolves this specification against a registry slice.
    ///
    /// A named lookup that misses returns a `MissingFormat` error value; the
    /// diagnostic message is attached only when `debug` is set. Inline
    /// options resolve to the exact object that was passed in.
    pub fn resolve<'a>(
        &'a self,
        formats: &'a HashMap<String, O>,
        debug: bool,
    ) -> Result<&'a O, IntlError> {
        match self {
            FormatSpec::Inline(options) => Ok(options),
            FormatSpec::Named(name) => formats
                .get(name)
                .ok_or_else(|| IntlError::missing_format(name, debug)),
        }
    }
}

impl<O> From<&str> for FormatSpec<O> {
    fn from(name: &str) -> Self {
        FormatSpec::Named(name.to_string())
    }
}

impl<O> From<String> for FormatSpec<O> {
    fn from(name: String) -> Self {
        FormatSpec::Named(name)
    }
}

/// Named option sets per formatting category, keyed by format name.
///
/// Deserializable so hosts can declare their formats in a settings file:
///
/// ```toml
/// [formats.number.precise]
/// maximum_fraction_digits = 6
///
/// [formats.date_time.short]
/// date_style = "short"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatRegistry {
    #[serde(default)]
    pub date_time: HashMap<String, DateTimeFormatOptions>,
    #[serde(default)]
    pub number: HashMap<String, NumberFormatOptions>,
}
