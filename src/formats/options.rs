// SPDX-License-Identifier: MPL-2.0
//! Concrete option sets accepted by the formatting backends.

use serde::{Deserialize, Serialize};

/// Upper bound on fraction digits accepted by the number backend.
pub const MAX_FRACTION_DIGITS: u8 = 20;

// =============================================================================
// Date/time options
// =============================================================================

/// Coarse date or time rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeStyle {
    Full,
    Long,
    Medium,
    Short,
}

/// Options for the date/time backend.
///
/// An explicit `pattern` (strftime syntax) takes precedence over the style
/// fields. With no pattern and no styles, the backend falls back to a plain
/// `YYYY-MM-DD HH:MM:SS` rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateTimeFormatOptions {
    #[serde(default)]
    pub date_style: Option<DateTimeStyle>,
    #[serde(default)]
    pub time_style: Option<DateTimeStyle>,
    #[serde(default)]
    pub pattern: Option<String>,
}

impl DateTimeFormatOptions {
    /// Returns the strftime pattern these options describe.
    pub fn strftime_pattern(&self) -> String {
        if let Some(pattern) = &self.pattern {
            return pattern.clone();
        }

        let date = self.date_style.map(|style| match style {
            DateTimeStyle::Full => "%A, %B %e, %Y",
            DateTimeStyle::Long => "%B %e, %Y",
            DateTimeStyle::Medium => "%b %e, %Y",
            DateTimeStyle::Short => "%m/%d/%y",
        });
        let time = self.time_style.map(|style| match style {
            DateTimeStyle::Full | DateTimeStyle::Long => "%H:%M:%S %Z",
            DateTimeStyle::Medium => "%H:%M:%S",
            DateTimeStyle::Short => "%H:%M",
        });

        match (date, time) {
            (Some(date), Some(time)) => format!("{date}, {time}"),
            (Some(date), None) => date.to_string(),
            (None, Some(time)) => time.to_string(),
            (None, None) => "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

// =============================================================================
// Number options
// =============================================================================

/// Rendering style for the number backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
}

/// Options for the number backend.
///
/// Unset fraction bounds default to a minimum of 0 and a maximum of
/// `max(minimum, 3)`. Grouping separators are on unless disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberFormatOptions {
    #[serde(default)]
    pub style: NumberStyle,
    #[serde(default)]
    pub minimum_fraction_digits: Option<u8>,
    #[serde(default)]
    pub maximum_fraction_digits: Option<u8>,
    #[serde(default)]
    pub use_grouping: Option<bool>,
}

impl NumberFormatOptions {
    /// Checks the fraction-digit bounds, mirroring the envelope native
    /// formatters enforce before accepting an option set.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(min) = self.minimum_fraction_digits {
            if min > MAX_FRACTION_DIGITS {
                return Err(format!(
                    "minimum_fraction_digits must be between 0 and {MAX_FRACTION_DIGITS}, got {min}"
                ));
            }
        }
        if let Some(max) = self.maximum_fraction_digits {
            if max > MAX_FRACTION_DIGITS {
                return Err(format!(
                    "maximum_fraction_digits must be between 0 and {MAX_FRACTION_DIGITS}, got {max}"
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.minimum_fraction_digits, self.maximum_fraction_digits)
        {
            if min > max {
                return Err(format!(
                    "minimum_fraction_digits ({min}) exceeds maximum_fraction_digits ({max})"
                ));
            }
        }
        Ok(())
    }
}
