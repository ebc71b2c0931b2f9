// SPDX-License-Identifier: MPL-2.0
//! Number backend: fraction-digit rounding plus locale-aware separators.

use crate::formats::{NumberFormatOptions, NumberStyle};
use unic_langid::LanguageIdentifier;

struct Separators {
    decimal: char,
    group: char,
    /// Size of the group adjacent to the decimal point.
    primary: usize,
    /// Size of every further group.
    secondary: usize,
}

impl Separators {
    fn for_locale(locale: &LanguageIdentifier) -> Self {
        let language = locale.language.as_str();
        let region = locale.region.as_ref().map(|region| region.as_str());

        match (language, region) {
            ("fr", Some("CA")) => Self {
                decimal: ',',
                group: ' ',
                primary: 3,
                secondary: 3,
            },
            ("de" | "fr" | "es" | "it", _) => Self {
                decimal: ',',
                group: '.',
                primary: 3,
                secondary: 3,
            },
            ("hi", _) | ("en", Some("IN")) => Self {
                decimal: '.',
                group: ',',
                primary: 3,
                secondary: 2,
            },
            _ => Self {
                decimal: '.',
                group: ',',
                primary: 3,
                secondary: 3,
            },
        }
    }
}

/// Formats `value` with the given options in the given locale.
///
/// Non-finite values render as their plain `Display` output; option
/// validation failures surface as `Err`.
pub(crate) fn format(
    value: f64,
    options: Option<&NumberFormatOptions>,
    locale: &LanguageIdentifier,
) -> Result<String, String> {
    let defaults = NumberFormatOptions::default();
    let options = options.unwrap_or(&defaults);
    options.validate()?;

    if !value.is_finite() {
        return Ok(value.to_string());
    }

    let scaled = match options.style {
        NumberStyle::Decimal => value,
        NumberStyle::Percent => value * 100.0,
    };
    let min = options.minimum_fraction_digits.unwrap_or(0) as usize;
    let max = options
        .maximum_fraction_digits
        .map(usize::from)
        .unwrap_or_else(|| min.max(3));

    let negative = scaled < 0.0;
    let mut digits = format!("{:.*}", max, scaled.abs());
    trim_fraction(&mut digits, min);
    let is_zero = digits.chars().all(|c| matches!(c, '0' | '.'));

    let separators = Separators::for_locale(locale);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 4);
    if negative && !is_zero {
        out.push('-');
    }
    if options.use_grouping.unwrap_or(true) {
        group_digits(int_part, &separators, &mut out);
    } else {
        out.push_str(int_part);
    }
    if let Some(frac_part) = frac_part {
        out.push(separators.decimal);
        out.push_str(frac_part);
    }
    if options.style == NumberStyle::Percent {
        out.push('%');
    }
    Ok(out)
}

/// Drops trailing fraction zeros down to `min` digits, and the decimal point
/// itself once the fraction is gone.
fn trim_fraction(digits: &mut String, min: usize) {
    let Some(dot) = digits.find('.') else {
        return;
    };
    let mut fraction_len = digits.len() - dot - 1;
    while fraction_len > min && digits.ends_with('0') {
        digits.pop();
        fraction_len -= 1;
    }
    if fraction_len == 0 {
        digits.pop();
    }
}

fn group_digits(int_part: &str, separators: &Separators, out: &mut String) {
    let len = int_part.chars().count();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 {
            let from_right = len - i;
            let grouped = from_right > separators.primary
                && (from_right - separators.primary) % separators.secondary == 0;
            if grouped {
                out.push(separators.group);
            }
        }
        out.push(c);
    }
}
