// SPDX-License-Identifier: MPL-2.0
//! `intl-kit` provides internationalization glue for server-side applications.
//!
//! It bundles locale-aware formatting helpers (dates, numbers, relative time)
//! behind a small facade with pluggable error reporting, and a request-config
//! adapter that lets a host framework resolve per-request i18n configuration.

#![doc(html_root_url = "https://docs.rs/intl-kit/0.2.0")]

pub mod config;
pub mod error;
pub mod formats;
pub mod intl;
pub mod server;

pub use formats::{
    DateTimeFormatOptions, DateTimeStyle, FormatRegistry, FormatSpec, NumberFormatOptions,
    NumberStyle,
};
pub use intl::{Intl, IntlConfig, IntlError, IntlErrorKind, TimePoint};
