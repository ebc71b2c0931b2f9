// SPDX-License-Identifier: MPL-2.0
//! Error values reported through the facade's `on_error` callback.

use std::fmt;

/// The two failure classes a formatting operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntlErrorKind {
    /// A named format was requested but is not present in the registry.
    MissingFormat,
    /// A backend rejected the resolved options or the value.
    FormattingError,
}

impl fmt::Display for IntlErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntlErrorKind::MissingFormat => write!(f, "MISSING_FORMAT"),
            IntlErrorKind::FormattingError => write!(f, "FORMATTING_ERROR"),
        }
    }
}

/// Error handed to the `on_error` callback.
///
/// These never escape a formatting operation: the facade reports the error
/// exactly once and returns a fallback string instead. A `MissingFormat`
/// message is attached only when the configuration's `debug` flag is set;
/// `FormattingError` always carries the backend's message.
#[derive(Debug, Clone)]
pub struct IntlError {
    kind: IntlErrorKind,
    message: Option<String>,
}

impl IntlError {
    pub(crate) fn missing_format(name: &str, debug: bool) -> Self {
        Self {
            kind: IntlErrorKind::MissingFormat,
            message: debug.then(|| {
                format!(
                    "format `{name}` is not available; add it to the format registry or pass inline options"
                )
            }),
        }
    }

    pub(crate) fn formatting_error(message: impl Into<String>) -> Self {
        Self {
            kind: IntlErrorKind::FormattingError,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> IntlErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for IntlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.kind, message),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for IntlError {}
