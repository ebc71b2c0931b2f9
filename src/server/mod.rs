// SPDX-License-Identifier: MPL-2.0
//! Per-request configuration resolution for server frameworks.
//!
//! The host supplies a resolver that turns [`RequestParams`] into an
//! [`IntlConfig`], either immediately or as a future. The
//! [`RequestConfigAdapter`] binds such a resolver to the signature the rest
//! of the crate expects and forwards parameters untouched; any asynchrony is
//! entirely the host's responsibility.

use crate::config::Settings;
use crate::intl::IntlConfig;
use std::future::Future;
use std::pin::Pin;
use unic_langid::LanguageIdentifier;

/// Locale used when no other rung of the resolution chain applies.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Parameters a host framework supplies for each incoming request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    /// Locale requested by the client, e.g. from a URL segment or cookie.
    pub locale: Option<String>,
}

/// A configuration produced by a host resolver, immediately or deferred.
pub enum ResolvedConfig {
    Ready(IntlConfig),
    Deferred(Pin<Box<dyn Future<Output = IntlConfig> + Send>>),
}

impl ResolvedConfig {
    /// Awaits the deferred case; the ready case resolves without suspending.
    pub async fn into_config(self) -> IntlConfig {
        match self {
            ResolvedConfig::Ready(config) => config,
            ResolvedConfig::Deferred(future) => future.await,
        }
    }
}

/// Type-compatibility shim binding a host-supplied configuration resolver to
/// the locally expected call shape. Performs no transformation of its own.
pub struct RequestConfigAdapter {
    resolver: Box<dyn Fn(RequestParams) -> ResolvedConfig + Send + Sync>,
}

impl RequestConfigAdapter {
    pub fn new(
        resolver: impl Fn(RequestParams) -> ResolvedConfig + Send + Sync + 'static,
    ) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Forwards `params` to the host resolver and returns its result as-is.
    pub fn resolve(&self, params: RequestParams) -> ResolvedConfig {
        (self.resolver)(params)
    }
}

/// Picks the effective locale for a request.
///
/// Priority order: the request parameter, then the settings-file language,
/// then the OS locale. A rung is taken only when it parses and is one of the
/// locales in `available`; when none applies, [`DEFAULT_LOCALE`] wins.
pub fn resolve_locale(
    requested: Option<&str>,
    settings: &Settings,
    available: &[LanguageIdentifier],
) -> LanguageIdentifier {
    // 1. Check the request parameter
    if let Some(lang_str) = requested {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return lang;
            }
        }
    }

    // 2. Check the settings file
    if let Some(lang_str) = &settings.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return lang;
            }
        }
    }

    // 3. Check the OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return os_lang;
            }
        }
    }

    DEFAULT_LOCALE.parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intl::Intl;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn request_parameter_takes_priority() {
        let settings = Settings {
            language: Some("en-US".to_string()),
            ..Default::default()
        };
        let lang = resolve_locale(Some("fr"), &settings, &available());
        assert_eq!(lang, "fr".parse::<LanguageIdentifier>().unwrap());
    }

    #[test]
    fn settings_language_applies_without_request_parameter() {
        let settings = Settings {
            language: Some("fr".to_string()),
            ..Default::default()
        };
        let lang = resolve_locale(None, &settings, &available());
        assert_eq!(lang, "fr".parse::<LanguageIdentifier>().unwrap());
    }

    #[test]
    fn unsupported_request_parameter_is_skipped() {
        let settings = Settings {
            language: Some("fr".to_string()),
            ..Default::default()
        };
        let lang = resolve_locale(Some("xx-XX"), &settings, &available());
        assert_eq!(lang, "fr".parse::<LanguageIdentifier>().unwrap());
    }

    #[test]
    fn falls_back_to_the_default_locale() {
        let settings = Settings::default();
        let lang = resolve_locale(Some("not a tag!"), &settings, &[]);
        assert_eq!(lang, DEFAULT_LOCALE.parse::<LanguageIdentifier>().unwrap());
    }

    #[test]
    fn adapter_passes_params_through_to_a_sync_resolver() {
        let adapter = RequestConfigAdapter::new(|params: RequestParams| {
            let locale = params
                .locale
                .as_deref()
                .unwrap_or(DEFAULT_LOCALE)
                .parse()
                .unwrap_or_default();
            ResolvedConfig::Ready(IntlConfig::new(locale))
        });

        let resolved = adapter.resolve(RequestParams {
            locale: Some("fr".to_string()),
        });
        let config = match resolved {
            ResolvedConfig::Ready(config) => config,
            ResolvedConfig::Deferred(_) => panic!("sync resolver should resolve immediately"),
        };
        assert_eq!(config.locale, "fr".parse::<LanguageIdentifier>().unwrap());
    }

    #[tokio::test]
    async fn adapter_passes_params_through_to_an_async_resolver() {
        let adapter = RequestConfigAdapter::new(|params: RequestParams| {
            ResolvedConfig::Deferred(Box::pin(async move {
                let locale = params
                    .locale
                    .as_deref()
                    .unwrap_or(DEFAULT_LOCALE)
                    .parse()
                    .unwrap_or_default();
                IntlConfig::new(locale)
            }))
        });

        let config = adapter
            .resolve(RequestParams {
                locale: Some("de".to_string()),
            })
            .into_config()
            .await;
        assert_eq!(config.locale, "de".parse::<LanguageIdentifier>().unwrap());

        let intl = Intl::new(&config);
        assert_eq!(intl.format_relative_time(-86_400_000_i64, 0_i64), "gestern");
    }
}
