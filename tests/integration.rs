// SPDX-License-Identifier: MPL-2.0
use intl_kit::config::{self, Settings};
use intl_kit::intl::{relative, Intl, IntlConfig, IntlErrorKind, TimePoint};
use intl_kit::server::{self, RequestConfigAdapter, RequestParams, ResolvedConfig};
use intl_kit::FormatSpec;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[test]
fn settings_file_drives_the_facade() {
    // Create a temporary directory for the settings file
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("intl.toml");

    // 1. Write settings declaring a language and a named number format
    let toml = r#"
language = "en-US"
debug = true

[formats.number.compact]
maximum_fraction_digits = 1

[formats.date_time.stamp]
pattern = "%Y-%m-%d"
"#;
    std::fs::write(&settings_path, toml).expect("Failed to write settings file");

    // 2. Load them and build a config
    let settings = config::load_from_path(&settings_path).expect("Failed to load settings");
    let intl_config =
        IntlConfig::from_settings(&settings).expect("Failed to build config from settings");
    assert_eq!(intl_config.locale.to_string(), "en-US");
    assert!(intl_config.debug);

    // 3. The declared formats resolve by name
    let intl = Intl::new(&intl_config);
    assert_eq!(intl.format_number(1234.56, Some("compact".into())), "1,234.6");
    assert_eq!(
        intl.format_date_time(TimePoint::from(0_i64), Some("stamp".into())),
        "1970-01-01"
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn request_flow_resolves_locale_and_formats() {
    let available = relative::available_locales();
    let adapter = RequestConfigAdapter::new(move |params: RequestParams| {
        let settings = Settings::default();
        let locale = server::resolve_locale(params.locale.as_deref(), &settings, &available);
        ResolvedConfig::Ready(IntlConfig::new(locale))
    });

    let resolved = adapter.resolve(RequestParams {
        locale: Some("fr".to_string()),
    });
    let config = match resolved {
        ResolvedConfig::Ready(config) => config,
        ResolvedConfig::Deferred(_) => panic!("resolver is synchronous"),
    };

    let intl = Intl::new(&config);
    let now = 1_700_000_000_000_i64;
    assert_eq!(intl.format_relative_time(now - 7_200_000, now), "il y a 2 heures");
}

#[test]
fn a_day_old_date_phrases_idiomatically_end_to_end() {
    let config = IntlConfig::new("en-US".parse().expect("valid locale"));
    let intl = Intl::new(&config);

    // 90,000 seconds is just over a day; the day bucket rounds it to -1,
    // which the en-US messages phrase as "yesterday".
    let now = 1_700_000_000_000_i64;
    let date = now - 90_000 * 1000;
    assert_eq!(intl.format_relative_time(date, now), "yesterday");
}

#[test]
fn failures_never_escape_the_facade() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_callback = Arc::clone(&seen);
    let config = IntlConfig::new("en-US".parse().expect("valid locale")).with_on_error(
        move |error| {
            seen_in_callback
                .lock()
                .expect("callback lock")
                .push(error.kind());
        },
    );
    let intl = Intl::new(&config);

    // Missing named format, then a backend rejection: both return strings.
    let first = intl.format_number(5.0, Some("nonexistent".into()));
    let second = intl.format_date_time(
        TimePoint::from(0_i64),
        Some(FormatSpec::Inline(intl_kit::DateTimeFormatOptions {
            pattern: Some("%!".to_string()),
            ..Default::default()
        })),
    );

    assert_eq!(first, "5");
    assert_eq!(second, "1970-01-01 00:00:00 UTC");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![IntlErrorKind::MissingFormat, IntlErrorKind::FormattingError]
    );
}
