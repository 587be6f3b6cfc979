//! Environment provisioning of client settings.

#![allow(unsafe_code)] // For env var manipulation in tests

use metricmeta::config::ClientSettings;
use std::env;

// All env manipulation lives in a single test: integration tests in one
// binary run on parallel threads and the process environment is shared.
#[test]
fn test_settings_loaded_from_dd_env_vars() {
    unsafe {
        env::set_var("DD_API_KEY", "key-from-env");
        env::set_var("DD_APP_KEY", "app-from-env");
        env::set_var("DD_SITE", "https://api.datadoghq.eu");
        env::set_var("DD_TIMEOUT_SECS", "5");
    }

    let settings = ClientSettings::from_env().unwrap();
    assert_eq!(settings.api_key.as_deref(), Some("key-from-env"));
    assert_eq!(settings.app_key.as_deref(), Some("app-from-env"));
    assert_eq!(settings.site.as_deref(), Some("https://api.datadoghq.eu"));
    assert_eq!(settings.timeout_secs, 5);

    assert!(settings.credentials().is_ok());

    unsafe {
        env::remove_var("DD_API_KEY");
        env::remove_var("DD_APP_KEY");
        env::remove_var("DD_SITE");
        env::remove_var("DD_TIMEOUT_SECS");
    }
}
