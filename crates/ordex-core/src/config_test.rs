use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_environment_yields_all_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults must build");
    assert_eq!(cfg.store_base_url, "http://localhost:8080/api/purchases");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.invoice_load_timeout_secs, 30);
    assert_eq!(cfg.max_concurrent_invoices, 8);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.summary_path.is_none());
}

#[test]
fn overrides_are_honored() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("ORDEX_STORE_URL", "http://store.internal:9000/api/purchases");
    map.insert("ORDEX_MAX_CONCURRENT_INVOICES", "2");
    map.insert("ORDEX_SUMMARY_PATH", "/tmp/summary.html");
    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides must build");
    assert_eq!(
        cfg.store_base_url,
        "http://store.internal:9000/api/purchases"
    );
    assert_eq!(cfg.max_concurrent_invoices, 2);
    assert_eq!(cfg.summary_path, Some(PathBuf::from("/tmp/summary.html")));
}

#[test]
fn malformed_numeric_override_is_rejected() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("ORDEX_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ORDEX_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ORDEX_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn malformed_fanout_override_is_rejected() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("ORDEX_MAX_CONCURRENT_INVOICES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ORDEX_MAX_CONCURRENT_INVOICES"),
        "expected InvalidEnvVar(ORDEX_MAX_CONCURRENT_INVOICES), got: {result:?}"
    );
}
