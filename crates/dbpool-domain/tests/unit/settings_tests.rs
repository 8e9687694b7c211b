//! Unit tests for connection settings

use dbpool_domain::{ConnectionSettings, Error};

fn sample() -> ConnectionSettings {
    ConnectionSettings::new("h", 5432, "d", "u", "p")
}

#[test]
fn test_new_defaults_to_single_connection() {
    let settings = sample();
    assert_eq!(settings.max_connections, 1);
    assert_eq!(settings.with_max_connections(5).max_connections, 5);
}

#[test]
fn test_redacted_url_omits_password() {
    let settings = ConnectionSettings::new("db.internal", 6432, "orders", "app", "s3cret");
    let url = settings.redacted_url();
    assert_eq!(url, "postgresql://app@db.internal:6432/orders");
    assert!(!url.contains("s3cret"));
}

#[test]
fn test_debug_hides_password() {
    let settings = ConnectionSettings::new("h", 5432, "d", "u", "s3cret");
    let debug_str = format!("{:?}", settings);
    assert!(!debug_str.contains("s3cret"));
    assert!(debug_str.contains("***"));
}

#[test]
fn test_serialization_skips_password() {
    let json = serde_json::to_string(&sample()).expect("serialization failed");
    assert!(!json.contains("\"password\""));
}

#[test]
fn test_check_accepts_valid_settings() {
    assert!(sample().check().is_ok());
}

#[test]
fn test_check_rejects_zero_max_connections() {
    let err = sample().with_max_connections(0).check().unwrap_err();
    match err {
        Error::InvalidConfiguration { key, value, .. } => {
            assert_eq!(key, "maxconns");
            assert_eq!(value, "0");
        }
        other => panic!("Expected InvalidConfiguration, got {other:?}"),
    }
}

#[test]
fn test_check_rejects_zero_port() {
    let err = ConnectionSettings::new("h", 0, "d", "u", "p").check().unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { ref key, .. } if key == "port"));
}

#[test]
fn test_check_rejects_empty_server() {
    let err = ConnectionSettings::new("", 5432, "d", "u", "p").check().unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { ref key, .. } if key == "server"));
}

#[test]
fn test_check_rejects_blank_text_fields() {
    let cases = [
        (ConnectionSettings::new("   ", 5432, "d", "u", "p"), "server"),
        (ConnectionSettings::new("h", 5432, "\t", "u", "p"), "database"),
        (ConnectionSettings::new("h", 5432, "d", " \n ", "p"), "username"),
    ];
    for (settings, expected) in cases {
        let err = settings.check().unwrap_err();
        assert!(
            matches!(err, Error::InvalidConfiguration { ref key, .. } if key == expected),
            "Expected InvalidConfiguration for {expected}, got {err:?}"
        );
    }
}

#[test]
fn test_check_allows_blank_password() {
    assert!(ConnectionSettings::new("h", 5432, "d", "u", "  ").check().is_ok());
}
