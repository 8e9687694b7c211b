//! Unit tests for domain error types

use dbpool_domain::Error;

#[test]
fn test_missing_configuration_message_names_both_paths() {
    let error = Error::missing_configuration("server", "db.default.server", "db.readonly.server");
    let display_str = error.to_string();
    assert_eq!(
        display_str,
        "Unable to locate required property 'server' as 'db.default.server' or 'db.readonly.server'."
    );
}

#[test]
fn test_missing_configuration_fields() {
    let error = Error::missing_configuration("port", "db.default.port", "db.readwrite.port");
    match error {
        Error::MissingConfiguration {
            key,
            default_path,
            mode_path,
        } => {
            assert_eq!(key, "port");
            assert_eq!(default_path, "db.default.port");
            assert_eq!(mode_path, "db.readwrite.port");
        }
        _ => panic!("Expected MissingConfiguration error"),
    }
}

#[test]
fn test_invalid_configuration_error() {
    let error = Error::invalid_configuration("port", "notanumber", "not an integer");
    let display_str = format!("{}", error);
    assert!(display_str.contains("port"));
    assert!(display_str.contains("notanumber"));
    assert!(display_str.contains("not an integer"));
}

#[test]
fn test_configuration_error_with_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let error = Error::configuration_with_source("Failed to read config", io_error);
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Failed to read config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_database_error() {
    let error = Error::database("pool closed");
    match error {
        Error::Database { message, source } => {
            assert_eq!(message, "pool closed");
            assert!(source.is_none());
        }
        _ => panic!("Expected Database error"),
    }
}

#[test]
fn test_is_configuration_error() {
    assert!(Error::missing_configuration("a", "b", "c").is_configuration_error());
    assert!(Error::invalid_configuration("a", "b", "c").is_configuration_error());
    assert!(Error::configuration("bad file").is_configuration_error());
    assert!(!Error::database("closed").is_configuration_error());
}
