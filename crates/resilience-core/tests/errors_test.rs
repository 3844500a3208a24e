//! Error codes and conversions.

use resilience_core::errors::error_code;
use resilience_core::errors::{
    ConfigError, ErrorCode, ProviderError, RunError, ScoringError, StorageError,
};

#[test]
fn run_error_forwards_subsystem_codes() {
    let err: RunError = ProviderError::ShapeMismatch {
        signal: "soil_moisture".to_string(),
        rows: 2,
        cols: 2,
        expected: 4,
        actual: 3,
    }
    .into();
    assert_eq!(err.error_code(), error_code::SHAPE_MISMATCH);

    let err: RunError = StorageError::Busy {
        message: "database is locked".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::DB_BUSY);

    let err: RunError = ConfigError::FileNotFound {
        path: "x.toml".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);

    let err: RunError = ScoringError::InvalidThresholds {
        signal: "rain".to_string(),
        t1: 1.0,
        t2: 0.5,
        t3: 0.1,
    }
    .into();
    assert_eq!(err.error_code(), error_code::INVALID_THRESHOLDS);
}

#[test]
fn operator_string_prefixes_code() {
    let err = StorageError::MigrationFailed {
        version: 1,
        message: "syntax error".to_string(),
    };
    assert_eq!(
        err.operator_string(),
        "[MIGRATION_FAILED] migration failed at version 1: syntax error"
    );
}

#[test]
fn only_busy_is_transient() {
    assert!(StorageError::Busy { message: String::new() }.is_transient());
    assert!(!StorageError::SqliteError { message: String::new() }.is_transient());
    assert!(!StorageError::MigrationFailed { version: 1, message: String::new() }.is_transient());
}
