//! Stable error codes surfaced to operators.

/// Every error enum implements this to provide a structured code string
/// that survives log scraping and alerting rules.
pub trait ErrorCode {
    /// Returns the code string (e.g., "SHAPE_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted operator string: `[ERROR_CODE] message`.
    fn operator_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
pub const INVALID_THRESHOLDS: &str = "INVALID_THRESHOLDS";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_BUSY: &str = "DB_BUSY";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
