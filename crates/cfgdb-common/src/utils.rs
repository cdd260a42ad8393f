//! Utility functions for cfgdb
//!
//! Identifier and timestamp helpers shared by the backends.

/// Current time as epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh row identifier
///
/// 32 lowercase hex characters, never reused.
///
/// # Examples
///
/// ```
/// use cfgdb_common::new_id;
///
/// let id = new_id();
/// assert_eq!(id.len(), 32);
/// assert_ne!(id, new_id());
/// ```
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
