//! Pagination and list-query helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API layer and the repository layer.

/// Default number of rows per page for admin list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of rows per page for admin list endpoints.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Clamp a caller-supplied limit to `[1, max]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Normalize a free-text search term into a SQL `ILIKE` pattern.
///
/// Escapes the `%` and `_` wildcards so user input matches literally, then
/// wraps the term for substring search. Whitespace-only input yields `None`.
pub fn ilike_pattern(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }
    let escaped = trimmed
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Some(format!("%{escaped}%"))
}
