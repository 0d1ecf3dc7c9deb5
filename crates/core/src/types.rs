/// All database primary keys are PostgreSQL UUIDs.
///
/// Profile ids are shared with the external identity provider, which issues
/// UUIDs; every other table follows the same convention via
/// `gen_random_uuid()`.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
