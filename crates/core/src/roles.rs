//! Well-known role name constants.
//!
//! These must match the `role` column values seeded by the initial
//! migration. Regular members book programs; admins manage them.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
