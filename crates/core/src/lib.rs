//! Domain logic for the parkbook booking platform.
//!
//! This crate has zero internal dependencies so its rules (availability
//! checks, capacity presentation, webhook signature verification) can be
//! used by the API layer, repositories, and any future CLI or worker
//! tooling alike.

pub mod booking;
pub mod capacity;
pub mod error;
pub mod roles;
pub mod search;
pub mod signature;
pub mod status;
pub mod types;
