//! Entity models: one module per table, each with the row struct plus the
//! Create/Update input structs its repository accepts.

pub mod booking;
pub mod category;
pub mod event;
pub mod park;
pub mod payment;
pub mod profile;
