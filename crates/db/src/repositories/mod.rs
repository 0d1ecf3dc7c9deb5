//! Repositories: stateless structs with async methods taking a pool
//! reference. One repository per aggregate.

mod booking_repo;
mod category_repo;
mod event_repo;
mod park_repo;
mod payment_repo;
mod profile_repo;

pub use booking_repo::BookingRepo;
pub use category_repo::CategoryRepo;
pub use event_repo::EventRepo;
pub use park_repo::ParkRepo;
pub use payment_repo::PaymentRepo;
pub use profile_repo::ProfileRepo;
