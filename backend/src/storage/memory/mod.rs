//! In-memory storage implementation.
//!
//! One [`MemoryConnection`] holds the canonical collections behind a lock;
//! each repository is a thin view over it implementing one storage trait.

pub mod account_repository;
pub mod activity_log_repository;
pub mod attendance_repository;
pub mod child_repository;
pub mod connection;
pub mod event_repository;
pub mod form_repository;
pub mod payment_repository;

#[cfg(test)]
pub mod test_utils;

pub use account_repository::AccountRepository;
pub use activity_log_repository::ActivityLogRepository;
pub use attendance_repository::AttendanceRepository;
pub use child_repository::ChildRepository;
pub use connection::{DaycareStore, MemoryConnection};
pub use event_repository::EventRepository;
pub use form_repository::FormRepository;
pub use payment_repository::PaymentRepository;
