//! # Storage Module
//!
//! Owns the canonical daycare collections (roster, accounts, events, forms,
//! payments, activity logs and attendance).
//!
//! The domain layer only sees the traits in [`traits`]; the in-memory
//! repositories in [`memory`] implement them over a single shared store that
//! is seeded from `config/seed.yaml` at startup. Nothing is persisted.

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::{
    AccountRepository, ActivityLogRepository, AttendanceRepository, ChildRepository,
    DaycareStore, EventRepository, FormRepository, MemoryConnection, PaymentRepository,
};
pub use seed::SeedData;
pub use traits::*;
