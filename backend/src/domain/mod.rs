//! # Domain Layer
//!
//! Business rules for the daycare: sign-in, the roster, events and their
//! permission forms, fees, activity logs, attendance and the calendar.
//! Services are synchronous, cheap to clone, and only talk to storage through
//! the traits in [`crate::storage`].

pub mod activity_log_service;
pub mod attendance_service;
pub mod auth_service;
pub mod calendar;
pub mod child_service;
pub mod errors;
pub mod event_service;
pub mod form_service;
pub mod ids;
pub mod payment_service;

pub use activity_log_service::ActivityLogService;
pub use attendance_service::AttendanceService;
pub use auth_service::AuthService;
pub use calendar::CalendarService;
pub use child_service::ChildService;
pub use errors::{user_messages, DaycareError};
pub use event_service::EventService;
pub use form_service::FormService;
pub use payment_service::PaymentService;
