//! # Navigation
//!
//! One screen router per role plus the session that switches between them.
//!
//! A router is a `current` screen and a handful of selection slots. Moving to
//! a screen may carry a [`NavPayload`]; the router stores it in the slot that
//! screen reads. There is no history stack: every "back" control is another
//! forward navigation to a fixed screen.

pub mod parent_router;
pub mod session;
pub mod staff_router;

pub use parent_router::{ParentRouter, ParentScreen, ParentTab};
pub use session::{AppMode, DaycareSession};
pub use staff_router::{StaffRouter, StaffScreen, StaffTab};

use shared::{ActivityLog, Child, Event, Form, Payment};

/// The record handed to the next screen
#[derive(Debug, Clone, PartialEq)]
pub enum NavPayload {
    Event(Event),
    Log(ActivityLog),
    Form(Form),
    Payment(Payment),
    Child(Child),
}

impl NavPayload {
    pub fn into_event(self) -> Option<Event> {
        match self {
            NavPayload::Event(event) => Some(event),
            _ => None,
        }
    }

    pub fn into_log(self) -> Option<ActivityLog> {
        match self {
            NavPayload::Log(log) => Some(log),
            _ => None,
        }
    }

    pub fn into_form(self) -> Option<Form> {
        match self {
            NavPayload::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn into_payment(self) -> Option<Payment> {
        match self {
            NavPayload::Payment(payment) => Some(payment),
            _ => None,
        }
    }

    pub fn into_child(self) -> Option<Child> {
        match self {
            NavPayload::Child(child) => Some(child),
            _ => None,
        }
    }
}
