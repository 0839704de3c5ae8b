//! # Storage Traits
//!
//! This module defines the storage abstraction traits that the domain layer
//! works against. The only implementation today is the in-memory store in
//! [`super::memory`], seeded from the embedded YAML file.

use anyhow::Result;
use shared::{ActivityLog, Child, Event, Form, ParentAccount, Payment, StaffAccount};
use std::collections::BTreeMap;

/// Read access to the class roster. Children are never created or deleted
/// at runtime.
pub trait ChildStorage: Send + Sync {
    /// All children in roster order
    fn list_children(&self) -> Result<Vec<Child>>;

    /// Retrieve a specific child by ID
    fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// Children whose `parent_id` matches
    fn list_children_for_parent(&self, parent_id: &str) -> Result<Vec<Child>>;
}

/// Login accounts for both roles
pub trait AccountStorage: Send + Sync {
    fn list_parent_accounts(&self) -> Result<Vec<ParentAccount>>;

    fn list_staff_accounts(&self) -> Result<Vec<StaffAccount>>;

    /// Store a newly registered parent
    fn store_parent_account(&self, account: &ParentAccount) -> Result<()>;
}

pub trait EventStorage: Send + Sync {
    /// All events ordered by date ascending
    fn list_events(&self) -> Result<Vec<Event>>;

    fn get_event(&self, event_id: &str) -> Result<Option<Event>>;

    /// Store a new event, keeping the date ordering
    fn store_event(&self, event: &Event) -> Result<()>;

    /// Replace an existing event, keeping the date ordering
    fn update_event(&self, event: &Event) -> Result<()>;

    /// Returns true if the event was found and deleted
    fn delete_event(&self, event_id: &str) -> Result<bool>;
}

pub trait FormStorage: Send + Sync {
    fn list_forms(&self) -> Result<Vec<Form>>;

    fn get_form(&self, form_id: &str) -> Result<Option<Form>>;

    /// Append new forms in the given order
    fn store_forms(&self, forms: &[Form]) -> Result<()>;

    fn update_form(&self, form: &Form) -> Result<()>;

    /// Returns the number of forms actually deleted
    fn delete_forms(&self, form_ids: &[String]) -> Result<usize>;
}

pub trait PaymentStorage: Send + Sync {
    fn list_payments(&self) -> Result<Vec<Payment>>;

    fn get_payment(&self, payment_id: &str) -> Result<Option<Payment>>;

    /// Append new payments in the given order
    fn store_payments(&self, payments: &[Payment]) -> Result<()>;

    fn update_payment(&self, payment: &Payment) -> Result<()>;

    /// Returns the number of payments actually deleted
    fn delete_payments(&self, payment_ids: &[String]) -> Result<usize>;
}

pub trait ActivityLogStorage: Send + Sync {
    /// All logs, newest first
    fn list_logs(&self) -> Result<Vec<ActivityLog>>;

    fn get_log(&self, log_id: &str) -> Result<Option<ActivityLog>>;

    /// Store a new log at the front of the list
    fn store_log(&self, log: &ActivityLog) -> Result<()>;

    fn update_log(&self, log: &ActivityLog) -> Result<()>;

    /// Returns true if the log was found and deleted
    fn delete_log(&self, log_id: &str) -> Result<bool>;
}

/// Today's present/absent marks keyed by child ID
pub trait AttendanceStorage: Send + Sync {
    fn get_attendance(&self) -> Result<BTreeMap<String, bool>>;

    fn set_present(&self, child_id: &str, present: bool) -> Result<()>;

    /// Replace every mark at once
    fn replace_attendance(&self, attendance: &BTreeMap<String, bool>) -> Result<()>;
}
