//! Test utilities for the in-memory store.
//!
//! Every [`TestEnvironment`] owns its own store, so tests never see each
//! other's writes.

use anyhow::Result;
use chrono::NaiveDate;
use shared::{
    ActivityLog, Child, ClockTime, Event, Form, LogChildEntry, Meridiem, Payment, RecordStatus,
};
use std::sync::Arc;

use super::connection::{DaycareStore, MemoryConnection};
use super::{
    AccountRepository, ActivityLogRepository, AttendanceRepository, ChildRepository,
    EventRepository, FormRepository, PaymentRepository,
};
use crate::storage::seed::SeedData;

/// Isolated store for one test
pub struct TestEnvironment {
    pub connection: MemoryConnection,
}

impl TestEnvironment {
    /// Store loaded from the embedded seed file
    pub fn seeded() -> Result<Self> {
        let seed = SeedData::load_default()?;
        Ok(Self {
            connection: MemoryConnection::from_seed(seed),
        })
    }

    /// Store with nothing in it
    pub fn empty() -> Self {
        Self {
            connection: MemoryConnection::empty(),
        }
    }

    /// Store built from caller-supplied records
    pub fn with_store(store: DaycareStore) -> Self {
        Self {
            connection: MemoryConnection::new(store),
        }
    }

    pub fn child_repo(&self) -> Arc<ChildRepository> {
        Arc::new(ChildRepository::new(self.connection.clone()))
    }

    pub fn account_repo(&self) -> Arc<AccountRepository> {
        Arc::new(AccountRepository::new(self.connection.clone()))
    }

    pub fn event_repo(&self) -> Arc<EventRepository> {
        Arc::new(EventRepository::new(self.connection.clone()))
    }

    pub fn form_repo(&self) -> Arc<FormRepository> {
        Arc::new(FormRepository::new(self.connection.clone()))
    }

    pub fn payment_repo(&self) -> Arc<PaymentRepository> {
        Arc::new(PaymentRepository::new(self.connection.clone()))
    }

    pub fn activity_log_repo(&self) -> Arc<ActivityLogRepository> {
        Arc::new(ActivityLogRepository::new(self.connection.clone()))
    }

    pub fn attendance_repo(&self) -> Arc<AttendanceRepository> {
        Arc::new(AttendanceRepository::new(self.connection.clone()))
    }
}

fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
}

pub fn sample_child(child_id: &str, parent_id: &str, name: &str) -> Child {
    Child {
        child_id: child_id.to_string(),
        parent_id: parent_id.to_string(),
        name: name.to_string(),
        age: 4,
        allergies: "None".to_string(),
        medical: "None".to_string(),
        contact: "(403) 555-0100".to_string(),
    }
}

pub fn sample_event(id: &str, title: &str, iso_date: &str, children: &[&str]) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        location: "Calgary".to_string(),
        date: date(iso_date),
        start_time: ClockTime::new(9, 0, Meridiem::Am).unwrap(),
        end_time: ClockTime::new(2, 0, Meridiem::Pm).unwrap(),
        description: String::new(),
        notes: String::new(),
        children: children.iter().map(|c| c.to_string()).collect(),
        has_form: true,
        form_file: None,
    }
}

pub fn sample_form(id: &str, event_id: Option<&str>, child_id: &str) -> Form {
    Form::outstanding(
        id.to_string(),
        "Trip Permission Form".to_string(),
        event_id.map(|e| e.to_string()),
        child_id.to_string(),
        date("2025-11-07"),
    )
}

pub fn sample_payment(id: &str, child_id: &str, amount: f64, event_id: Option<&str>) -> Payment {
    Payment {
        payment_id: id.to_string(),
        child_id: child_id.to_string(),
        amount,
        description: "Fee".to_string(),
        status: RecordStatus::Outstanding,
        event_id: event_id.map(|e| e.to_string()),
        due_date: None,
    }
}

pub fn sample_log(id: &str, activity_name: &str) -> ActivityLog {
    ActivityLog {
        id: id.to_string(),
        activity_name: activity_name.to_string(),
        start_time: ClockTime::new(11, 0, Meridiem::Am).unwrap(),
        end_time: ClockTime::new(12, 0, Meridiem::Pm).unwrap(),
        notes: "Notes".to_string(),
        children: vec![LogChildEntry {
            child_id: "c1".to_string(),
            name: "Noah Bennett".to_string(),
            selected: true,
            behavioral_note: String::new(),
        }],
        date: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::{ChildStorage, EventStorage};

    #[test]
    fn test_environments_are_isolated() {
        let first = TestEnvironment::seeded().unwrap();
        let second = TestEnvironment::seeded().unwrap();

        first.event_repo().delete_event("e1").unwrap();
        assert!(first.event_repo().get_event("e1").unwrap().is_none());
        assert!(second.event_repo().get_event("e1").unwrap().is_some());
    }

    #[test]
    fn test_with_store() {
        let store = DaycareStore {
            children: vec![sample_child("c1", "u1", "Test Child")],
            ..DaycareStore::default()
        };
        let env = TestEnvironment::with_store(store);
        assert_eq!(env.child_repo().list_children().unwrap().len(), 1);
    }
}
