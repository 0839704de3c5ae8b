use crate::clock::ClockTime;
use crate::status::RecordStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A child enrolled in the class. The roster is static at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Child {
    pub child_id: String,
    pub parent_id: String,
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub medical: String,
    #[serde(default)]
    pub contact: String,
}

/// Parent login, matched against the seeded list by literal comparison
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParentAccount {
    pub parent_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Staff login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffAccount {
    pub staff_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Parent,
    Staff,
}

/// Whoever just signed in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Account {
    Parent(ParentAccount),
    Staff(StaffAccount),
}

impl Account {
    pub fn role(&self) -> Role {
        match self {
            Account::Parent(_) => Role::Parent,
            Account::Staff(_) => Role::Staff,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Account::Parent(parent) => &parent.name,
            Account::Staff(staff) => &staff.name,
        }
    }
}

/// A class event such as a field trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    /// Child ids attending; drives permission form generation
    pub children: Vec<String>,
    #[serde(default)]
    pub has_form: bool,
    /// Name of the attached form file. Only the name is kept.
    #[serde(default)]
    pub form_file: Option<String>,
}

impl Event {
    pub fn includes_child(&self, child_id: &str) -> bool {
        self.children.iter().any(|id| id == child_id)
    }

    /// Title given to the permission forms generated for this event
    pub fn form_title(&self) -> String {
        form_title_for(&self.title)
    }
}

pub fn form_title_for(event_title: &str) -> String {
    format!("{} Permission Form", event_title)
}

/// A permission form, one per (event, child)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub event_id: Option<String>,
    pub child_id: String,
    pub due_date: NaiveDate,
    pub status: RecordStatus,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub consent: bool,
}

impl Form {
    /// Fresh outstanding form with nothing filled in
    pub fn outstanding(
        id: String,
        title: String,
        event_id: Option<String>,
        child_id: String,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title,
            event_id,
            child_id,
            due_date,
            status: RecordStatus::Outstanding,
            parent_name: String::new(),
            emergency_contact: String::new(),
            notes: String::new(),
            signature: String::new(),
            consent: false,
        }
    }

    pub fn belongs_to_event(&self, event_id: &str) -> bool {
        self.event_id.as_deref() == Some(event_id)
    }
}

/// A fee owed for a child. Tuition has no event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub payment_id: String,
    pub child_id: String,
    pub amount: f64,
    pub description: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Payment {
    pub fn is_tuition(&self) -> bool {
        self.event_id.is_none()
    }

    pub fn belongs_to_event(&self, event_id: &str) -> bool {
        self.event_id.as_deref() == Some(event_id)
    }
}

/// Per-child line of an activity log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogChildEntry {
    pub child_id: String,
    pub name: String,
    pub selected: bool,
    #[serde(default)]
    pub behavioral_note: String,
}

/// A staff-written record of one class activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLog {
    pub id: String,
    pub activity_name: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default)]
    pub notes: String,
    pub children: Vec<LogChildEntry>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ActivityLog {
    /// The entry for `child_id`, if that child took part
    pub fn entry_for(&self, child_id: &str) -> Option<&LogChildEntry> {
        self.children
            .iter()
            .find(|entry| entry.child_id == child_id && entry.selected)
    }

    pub fn selected_child_ids(&self) -> Vec<String> {
        self.children
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.child_id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Meridiem;

    fn sample_log() -> ActivityLog {
        ActivityLog {
            id: "l1".to_string(),
            activity_name: "Story Time".to_string(),
            start_time: ClockTime::new(10, 0, Meridiem::Am).unwrap(),
            end_time: ClockTime::new(11, 0, Meridiem::Am).unwrap(),
            notes: "Read two books".to_string(),
            children: vec![
                LogChildEntry {
                    child_id: "c1".to_string(),
                    name: "Noah Bennett".to_string(),
                    selected: true,
                    behavioral_note: "Listened well".to_string(),
                },
                LogChildEntry {
                    child_id: "c2".to_string(),
                    name: "Lucas Carter".to_string(),
                    selected: false,
                    behavioral_note: String::new(),
                },
            ],
            date: None,
        }
    }

    #[test]
    fn test_log_entry_for_only_selected_children() {
        let log = sample_log();
        assert_eq!(
            log.entry_for("c1").map(|e| e.behavioral_note.as_str()),
            Some("Listened well")
        );
        assert!(log.entry_for("c2").is_none());
        assert!(log.entry_for("c9").is_none());
        assert_eq!(log.selected_child_ids(), vec!["c1".to_string()]);
    }

    #[test]
    fn test_form_title_for_event() {
        assert_eq!(
            form_title_for("Calgary Zoo"),
            "Calgary Zoo Permission Form"
        );
    }

    #[test]
    fn test_payment_tuition_has_no_event() {
        let payment = Payment {
            payment_id: "p1".to_string(),
            child_id: "c1".to_string(),
            amount: 850.0,
            description: "November Tuition".to_string(),
            status: RecordStatus::Outstanding,
            event_id: None,
            due_date: None,
        };
        assert!(payment.is_tuition());
        assert!(!payment.belongs_to_event("e1"));
    }

    #[test]
    fn test_event_deserializes_from_yaml() {
        let yaml = r#"
id: e1
title: Calgary Zoo
location: Calgary Zoo
date: 2025-12-12
start_time: 09:00am
end_time: 02:30pm
children: [c1, c2]
has_form: true
"#;
        let event: Event = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 12, 12).unwrap());
        assert_eq!(event.end_time.to_string(), "02:30pm");
        assert!(event.includes_child("c2"));
        assert!(event.form_file.is_none());
        assert_eq!(event.form_title(), "Calgary Zoo Permission Form");
    }
}
