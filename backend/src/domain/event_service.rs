//! Event management and the event ↔ permission form synchronisation.
//!
//! Events own their forms: creating an event with a form generates one
//! outstanding form per attending child, editing the attendee list adds and
//! removes forms to match, and deleting an event removes its forms and its
//! event-linked payments.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use std::sync::Arc;

use crate::domain::errors::DaycareError;
use crate::domain::ids::IdSequence;
use crate::storage::{EventStorage, FormStorage, PaymentStorage};
use shared::{
    ClockTime, CreateEventResponse, DeleteEventResponse, Event, EventDraft, Form,
    UpdateEventResponse, ValidationError,
};

#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventStorage>,
    forms: Arc<dyn FormStorage>,
    payments: Arc<dyn PaymentStorage>,
}

/// Validated required fields of a draft
struct EventSchedule {
    date: NaiveDate,
    start_time: ClockTime,
    end_time: ClockTime,
}

fn checked_schedule(draft: &EventDraft) -> Result<EventSchedule> {
    let validation = draft.validate();
    if !validation.is_valid {
        return Err(DaycareError::Validation(validation.errors).into());
    }
    match (draft.date, draft.start_time, draft.end_time) {
        (Some(date), Some(start_time), Some(end_time)) => Ok(EventSchedule {
            date,
            start_time,
            end_time,
        }),
        _ => Err(DaycareError::Validation(vec![ValidationError::MissingEventDate]).into()),
    }
}

impl EventService {
    pub fn new(
        events: Arc<dyn EventStorage>,
        forms: Arc<dyn FormStorage>,
        payments: Arc<dyn PaymentStorage>,
    ) -> Self {
        Self {
            events,
            forms,
            payments,
        }
    }

    /// All events, earliest first
    pub fn list_events(&self) -> Result<Vec<Event>> {
        self.events.list_events()
    }

    pub fn get_event(&self, event_id: &str) -> Result<Option<Event>> {
        self.events.get_event(event_id)
    }

    /// Events attended by at least one of `child_ids`
    pub fn events_for_children(&self, child_ids: &[String]) -> Result<Vec<Event>> {
        Ok(self
            .events
            .list_events()?
            .into_iter()
            .filter(|event| child_ids.iter().any(|id| event.includes_child(id)))
            .collect())
    }

    pub fn events_for_child(&self, child_id: &str) -> Result<Vec<Event>> {
        self.events_for_children(&[child_id.to_string()])
    }

    /// Events falling in the given month, earliest first
    pub fn events_in_month(&self, month: u32, year: u32) -> Result<Vec<Event>> {
        Ok(self
            .events
            .list_events()?
            .into_iter()
            .filter(|event| event.date.month() == month && event.date.year() == year as i32)
            .collect())
    }

    pub fn create_event(&self, draft: &EventDraft) -> Result<CreateEventResponse> {
        info!("📅 Creating event: {}", draft.title.trim());
        let schedule = checked_schedule(draft)?;

        let existing = self.events.list_events()?;
        let mut ids = IdSequence::after("e", existing.iter().map(|e| e.id.as_str()));

        let event = Event {
            id: ids.next_id(),
            title: draft.title.trim().to_string(),
            location: draft.location.trim().to_string(),
            date: schedule.date,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            description: draft.description.trim().to_string(),
            notes: draft.notes.trim().to_string(),
            children: draft.children.ids().to_vec(),
            has_form: draft.resolved_has_form(false),
            form_file: draft.form_file.clone(),
        };
        self.events.store_event(&event)?;

        let created_forms = if event.has_form {
            self.create_forms_for(&event, &event.children)?
        } else {
            Vec::new()
        };

        info!(
            "✅ Created event {} with {} permission forms",
            event.id,
            created_forms.len()
        );
        Ok(CreateEventResponse {
            event,
            created_forms,
            success_message: "Event created successfully".to_string(),
        })
    }

    pub fn update_event(&self, event_id: &str, draft: &EventDraft) -> Result<UpdateEventResponse> {
        info!("✏️ Updating event {}", event_id);

        let previous = self
            .events
            .get_event(event_id)?
            .ok_or_else(|| DaycareError::not_found("Event", event_id))?;
        let schedule = checked_schedule(draft)?;

        let event = Event {
            id: previous.id.clone(),
            title: draft.title.trim().to_string(),
            location: draft.location.trim().to_string(),
            date: schedule.date,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            description: draft.description.trim().to_string(),
            notes: draft.notes.trim().to_string(),
            children: draft.children.ids().to_vec(),
            has_form: draft.resolved_has_form(previous.has_form),
            form_file: draft.form_file.clone(),
        };
        self.events.update_event(&event)?;

        let (created_forms, deleted_form_ids) = self.sync_forms(&event)?;

        info!(
            "✅ Updated event {}: {} forms added, {} forms removed",
            event.id,
            created_forms.len(),
            deleted_form_ids.len()
        );
        Ok(UpdateEventResponse {
            event,
            created_forms,
            deleted_form_ids,
            success_message: "Event updated successfully".to_string(),
        })
    }

    /// Delete an event together with its forms and event-linked payments
    pub fn delete_event(&self, event_id: &str) -> Result<DeleteEventResponse> {
        info!("🗑️ Deleting event {}", event_id);

        let event = self
            .events
            .get_event(event_id)?
            .ok_or_else(|| DaycareError::not_found("Event", event_id))?;

        let deleted_form_ids: Vec<String> = self
            .forms
            .list_forms()?
            .into_iter()
            .filter(|f| f.belongs_to_event(&event.id))
            .map(|f| f.id)
            .collect();
        self.forms.delete_forms(&deleted_form_ids)?;

        let deleted_payment_ids: Vec<String> = self
            .payments
            .list_payments()?
            .into_iter()
            .filter(|p| p.belongs_to_event(&event.id))
            .map(|p| p.payment_id)
            .collect();
        self.payments.delete_payments(&deleted_payment_ids)?;

        if !self.events.delete_event(&event.id)? {
            warn!("⚠️ Event {} vanished during delete", event.id);
        }

        info!(
            "✅ Deleted event {} ({} forms, {} payments)",
            event.id,
            deleted_form_ids.len(),
            deleted_payment_ids.len()
        );
        Ok(DeleteEventResponse {
            event_id: event.id,
            deleted_form_ids,
            deleted_payment_ids,
            success_message: format!("{} was deleted", event.title),
        })
    }

    /// Bring the event's forms in line with its attendee list and form flag.
    /// Forms of children who stay on the event are left untouched.
    fn sync_forms(&self, event: &Event) -> Result<(Vec<Form>, Vec<String>)> {
        let event_forms: Vec<Form> = self
            .forms
            .list_forms()?
            .into_iter()
            .filter(|f| f.belongs_to_event(&event.id))
            .collect();

        let deleted_form_ids: Vec<String> = event_forms
            .iter()
            .filter(|f| !event.has_form || !event.includes_child(&f.child_id))
            .map(|f| f.id.clone())
            .collect();
        self.forms.delete_forms(&deleted_form_ids)?;

        let created_forms = if event.has_form {
            let missing: Vec<String> = event
                .children
                .iter()
                .filter(|child_id| !event_forms.iter().any(|f| &f.child_id == *child_id))
                .cloned()
                .collect();
            self.create_forms_for(event, &missing)?
        } else {
            Vec::new()
        };

        Ok((created_forms, deleted_form_ids))
    }

    fn create_forms_for(&self, event: &Event, child_ids: &[String]) -> Result<Vec<Form>> {
        if child_ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing = self.forms.list_forms()?;
        let mut ids = IdSequence::after("f", existing.iter().map(|f| f.id.as_str()));

        let forms: Vec<Form> = child_ids
            .iter()
            .map(|child_id| {
                Form::outstanding(
                    ids.next_id(),
                    event.form_title(),
                    Some(event.id.clone()),
                    child_id.clone(),
                    event.date,
                )
            })
            .collect();
        self.forms.store_forms(&forms)?;
        Ok(forms)
    }
}
