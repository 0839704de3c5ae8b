use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::errors::DaycareError;
use crate::domain::ids::IdSequence;
use crate::storage::{ActivityLogStorage, ChildStorage};
use shared::{ActivityLog, ActivityLogDraft, Child, LogChildEntry, ValidationError};

/// Staff activity logs and the parent's per-child view of them
#[derive(Clone)]
pub struct ActivityLogService {
    logs: Arc<dyn ActivityLogStorage>,
    children: Arc<dyn ChildStorage>,
    today: NaiveDate,
}

impl ActivityLogService {
    pub fn new(
        logs: Arc<dyn ActivityLogStorage>,
        children: Arc<dyn ChildStorage>,
        today: NaiveDate,
    ) -> Self {
        Self {
            logs,
            children,
            today,
        }
    }

    /// All logs, newest first
    pub fn list_logs(&self) -> Result<Vec<ActivityLog>> {
        self.logs.list_logs()
    }

    pub fn get_log(&self, log_id: &str) -> Result<Option<ActivityLog>> {
        self.logs.get_log(log_id)
    }

    /// Logs the child took part in
    pub fn logs_for_child(&self, child_id: &str) -> Result<Vec<ActivityLog>> {
        Ok(self
            .logs
            .list_logs()?
            .into_iter()
            .filter(|log| log.entry_for(child_id).is_some())
            .collect())
    }

    /// New log dated today with one entry per roster child
    pub fn create_log(&self, draft: &ActivityLogDraft) -> Result<ActivityLog> {
        info!("📝 Creating activity log '{}'", draft.activity_name.trim());
        let (start_time, end_time) = checked_times(draft)?;

        let existing = self.logs.list_logs()?;
        let mut ids = IdSequence::after("l", existing.iter().map(|log| log.id.as_str()));
        let roster = self.children.list_children()?;

        let log = ActivityLog {
            id: ids.next_id(),
            activity_name: draft.activity_name.trim().to_string(),
            start_time,
            end_time,
            notes: draft.notes.trim().to_string(),
            children: entries_for(&roster, draft),
            date: Some(self.today),
        };
        self.logs.store_log(&log)?;

        info!("✅ Activity log {} saved for {} children", log.id, draft.children.len());
        Ok(log)
    }

    /// Replace a log's fields, keeping its id and date
    pub fn update_log(&self, log_id: &str, draft: &ActivityLogDraft) -> Result<ActivityLog> {
        info!("✏️ Updating activity log {}", log_id);
        let current = self
            .logs
            .get_log(log_id)?
            .ok_or_else(|| DaycareError::not_found("Activity log", log_id))?;
        let (start_time, end_time) = checked_times(draft)?;
        let roster = self.children.list_children()?;

        let log = ActivityLog {
            id: current.id,
            activity_name: draft.activity_name.trim().to_string(),
            start_time,
            end_time,
            notes: draft.notes.trim().to_string(),
            children: entries_for(&roster, draft),
            date: current.date,
        };
        self.logs.update_log(&log)?;
        Ok(log)
    }

    pub fn delete_log(&self, log_id: &str) -> Result<()> {
        info!("🗑️ Deleting activity log {}", log_id);
        if !self.logs.delete_log(log_id)? {
            warn!("Activity log not found: {}", log_id);
            return Err(DaycareError::not_found("Activity log", log_id).into());
        }
        Ok(())
    }
}

fn checked_times(draft: &ActivityLogDraft) -> Result<(shared::ClockTime, shared::ClockTime)> {
    let validation = draft.validate();
    if !validation.is_valid {
        return Err(DaycareError::Validation(validation.errors).into());
    }
    match (draft.start_time, draft.end_time) {
        (Some(start), Some(end)) => Ok((start, end)),
        (None, _) => Err(DaycareError::Validation(vec![ValidationError::MissingStartTime]).into()),
        (_, None) => Err(DaycareError::Validation(vec![ValidationError::MissingEndTime]).into()),
    }
}

fn entries_for(roster: &[Child], draft: &ActivityLogDraft) -> Vec<LogChildEntry> {
    roster
        .iter()
        .map(|child| {
            let selected = draft.children.contains(&child.child_id);
            LogChildEntry {
                child_id: child.child_id.clone(),
                name: child.name.clone(),
                selected,
                behavioral_note: if selected {
                    draft
                        .note_for(&child.child_id)
                        .map(|note| note.trim().to_string())
                        .unwrap_or_default()
                } else {
                    String::new()
                },
            }
        })
        .collect()
}
