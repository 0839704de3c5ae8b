use anyhow::Result;
use log::info;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::errors::DaycareError;
use crate::storage::{AttendanceStorage, ChildStorage};
use shared::{AttendanceEntry, AttendanceSummary};

/// Today's attendance for the whole class
#[derive(Clone)]
pub struct AttendanceService {
    attendance: Arc<dyn AttendanceStorage>,
    children: Arc<dyn ChildStorage>,
}

impl AttendanceService {
    pub fn new(attendance: Arc<dyn AttendanceStorage>, children: Arc<dyn ChildStorage>) -> Self {
        Self {
            attendance,
            children,
        }
    }

    /// Roster order, absent unless marked
    pub fn attendance_sheet(&self) -> Result<Vec<AttendanceEntry>> {
        let marks = self.attendance.get_attendance()?;
        Ok(self
            .children
            .list_children()?
            .into_iter()
            .map(|child| AttendanceEntry {
                present: marks.get(&child.child_id).copied().unwrap_or(false),
                child,
            })
            .collect())
    }

    pub fn is_present(&self, child_id: &str) -> Result<bool> {
        Ok(self
            .attendance
            .get_attendance()?
            .get(child_id)
            .copied()
            .unwrap_or(false))
    }

    /// Ids of the children marked present, in roster order
    pub fn present_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .attendance_sheet()?
            .into_iter()
            .filter(|entry| entry.present)
            .map(|entry| entry.child.child_id)
            .collect())
    }

    pub fn present_count(&self) -> Result<usize> {
        Ok(self.present_ids()?.len())
    }

    /// Flip one child; returns the new mark
    pub fn toggle_child(&self, child_id: &str) -> Result<bool> {
        if self.children.get_child(child_id)?.is_none() {
            return Err(DaycareError::not_found("Child", child_id).into());
        }
        let present = !self.is_present(child_id)?;
        self.attendance.set_present(child_id, present)?;
        Ok(present)
    }

    /// Everyone present becomes everyone absent, otherwise everyone present
    pub fn toggle_all(&self) -> Result<()> {
        let sheet = self.attendance_sheet()?;
        let mark = !sheet.iter().all(|entry| entry.present);
        let marks: BTreeMap<String, bool> = sheet
            .into_iter()
            .map(|entry| (entry.child.child_id, mark))
            .collect();
        self.attendance.replace_attendance(&marks)
    }

    /// Submit the sheet: listed children present, the rest absent
    pub fn save_attendance(&self, present_ids: &[String]) -> Result<AttendanceSummary> {
        let roster = self.children.list_children()?;
        let marks: BTreeMap<String, bool> = roster
            .iter()
            .map(|child| (child.child_id.clone(), present_ids.contains(&child.child_id)))
            .collect();
        self.attendance.replace_attendance(&marks)?;

        let present_count = marks.values().filter(|present| **present).count();
        let summary = AttendanceSummary {
            present_count,
            class_size: roster.len(),
            success_message: format!(
                "Attendance saved: {} of {} present",
                present_count,
                roster.len()
            ),
        };
        info!("✅ {}", summary.success_message);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::TestEnvironment;

    fn service(env: &TestEnvironment) -> AttendanceService {
        AttendanceService::new(env.attendance_repo(), env.child_repo())
    }

    #[test]
    fn test_everyone_starts_absent() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        let sheet = service.attendance_sheet().unwrap();
        assert_eq!(sheet.len(), 9);
        assert!(sheet.iter().all(|entry| !entry.present));
        assert_eq!(service.present_count().unwrap(), 0);
    }

    #[test]
    fn test_toggle_child() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        assert!(service.toggle_child("c3").unwrap());
        assert!(service.is_present("c3").unwrap());
        assert!(!service.toggle_child("c3").unwrap());
        assert!(service.toggle_child("c99").is_err());
    }

    #[test]
    fn test_toggle_all_flips_between_all_and_none() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        service.toggle_child("c1").unwrap();

        service.toggle_all().unwrap();
        assert_eq!(service.present_count().unwrap(), 9);

        service.toggle_all().unwrap();
        assert_eq!(service.present_count().unwrap(), 0);
    }

    #[test]
    fn test_submit_records_marks_made_by_clicks() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        service.toggle_child("c2").unwrap();
        service.toggle_child("c5").unwrap();

        let ids = service.present_ids().unwrap();
        let summary = service.save_attendance(&ids).unwrap();
        assert_eq!(summary.success_message, "Attendance saved: 2 of 9 present");
        assert!(service.is_present("c2").unwrap());
        assert!(service.is_present("c5").unwrap());
        assert_eq!(service.present_count().unwrap(), 2);

        service.toggle_all().unwrap();
        let summary = service.save_attendance(&service.present_ids().unwrap()).unwrap();
        assert_eq!(summary.present_count, 9);
    }

    #[test]
    fn test_save_attendance() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        service.toggle_child("c9").unwrap();

        let summary = service
            .save_attendance(&["c1".to_string(), "c4".to_string()])
            .unwrap();
        assert_eq!(summary.present_count, 2);
        assert_eq!(summary.class_size, 9);
        assert_eq!(summary.success_message, "Attendance saved: 2 of 9 present");
        assert_eq!(service.present_ids().unwrap(), vec!["c1".to_string(), "c4".to_string()]);
    }
}
