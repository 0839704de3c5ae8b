use anyhow::Result;
use log::debug;
use std::collections::BTreeMap;

use super::connection::MemoryConnection;
use crate::storage::traits::AttendanceStorage;

#[derive(Clone)]
pub struct AttendanceRepository {
    connection: MemoryConnection,
}

impl AttendanceRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl AttendanceStorage for AttendanceRepository {
    fn get_attendance(&self) -> Result<BTreeMap<String, bool>> {
        self.connection.read(|store| store.attendance.clone())
    }

    fn set_present(&self, child_id: &str, present: bool) -> Result<()> {
        debug!("✅ Attendance {} -> {}", child_id, present);
        self.connection.write(|store| {
            store.attendance.insert(child_id.to_string(), present);
        })
    }

    fn replace_attendance(&self, attendance: &BTreeMap<String, bool>) -> Result<()> {
        self.connection
            .write(|store| store.attendance = attendance.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::TestEnvironment;

    #[test]
    fn test_set_and_replace_attendance() {
        let env = TestEnvironment::seeded().unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());

        repo.set_present("c1", true).unwrap();
        assert_eq!(repo.get_attendance().unwrap().get("c1"), Some(&true));

        let mut all_absent = repo.get_attendance().unwrap();
        for present in all_absent.values_mut() {
            *present = false;
        }
        repo.replace_attendance(&all_absent).unwrap();
        assert!(repo.get_attendance().unwrap().values().all(|p| !p));
    }
}
