use anyhow::{anyhow, Result};
use log::{info, warn};
use shared::ActivityLog;

use super::connection::MemoryConnection;
use crate::storage::traits::ActivityLogStorage;

#[derive(Clone)]
pub struct ActivityLogRepository {
    connection: MemoryConnection,
}

impl ActivityLogRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl ActivityLogStorage for ActivityLogRepository {
    fn list_logs(&self) -> Result<Vec<ActivityLog>> {
        self.connection.read(|store| store.activity_logs.clone())
    }

    fn get_log(&self, log_id: &str) -> Result<Option<ActivityLog>> {
        self.connection
            .read(|store| store.activity_logs.iter().find(|l| l.id == log_id).cloned())
    }

    fn store_log(&self, log: &ActivityLog) -> Result<()> {
        info!("📒 Storing activity log {} ({})", log.id, log.activity_name);
        self.connection
            .write(|store| store.activity_logs.insert(0, log.clone()))
    }

    fn update_log(&self, log: &ActivityLog) -> Result<()> {
        let found = self.connection.write(|store| {
            match store.activity_logs.iter_mut().find(|l| l.id == log.id) {
                Some(existing) => {
                    *existing = log.clone();
                    true
                }
                None => false,
            }
        })?;

        if !found {
            warn!("⚠️ Tried to update missing activity log {}", log.id);
            return Err(anyhow!("Activity log not found: {}", log.id));
        }
        Ok(())
    }

    fn delete_log(&self, log_id: &str) -> Result<bool> {
        self.connection.write(|store| {
            let before = store.activity_logs.len();
            store.activity_logs.retain(|l| l.id != log_id);
            store.activity_logs.len() != before
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::{sample_log, TestEnvironment};

    #[test]
    fn test_new_logs_go_first() {
        let env = TestEnvironment::empty();
        let repo = ActivityLogRepository::new(env.connection.clone());
        repo.store_log(&sample_log("l1", "Lunch")).unwrap();
        repo.store_log(&sample_log("l2", "Nap Time")).unwrap();

        let ids: Vec<String> = repo.list_logs().unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["l2".to_string(), "l1".to_string()]);
    }

    #[test]
    fn test_update_and_delete_log() {
        let env = TestEnvironment::empty();
        let repo = ActivityLogRepository::new(env.connection.clone());
        repo.store_log(&sample_log("l1", "Lunch")).unwrap();

        let mut log = repo.get_log("l1").unwrap().unwrap();
        log.activity_name = "Big Lunch".to_string();
        repo.update_log(&log).unwrap();
        assert_eq!(repo.get_log("l1").unwrap().unwrap().activity_name, "Big Lunch");

        assert!(repo.delete_log("l1").unwrap());
        assert!(repo.get_log("l1").unwrap().is_none());
        assert!(repo.update_log(&log).is_err());
    }
}
